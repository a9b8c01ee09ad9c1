pub mod geometry;
pub mod packing;
pub mod span;
pub mod window;

pub use geometry::{DayGeometry, HOUR_PX, MIN_EVENT_PX, day_geometry};
pub use packing::{DayPlan, MAX_COLUMNS, Placement, pack_day, pack_range};
pub use span::EventSpan;
pub use window::{ViewKind, local_midnight_utc, trailing_dates, view_range};
