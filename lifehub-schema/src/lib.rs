pub mod calendar;
pub mod finance;
pub mod mood;
pub mod notes;
pub mod profile;
pub mod tasks;
pub mod weather;
pub mod widgets;

pub use calendar::{
    Calendar, CalendarCreate, CalendarEvent, CalendarLayout, DayCell, EventCreate, EventPatch,
    TimedPlacement,
};
pub use finance::{FinanceCreate, FinanceEntry, FinancePatch};
pub use mood::{MoodEntry, MoodPatch, MoodUpsert};
pub use notes::{Folder, FolderCreate, FolderPatch, Note, NoteCreate, NotePatch};
pub use profile::{Profile, ProfilePatch};
pub use tasks::{Task, TaskCreate, TaskPatch};
pub use weather::WeatherReport;
pub use widgets::{Widget, WidgetCreate, WidgetPatch, WidgetType, WidgetTypeCreate};
