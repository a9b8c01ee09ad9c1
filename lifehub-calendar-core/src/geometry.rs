use crate::span::EventSpan;
use chrono::{NaiveDate, Timelike};
use chrono_tz::Tz;

/// Vertical pixels per hour in the week/day grid.
pub const HOUR_PX: f32 = 48.0;
/// Minimum rendered height so short events stay clickable.
pub const MIN_EVENT_PX: f32 = 24.0;

const DAY_MINUTES: i64 = 24 * 60;

/// Vertical placement of a timed event within one day track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayGeometry {
    pub top_px: f32,
    pub height_px: f32,
}

/// Pixel geometry of `span` on `date`, or `None` for all-day events and days
/// the event does not touch. Multi-day portions clamp to the day's bounds.
pub fn day_geometry(span: &EventSpan, date: NaiveDate, tz: Tz) -> Option<DayGeometry> {
    if span.all_day || !span.occurs_on(date, tz) {
        return None;
    }
    let (start_min, end_min) = clamped_minutes(span, date, tz);
    Some(geometry_from_minutes(start_min, end_min))
}

pub(crate) fn geometry_from_minutes(start_min: i64, end_min: i64) -> DayGeometry {
    let top_px = start_min as f32 / 60.0 * HOUR_PX;
    let height_px = ((end_min - start_min) as f32 / 60.0 * HOUR_PX).max(MIN_EVENT_PX);
    DayGeometry { top_px, height_px }
}

/// Start/end minutes of `span` within `date`, clamped to [0, 1440].
pub(crate) fn clamped_minutes(span: &EventSpan, date: NaiveDate, tz: Tz) -> (i64, i64) {
    let local_start = span.start.with_timezone(&tz);
    let local_end = span.end.with_timezone(&tz);

    let start_min = if local_start.date_naive() < date {
        0
    } else {
        i64::from(local_start.hour()) * 60 + i64::from(local_start.minute())
    };
    let end_min = if local_end.date_naive() > date {
        DAY_MINUTES
    } else {
        i64::from(local_end.hour()) * 60 + i64::from(local_end.minute())
    };
    (start_min, end_min.max(start_min))
}
