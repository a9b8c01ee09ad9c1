use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// A calendar event reduced to what layout needs: UTC start/end instants and
/// the all-day flag. Multi-day spans are just a start/end difference; there is
/// no recurrence model.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSpan {
    pub id: i64,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub all_day: bool,
}

impl EventSpan {
    /// Local calendar dates of the start and end instants in `tz`.
    pub fn local_dates(&self, tz: Tz) -> (NaiveDate, NaiveDate) {
        (
            self.start.with_timezone(&tz).date_naive(),
            self.end.with_timezone(&tz).date_naive(),
        )
    }

    /// Whether the event occurs on local date `date`: it starts there, ends
    /// there, or spans across it. Inverted spans (end before start) only match
    /// their boundary dates.
    pub fn occurs_on(&self, date: NaiveDate, tz: Tz) -> bool {
        let (first, last) = self.local_dates(tz);
        first == date || last == date || (first < date && last > date)
    }
}
