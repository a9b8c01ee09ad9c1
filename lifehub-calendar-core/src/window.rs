use chrono::{
    DateTime, Datelike, Days, Duration, LocalResult, Months, NaiveDate, NaiveTime, TimeZone, Utc,
};
use chrono_tz::Tz;
use std::str::FromStr;

/// Visible calendar views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Month,
    Week,
    Day,
    Agenda,
}

impl FromStr for ViewKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "month" => Ok(ViewKind::Month),
            "week" => Ok(ViewKind::Week),
            "day" => Ok(ViewKind::Day),
            "agenda" => Ok(ViewKind::Agenda),
            _ => Err(()),
        }
    }
}

/// Days the agenda view looks ahead from the focus date.
const AGENDA_SPAN_DAYS: u32 = 30;

/// Visible range for a view around `focus`: first visible date and day count.
/// Month grids cover full Sunday-first weeks; weeks run Sunday through
/// Saturday.
pub fn view_range(view: ViewKind, focus: NaiveDate) -> (NaiveDate, u32) {
    match view {
        ViewKind::Month => {
            let first = focus.with_day(1).unwrap_or(focus);
            let last = first + Months::new(1) - Days::new(1);
            let grid_start = sunday_on_or_before(first);
            let grid_end = last + Days::new(6 - u64::from(last.weekday().num_days_from_sunday()));
            let days = (grid_end - grid_start).num_days() + 1;
            (grid_start, days as u32)
        }
        ViewKind::Week => (sunday_on_or_before(focus), 7),
        ViewKind::Day => (focus, 1),
        ViewKind::Agenda => (focus, AGENDA_SPAN_DAYS),
    }
}

fn sunday_on_or_before(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.weekday().num_days_from_sunday()))
}

/// UTC instant of local midnight on `date` in `tz`. The conversion uses the
/// target zone's offset at that instant; a DST gap resolves to the earliest
/// valid local time, an ambiguous fold to its first occurrence.
pub fn local_midnight_utc(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let midnight = date.and_time(NaiveTime::MIN);
    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => dt.with_timezone(&Utc),
        LocalResult::None => {
            // Midnight was skipped by a forward transition; probe later
            // wall-clock minutes until one exists.
            let mut probe = midnight + Duration::minutes(30);
            loop {
                match tz.from_local_datetime(&probe) {
                    LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
                        return dt.with_timezone(&Utc);
                    }
                    LocalResult::None => probe += Duration::minutes(30),
                }
            }
        }
    }
}

/// Inclusive local-date window covering the trailing `days` calendar days in
/// `tz`, ending today. `days == 0` collapses to today only.
pub fn trailing_dates(now: DateTime<Utc>, days: u32, tz: Tz) -> (NaiveDate, NaiveDate) {
    let today = now.with_timezone(&tz).date_naive();
    let first = today - Days::new(u64::from(days.saturating_sub(1)));
    (first, today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap()
    }

    #[test]
    fn month_grid_covers_full_weeks() {
        // June 2026: the 1st is a Monday, the 30th a Tuesday.
        let (start, days) = view_range(ViewKind::Month, date(2026, 6, 17));
        assert_eq!(start, date(2026, 5, 31)); // Sunday before June 1
        assert_eq!(days, 35);
    }

    #[test]
    fn week_runs_sunday_through_saturday() {
        // 2026-06-17 is a Wednesday.
        let (start, days) = view_range(ViewKind::Week, date(2026, 6, 17));
        assert_eq!(start, date(2026, 6, 14));
        assert_eq!(days, 7);
        // A Sunday focus stays put.
        let (start, _) = view_range(ViewKind::Week, date(2026, 6, 14));
        assert_eq!(start, date(2026, 6, 14));
    }

    #[test]
    fn day_and_agenda_ranges() {
        assert_eq!(
            view_range(ViewKind::Day, date(2026, 6, 17)),
            (date(2026, 6, 17), 1)
        );
        assert_eq!(
            view_range(ViewKind::Agenda, date(2026, 6, 17)),
            (date(2026, 6, 17), 30)
        );
    }

    #[test]
    fn local_midnight_uses_target_zone_offset() {
        let ny: Tz = "America/New_York".parse().unwrap();
        // Winter: UTC-5.
        let winter = local_midnight_utc(date(2026, 1, 10), ny);
        assert_eq!(winter, Utc.with_ymd_and_hms(2026, 1, 10, 5, 0, 0).unwrap());
        // Summer: UTC-4.
        let summer = local_midnight_utc(date(2026, 7, 10), ny);
        assert_eq!(summer, Utc.with_ymd_and_hms(2026, 7, 10, 4, 0, 0).unwrap());
    }

    #[test]
    fn trailing_window_is_bucketed_in_the_target_zone() {
        let ny: Tz = "America/New_York".parse().unwrap();
        // 2026-03-09 02:00 UTC is still March 8, 22:00 in New York; the
        // trailing window must be anchored to the local date.
        let now = Utc.with_ymd_and_hms(2026, 3, 9, 2, 0, 0).unwrap();
        let (first, last) = trailing_dates(now, 3, ny);
        assert_eq!(first, date(2026, 3, 6));
        assert_eq!(last, date(2026, 3, 8));
        let (first_utc, last_utc) = trailing_dates(now, 3, chrono_tz::UTC);
        assert_eq!(first_utc, date(2026, 3, 7));
        assert_eq!(last_utc, date(2026, 3, 9));
    }

    #[test]
    fn midnight_skipped_by_dst_resolves_to_next_valid_time() {
        // Santiago's 2026 spring-forward (Sep 6) skips 00:00 -> 01:00.
        let scl: Tz = "America/Santiago".parse().unwrap();
        let resolved = local_midnight_utc(date(2026, 9, 6), scl);
        let local = resolved.with_timezone(&scl);
        assert_eq!(local.date_naive(), date(2026, 9, 6));
    }

    #[test]
    fn zero_and_one_day_windows_cover_today_only() {
        let now = Utc.with_ymd_and_hms(2026, 6, 17, 15, 0, 0).unwrap();
        let (f0, l0) = trailing_dates(now, 0, chrono_tz::UTC);
        let (f1, l1) = trailing_dates(now, 1, chrono_tz::UTC);
        assert_eq!((f0, l0), (f1, l1));
        assert_eq!(f1, date(2026, 6, 17));
        assert_eq!(l1, date(2026, 6, 17));
    }
}
