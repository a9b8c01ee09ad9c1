use crate::geometry::{clamped_minutes, geometry_from_minutes};
use crate::span::EventSpan;
use chrono::{Days, NaiveDate};
use chrono_tz::Tz;

const DAY_TRACK_PX: usize = 180;
const MIN_EVENT_WIDTH_PX: usize = 60;

/// Side-by-side columns available inside one day track.
pub const MAX_COLUMNS: usize = DAY_TRACK_PX / MIN_EVENT_WIDTH_PX;

/// One timed event placed on the day grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub id: i64,
    /// Column index within the overlap group.
    pub column: u32,
    /// Total columns the group was split into (width divisor).
    pub columns: u32,
    pub top_px: f32,
    pub height_px: f32,
}

/// Layout result for a single visible day.
#[derive(Debug, Clone, PartialEq)]
pub struct DayPlan {
    pub date: NaiveDate,
    /// All-day lane, ordered by event id.
    pub all_day: Vec<i64>,
    pub timed: Vec<Placement>,
    /// Events withheld from the grid ("+N more").
    pub hidden: u32,
}

struct TimedItem {
    id: i64,
    start_min: i64,
    end_min: i64,
}

fn intersects(a: &TimedItem, b: &TimedItem) -> bool {
    a.start_min < b.end_min && b.start_min < a.end_min
}

/// Lay out every event occurring on `date`.
///
/// Timed events are greedily grouped: an event joins the first group containing
/// a member whose time range intersects it, otherwise it starts a new group.
/// Within a group, events go first-fit into at most `MAX_COLUMNS` columns such
/// that no two events sharing a column intersect in time; events that fit no
/// column are withheld and counted in `hidden`.
pub fn pack_day(spans: &[EventSpan], date: NaiveDate, tz: Tz) -> DayPlan {
    let mut all_day: Vec<i64> = Vec::new();
    let mut timed: Vec<TimedItem> = Vec::new();

    for span in spans {
        if !span.occurs_on(date, tz) {
            continue;
        }
        if span.all_day {
            all_day.push(span.id);
        } else {
            let (start_min, end_min) = clamped_minutes(span, date, tz);
            timed.push(TimedItem {
                id: span.id,
                start_min,
                end_min,
            });
        }
    }
    all_day.sort_unstable();
    timed.sort_by(|a, b| {
        a.start_min
            .cmp(&b.start_min)
            .then(b.end_min.cmp(&a.end_min))
            .then(a.id.cmp(&b.id))
    });

    // Greedy grouping over the start-sorted items.
    let mut groups: Vec<Vec<usize>> = Vec::new();
    for (idx, item) in timed.iter().enumerate() {
        let joined = groups
            .iter_mut()
            .find(|group| group.iter().any(|&m| intersects(&timed[m], item)));
        match joined {
            Some(group) => group.push(idx),
            None => groups.push(vec![idx]),
        }
    }

    let mut placements: Vec<Placement> = Vec::new();
    let mut hidden: u32 = 0;

    for group in &groups {
        let columns = group.len().min(MAX_COLUMNS);
        let mut occupants: Vec<Vec<usize>> = vec![Vec::new(); columns];

        for &idx in group {
            let item = &timed[idx];
            let slot = occupants
                .iter()
                .position(|col| col.iter().all(|&m| !intersects(&timed[m], item)));
            match slot {
                Some(col) => {
                    occupants[col].push(idx);
                    let geo = geometry_from_minutes(item.start_min, item.end_min);
                    placements.push(Placement {
                        id: item.id,
                        column: col as u32,
                        columns: columns as u32,
                        top_px: geo.top_px,
                        height_px: geo.height_px,
                    });
                }
                None => hidden += 1,
            }
        }
    }

    DayPlan {
        date,
        all_day,
        timed: placements,
        hidden,
    }
}

/// Lay out `days` consecutive days starting at `start`. Each day is evaluated
/// independently against the full span list.
pub fn pack_range(spans: &[EventSpan], start: NaiveDate, days: u32, tz: Tz) -> Vec<DayPlan> {
    (0..days)
        .map(|offset| pack_day(spans, start + Days::new(u64::from(offset)), tz))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn date(y: i32, mo: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap()
    }

    fn utc(h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 6, 15, h, mi, 0).unwrap()
    }

    fn timed(id: i64, start: DateTime<Utc>, end: DateTime<Utc>) -> EventSpan {
        EventSpan {
            id,
            start,
            end,
            all_day: false,
        }
    }

    fn assert_no_column_collisions(plan: &DayPlan, spans: &[EventSpan]) {
        for a in &plan.timed {
            for b in &plan.timed {
                if a.id >= b.id || a.column != b.column {
                    continue;
                }
                let sa = spans.iter().find(|s| s.id == a.id).unwrap();
                let sb = spans.iter().find(|s| s.id == b.id).unwrap();
                assert!(
                    sa.end <= sb.start || sb.end <= sa.start,
                    "events {} and {} overlap in column {}",
                    a.id,
                    b.id,
                    a.column
                );
            }
        }
    }

    #[test]
    fn overlapping_events_never_share_a_column() {
        let spans = vec![
            timed(1, utc(9, 0), utc(10, 0)),
            timed(2, utc(9, 30), utc(11, 0)),
            timed(3, utc(10, 30), utc(12, 0)),
        ];
        let plan = pack_day(&spans, date(2026, 6, 15), chrono_tz::UTC);
        assert_eq!(plan.timed.len(), 3);
        assert_eq!(plan.hidden, 0);
        assert_no_column_collisions(&plan, &spans);

        // 1 and 3 do not intersect, so the chain fits in two columns.
        let columns: Vec<u32> = plan.timed.iter().map(|p| p.columns).collect();
        assert!(columns.iter().all(|&c| c == 3));
    }

    #[test]
    fn disjoint_events_form_separate_single_column_groups() {
        let spans = vec![
            timed(1, utc(8, 0), utc(9, 0)),
            timed(2, utc(12, 0), utc(13, 0)),
        ];
        let plan = pack_day(&spans, date(2026, 6, 15), chrono_tz::UTC);
        assert_eq!(plan.timed.len(), 2);
        for p in &plan.timed {
            assert_eq!(p.column, 0);
            assert_eq!(p.columns, 1);
        }
    }

    #[test]
    fn dense_group_caps_columns_and_counts_hidden() {
        // Five events all covering 09:00-10:00: three columns, two hidden.
        let spans: Vec<EventSpan> = (1..=5).map(|id| timed(id, utc(9, 0), utc(10, 0))).collect();
        let plan = pack_day(&spans, date(2026, 6, 15), chrono_tz::UTC);
        assert_eq!(plan.timed.len(), MAX_COLUMNS);
        assert_eq!(plan.hidden, 2);
        assert_no_column_collisions(&plan, &spans);
        let mut used: Vec<u32> = plan.timed.iter().map(|p| p.column).collect();
        used.sort_unstable();
        assert_eq!(used, vec![0, 1, 2]);
    }

    #[test]
    fn all_day_events_stay_out_of_the_timed_track() {
        let spans = vec![
            EventSpan {
                id: 7,
                start: utc(0, 0),
                end: utc(23, 0),
                all_day: true,
            },
            timed(8, utc(9, 0), utc(10, 0)),
        ];
        let plan = pack_day(&spans, date(2026, 6, 15), chrono_tz::UTC);
        assert_eq!(plan.all_day, vec![7]);
        assert_eq!(plan.timed.len(), 1);
        assert_eq!(plan.timed[0].id, 8);
    }

    #[test]
    fn staircase_overlaps_reuse_freed_columns() {
        let spans = vec![
            timed(1, utc(9, 0), utc(10, 0)),
            timed(2, utc(9, 15), utc(10, 15)),
            timed(3, utc(9, 30), utc(10, 30)),
            timed(4, utc(10, 0), utc(11, 0)),
            timed(5, utc(10, 15), utc(11, 15)),
        ];
        let plan = pack_day(&spans, date(2026, 6, 15), chrono_tz::UTC);
        // Event 4 starts exactly when 1 ends and may reuse its column.
        assert_eq!(plan.timed.len(), 5);
        assert_eq!(plan.hidden, 0);
        assert_no_column_collisions(&plan, &spans);
    }

    #[test]
    fn pack_range_emits_one_plan_per_day() {
        let spans = vec![timed(1, utc(9, 0), utc(10, 0))];
        let plans = pack_range(&spans, date(2026, 6, 14), 7, chrono_tz::UTC);
        assert_eq!(plans.len(), 7);
        assert_eq!(plans[1].date, date(2026, 6, 15));
        assert_eq!(plans[1].timed.len(), 1);
        assert!(plans[0].timed.is_empty());
    }
}
