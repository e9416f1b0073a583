//! Builds, clamps, and edits the per-day outcome draft for a leave
//! application.
//!
//! A draft is synthesized once per detail-view open: persisted splits are
//! normalized against the application's approved range, or a default
//! one-row-per-day set is expanded from it. Candidates that fall outside the
//! range or collide on a `(date, half)` key are dropped — tolerated rather
//! than rejected, but each drop is logged so corrupt server data stays
//! visible.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::models::leave::{
    HalfDayType, LeaveApplication, LeaveNature, LeaveSplit, LeaveSplitRecord, SplitStatus,
};
use crate::utils::dates::{parse_date_only, to_iso_date};

fn half_designator(is_half_day: bool, half_day_type: Option<HalfDayType>) -> &'static str {
    if is_half_day {
        half_day_type.unwrap_or(HalfDayType::FirstHalf).as_str()
    } else {
        "full"
    }
}

fn dedup_key(date: NaiveDate, is_half_day: bool, half_day_type: Option<HalfDayType>) -> String {
    format!("{}_{}", to_iso_date(date), half_designator(is_half_day, half_day_type))
}

/// One full-day row per calendar day from `from` to `to` inclusive, ascending.
///
/// A single-day range marked half-day yields one half-day row instead,
/// defaulting to the first half when no type is given. The caller stamps the
/// leave type and status onto the rows.
pub fn build_date_range(
    from: NaiveDate,
    to: NaiveDate,
    is_half_day: bool,
    half_day_type: Option<HalfDayType>,
) -> Vec<LeaveSplit> {
    let mut rows = Vec::new();
    let half = from == to && is_half_day;
    let mut day = from;
    while day <= to {
        rows.push(LeaveSplit {
            id: None,
            date: day,
            leave_type: String::new(),
            leave_nature: None,
            is_half_day: half,
            half_day_type: half.then(|| half_day_type.unwrap_or(HalfDayType::FirstHalf)),
            status: SplitStatus::Approved,
            number_of_days: LeaveSplit::day_value(half),
            notes: None,
        });
        day = match day.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    rows
}

/// Normalizes candidate split records against the application's approved
/// range.
///
/// Candidates with unparseable or out-of-range dates are dropped, as is every
/// candidate after the first on a given `(date, half)` key. Survivors get a
/// normalized date, a recomputed day value, and a half-day type cleared
/// unless the half-day flag is set. The result is sorted ascending by date.
pub fn clamp_splits_to_range(
    application: &LeaveApplication,
    candidates: &[LeaveSplitRecord],
) -> Vec<LeaveSplit> {
    let start = application.from_date;
    let end = application.to_date;
    let mut seen: HashSet<String> = HashSet::new();
    let mut kept: Vec<LeaveSplit> = Vec::new();

    for record in candidates {
        let Some(date) = parse_date_only(&record.date) else {
            log::warn!(
                "application {}: dropping split with unparseable date {:?}",
                application.id,
                record.date
            );
            continue;
        };
        if date < start || date > end {
            log::warn!(
                "application {}: dropping split {} outside {}..{}",
                application.id,
                date,
                start,
                end
            );
            continue;
        }
        let key = dedup_key(date, record.is_half_day, record.half_day_type);
        if !seen.insert(key.clone()) {
            log::warn!("application {}: dropping duplicate split {}", application.id, key);
            continue;
        }
        kept.push(canonical_split(application, record, date));
    }

    kept.sort_by_key(|split| split.date);
    kept
}

fn canonical_split(
    application: &LeaveApplication,
    record: &LeaveSplitRecord,
    date: NaiveDate,
) -> LeaveSplit {
    let is_half_day = record.is_half_day;
    LeaveSplit {
        id: record.id.clone(),
        date,
        leave_type: record
            .leave_type
            .clone()
            .unwrap_or_else(|| application.leave_type.clone()),
        leave_nature: record.leave_nature,
        is_half_day,
        half_day_type: is_half_day
            .then(|| record.half_day_type.unwrap_or(HalfDayType::FirstHalf)),
        status: record.status,
        number_of_days: LeaveSplit::day_value(is_half_day),
        notes: record.notes.clone(),
    }
}

/// The draft shown when a detail view opens: persisted splits clamped to the
/// approved range, or the default uniform expansion when none exist yet.
/// Idempotent for an unchanged application snapshot.
pub fn build_initial_splits(application: &LeaveApplication) -> Vec<LeaveSplit> {
    if let Some(records) = application.splits.as_deref() {
        if !records.is_empty() {
            return clamp_splits_to_range(application, records);
        }
    }

    let mut rows = build_date_range(
        application.from_date,
        application.to_date,
        application.is_half_day,
        application.half_day_type,
    );
    for row in &mut rows {
        row.leave_type = application.leave_type.clone();
        row.status = SplitStatus::Approved;
    }
    rows
}

/// A partial edit to one draft row. `None` leaves a field untouched; nullable
/// fields nest a second `Option` so an edit can clear them.
#[derive(Debug, Clone, Default)]
pub struct SplitPatch {
    pub date: Option<NaiveDate>,
    pub leave_type: Option<String>,
    pub leave_nature: Option<Option<LeaveNature>>,
    pub is_half_day: Option<bool>,
    pub half_day_type: Option<Option<HalfDayType>>,
    pub status: Option<SplitStatus>,
    pub notes: Option<Option<String>>,
}

/// Replaces the row at `index` with the patched row, leaving the input
/// untouched. The day value is recomputed unconditionally and a stale
/// half-day type cannot survive unchecking the half-day flag.
///
/// Edits are not re-validated here: a duplicate key or out-of-range date can
/// exist transiently in the draft and is caught by server-side validation on
/// submit. An out-of-bounds index returns the draft unchanged.
pub fn update_split_draft(draft: &[LeaveSplit], index: usize, patch: SplitPatch) -> Vec<LeaveSplit> {
    let mut next: Vec<LeaveSplit> = draft.to_vec();
    let Some(row) = next.get_mut(index) else {
        return next;
    };

    if let Some(date) = patch.date {
        row.date = date;
    }
    if let Some(leave_type) = patch.leave_type {
        row.leave_type = leave_type;
    }
    if let Some(leave_nature) = patch.leave_nature {
        row.leave_nature = leave_nature;
    }
    if let Some(is_half_day) = patch.is_half_day {
        row.is_half_day = is_half_day;
    }
    if let Some(half_day_type) = patch.half_day_type {
        row.half_day_type = half_day_type;
    }
    if let Some(status) = patch.status {
        row.status = status;
    }
    if let Some(notes) = patch.notes {
        row.notes = notes;
    }

    row.number_of_days = LeaveSplit::day_value(row.is_half_day);
    if row.is_half_day {
        row.half_day_type = Some(row.half_day_type.unwrap_or(HalfDayType::FirstHalf));
    } else {
        row.half_day_type = None;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::refs::EntityRef;
    use crate::workflow::ApplicationStatus;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn application(from: &str, to: &str) -> LeaveApplication {
        LeaveApplication {
            id: "leave-1".to_string(),
            employee: EntityRef::Id("emp-1".to_string()),
            leave_type: "casual".to_string(),
            from_date: parse_date_only(from).unwrap(),
            to_date: parse_date_only(to).unwrap(),
            is_half_day: false,
            half_day_type: None,
            number_of_days: None,
            reason: None,
            status: ApplicationStatus::Approved,
            workflow: None,
            splits: None,
            created_at: None,
        }
    }

    fn record(date: &str) -> LeaveSplitRecord {
        LeaveSplitRecord {
            id: None,
            date: date.to_string(),
            leave_type: None,
            leave_nature: None,
            is_half_day: false,
            half_day_type: None,
            status: SplitStatus::Approved,
            number_of_days: None,
            notes: None,
        }
    }

    #[test]
    fn default_expansion_covers_the_range_in_order() {
        let rows = build_date_range(ymd(2024, 2, 1), ymd(2024, 2, 3), false, None);
        assert_eq!(rows.len(), 3);
        let dates: Vec<NaiveDate> = rows.iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![ymd(2024, 2, 1), ymd(2024, 2, 2), ymd(2024, 2, 3)]);
        assert!(rows.iter().all(|r| !r.is_half_day && r.number_of_days == 1.0));
        assert!(rows.iter().all(|r| r.half_day_type.is_none()));
    }

    #[test]
    fn single_day_half_day_expansion() {
        let rows = build_date_range(
            ymd(2024, 2, 1),
            ymd(2024, 2, 1),
            true,
            Some(HalfDayType::SecondHalf),
        );
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_half_day);
        assert_eq!(rows[0].half_day_type, Some(HalfDayType::SecondHalf));
        assert_eq!(rows[0].number_of_days, 0.5);
    }

    #[test]
    fn half_day_flag_is_ignored_for_multi_day_ranges() {
        let rows = build_date_range(
            ymd(2024, 2, 1),
            ymd(2024, 2, 2),
            true,
            Some(HalfDayType::FirstHalf),
        );
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| !r.is_half_day && r.number_of_days == 1.0));
    }

    #[test]
    fn half_day_type_defaults_to_first_half() {
        let rows = build_date_range(ymd(2024, 2, 1), ymd(2024, 2, 1), true, None);
        assert_eq!(rows[0].half_day_type, Some(HalfDayType::FirstHalf));
    }

    #[test]
    fn inverted_range_expands_to_nothing() {
        let rows = build_date_range(ymd(2024, 2, 3), ymd(2024, 2, 1), false, None);
        assert!(rows.is_empty());
    }

    #[test]
    fn clamp_drops_out_of_range_candidates() {
        let app = application("2024-01-05", "2024-01-07");
        let kept = clamp_splits_to_range(
            &app,
            &[record("2024-01-06"), record("2024-01-10"), record("2024-01-04")],
        );
        let dates: Vec<NaiveDate> = kept.iter().map(|s| s.date).collect();
        assert_eq!(dates, vec![ymd(2024, 1, 6)]);
    }

    #[test]
    fn clamp_keeps_the_first_duplicate_and_sorts() {
        let app = application("2024-01-05", "2024-01-07");
        let mut first = record("2024-01-05");
        first.notes = Some("keep me".to_string());
        let mut second = record("2024-01-05");
        second.notes = Some("drop me".to_string());
        let kept = clamp_splits_to_range(&app, &[record("2024-01-07"), first, second]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].date, ymd(2024, 1, 5));
        assert_eq!(kept[0].notes.as_deref(), Some("keep me"));
        assert_eq!(kept[1].date, ymd(2024, 1, 7));
    }

    #[test]
    fn opposite_halves_of_one_day_are_distinct_keys() {
        let app = application("2024-01-05", "2024-01-07");
        let mut morning = record("2024-01-05");
        morning.is_half_day = true;
        morning.half_day_type = Some(HalfDayType::FirstHalf);
        let mut afternoon = record("2024-01-05");
        afternoon.is_half_day = true;
        afternoon.half_day_type = Some(HalfDayType::SecondHalf);
        let kept = clamp_splits_to_range(&app, &[morning, afternoon]);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|s| s.number_of_days == 0.5));
    }

    #[test]
    fn clamp_drops_unparseable_dates() {
        let app = application("2024-01-05", "2024-01-07");
        let kept = clamp_splits_to_range(&app, &[record("garbage"), record("2024-01-06")]);
        assert_eq!(kept.len(), 1);
    }

    #[test]
    fn clamp_normalizes_timestamp_dates_and_derived_fields() {
        let app = application("2024-01-05", "2024-01-07");
        let mut candidate = record("2024-01-06T18:30:00Z");
        candidate.number_of_days = Some(9.0);
        candidate.half_day_type = Some(HalfDayType::SecondHalf);
        let kept = clamp_splits_to_range(&app, &[candidate]);
        assert_eq!(kept[0].date, ymd(2024, 1, 6));
        assert_eq!(kept[0].number_of_days, 1.0);
        assert_eq!(kept[0].half_day_type, None);
    }

    #[test]
    fn clamp_falls_back_to_the_application_leave_type() {
        let app = application("2024-01-05", "2024-01-07");
        let mut typed = record("2024-01-05");
        typed.leave_type = Some("sick".to_string());
        let kept = clamp_splits_to_range(&app, &[typed, record("2024-01-06")]);
        assert_eq!(kept[0].leave_type, "sick");
        assert_eq!(kept[1].leave_type, "casual");
    }

    #[test]
    fn initial_splits_prefer_persisted_records() {
        let mut app = application("2024-01-05", "2024-01-07");
        app.splits = Some(vec![record("2024-01-06")]);
        let rows = build_initial_splits(&app);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].date, ymd(2024, 1, 6));
    }

    #[test]
    fn initial_splits_expand_when_none_persisted() {
        let mut app = application("2024-01-05", "2024-01-07");
        app.splits = Some(Vec::new());
        let rows = build_initial_splits(&app);
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.leave_type == "casual"));
        assert!(rows.iter().all(|r| r.status == SplitStatus::Approved));
    }

    #[test]
    fn initial_splits_are_idempotent() {
        let mut app = application("2024-01-05", "2024-01-07");
        app.splits = Some(vec![record("2024-01-07"), record("2024-01-05")]);
        assert_eq!(build_initial_splits(&app), build_initial_splits(&app));
    }

    #[test]
    fn edit_normalizes_half_day_off() {
        let mut app = application("2024-01-05", "2024-01-05");
        app.is_half_day = true;
        app.half_day_type = Some(HalfDayType::FirstHalf);
        let draft = build_initial_splits(&app);
        let edited = update_split_draft(
            &draft,
            0,
            SplitPatch {
                is_half_day: Some(false),
                ..SplitPatch::default()
            },
        );
        assert!(!edited[0].is_half_day);
        assert_eq!(edited[0].half_day_type, None);
        assert_eq!(edited[0].number_of_days, 1.0);
    }

    #[test]
    fn edit_turning_half_day_on_recomputes_and_defaults_the_type() {
        let draft = build_initial_splits(&application("2024-01-05", "2024-01-07"));
        let edited = update_split_draft(
            &draft,
            1,
            SplitPatch {
                is_half_day: Some(true),
                ..SplitPatch::default()
            },
        );
        assert_eq!(edited[1].number_of_days, 0.5);
        assert_eq!(edited[1].half_day_type, Some(HalfDayType::FirstHalf));
        // untouched rows keep their values
        assert_eq!(edited[0], draft[0]);
        assert_eq!(edited[2], draft[2]);
    }

    #[test]
    fn edit_does_not_mutate_the_input() {
        let draft = build_initial_splits(&application("2024-01-05", "2024-01-07"));
        let before = draft.clone();
        let _ = update_split_draft(
            &draft,
            0,
            SplitPatch {
                status: Some(SplitStatus::Rejected),
                ..SplitPatch::default()
            },
        );
        assert_eq!(draft, before);
    }

    #[test]
    fn edit_may_transiently_duplicate_a_date() {
        let draft = build_initial_splits(&application("2024-01-05", "2024-01-07"));
        let edited = update_split_draft(
            &draft,
            1,
            SplitPatch {
                date: Some(ymd(2024, 1, 5)),
                ..SplitPatch::default()
            },
        );
        assert_eq!(edited.len(), 3);
        assert_eq!(edited[0].date, edited[1].date);
    }

    #[test]
    fn edit_with_out_of_bounds_index_is_a_no_op() {
        let draft = build_initial_splits(&application("2024-01-05", "2024-01-07"));
        let edited = update_split_draft(&draft, 9, SplitPatch::default());
        assert_eq!(edited, draft);
    }

    #[test]
    fn edit_can_clear_notes_and_nature() {
        let mut app = application("2024-01-05", "2024-01-05");
        app.splits = Some(vec![LeaveSplitRecord {
            leave_nature: Some(LeaveNature::Lop),
            notes: Some("carried from payroll".to_string()),
            ..record("2024-01-05")
        }]);
        let draft = build_initial_splits(&app);
        let edited = update_split_draft(
            &draft,
            0,
            SplitPatch {
                leave_nature: Some(None),
                notes: Some(None),
                ..SplitPatch::default()
            },
        );
        assert_eq!(edited[0].leave_nature, None);
        assert_eq!(edited[0].notes, None);
    }
}
