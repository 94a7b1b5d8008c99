use crate::common;
use portal::filter::{self, filter_logs};
use pretty_assertions::assert_eq;
use shared_types::{
    ConditionStatus, DateRange, LogCriteria, LogRecord, ReviewStatus, Shift, StatusFilter,
};

fn sample_criteria() -> Vec<LogCriteria> {
    vec![
        LogCriteria::default(),
        LogCriteria::new().search("turbine"),
        LogCriteria::new().search("JOHN"),
        LogCriteria::new().department("Boiler Room"),
        LogCriteria::new().shift(Shift::Night),
        LogCriteria::new().status(ReviewStatus::Pending),
        LogCriteria::new().status(ConditionStatus::Critical),
        LogCriteria::new().on_date(common::day(7)),
        LogCriteria::new().date_range(DateRange::Today),
        LogCriteria::new().date_range(DateRange::Yesterday),
        LogCriteria::new().date_range(DateRange::ThisWeek),
        LogCriteria::new()
            .search("pressure")
            .shift(Shift::Morning)
            .status(ReviewStatus::Pending)
            .date_range(DateRange::ThisWeek),
    ]
}

fn is_subsequence(sub: &[&LogRecord], full: &[LogRecord]) -> bool {
    let mut rest = full.iter();
    sub.iter()
        .all(|wanted| rest.by_ref().any(|candidate| candidate == *wanted))
}

#[test]
fn test_default_criteria_return_everything_in_order() {
    let logs = common::mock_logs();
    let result = filter_logs(&logs, &LogCriteria::default(), &common::now());
    let expected: Vec<&LogRecord> = logs.iter().collect();
    assert_eq!(result, expected);
}

#[test]
fn test_results_are_order_preserving_subsequences() {
    let logs = common::mock_logs();
    let ctx = common::now();
    for criteria in sample_criteria() {
        let result = filter_logs(&logs, &criteria, &ctx);
        assert!(is_subsequence(&result, &logs), "{criteria:?}");
    }
}

#[test]
fn test_included_records_pass_and_excluded_records_fail() {
    let logs = common::mock_logs();
    let ctx = common::now();
    for criteria in sample_criteria() {
        let result = filter_logs(&logs, &criteria, &ctx);
        for record in &logs {
            let included = result.iter().any(|r| r.id == record.id);
            assert_eq!(included, filter::matches(record, &criteria, &ctx), "{}", record.id);
        }
    }
}

#[test]
fn test_filtering_is_idempotent() {
    let logs = common::mock_logs();
    let ctx = common::now();
    for criteria in sample_criteria() {
        let once: Vec<LogRecord> = filter_logs(&logs, &criteria, &ctx)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_logs(&once, &criteria, &ctx);
        let once_refs: Vec<&LogRecord> = once.iter().collect();
        assert_eq!(twice, once_refs);
    }
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let logs = common::mock_logs();
    let ctx = common::now();

    let by_department = filter_logs(&logs, &LogCriteria::new().search("TURBINE hall"), &ctx);
    assert_eq!(common::ids(&by_department), vec!["log-1", "log-6"]);

    let by_engineer = filter_logs(&logs, &LogCriteria::new().search("raj"), &ctx);
    assert_eq!(common::ids(&by_engineer), vec!["log-5"]);

    let by_summary = filter_logs(&logs, &LogCriteria::new().search("pressure levels"), &ctx);
    assert_eq!(by_summary.len(), 8);
}

#[test]
fn test_notes_are_not_searched() {
    let logs = common::mock_logs();
    let result = filter_logs(
        &logs,
        &LogCriteria::new().search("secondary cooling"),
        &common::now(),
    );
    assert!(result.is_empty());
}

#[test]
fn test_status_filters_use_the_chosen_vocabulary() {
    let logs = common::mock_logs();
    let ctx = common::now();

    let flagged = filter_logs(&logs, &LogCriteria::new().status(ReviewStatus::Flagged), &ctx);
    assert_eq!(common::ids(&flagged), vec!["log-3", "log-6"]);

    let attention = filter_logs(
        &logs,
        &LogCriteria::new().status(StatusFilter::Condition(ConditionStatus::NeedAttention)),
        &ctx,
    );
    assert_eq!(common::ids(&attention), vec!["log-3", "log-7"]);

    let normal = filter_logs(&logs, &LogCriteria::new().status(ConditionStatus::Normal), &ctx);
    assert!(normal.is_empty());
}

#[test]
fn test_date_ranges_relative_to_now() {
    let logs = common::mock_logs();
    let ctx = common::now();

    let today = filter_logs(&logs, &LogCriteria::new().date_range(DateRange::Today), &ctx);
    assert_eq!(common::ids(&today), vec!["log-1"]);

    let yesterday = filter_logs(&logs, &LogCriteria::new().date_range(DateRange::Yesterday), &ctx);
    assert_eq!(common::ids(&yesterday), vec!["log-2"]);

    // 3 July at midnight falls just before the seven-day window opens at noon.
    let week = filter_logs(&logs, &LogCriteria::new().date_range(DateRange::ThisWeek), &ctx);
    assert_eq!(week.len(), 7);
    assert!(week.iter().all(|r| r.id != "log-8"));
}

#[test]
fn test_this_week_window_is_configurable() {
    let logs = common::mock_logs();
    let ctx = common::now().with_window_days(2);
    let result = filter_logs(&logs, &LogCriteria::new().date_range(DateRange::ThisWeek), &ctx);
    assert_eq!(common::ids(&result), vec!["log-1", "log-2"]);
}

#[test]
fn test_future_records_count_as_this_week() {
    let mut logs = common::mock_logs();
    logs[0].date = common::at(20, 0, 0);
    let result = filter_logs(
        &logs,
        &LogCriteria::new().date_range(DateRange::ThisWeek),
        &common::now(),
    );
    assert_eq!(result[0].id, "log-1");
}

#[test]
fn test_exact_date_ignores_time_of_day() {
    let mut logs = common::mock_logs();
    logs[3].date = common::at(7, 23, 59);
    let result = filter_logs(&logs, &LogCriteria::new().on_date(common::day(7)), &common::now());
    assert_eq!(common::ids(&result), vec!["log-4"]);
}

#[test]
fn test_criteria_combine_with_and() {
    let logs = common::mock_logs();
    let criteria = LogCriteria::new()
        .department("Turbine Hall")
        .status(ReviewStatus::Flagged);
    let result = filter_logs(&logs, &criteria, &common::now());
    assert_eq!(common::ids(&result), vec!["log-6"]);

    let none = LogCriteria::new().department("Turbine Hall").shift(Shift::Afternoon);
    assert!(filter_logs(&logs, &none, &common::now()).is_empty());
}

#[test]
fn test_unknown_department_matches_nothing() {
    let logs = common::mock_logs();
    let result = filter_logs(&logs, &LogCriteria::new().department("Cafeteria"), &common::now());
    assert!(result.is_empty());
}

#[test]
fn test_empty_collection_yields_empty_result() {
    let result = filter_logs(&[], &LogCriteria::new().search("anything"), &common::now());
    assert!(result.is_empty());
}
