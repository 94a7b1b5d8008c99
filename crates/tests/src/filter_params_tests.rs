use crate::common;
use portal::filter_logs;
use pretty_assertions::assert_eq;
use shared_types::{
    ConditionStatus, DateRange, LogCriteria, LogFilterParams, ReviewStatus, Shift, StatusFilter,
};

#[test]
fn test_default_params_are_unconstrained() {
    let criteria = LogCriteria::from(LogFilterParams::default());
    assert_eq!(criteria, LogCriteria::default());
    assert!(criteria.is_unconstrained());
}

#[test]
fn test_status_spelling_does_not_matter() {
    for raw in ["PENDING", "pending", "Pending", " pending "] {
        let criteria = LogCriteria::from(LogFilterParams {
            status: raw.into(),
            ..LogFilterParams::default()
        });
        assert_eq!(criteria.status, Some(StatusFilter::Review(ReviewStatus::Pending)));
    }
}

#[test]
fn test_condition_labels_parse_to_condition_filter() {
    let criteria = LogCriteria::from(LogFilterParams {
        status: "need attention".into(),
        ..LogFilterParams::default()
    });
    assert_eq!(
        criteria.status,
        Some(StatusFilter::Condition(ConditionStatus::NeedAttention))
    );
}

#[test]
fn test_unknown_status_or_shift_matches_nothing() {
    let logs = common::mock_logs();
    let ctx = common::now();
    for params in [
        LogFilterParams {
            status: "archived".into(),
            ..LogFilterParams::default()
        },
        LogFilterParams {
            shift: "morning".into(),
            ..LogFilterParams::default()
        },
    ] {
        let criteria = LogCriteria::from(params);
        assert!(filter_logs(&logs, &criteria, &ctx).is_empty(), "{criteria:?}");
    }
}

#[test]
fn test_unknown_department_matches_nothing() {
    let criteria = LogCriteria::from(LogFilterParams {
        department: "Cafeteria".into(),
        ..LogFilterParams::default()
    });
    assert!(filter_logs(&common::mock_logs(), &criteria, &common::now()).is_empty());
}

#[test]
fn test_unknown_date_range_shows_everything() {
    let criteria = LogCriteria::from(LogFilterParams {
        date_range: "this-month".into(),
        ..LogFilterParams::default()
    });
    assert_eq!(criteria.date_range, DateRange::All);
    assert_eq!(filter_logs(&common::mock_logs(), &criteria, &common::now()).len(), 8);
}

#[test]
fn test_widget_values_become_typed_criteria() {
    let params = LogFilterParams {
        search: "smith".into(),
        department: "Turbine Hall".into(),
        shift: "Night".into(),
        status: "flagged".into(),
        date: Some(common::day(5)),
        date_range: "this-week".into(),
    };
    let criteria = LogCriteria::from(params);
    assert_eq!(
        criteria,
        LogCriteria::new()
            .search("smith")
            .department("Turbine Hall")
            .shift(Shift::Night)
            .status(ReviewStatus::Flagged)
            .on_date(common::day(5))
            .date_range(DateRange::ThisWeek)
    );

    let logs = common::mock_logs();
    let result = filter_logs(&logs, &criteria, &common::now());
    assert_eq!(common::ids(&result), vec!["log-6"]);
}

#[test]
fn test_params_deserialize_with_missing_fields() {
    let params: LogFilterParams = serde_json::from_str(r#"{"search": "boiler"}"#).unwrap();
    assert_eq!(params.department, "all");
    assert_eq!(params.date, None);

    let criteria = LogCriteria::from(params);
    assert_eq!(criteria, LogCriteria::new().search("boiler"));
}
