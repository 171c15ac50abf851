use assert_json_diff::assert_json_eq;
use chrono::TimeZone;
use serde_json::json;
use testrail_client::prelude::*;

fn json_value<T: serde::Serialize>(v: &T) -> Value {
    serde_json::to_value(v).unwrap()
}

#[test]
fn test_empty_requests_serialize_to_empty_objects() {
    assert_json_eq!(json_value(&AddCase::default()), json!({}));
    assert_json_eq!(json_value(&UpdateRun::default()), json!({}));
    assert_json_eq!(json_value(&GetCases::default()), json!({}));
}

#[test]
fn test_add_run_with_case_selection() {
    let run = AddRun {
        suite_id: Some(1),
        name: Some("Nightly".to_string()),
        include_all: Some(false),
        case_ids: Some(vec![1, 2, 3]),
        ..Default::default()
    };
    assert_json_eq!(
        json_value(&run),
        json!({
            "suite_id": 1,
            "name": "Nightly",
            "include_all": false,
            "case_ids": [1, 2, 3]
        })
    );
}

#[test]
fn test_custom_fields_sit_next_to_typed_ones() {
    let result = AddResult {
        status_id: Some(1),
        ..Default::default()
    }
    .with_custom("custom_step_results", json!([{"status_id": 1}]))
    .with_custom("elapsed", "1m 5s");

    assert_json_eq!(
        json_value(&result),
        json!({
            "status_id": 1,
            "custom_step_results": [{"status_id": 1}],
            "elapsed": "1m 5s"
        })
    );
}

#[test]
fn test_datetimes_become_unix_timestamps() {
    let start = Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap();
    let milestone = UpdateMilestone {
        start_on: Some(start),
        ..Default::default()
    };
    assert_eq!(json_value(&milestone), json!({"start_on": start.timestamp()}));
    assert_eq!(timestamp_value(&start), json!(start.timestamp()));
}

#[test]
fn test_timestamps_round_half_to_even() {
    let half = Utc.timestamp_opt(12, 500_000_000).unwrap();
    let odd_half = Utc.timestamp_opt(13, 500_000_000).unwrap();
    let above = Utc.timestamp_opt(12, 600_000_000).unwrap();
    assert_eq!(to_unix_timestamp(&half), 12);
    assert_eq!(to_unix_timestamp(&odd_half), 14);
    assert_eq!(to_unix_timestamp(&above), 13);
}

#[test]
fn test_join_ids() {
    assert_eq!(join_ids(&[1, 2, 3]), "1,2,3");
    assert_eq!(join_ids::<u64>(&[]), "");
}

#[test]
fn test_paged_keeps_filters() {
    let filter = GetRuns {
        is_completed: Some(false),
        ..Default::default()
    }
    .with_custom("refs_filter", "JIRA-1");
    let page = filter.paged(PAGE_MAX, 500);

    assert_json_eq!(
        json_value(&page),
        json!({
            "is_completed": false,
            "refs_filter": "JIRA-1",
            "limit": 250,
            "offset": 500
        })
    );
}

#[test]
fn test_page_new() {
    assert_json_eq!(
        json_value(&Page::new(10, 20)),
        json!({"limit": 10, "offset": 20})
    );
    assert_json_eq!(json_value(&Page::default()), json!({}));
}
