use crate::common::{self, mock_json};
use serde_json::json;
use testrail_client::prelude::*;

fn cases_page(start: usize, count: usize) -> Value {
    let cases: Vec<Value> = (start..start + count).map(|id| json!({"id": id})).collect();
    json!({
        "offset": start,
        "limit": PAGE_MAX,
        "size": count,
        "_links": {"next": null, "prev": null},
        "cases": cases
    })
}

#[tokio::test]
async fn test_get_cases_bulk_walks_every_page() {
    let mut server = common::server().await;
    let mut pages = Vec::new();
    for (offset, count) in [(0, 250), (250, 250), (500, 1)] {
        pages.push(
            mock_json(
                &mut server,
                "GET",
                "get_cases/1",
                &[
                    ("suite_id", "4"),
                    ("limit", "250"),
                    ("offset", &offset.to_string()),
                ],
                &cases_page(offset, count),
            )
            .expect(1)
            .create_async()
            .await,
        );
    }

    let api = common::api(&server);
    let filter = GetCases {
        suite_id: Some(4),
        ..Default::default()
    };
    let cases = api.cases().get_cases_bulk(1, &filter).await.unwrap();

    assert_eq!(cases.len(), 501);
    assert_eq!(cases[0], json!({"id": 0}));
    assert_eq!(cases[500], json!({"id": 500}));
    for page in pages {
        page.assert_async().await;
    }
}

#[tokio::test]
async fn test_bulk_single_short_page() {
    let mut server = common::server().await;
    let mock = mock_json(
        &mut server,
        "GET",
        "get_projects",
        &[("limit", "250"), ("offset", "0")],
        &json!({"size": 2, "projects": [{"id": 1}, {"id": 2}]}),
    )
    .expect(1)
    .create_async()
    .await;

    let api = common::api(&server);
    let projects = api
        .projects()
        .get_projects_bulk(&GetProjects::default())
        .await
        .unwrap();

    assert_eq!(projects, vec![json!({"id": 1}), json!({"id": 2})]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bulk_without_size_uses_item_count() {
    let mut server = common::server().await;
    let mock = mock_json(
        &mut server,
        "GET",
        "get_runs/3",
        &[("limit", "250"), ("offset", "0")],
        &json!({"runs": [{"id": 10}]}),
    )
    .expect(1)
    .create_async()
    .await;

    let api = common::api(&server);
    let runs = api.runs().get_runs_bulk(3, &GetRuns::default()).await.unwrap();

    assert_eq!(runs, vec![json!({"id": 10})]);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bulk_stops_on_suppressed_error() {
    let mut server = common::server().await;
    let tests = vec![json!({"id": 1}); 250];
    mock_json(
        &mut server,
        "GET",
        "get_tests/9",
        &[("limit", "250"), ("offset", "0")],
        &json!({"size": 250, "tests": tests}),
    )
    .create_async()
    .await;
    let failing = server
        .mock("GET", common::API_PATH)
        .match_query(common::endpoint(
            "get_tests/9",
            &[("limit", "250"), ("offset", "250")],
        ))
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let api: TestRailApi = common::builder(&server).exc(true).build().unwrap();
    let tests = api.tests().get_tests_bulk(9, &GetTests::default()).await.unwrap();

    assert_eq!(tests.len(), 250);
    failing.assert_async().await;
}

#[tokio::test]
async fn test_bulk_propagates_errors() {
    let mut server = common::server().await;
    server
        .mock("GET", common::API_PATH)
        .match_query(common::endpoint("get_plans/2", &[("offset", "0")]))
        .with_status(403)
        .with_body(r#"{"error": "No access"}"#)
        .create_async()
        .await;

    let api = common::api(&server);
    let err = api
        .plans()
        .get_plans_bulk(2, &GetPlans::default())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(403));
}
