use chrono::{Duration, Utc};
use testrail_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let project_id: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(1);

    // Suppress not-ok responses so a missing run does not abort the walk
    let api: TestRailApi = TestRailApi::builder().exc(true).build()?;

    let filter = GetRuns {
        created_after: Some(Utc::now() - Duration::days(7)),
        ..Default::default()
    };
    let runs = api.runs().get_runs_bulk(project_id, &filter).await?;
    info!("{} runs created in the last week", runs.len());

    for run in runs {
        let Some(run_id) = run["id"].as_u64() else {
            continue;
        };
        let results = api
            .results()
            .get_results_for_run_bulk(run_id, &GetResults::default())
            .await?;
        let failed = results
            .iter()
            .filter(|result| result["status_id"] == serde_json::json!(5))
            .count();
        info!("Run {}: {} results, {} failed", run_id, results.len(), failed);
    }

    Ok(())
}
