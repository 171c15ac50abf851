/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::model::bulk::fetch_all;
use crate::model::filters::{GetResults, Paged};
use crate::model::requests::AddResult;
use crate::session::Session;
use serde_json::{Value, json};
use tracing::debug;

/// Test result endpoints
#[derive(Debug, Clone, Copy)]
pub struct Results<'a> {
    session: &'a Session,
}

impl<'a> Results<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns one page of the results of a test
    pub async fn get_results(&self, test_id: u64, filter: &GetResults) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_results/{test_id}"), filter)
            .await
    }

    /// Returns every result of a test matching `filter`
    pub async fn get_results_bulk(&self, test_id: u64, filter: &GetResults) -> TestRailResult<Vec<Value>> {
        fetch_all("results", |limit, offset| {
            let page = filter.paged(limit, offset);
            async move { self.get_results(test_id, &page).await }
        })
        .await
    }

    /// Returns one page of the results of a case in a run
    pub async fn get_results_for_case(
        &self,
        run_id: u64,
        case_id: u64,
        filter: &GetResults,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_results_for_case/{run_id}/{case_id}"), filter)
            .await
    }

    /// Returns every result of a case in a run matching `filter`
    pub async fn get_results_for_case_bulk(
        &self,
        run_id: u64,
        case_id: u64,
        filter: &GetResults,
    ) -> TestRailResult<Vec<Value>> {
        fetch_all("results", |limit, offset| {
            let page = filter.paged(limit, offset);
            async move { self.get_results_for_case(run_id, case_id, &page).await }
        })
        .await
    }

    /// Returns one page of the results of a run
    pub async fn get_results_for_run(
        &self,
        run_id: u64,
        filter: &GetResults,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_results_for_run/{run_id}"), filter)
            .await
    }

    /// Returns every result of a run matching `filter`
    pub async fn get_results_for_run_bulk(
        &self,
        run_id: u64,
        filter: &GetResults,
    ) -> TestRailResult<Vec<Value>> {
        fetch_all("results", |limit, offset| {
            let page = filter.paged(limit, offset);
            async move { self.get_results_for_run(run_id, &page).await }
        })
        .await
    }

    /// Adds a result to a test
    pub async fn add_result(&self, test_id: u64, result: &AddResult) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("add_result/{test_id}"), &(), result)
            .await
    }

    /// Adds a result to the test of a case in a run
    pub async fn add_result_for_case(
        &self,
        run_id: u64,
        case_id: u64,
        result: &AddResult,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("add_result_for_case/{run_id}/{case_id}"),
                &(),
                result,
            )
            .await
    }

    /// Adds several results to a run; each item carries its `test_id`
    pub async fn add_results(&self, run_id: u64, results: &[AddResult]) -> TestRailResult<Option<Value>> {
        debug!("Adding {} results to run {}", results.len(), run_id);
        self.session
            .post(
                &format!("add_results/{run_id}"),
                &(),
                &json!({"results": results}),
            )
            .await
    }

    /// Adds several results to a run; each item carries its `case_id`
    pub async fn add_results_for_cases(
        &self,
        run_id: u64,
        results: &[AddResult],
    ) -> TestRailResult<Option<Value>> {
        debug!("Adding {} case results to run {}", results.len(), run_id);
        self.session
            .post(
                &format!("add_results_for_cases/{run_id}"),
                &(),
                &json!({"results": results}),
            )
            .await
    }
}
