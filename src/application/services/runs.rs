/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::services::Soft;
use crate::error::TestRailResult;
use crate::model::bulk::fetch_all;
use crate::model::filters::{GetRuns, Paged};
use crate::model::requests::{AddRun, UpdateRun};
use crate::session::Session;
use serde_json::Value;
use tracing::info;

/// Test run endpoints
#[derive(Debug, Clone, Copy)]
pub struct Runs<'a> {
    session: &'a Session,
}

impl<'a> Runs<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a test run
    pub async fn get_run(&self, run_id: u64) -> TestRailResult<Option<Value>> {
        self.session.get(&format!("get_run/{run_id}"), &()).await
    }

    /// Returns one page of the runs of a project, plan runs excluded
    pub async fn get_runs(&self, project_id: u64, filter: &GetRuns) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_runs/{project_id}"), filter)
            .await
    }

    /// Returns every run of a project matching `filter`
    pub async fn get_runs_bulk(&self, project_id: u64, filter: &GetRuns) -> TestRailResult<Vec<Value>> {
        fetch_all("runs", |limit, offset| {
            let page = filter.paged(limit, offset);
            async move { self.get_runs(project_id, &page).await }
        })
        .await
    }

    /// Creates a test run
    pub async fn add_run(&self, project_id: u64, fields: &AddRun) -> TestRailResult<Option<Value>> {
        info!("Adding run to project {}", project_id);
        self.session
            .post(&format!("add_run/{project_id}"), &(), fields)
            .await
    }

    /// Updates a test run; partial updates are supported
    pub async fn update_run(&self, run_id: u64, fields: &UpdateRun) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_run/{run_id}"), &(), fields)
            .await
    }

    /// Closes a test run and archives its tests and results
    pub async fn close_run(&self, run_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("close_run/{run_id}"), &(), &())
            .await
    }

    /// Deletes a test run; with `soft` the server only reports what would be deleted
    pub async fn delete_run(&self, run_id: u64, soft: bool) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_run/{run_id}"), &Soft { soft }, &())
            .await
    }
}
