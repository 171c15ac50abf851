/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::services::body_with;
use crate::error::TestRailResult;
use crate::model::bulk::fetch_all;
use crate::model::filters::{GetPlans, Paged};
use crate::model::requests::{AddPlan, AddPlanEntry, RunInPlanEntry, UpdatePlan, UpdatePlanEntry};
use crate::session::Session;
use serde_json::{Value, json};
use tracing::info;

/// Test plan endpoints
///
/// Plan entry IDs are UUID strings, run and plan IDs are numbers.
#[derive(Debug, Clone, Copy)]
pub struct Plans<'a> {
    session: &'a Session,
}

impl<'a> Plans<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a test plan with its entries and runs
    pub async fn get_plan(&self, plan_id: u64) -> TestRailResult<Option<Value>> {
        self.session.get(&format!("get_plan/{plan_id}"), &()).await
    }

    /// Returns one page of the test plans of a project
    pub async fn get_plans(&self, project_id: u64, filter: &GetPlans) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_plans/{project_id}"), filter)
            .await
    }

    /// Returns every test plan of a project matching `filter`
    pub async fn get_plans_bulk(&self, project_id: u64, filter: &GetPlans) -> TestRailResult<Vec<Value>> {
        fetch_all("plans", |limit, offset| {
            let page = filter.paged(limit, offset);
            async move { self.get_plans(project_id, &page).await }
        })
        .await
    }

    /// Creates a test plan
    pub async fn add_plan(
        &self,
        project_id: u64,
        name: &str,
        fields: &AddPlan,
    ) -> TestRailResult<Option<Value>> {
        info!("Adding plan '{}' to project {}", name, project_id);
        let body = body_with(fields, [("name", json!(name))])?;
        self.session
            .post(&format!("add_plan/{project_id}"), &(), &body)
            .await
    }

    /// Adds one or more runs for a suite to a test plan
    pub async fn add_plan_entry(
        &self,
        plan_id: u64,
        suite_id: u64,
        fields: &AddPlanEntry,
    ) -> TestRailResult<Option<Value>> {
        let body = body_with(fields, [("suite_id", json!(suite_id))])?;
        self.session
            .post(&format!("add_plan_entry/{plan_id}"), &(), &body)
            .await
    }

    /// Adds a run with the given configurations to an existing plan entry
    pub async fn add_run_to_plan_entry(
        &self,
        plan_id: u64,
        entry_id: &str,
        config_ids: &[u64],
        fields: &RunInPlanEntry,
    ) -> TestRailResult<Option<Value>> {
        let body = body_with(fields, [("config_ids", json!(config_ids))])?;
        self.session
            .post(
                &format!("add_run_to_plan_entry/{plan_id}/{entry_id}"),
                &(),
                &body,
            )
            .await
    }

    /// Updates a test plan
    pub async fn update_plan(&self, plan_id: u64, fields: &UpdatePlan) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_plan/{plan_id}"), &(), fields)
            .await
    }

    /// Updates every run of a plan entry
    pub async fn update_plan_entry(
        &self,
        plan_id: u64,
        entry_id: &str,
        fields: &UpdatePlanEntry,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("update_plan_entry/{plan_id}/{entry_id}"),
                &(),
                fields,
            )
            .await
    }

    /// Updates a single run inside a plan entry
    pub async fn update_run_in_plan_entry(
        &self,
        run_id: u64,
        fields: &RunInPlanEntry,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_run_in_plan_entry/{run_id}"), &(), fields)
            .await
    }

    /// Closes a test plan; closed plans can no longer be edited
    pub async fn close_plan(&self, plan_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("close_plan/{plan_id}"), &(), &())
            .await
    }

    /// Deletes a test plan
    pub async fn delete_plan(&self, plan_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_plan/{plan_id}"), &(), &())
            .await
    }

    /// Deletes an entry and its runs from a test plan
    pub async fn delete_plan_entry(&self, plan_id: u64, entry_id: &str) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("delete_plan_entry/{plan_id}/{entry_id}"),
                &(),
                &(),
            )
            .await
    }

    /// Deletes a run from a plan entry
    pub async fn delete_run_from_plan_entry(&self, run_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_run_from_plan_entry/{run_id}"), &(), &())
            .await
    }
}
