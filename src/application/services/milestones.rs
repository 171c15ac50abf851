/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::services::body_with;
use crate::error::TestRailResult;
use crate::model::bulk::fetch_all;
use crate::model::filters::{GetMilestones, Paged};
use crate::model::requests::{AddMilestone, UpdateMilestone};
use crate::session::Session;
use serde_json::{Value, json};
use tracing::info;

/// Milestone endpoints
#[derive(Debug, Clone, Copy)]
pub struct Milestones<'a> {
    session: &'a Session,
}

impl<'a> Milestones<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a milestone
    pub async fn get_milestone(&self, milestone_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_milestone/{milestone_id}"), &())
            .await
    }

    /// Returns one page of the milestones of a project
    pub async fn get_milestones(
        &self,
        project_id: u64,
        filter: &GetMilestones,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_milestones/{project_id}"), filter)
            .await
    }

    /// Returns every milestone of a project matching `filter`
    pub async fn get_milestones_bulk(
        &self,
        project_id: u64,
        filter: &GetMilestones,
    ) -> TestRailResult<Vec<Value>> {
        fetch_all("milestones", |limit, offset| {
            let page = filter.paged(limit, offset);
            async move { self.get_milestones(project_id, &page).await }
        })
        .await
    }

    /// Creates a milestone
    pub async fn add_milestone(
        &self,
        project_id: u64,
        name: &str,
        fields: &AddMilestone,
    ) -> TestRailResult<Option<Value>> {
        info!("Adding milestone '{}' to project {}", name, project_id);
        let body = body_with(fields, [("name", json!(name))])?;
        self.session
            .post(&format!("add_milestone/{project_id}"), &(), &body)
            .await
    }

    /// Updates a milestone, e.g. to start or complete it
    pub async fn update_milestone(
        &self,
        milestone_id: u64,
        fields: &UpdateMilestone,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_milestone/{milestone_id}"), &(), fields)
            .await
    }

    /// Deletes a milestone
    pub async fn delete_milestone(&self, milestone_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_milestone/{milestone_id}"), &(), &())
            .await
    }
}
