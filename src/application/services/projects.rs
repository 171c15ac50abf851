/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::services::body_with;
use crate::error::TestRailResult;
use crate::model::bulk::fetch_all;
use crate::model::filters::{GetProjects, Paged};
use crate::model::requests::{AddProject, UpdateProject};
use crate::session::Session;
use serde_json::{Value, json};
use tracing::{info, warn};

/// Project endpoints
#[derive(Debug, Clone, Copy)]
pub struct Projects<'a> {
    session: &'a Session,
}

impl<'a> Projects<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a project
    pub async fn get_project(&self, project_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_project/{project_id}"), &())
            .await
    }

    /// Returns one page of projects
    pub async fn get_projects(&self, filter: &GetProjects) -> TestRailResult<Option<Value>> {
        self.session.get("get_projects", filter).await
    }

    /// Returns every project matching `filter`
    pub async fn get_projects_bulk(&self, filter: &GetProjects) -> TestRailResult<Vec<Value>> {
        fetch_all("projects", |limit, offset| {
            let page = filter.paged(limit, offset);
            async move { self.get_projects(&page).await }
        })
        .await
    }

    /// Creates a project (administrators only)
    pub async fn add_project(&self, name: &str, fields: &AddProject) -> TestRailResult<Option<Value>> {
        info!("Adding project '{}'", name);
        let body = body_with(fields, [("name", json!(name))])?;
        self.session.post("add_project", &(), &body).await
    }

    /// Updates a project, e.g. to complete it
    pub async fn update_project(
        &self,
        project_id: u64,
        fields: &UpdateProject,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_project/{project_id}"), &(), fields)
            .await
    }

    /// Deletes a project with all of its suites, runs and results; cannot be undone
    pub async fn delete_project(&self, project_id: u64) -> TestRailResult<Option<Value>> {
        warn!("Deleting project {}", project_id);
        self.session
            .post(&format!("delete_project/{project_id}"), &(), &())
            .await
    }
}
