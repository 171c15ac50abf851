/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::model::bulk::fetch_all;
use crate::model::filters::{GetSharedSteps, Paged};
use crate::model::requests::UpdateSharedStep;
use crate::session::Session;
use serde_json::{Value, json};

/// Shared step endpoints
#[derive(Debug, Clone, Copy)]
pub struct SharedSteps<'a> {
    session: &'a Session,
}

impl<'a> SharedSteps<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a set of shared steps
    pub async fn get_shared_step(&self, shared_update_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_shared_step/{shared_update_id}"), &())
            .await
    }

    /// Returns one page of the shared steps of a project
    pub async fn get_shared_steps(
        &self,
        project_id: u64,
        filter: &GetSharedSteps,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_shared_steps/{project_id}"), filter)
            .await
    }

    /// Returns every set of shared steps of a project matching `filter`
    pub async fn get_shared_steps_bulk(
        &self,
        project_id: u64,
        filter: &GetSharedSteps,
    ) -> TestRailResult<Vec<Value>> {
        fetch_all("shared_steps", |limit, offset| {
            let page = filter.paged(limit, offset);
            async move { self.get_shared_steps(project_id, &page).await }
        })
        .await
    }

    /// Creates a set of shared steps
    pub async fn add_shared_step(
        &self,
        project_id: u64,
        title: &str,
        custom_steps_separated: &[Value],
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("add_shared_step/{project_id}"),
                &(),
                &json!({"title": title, "custom_steps_separated": custom_steps_separated}),
            )
            .await
    }

    /// Updates a set of shared steps
    pub async fn update_shared_step(
        &self,
        shared_update_id: u64,
        fields: &UpdateSharedStep,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_shared_step/{shared_update_id}"), &(), fields)
            .await
    }

    /// Deletes a set of shared steps
    ///
    /// With `keep_in_cases` the steps are copied into the cases using them.
    pub async fn delete_shared_step(
        &self,
        shared_update_id: u64,
        keep_in_cases: bool,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("delete_shared_step/{shared_update_id}"),
                &(),
                &json!({"keep_in_cases": u8::from(keep_in_cases)}),
            )
            .await
    }
}
