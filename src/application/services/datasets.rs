/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::model::requests::{DatasetVariable, UpdateDataset};
use crate::session::Session;
use serde_json::{Value, json};

/// Dataset endpoints (TestRail Enterprise)
#[derive(Debug, Clone, Copy)]
pub struct Datasets<'a> {
    session: &'a Session,
}

impl<'a> Datasets<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a dataset with its variable values
    pub async fn get_dataset(&self, dataset_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_dataset/{dataset_id}"), &())
            .await
    }

    /// Returns the datasets of a project
    pub async fn get_datasets(&self, project_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_datasets/{project_id}"), &())
            .await
    }

    /// Creates a dataset
    pub async fn add_dataset(
        &self,
        project_id: u64,
        id: u64,
        name: &str,
        variables: &[DatasetVariable],
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("add_dataset/{project_id}"),
                &(),
                &json!({"id": id, "name": name, "variables": variables}),
            )
            .await
    }

    /// Updates the name or variable values of a dataset
    pub async fn update_dataset(
        &self,
        dataset_id: u64,
        fields: &UpdateDataset,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_dataset/{dataset_id}"), &(), fields)
            .await
    }

    /// Deletes a dataset
    pub async fn delete_dataset(&self, dataset_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_dataset/{dataset_id}"), &(), &())
            .await
    }
}
