/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::session::Session;
use serde_json::{Value, json};

/// Dataset variable endpoints (TestRail Enterprise)
#[derive(Debug, Clone, Copy)]
pub struct Variables<'a> {
    session: &'a Session,
}

impl<'a> Variables<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the variables of a project
    pub async fn get_variables(&self, project_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_variables/{project_id}"), &())
            .await
    }

    /// Creates a variable
    pub async fn add_variable(
        &self,
        project_id: u64,
        id: u64,
        name: &str,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("add_variable/{project_id}"),
                &(),
                &json!({"id": id, "name": name}),
            )
            .await
    }

    /// Renames a variable
    pub async fn update_variable(&self, variable_id: u64, name: &str) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("update_variable/{variable_id}"),
                &(),
                &json!({"name": name}),
            )
            .await
    }

    /// Deletes a variable and its values in every dataset
    pub async fn delete_variable(&self, variable_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_variable/{variable_id}"), &(), &())
            .await
    }
}
