/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::session::Session;
use serde_json::{Value, json};

/// Configuration endpoints
#[derive(Debug, Clone, Copy)]
pub struct Configurations<'a> {
    session: &'a Session,
}

impl<'a> Configurations<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the configuration groups of a project with their configurations
    pub async fn get_configs(&self, project_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_configs/{project_id}"), &())
            .await
    }

    /// Creates a configuration group
    pub async fn add_config_group(&self, project_id: u64, name: &str) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("add_config_group/{project_id}"),
                &(),
                &json!({"name": name}),
            )
            .await
    }

    /// Creates a configuration inside a group
    pub async fn add_config(&self, config_group_id: u64, name: &str) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("add_config/{config_group_id}"),
                &(),
                &json!({"name": name}),
            )
            .await
    }

    /// Renames a configuration group
    pub async fn update_config_group(
        &self,
        config_group_id: u64,
        name: &str,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("update_config_group/{config_group_id}"),
                &(),
                &json!({"name": name}),
            )
            .await
    }

    /// Renames a configuration
    pub async fn update_config(&self, config_id: u64, name: &str) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("update_config/{config_id}"),
                &(),
                &json!({"name": name}),
            )
            .await
    }

    /// Deletes a configuration group and its configurations
    pub async fn delete_config_group(&self, config_group_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_config_group/{config_group_id}"), &(), &())
            .await
    }

    /// Deletes a configuration
    pub async fn delete_config(&self, config_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_config/{config_id}"), &(), &())
            .await
    }
}
