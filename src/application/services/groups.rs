/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::model::filters::Page;
use crate::model::requests::UpdateGroup;
use crate::session::Session;
use serde_json::{Value, json};

/// User group endpoints
#[derive(Debug, Clone, Copy)]
pub struct Groups<'a> {
    session: &'a Session,
}

impl<'a> Groups<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a group with its member IDs
    pub async fn get_group(&self, group_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_group/{group_id}"), &())
            .await
    }

    /// Returns one page of groups
    pub async fn get_groups(&self, page: &Page) -> TestRailResult<Option<Value>> {
        self.session.get("get_groups", page).await
    }

    /// Creates a group
    pub async fn add_group(&self, name: &str, user_ids: &[u64]) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                "add_group",
                &(),
                &json!({"name": name, "user_ids": user_ids}),
            )
            .await
    }

    /// Renames a group or replaces its members
    pub async fn update_group(
        &self,
        group_id: u64,
        fields: &UpdateGroup,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_group/{group_id}"), &(), fields)
            .await
    }

    /// Deletes a group
    pub async fn delete_group(&self, group_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_group/{group_id}"), &(), &())
            .await
    }
}
