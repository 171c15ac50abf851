/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::services::{Soft, body_with};
use crate::error::TestRailResult;
use crate::model::filters::Page;
use crate::model::requests::UpdateNamed;
use crate::session::Session;
use serde_json::{Value, json};

/// Test suite endpoints
#[derive(Debug, Clone, Copy)]
pub struct Suites<'a> {
    session: &'a Session,
}

impl<'a> Suites<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a test suite
    pub async fn get_suite(&self, suite_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_suite/{suite_id}"), &())
            .await
    }

    /// Returns the test suites of a project
    pub async fn get_suites(&self, project_id: u64, page: &Page) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_suites/{project_id}"), page)
            .await
    }

    /// Creates a test suite
    pub async fn add_suite(
        &self,
        project_id: u64,
        name: &str,
        description: Option<&str>,
    ) -> TestRailResult<Option<Value>> {
        let fields = UpdateNamed {
            description: description.map(str::to_string),
            ..Default::default()
        };
        let body = body_with(&fields, [("name", json!(name))])?;
        self.session
            .post(&format!("add_suite/{project_id}"), &(), &body)
            .await
    }

    /// Renames or redescribes a test suite
    pub async fn update_suite(&self, suite_id: u64, fields: &UpdateNamed) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_suite/{suite_id}"), &(), fields)
            .await
    }

    /// Deletes a test suite with its cases; with `soft` nothing is deleted
    pub async fn delete_suite(&self, suite_id: u64, soft: bool) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_suite/{suite_id}"), &Soft { soft }, &())
            .await
    }
}
