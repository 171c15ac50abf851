/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::services::{Soft, body_with};
use crate::error::TestRailResult;
use crate::model::bulk::fetch_all;
use crate::model::filters::{GetCases, Page, Paged};
use crate::model::requests::{AddCase, UpdateCase};
use crate::model::utils::join_ids;
use crate::session::Session;
use serde::Serialize;
use serde_json::{Value, json};
use tracing::{debug, info};

/// Test case endpoints
#[derive(Debug, Clone, Copy)]
pub struct Cases<'a> {
    session: &'a Session,
}

#[derive(Serialize)]
struct DeleteCasesQuery {
    project_id: u64,
    soft: bool,
}

impl<'a> Cases<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns an existing test case
    pub async fn get_case(&self, case_id: u64) -> TestRailResult<Option<Value>> {
        self.session.get(&format!("get_case/{case_id}"), &()).await
    }

    /// Returns one page of test cases of a project
    pub async fn get_cases(
        &self,
        project_id: u64,
        filter: &GetCases,
    ) -> TestRailResult<Option<Value>> {
        debug!("Getting cases for project {}", project_id);
        self.session
            .get(&format!("get_cases/{project_id}"), filter)
            .await
    }

    /// Returns every test case of a project matching `filter`
    pub async fn get_cases_bulk(
        &self,
        project_id: u64,
        filter: &GetCases,
    ) -> TestRailResult<Vec<Value>> {
        let cases = fetch_all("cases", |limit, offset| {
            let page = filter.paged(limit, offset);
            async move { self.get_cases(project_id, &page).await }
        })
        .await?;
        info!("Fetched {} cases for project {}", cases.len(), project_id);
        Ok(cases)
    }

    /// Returns one page of the edit history of a test case
    pub async fn get_history_for_case(
        &self,
        case_id: u64,
        page: &Page,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_history_for_case/{case_id}"), page)
            .await
    }

    /// Returns the full edit history of a test case
    pub async fn get_history_for_case_bulk(&self, case_id: u64) -> TestRailResult<Vec<Value>> {
        fetch_all("history", |limit, offset| async move {
            self.get_history_for_case(case_id, &Page::new(limit, offset))
                .await
        })
        .await
    }

    /// Creates a test case in a section
    pub async fn add_case(
        &self,
        section_id: u64,
        title: &str,
        fields: &AddCase,
    ) -> TestRailResult<Option<Value>> {
        let body = body_with(fields, [("title", json!(title))])?;
        self.session
            .post(&format!("add_case/{section_id}"), &(), &body)
            .await
    }

    /// Copies test cases into another section
    pub async fn copy_cases_to_section(
        &self,
        section_id: u64,
        case_ids: &[u64],
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("copy_cases_to_section/{section_id}"),
                &(),
                &json!({"case_ids": join_ids(case_ids)}),
            )
            .await
    }

    /// Updates a test case; only the set fields change
    pub async fn update_case(
        &self,
        case_id: u64,
        fields: &UpdateCase,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_case/{case_id}"), &(), fields)
            .await
    }

    /// Applies the same field values to several test cases of a suite
    pub async fn update_cases(
        &self,
        case_ids: &[u64],
        suite_id: u64,
        fields: &UpdateCase,
    ) -> TestRailResult<Option<Value>> {
        let body = body_with(fields, [("case_ids", json!(case_ids))])?;
        self.session
            .post(&format!("update_cases/{suite_id}"), &(), &body)
            .await
    }

    /// Moves test cases into another section and suite
    pub async fn move_cases_to_section(
        &self,
        section_id: u64,
        suite_id: u64,
        case_ids: &[u64],
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("move_cases_to_section/{section_id}"),
                &(),
                &json!({"suite_id": suite_id, "case_ids": join_ids(case_ids)}),
            )
            .await
    }

    /// Deletes a test case; with `soft` the server only reports what would be deleted
    pub async fn delete_case(&self, case_id: u64, soft: bool) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_case/{case_id}"), &Soft { soft }, &())
            .await
    }

    /// Deletes several test cases of a project, optionally scoped to a suite
    pub async fn delete_cases(
        &self,
        project_id: u64,
        case_ids: &[u64],
        suite_id: Option<u64>,
        soft: bool,
    ) -> TestRailResult<Option<Value>> {
        let endpoint = match suite_id {
            Some(suite_id) => format!("delete_cases/{suite_id}"),
            None => "delete_cases".to_string(),
        };
        self.session
            .post(
                &endpoint,
                &DeleteCasesQuery { project_id, soft },
                &json!({"case_ids": case_ids}),
            )
            .await
    }
}
