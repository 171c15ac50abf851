/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::model::bulk::fetch_all;
use crate::model::filters::Page;
use crate::session::Session;
use serde_json::Value;
use std::fmt::Display;
use std::path::{Path, PathBuf};
use tracing::info;

/// Attachment endpoints
///
/// Uploads are sent as multipart forms; attachment IDs are numbers on older
/// servers and strings on TestRail 7.1 and later, hence `impl Display`.
#[derive(Debug, Clone, Copy)]
pub struct Attachments<'a> {
    session: &'a Session,
}

impl<'a> Attachments<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Uploads a file to a test plan
    pub async fn add_attachment_to_plan(
        &self,
        plan_id: u64,
        path: impl AsRef<Path>,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .attachment_request(&format!("add_attachment_to_plan/{plan_id}"), path)
            .await
    }

    /// Uploads a file to a test plan entry
    pub async fn add_attachment_to_plan_entry(
        &self,
        plan_id: u64,
        entry_id: &str,
        path: impl AsRef<Path>,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .attachment_request(
                &format!("add_attachment_to_plan_entry/{plan_id}/{entry_id}"),
                path,
            )
            .await
    }

    /// Uploads a file to a test result
    pub async fn add_attachment_to_result(
        &self,
        result_id: u64,
        path: impl AsRef<Path>,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .attachment_request(&format!("add_attachment_to_result/{result_id}"), path)
            .await
    }

    /// Uploads a file to a test run
    pub async fn add_attachment_to_run(
        &self,
        run_id: u64,
        path: impl AsRef<Path>,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .attachment_request(&format!("add_attachment_to_run/{run_id}"), path)
            .await
    }

    /// Uploads a file to a test case
    pub async fn add_attachment_to_case(
        &self,
        case_id: u64,
        path: impl AsRef<Path>,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .attachment_request(&format!("add_attachment_to_case/{case_id}"), path)
            .await
    }

    /// Lists the attachments of a test case
    pub async fn get_attachments_for_case(
        &self,
        case_id: u64,
        page: &Page,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_attachments_for_case/{case_id}"), page)
            .await
    }

    /// Lists every attachment of a test case across pages
    pub async fn get_attachments_for_case_bulk(&self, case_id: u64) -> TestRailResult<Vec<Value>> {
        fetch_all("attachments", |limit, offset| async move {
            self.get_attachments_for_case(case_id, &Page::new(limit, offset))
                .await
        })
        .await
    }

    /// Lists the attachments of a test plan
    pub async fn get_attachments_for_plan(
        &self,
        plan_id: u64,
        page: &Page,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_attachments_for_plan/{plan_id}"), page)
            .await
    }

    /// Lists every attachment of a test plan across pages
    pub async fn get_attachments_for_plan_bulk(&self, plan_id: u64) -> TestRailResult<Vec<Value>> {
        fetch_all("attachments", |limit, offset| async move {
            self.get_attachments_for_plan(plan_id, &Page::new(limit, offset))
                .await
        })
        .await
    }

    /// Lists the attachments of a test plan entry
    pub async fn get_attachments_for_plan_entry(
        &self,
        plan_id: u64,
        entry_id: &str,
        page: &Page,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(
                &format!("get_attachments_for_plan_entry/{plan_id}/{entry_id}"),
                page,
            )
            .await
    }

    /// Lists every attachment of a test plan entry across pages
    pub async fn get_attachments_for_plan_entry_bulk(
        &self,
        plan_id: u64,
        entry_id: &str,
    ) -> TestRailResult<Vec<Value>> {
        fetch_all("attachments", |limit, offset| async move {
            self.get_attachments_for_plan_entry(plan_id, entry_id, &Page::new(limit, offset))
                .await
        })
        .await
    }

    /// Lists the attachments of a test run
    pub async fn get_attachments_for_run(
        &self,
        run_id: u64,
        page: &Page,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_attachments_for_run/{run_id}"), page)
            .await
    }

    /// Lists every attachment of a test run across pages
    pub async fn get_attachments_for_run_bulk(&self, run_id: u64) -> TestRailResult<Vec<Value>> {
        fetch_all("attachments", |limit, offset| async move {
            self.get_attachments_for_run(run_id, &Page::new(limit, offset))
                .await
        })
        .await
    }

    /// Lists the attachments of a test's results
    pub async fn get_attachments_for_test(
        &self,
        test_id: u64,
        page: &Page,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_attachments_for_test/{test_id}"), page)
            .await
    }

    /// Lists every attachment of a test across pages
    pub async fn get_attachments_for_test_bulk(&self, test_id: u64) -> TestRailResult<Vec<Value>> {
        fetch_all("attachments", |limit, offset| async move {
            self.get_attachments_for_test(test_id, &Page::new(limit, offset))
                .await
        })
        .await
    }

    /// Downloads an attachment to `path`, returning the path on success
    pub async fn get_attachment(
        &self,
        attachment_id: impl Display,
        path: impl AsRef<Path>,
    ) -> TestRailResult<Option<PathBuf>> {
        let path = path.as_ref();
        info!("Downloading attachment {} to {}", attachment_id, path.display());
        self.session
            .get_attachment(&format!("get_attachment/{attachment_id}"), path)
            .await
    }

    /// Deletes an attachment
    pub async fn delete_attachment(
        &self,
        attachment_id: impl Display,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_attachment/{attachment_id}"), &(), &())
            .await
    }
}
