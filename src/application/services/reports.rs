/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::session::Session;
use serde_json::Value;
use tracing::info;

/// Report endpoints
#[derive(Debug, Clone, Copy)]
pub struct Reports<'a> {
    session: &'a Session,
}

impl<'a> Reports<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the API-accessible report templates of a project
    pub async fn get_reports(&self, project_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_reports/{project_id}"), &())
            .await
    }

    /// Runs a report template and returns the report URLs
    pub async fn run_report(&self, report_template_id: u64) -> TestRailResult<Option<Value>> {
        info!("Running report template {}", report_template_id);
        self.session
            .get(&format!("run_report/{report_template_id}"), &())
            .await
    }
}
