/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::session::Session;
use serde_json::Value;

/// Status endpoints
#[derive(Debug, Clone, Copy)]
pub struct Statuses<'a> {
    session: &'a Session,
}

impl<'a> Statuses<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the available test statuses, custom ones included
    pub async fn get_statuses(&self) -> TestRailResult<Option<Value>> {
        self.session.get("get_statuses", &()).await
    }

    /// Returns the available case statuses (Enterprise only)
    pub async fn get_case_statuses(&self) -> TestRailResult<Option<Value>> {
        self.session.get("get_case_statuses", &()).await
    }
}
