/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::session::Session;
use serde_json::Value;

/// Case type endpoints
#[derive(Debug, Clone, Copy)]
pub struct CaseTypes<'a> {
    session: &'a Session,
}

impl<'a> CaseTypes<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the available case types
    pub async fn get_case_types(&self) -> TestRailResult<Option<Value>> {
        self.session.get("get_case_types", &()).await
    }
}
