/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::session::Session;
use serde_json::Value;

/// Result field endpoints
#[derive(Debug, Clone, Copy)]
pub struct ResultFields<'a> {
    session: &'a Session,
}

impl<'a> ResultFields<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the available test result custom fields
    pub async fn get_result_fields(&self) -> TestRailResult<Option<Value>> {
        self.session.get("get_result_fields", &()).await
    }
}
