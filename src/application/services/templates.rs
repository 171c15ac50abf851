/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::session::Session;
use serde_json::Value;

/// Template endpoints
#[derive(Debug, Clone, Copy)]
pub struct Templates<'a> {
    session: &'a Session,
}

impl<'a> Templates<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the field layouts available for a project
    pub async fn get_templates(&self, project_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_templates/{project_id}"), &())
            .await
    }
}
