/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::model::filters::Page;
use crate::session::Session;
use serde_json::Value;

/// Role endpoints
#[derive(Debug, Clone, Copy)]
pub struct Roles<'a> {
    session: &'a Session,
}

impl<'a> Roles<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the available user roles
    pub async fn get_roles(&self, page: &Page) -> TestRailResult<Option<Value>> {
        self.session.get("get_roles", page).await
    }
}
