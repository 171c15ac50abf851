/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::session::Session;
use serde_json::Value;

/// Priority endpoints
#[derive(Debug, Clone, Copy)]
pub struct Priorities<'a> {
    session: &'a Session,
}

impl<'a> Priorities<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the available priorities
    pub async fn get_priorities(&self) -> TestRailResult<Option<Value>> {
        self.session.get("get_priorities", &()).await
    }
}
