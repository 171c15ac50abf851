/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::session::Session;
use serde_json::{Value, json};

/// User endpoints
#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    session: &'a Session,
}

impl<'a> Users<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a user
    pub async fn get_user(&self, user_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_user/{user_id}"), &())
            .await
    }

    /// Returns the user the session is authenticated as
    pub async fn get_current_user(&self, user_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_current_user/{user_id}"), &())
            .await
    }

    /// Looks a user up by email address
    pub async fn get_user_by_email(&self, email: &str) -> TestRailResult<Option<Value>> {
        self.session
            .get("get_user_by_email", &json!({"email": email}))
            .await
    }

    /// Returns the users of a project, or every user when no project is given
    ///
    /// Without a project ID the call needs administrator rights.
    pub async fn get_users(&self, project_id: Option<u64>) -> TestRailResult<Option<Value>> {
        let endpoint = match project_id {
            Some(project_id) => format!("get_users/{project_id}"),
            None => "get_users".to_string(),
        };
        self.session.get(&endpoint, &()).await
    }
}
