/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::error::TestRailResult;
use crate::model::filters::Page;
use crate::session::Session;
use serde_json::{Value, json};

/// Label endpoints
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    session: &'a Session,
}

impl<'a> Labels<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a label
    pub async fn get_label(&self, label_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_label/{label_id}"), &())
            .await
    }

    /// Returns one page of the labels of a project
    pub async fn get_labels(&self, project_id: u64, page: &Page) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_labels/{project_id}"), page)
            .await
    }

    /// Changes the title of a label (at most 20 characters)
    pub async fn update_label(
        &self,
        label_id: u64,
        project_id: u64,
        title: &str,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("update_label/{label_id}"),
                &(),
                &json!({"project_id": project_id, "title": title}),
            )
            .await
    }
}
