/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::services::body_with;
use crate::error::TestRailResult;
use crate::model::requests::AddCaseField;
use crate::session::Session;
use serde_json::{Value, json};

/// Case field endpoints
#[derive(Debug, Clone, Copy)]
pub struct CaseFields<'a> {
    session: &'a Session,
}

impl<'a> CaseFields<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns the available test case custom fields
    pub async fn get_case_fields(&self) -> TestRailResult<Option<Value>> {
        self.session.get("get_case_fields", &()).await
    }

    /// Creates a custom case field
    ///
    /// `field_type` is the type name or ID, e.g. `String` or `12` for multi-select.
    /// `name` is the system name without the `custom_` prefix.
    pub async fn add_case_field(
        &self,
        field_type: &str,
        name: &str,
        label: &str,
        fields: &AddCaseField,
    ) -> TestRailResult<Option<Value>> {
        let body = body_with(
            fields,
            [
                ("type", json!(field_type)),
                ("name", json!(name)),
                ("label", json!(label)),
            ],
        )?;
        self.session.post("add_case_field", &(), &body).await
    }
}
