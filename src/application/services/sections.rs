/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::services::{Soft, body_with};
use crate::error::TestRailResult;
use crate::model::bulk::fetch_all;
use crate::model::filters::{GetSections, Paged};
use crate::model::requests::{AddSection, UpdateNamed};
use crate::session::Session;
use serde_json::{Value, json};

/// Section endpoints
#[derive(Debug, Clone, Copy)]
pub struct Sections<'a> {
    session: &'a Session,
}

impl<'a> Sections<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Returns a section
    pub async fn get_section(&self, section_id: u64) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_section/{section_id}"), &())
            .await
    }

    /// Returns one page of the sections of a project and suite
    pub async fn get_sections(
        &self,
        project_id: u64,
        filter: &GetSections,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .get(&format!("get_sections/{project_id}"), filter)
            .await
    }

    /// Returns every section of a project and suite
    pub async fn get_sections_bulk(
        &self,
        project_id: u64,
        filter: &GetSections,
    ) -> TestRailResult<Vec<Value>> {
        fetch_all("sections", |limit, offset| {
            let page = filter.paged(limit, offset);
            async move { self.get_sections(project_id, &page).await }
        })
        .await
    }

    /// Creates a section
    pub async fn add_section(
        &self,
        project_id: u64,
        name: &str,
        fields: &AddSection,
    ) -> TestRailResult<Option<Value>> {
        let body = body_with(fields, [("name", json!(name))])?;
        self.session
            .post(&format!("add_section/{project_id}"), &(), &body)
            .await
    }

    /// Moves a section under another parent and after a sibling
    ///
    /// `None` for `parent_id` moves it to the root; `None` for `after_id`
    /// makes it the first child. Both keys are always sent.
    pub async fn move_section(
        &self,
        section_id: u64,
        parent_id: Option<u64>,
        after_id: Option<u64>,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(
                &format!("move_section/{section_id}"),
                &(),
                &json!({"parent_id": parent_id, "after_id": after_id}),
            )
            .await
    }

    /// Renames or redescribes a section
    pub async fn update_section(
        &self,
        section_id: u64,
        fields: &UpdateNamed,
    ) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("update_section/{section_id}"), &(), fields)
            .await
    }

    /// Deletes a section with its cases; with `soft` nothing is deleted
    pub async fn delete_section(&self, section_id: u64, soft: bool) -> TestRailResult<Option<Value>> {
        self.session
            .post(&format!("delete_section/{section_id}"), &Soft { soft }, &())
            .await
    }
}
