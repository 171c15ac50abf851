/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
//! Endpoint categories
//!
//! Each category is a `Copy` view borrowing the session of a
//! [`crate::TestRailApi`]. Methods map one-to-one onto TestRail endpoints and
//! return the decoded JSON, or `None` when the session suppresses errors.

/// Attachment upload, listing and download
pub mod attachments;
/// Case field definitions
pub mod case_fields;
/// Case types
pub mod case_types;
/// Test cases
pub mod cases;
/// Configuration groups and configurations
pub mod configurations;
/// Datasets
pub mod datasets;
/// User groups
pub mod groups;
/// Labels
pub mod labels;
/// Milestones
pub mod milestones;
/// Test plans and plan entries
pub mod plans;
/// Priorities
pub mod priorities;
/// Projects
pub mod projects;
/// Reports
pub mod reports;
/// Result field definitions
pub mod result_fields;
/// Test results
pub mod results;
/// User roles
pub mod roles;
/// Test runs
pub mod runs;
/// Sections
pub mod sections;
/// Shared steps
pub mod shared_steps;
/// Result and case statuses
pub mod statuses;
/// Test suites
pub mod suites;
/// Templates
pub mod templates;
/// Users
pub mod users;
/// Variables
pub mod variables;

pub use attachments::Attachments;
pub use case_fields::CaseFields;
pub use case_types::CaseTypes;
pub use cases::Cases;
pub use configurations::Configurations;
pub use datasets::Datasets;
pub use groups::Groups;
pub use labels::Labels;
pub use milestones::Milestones;
pub use plans::Plans;
pub use priorities::Priorities;
pub use projects::Projects;
pub use reports::Reports;
pub use result_fields::ResultFields;
pub use results::Results;
pub use roles::Roles;
pub use runs::Runs;
pub use sections::Sections;
pub use shared_steps::SharedSteps;
pub use statuses::Statuses;
pub use suites::Suites;
pub use templates::Templates;
pub use tests::Tests;
pub use users::Users;
pub use variables::Variables;

use crate::error::{AppError, TestRailResult};
use serde::Serialize;
use serde_json::{Map, Value};

/// Serializes optional fields and adds the required ones next to them
///
/// Required fields win over a `custom` entry with the same key.
pub(crate) fn body_with<B, I>(fields: &B, required: I) -> TestRailResult<Value>
where
    B: Serialize + ?Sized,
    I: IntoIterator<Item = (&'static str, Value)>,
{
    let mut body = match serde_json::to_value(fields)? {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        other => {
            return Err(AppError::InvalidInput(format!(
                "request fields must be a map, got {other}"
            )));
        }
    };
    for (key, value) in required {
        body.insert(key.to_string(), value);
    }
    Ok(Value::Object(body))
}

/// Query carrying only the `soft` flag of delete endpoints
#[derive(Serialize)]
pub(crate) struct Soft {
    pub soft: bool,
}
