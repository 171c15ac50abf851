/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
//! JSON bodies for `add_*` and `update_*` endpoints
//!
//! Required values are positional arguments of the endpoint methods; these
//! structs hold the optional ones. Unset fields are left out of the body and
//! `custom` is merged in verbatim, which is how `custom_*` case and result
//! fields are sent.

use crate::impl_custom_fields;
use crate::model::utils::timestamp_option;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Optional fields of `add_case`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddCase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<u64>,
    /// Estimate, e.g. `30s` or `1m 45s`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,
    /// References, comma separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    /// Label titles or IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
    /// Custom case fields
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `update_case` and `update_cases`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateCase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Moves the case (TestRail 6.5.2 and later)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<Value>>,
    /// Custom case fields
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Optional fields of `add_case_field`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddCaseField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Use the field for every template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,
    /// Templates using the field when `include_all` is off
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_ids: Option<Vec<u64>>,
    /// Context and options objects, one per project scope
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configs: Option<Vec<Value>>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Optional fields of `add_milestone`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddMilestone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub due_on: Option<DateTime<Utc>>,
    /// Parent milestone, making this one a sub-milestone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub start_on: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `update_milestone`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateMilestone {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub due_on: Option<DateTime<Utc>>,
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub start_on: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_started: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Optional fields of `add_plan`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddPlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    /// Plan entries, see [`AddPlanEntry`]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Value>>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `update_plan`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdatePlan {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<Value>>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Optional fields of `add_plan_entry`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddPlanEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    /// One run per configuration combination
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<Vec<Value>>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `update_plan_entry`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdatePlanEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `add_run_to_plan_entry` and `update_run_in_plan_entry`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RunInPlanEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Optional fields of `add_project`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_announcement: Option<bool>,
    /// 1 single suite, 2 single suite with baselines, 3 multiple suites
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_mode: Option<u8>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `update_project`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateProject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub announcement: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_announcement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of one test result
///
/// Used directly by `add_result` and `add_result_for_case`, and as list
/// items (with `test_id` or `case_id` in `custom`) by `add_results*`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Time spent, e.g. `30s` or `1m 45s`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed: Option<String>,
    /// Defect IDs, comma separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<u64>,
    /// Custom result fields such as `custom_step_results`
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `add_run`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignedto_id: Option<u64>,
    /// Include every case of the suite (default on the server)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `update_run`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateRun {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_all: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case_ids: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Optional fields of `add_section`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AddSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `update_section`, `update_suite` and similar name/description pairs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateNamed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `update_shared_step`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateSharedStep {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Steps as `{"content", "additional_info", "expected", "refs"}` objects
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_steps_separated: Option<Vec<Value>>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// One variable value in a dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DatasetVariable {
    /// Variable name
    pub name: String,
    /// Value for this dataset
    pub value: String,
}

/// Fields of `update_dataset`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateDataset {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Vec<DatasetVariable>>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Fields of `update_group`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UpdateGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Replaces the member list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_ids: Option<Vec<u64>>,
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

impl_custom_fields!(
    AddCase,
    UpdateCase,
    AddCaseField,
    AddMilestone,
    UpdateMilestone,
    AddPlan,
    UpdatePlan,
    AddPlanEntry,
    UpdatePlanEntry,
    RunInPlanEntry,
    AddProject,
    UpdateProject,
    AddResult,
    AddRun,
    UpdateRun,
    AddSection,
    UpdateNamed,
    UpdateSharedStep,
    UpdateDataset,
    UpdateGroup
);
