/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
//! Query filters for listing endpoints
//!
//! Every field is optional and omitted when unset. Lists are sent
//! comma-joined, booleans as `0`/`1` and datetimes as UNIX timestamps.
//! `custom` carries any extra query key the server understands.

use crate::impl_custom_fields;
use crate::model::utils::timestamp_option;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Plain `limit`/`offset` pair for paginated listings without other filters
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of items (TestRail caps it at 250)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Index of the first item
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl Page {
    /// Creates a page selector
    pub fn new(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }
}

/// Filters for `get_cases`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GetCases {
    /// Suite ID, required unless the project runs in single-suite mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<u64>,
    /// Only cases created after this date
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
    /// Only cases created before this date
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,
    /// Creator user IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Vec<u64>>,
    /// Case title must contain this string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Label IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_id: Option<Vec<u64>>,
    /// Maximum number of cases
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Index of the first case
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Milestone IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<Vec<u64>>,
    /// Priority IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority_id: Option<Vec<u64>>,
    /// References, comma separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    /// Section ID
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<u64>,
    /// Template IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<Vec<u64>>,
    /// Case type IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_id: Option<Vec<u64>>,
    /// Only cases updated after this date
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,
    /// Only cases updated before this date
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub updated_before: Option<DateTime<Utc>>,
    /// Updater user IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_by: Option<Vec<u64>>,
    /// Extra query parameters
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Filters for `get_milestones`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GetMilestones {
    /// Completed (`true`) or active (`false`) milestones only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    /// Started (`true`) or upcoming (`false`) milestones only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_started: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Extra query parameters
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Filters for `get_plans`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GetPlans {
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,
    /// Creator user IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Vec<u64>>,
    /// Completed (`true`) or active (`false`) plans only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Milestone IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<Vec<u64>>,
    /// Extra query parameters
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Filters for `get_projects`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GetProjects {
    /// Completed (`true`) or active (`false`) projects only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Extra query parameters
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Filters for `get_results`, `get_results_for_case` and `get_results_for_run`
///
/// The creation filters are only honoured by `get_results_for_run`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GetResults {
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,
    /// Creator user IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Vec<u64>>,
    /// Single defect ID, e.g. `TR-1`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defects_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Status IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<Vec<u64>>,
    /// Extra query parameters
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Filters for `get_runs`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GetRuns {
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,
    /// Creator user IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Vec<u64>>,
    /// Completed (`true`) or active (`false`) runs only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Milestone IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestone_id: Option<Vec<u64>>,
    /// Single reference ID, e.g. `TR-a`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs_filter: Option<String>,
    /// Suite IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<Vec<u64>>,
    /// Extra query parameters
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Filters for `get_sections`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GetSections {
    /// Suite ID, required unless the project runs in single-suite mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suite_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Extra query parameters
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Filters for `get_shared_steps`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GetSharedSteps {
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub created_after: Option<DateTime<Utc>>,
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub created_before: Option<DateTime<Utc>>,
    /// Creator user IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub updated_after: Option<DateTime<Utc>>,
    #[serde(with = "timestamp_option", skip_serializing_if = "Option::is_none")]
    pub updated_before: Option<DateTime<Utc>>,
    /// References, comma separated
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refs: Option<String>,
    /// Extra query parameters
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

/// Filters for `get_tests`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GetTests {
    /// Status IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<Vec<u64>>,
    /// Label IDs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_id: Option<Vec<u64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
    /// Extra query parameters
    #[serde(flatten)]
    pub custom: Map<String, Value>,
}

impl_custom_fields!(
    GetCases,
    GetMilestones,
    GetPlans,
    GetProjects,
    GetResults,
    GetRuns,
    GetSections,
    GetSharedSteps,
    GetTests
);

/// Filters that can be moved to another page
pub trait Paged: Clone {
    /// Returns a copy asking for `limit` items starting at `offset`
    fn paged(&self, limit: u32, offset: u32) -> Self;
}

macro_rules! impl_paged {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Paged for $ty {
                fn paged(&self, limit: u32, offset: u32) -> Self {
                    Self {
                        limit: Some(limit),
                        offset: Some(offset),
                        ..self.clone()
                    }
                }
            }
        )+
    };
}

impl_paged!(
    Page,
    GetCases,
    GetMilestones,
    GetPlans,
    GetProjects,
    GetResults,
    GetRuns,
    GetSections,
    GetSharedSteps,
    GetTests
);
