/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # TestRail Client Prelude
//!
//! Imports the types needed for most TestRail API interactions in one line.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use testrail_client::prelude::*;
//!
//! # fn run() -> Result<(), AppError> {
//! setup_logger();
//! let api = TestRailApi::builder()
//!     .url("https://example.testrail.com")
//!     .email("user@example.com")
//!     .password("api-key")
//!     .exc_iterations(5)
//!     .build()?;
//! # let _ = api;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the TestRail API client
pub use crate::application::config::{Config, Credentials, SessionConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::{AppError, TestRailResult};

// ============================================================================
// SESSION AND CLIENT
// ============================================================================

/// Endpoint catalogue
pub use crate::application::client::TestRailApi;

/// Endpoint categories
pub use crate::application::services::{
    Attachments, CaseFields, CaseTypes, Cases, Configurations, Datasets, Groups, Labels,
    Milestones, Plans, Priorities, Projects, Reports, ResultFields, Results, Roles, Runs,
    Sections, SharedSteps, Statuses, Suites, Templates, Tests, Users, Variables,
};

/// Transport and response handling
pub use crate::session::{DefaultResponseHandler, ResponseHandler, Session, SessionBuilder};

/// Retry policy
pub use crate::model::retry::{RetryConfig, RetryPredicate, retry_on_connect, retry_on_timeout};

/// Pagination helper
pub use crate::model::bulk::fetch_all;

// ============================================================================
// REQUEST MODELS
// ============================================================================

/// Query filters for listing endpoints
pub use crate::model::filters::*;

/// Request bodies
pub use crate::model::requests::*;

/// Timestamp helpers
pub use crate::model::utils::{join_ids, timestamp_value, to_unix_timestamp};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging setup
pub use crate::utils::logger::setup_logger;

/// Constants
pub use crate::constants::*;

// ============================================================================
// EXTERNAL DEPENDENCIES
// ============================================================================

/// Async trait support
pub use async_trait::async_trait;

/// Date and time handling
pub use chrono::{DateTime, Utc};

/// JSON values
pub use serde_json::{Value, json};

/// Logging macros
pub use tracing::{debug, error, info, warn};
