/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # TestRail Client
//!
//! An async client for the [TestRail](https://www.gurock.com/testrail/docs/api)
//! REST API (`/index.php?/api/v2/...`).
//!
//! The crate is organised in three layers:
//!
//! - [`session`]: the transport. It owns the credentials, the HTTP connection
//!   pool, the retry loop (HTTP 429 and caller-selected transport errors) and
//!   response decoding.
//! - [`model::bulk`]: the pagination helper that concatenates offset-paged
//!   endpoints into a single list.
//! - [`application`]: the endpoint catalogue. [`TestRailApi`] exposes one
//!   accessor per category (`cases()`, `runs()`, ...), each a thin view over
//!   the same session.
//!
//! ## Example
//!
//! ```rust,no_run
//! use testrail_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! let api = TestRailApi::builder()
//!     .url("https://example.testrail.com/")
//!     .email("example@mail.com")
//!     .password("password")
//!     .build()?;
//!
//! let milestone = api
//!     .milestones()
//!     .add_milestone(1, "New milestone", &AddMilestone::default())
//!     .await?;
//!
//! let run = api
//!     .runs()
//!     .add_run(1, &AddRun {
//!         suite_id: Some(2),
//!         name: Some("My test run".to_string()),
//!         include_all: Some(true),
//!         ..Default::default()
//!     })
//!     .await?;
//! # let _ = (milestone, run);
//! # Ok(())
//! # }
//! ```
//!
//! Credentials not given to the builder are read from `TESTRAIL_URL`,
//! `TESTRAIL_EMAIL` and `TESTRAIL_PASSWORD`.

/// Endpoint catalogue and configuration
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Request models, query normalization, retry policy and pagination
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// HTTP session and response handling
pub mod session;
/// Environment and logging helpers
pub mod utils;

pub use application::client::TestRailApi;
pub use error::{AppError, TestRailResult};
pub use session::Session;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
pub fn version() -> &'static str {
    VERSION
}
