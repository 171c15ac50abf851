/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Pagination helper for offset-paged listings
pub mod bulk;
/// Query filters for listing endpoints
pub mod filters;
/// HTTP request utilities with query normalization and retry
pub mod http;
/// Request bodies for API calls
pub mod requests;
/// Retry configuration for HTTP requests
pub mod retry;
/// Timestamp and ID helpers
pub mod utils;
