/// Session builder
pub mod builder;
/// Session transport
pub mod client;
/// Response handling
pub mod response;

pub use builder::SessionBuilder;
pub use client::Session;
pub use response::{DefaultResponseHandler, ResponseHandler};
