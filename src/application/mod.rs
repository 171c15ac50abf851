/// API client exposing the endpoint categories
pub mod client;
/// Application configuration module
pub mod config;
/// Endpoint categories
pub mod services;
