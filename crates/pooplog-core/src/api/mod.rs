//! REST API client module for the pooplog backend.
//!
//! This module provides the `ApiClient` for communicating with the dog and
//! poop-log endpoints. Requests carry a bearer token issued by the external
//! identity provider.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
