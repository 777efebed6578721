//! pooplog core - client library for the pooplog tracking app.
//!
//! Users sign in, register a dog profile, and record timestamped poop logs
//! for that dog. This crate provides the API client, the data models, and
//! the in-memory timed cache that keeps slowly-changing per-user data (dog
//! profiles) from being refetched on every load.

pub mod api;
pub mod cache;
pub mod config;
pub mod dogs;
pub mod models;

pub use api::{ApiClient, ApiError};
pub use cache::TimedCache;
pub use config::Config;
pub use dogs::{DogStore, DogsApi, DOGS_CACHE_TTL_MINUTES};
