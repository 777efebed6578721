//! In-memory caching module for slowly-changing per-user data.
//!
//! This module provides the `TimedCache` used to avoid redundant API fetches.
//! Each entry carries its own TTL; expired entries read as absent. Writers
//! that mutate the underlying resource invalidate the matching key so the
//! next read refetches.
//!
//! Only dog profiles are cached today (30-day TTL); poop logs and settings
//! fetch unconditionally on every load.

pub mod keys;
pub mod timed;

pub use timed::{Clock, TimedCache};
