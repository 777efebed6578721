//! Data models for pooplog entities.
//!
//! This module contains the data structures exchanged with the pooplog API:
//!
//! - `Dog`: a registered dog profile
//! - `PoopLog`: a single timestamped log entry
//! - Request payloads (`NewDog`, `NewPoopLog`) and response envelopes

pub mod dog;
pub mod poop;

pub use dog::{Dog, DogResponse, DogsResponse, NewDog};
pub use poop::{NewPoopLog, PoopLog, PoopLogQuery, PoopResponse, PoopsResponse};
