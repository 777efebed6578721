//! Cached dog-profile loading.
//!
//! Dog profiles change rarely (a rename or a new photo), so they are the one
//! data type worth caching: `DogStore` memoizes the list per user for 30 days
//! and invalidates the moment any mutation goes through. Poop logs have no
//! such store and fetch unconditionally on every load.

use tracing::debug;

use crate::api::{ApiClient, ApiError};
use crate::cache::{keys, TimedCache};
use crate::models::{Dog, NewDog};

/// How long a fetched dog list stays cached: 30 days.
/// Mutations invalidate immediately, so staleness only matters for writes
/// made outside this client (e.g. from another device).
pub const DOGS_CACHE_TTL_MINUTES: i64 = 30 * 24 * 60;

/// The dog endpoints a `DogStore` needs. `ApiClient` is the real
/// implementation; tests substitute a stub.
#[allow(async_fn_in_trait)]
pub trait DogsApi {
    async fn list_dogs(&self) -> Result<Vec<Dog>, ApiError>;
    async fn create_dog(&self, dog: &NewDog) -> Result<Dog, ApiError>;
    async fn update_dog(&self, id: &str, dog: &NewDog) -> Result<Dog, ApiError>;
    async fn delete_dog(&self, id: &str) -> Result<(), ApiError>;
}

impl DogsApi for ApiClient {
    async fn list_dogs(&self) -> Result<Vec<Dog>, ApiError> {
        ApiClient::list_dogs(self).await
    }

    async fn create_dog(&self, dog: &NewDog) -> Result<Dog, ApiError> {
        ApiClient::create_dog(self, dog).await
    }

    async fn update_dog(&self, id: &str, dog: &NewDog) -> Result<Dog, ApiError> {
        ApiClient::update_dog(self, id, dog).await
    }

    async fn delete_dog(&self, id: &str) -> Result<(), ApiError> {
        ApiClient::delete_dog(self, id).await
    }
}

/// Loads one user's dog profiles through the cache.
///
/// Reads consult the cache first and only hit the API on a miss; every
/// successful mutation invalidates the user's entry so the next read
/// refetches fresh data.
pub struct DogStore<A> {
    api: A,
    cache: TimedCache<Vec<Dog>>,
    key: String,
}

impl<A: DogsApi> DogStore<A> {
    pub fn new(api: A, user_id: &str) -> Self {
        Self::with_cache(api, user_id, TimedCache::new())
    }

    /// Create a store over an existing cache (tests inject a manual clock).
    pub fn with_cache(api: A, user_id: &str, cache: TimedCache<Vec<Dog>>) -> Self {
        Self {
            api,
            cache,
            key: keys::dogs_key(user_id),
        }
    }

    /// The user's dogs, in creation order. Served from cache when fresh.
    pub async fn load(&mut self) -> Result<Vec<Dog>, ApiError> {
        if let Some(dogs) = self.cache.get(&self.key) {
            return Ok(dogs);
        }

        let dogs = self.api.list_dogs().await?;
        debug!(key = %self.key, count = dogs.len(), "fetched dogs");
        self.cache
            .set(self.key.clone(), dogs.clone(), DOGS_CACHE_TTL_MINUTES);
        Ok(dogs)
    }

    /// The user's first dog, if any.
    pub async fn primary(&mut self) -> Result<Option<Dog>, ApiError> {
        Ok(self.load().await?.into_iter().next())
    }

    pub async fn add(&mut self, dog: &NewDog) -> Result<Dog, ApiError> {
        let created = self.api.create_dog(dog).await?;
        self.cache.invalidate(&self.key);
        Ok(created)
    }

    pub async fn rename(&mut self, id: &str, dog: &NewDog) -> Result<Dog, ApiError> {
        let updated = self.api.update_dog(id, dog).await?;
        self.cache.invalidate(&self.key);
        Ok(updated)
    }

    pub async fn remove(&mut self, id: &str) -> Result<(), ApiError> {
        self.api.delete_dog(id).await?;
        self.cache.invalidate(&self.key);
        Ok(())
    }

    /// Drop all cached state, e.g. on sign-out.
    pub fn reset(&mut self) {
        self.cache.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================
