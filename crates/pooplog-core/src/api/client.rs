//! HTTP client for the pooplog REST API.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests against the dog and poop-log endpoints. Authentication tokens
//! are issued by the external identity provider; the client only attaches
//! an already-issued bearer token.

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::models::{
    Dog, DogResponse, DogsResponse, NewDog, NewPoopLog, PoopLog, PoopLogQuery, PoopResponse,
    PoopsResponse,
};

use super::ApiError;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the pooplog backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn apply_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.token {
            Some(ref token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body))
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self
            .apply_auth(self.client.get(&url))
            .query(query)
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| ApiError::InvalidResponse(format!("{} from {}", e, url)))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let response = self
            .apply_auth(self.client.post(&url))
            .json(body)
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("{} from {}", e, url)))
    }

    async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        debug!(url = %url, "PUT");
        let response = self
            .apply_auth(self.client.put(&url))
            .json(body)
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        let text = response.text().await?;
        serde_json::from_str(&text)
            .map_err(|e| ApiError::InvalidResponse(format!("{} from {}", e, url)))
    }

    async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let url = self.url(path);
        debug!(url = %url, "DELETE");
        let response = self.apply_auth(self.client.delete(&url)).send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    // ===== Dogs =====

    /// Fetch all dogs for the authenticated user, in creation order.
    pub async fn list_dogs(&self) -> Result<Vec<Dog>, ApiError> {
        let response: DogsResponse = self.get("/api/dogs", &[]).await?;
        Ok(response.dogs)
    }

    pub async fn create_dog(&self, dog: &NewDog) -> Result<Dog, ApiError> {
        let response: DogResponse = self.post("/api/dogs", dog).await?;
        Ok(response.dog)
    }

    pub async fn update_dog(&self, id: &str, dog: &NewDog) -> Result<Dog, ApiError> {
        let response: DogResponse = self.put(&Self::dog_path(id), dog).await?;
        Ok(response.dog)
    }

    pub async fn delete_dog(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&Self::dog_path(id)).await
    }

    // ===== Poop logs =====

    /// Fetch the user's poop logs, newest first. Logs are never cached -
    /// every call goes to the API.
    pub async fn list_poops(&self, query: &PoopLogQuery) -> Result<Vec<PoopLog>, ApiError> {
        let pairs = query.to_query_pairs();
        let response: PoopsResponse = self.get("/api/poops", &pairs).await?;
        Ok(response.poops)
    }

    pub async fn create_poop(&self, log: &NewPoopLog) -> Result<PoopLog, ApiError> {
        let response: PoopResponse = self.post("/api/poops", log).await?;
        Ok(response.poop)
    }

    pub async fn delete_poop(&self, id: &str) -> Result<(), ApiError> {
        self.delete(&Self::poop_path(id)).await
    }

    fn poop_path(id: &str) -> String {
        format!("/api/poops/{}", id)
    }

    fn dog_path(id: &str) -> String {
        format!("/api/dogs/{}", id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://localhost:3000/").unwrap();
        assert_eq!(client.url("/api/dogs"), "http://localhost:3000/api/dogs");
    }

    #[test]
    fn test_entry_paths_target_single_resource() {
        assert_eq!(ApiClient::dog_path("d1"), "/api/dogs/d1");
        assert_eq!(ApiClient::poop_path("p1"), "/api/poops/p1");
    }

    #[test]
    fn test_with_token_keeps_base_url() {
        let client = ApiClient::new("http://localhost:3000").unwrap();
        let authed = client.with_token("tok".into());
        assert_eq!(authed.url("/api/poops"), "http://localhost:3000/api/poops");
        assert_eq!(authed.token.as_deref(), Some("tok"));
    }
}
