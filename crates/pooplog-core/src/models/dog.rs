use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A dog profile. Each account registers one dog in practice, but the API
/// returns a list ordered by creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating or renaming a dog.
#[derive(Debug, Clone, Serialize)]
pub struct NewDog {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
}

// Response envelopes, matching the API's JSON shape.

#[derive(Debug, Clone, Deserialize)]
pub struct DogsResponse {
    #[serde(default)]
    pub dogs: Vec<Dog>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DogResponse {
    pub dog: Dog,
}
