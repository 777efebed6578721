use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single poop log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoopLog {
    pub id: String,
    pub user_id: String,
    pub dog_name: String,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a log entry. `poop_time` backdates the entry;
/// when absent the server stamps it with the current time.
#[derive(Debug, Clone, Serialize)]
pub struct NewPoopLog {
    pub dog_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poop_time: Option<DateTime<Utc>>,
}

/// Optional filters for listing log entries.
#[derive(Debug, Clone, Default)]
pub struct PoopLogQuery {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub dog_name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}

impl PoopLogQuery {
    /// Render the set filters as URL query pairs.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        if let Some(ref dog_name) = self.dog_name {
            pairs.push(("dog_name", dog_name.clone()));
        }
        if let Some(start) = self.start_date {
            pairs.push(("start_date", start.to_rfc3339()));
        }
        if let Some(end) = self.end_date {
            pairs.push(("end_date", end.to_rfc3339()));
        }
        pairs
    }
}

// Response envelopes, matching the API's JSON shape.

#[derive(Debug, Clone, Deserialize)]
pub struct PoopsResponse {
    #[serde(default)]
    pub poops: Vec<PoopLog>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoopResponse {
    pub poop: PoopLog,
}
