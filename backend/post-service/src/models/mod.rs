/// Data models for post-service
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Post model - the one persisted entity
///
/// Serialized in camelCase to match the wire shape the client expects.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
