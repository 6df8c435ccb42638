use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    /// `None` means the shop never recorded a duration; slot blocking falls back to 30 minutes.
    pub duration_minutes: Option<i32>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Service {
    pub fn new(name: String, description: Option<String>, price_cents: i64, duration_minutes: Option<i32>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name,
            description,
            price_cents,
            duration_minutes,
            active: true,
            created_at: Utc::now(),
        }
    }
}
