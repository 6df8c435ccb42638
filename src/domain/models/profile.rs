use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};
use sqlx::FromRow;

pub const ROLE_CUSTOMER: &str = "customer";
pub const ROLE_BARBER: &str = "barber";
pub const ROLE_OWNER: &str = "owner";

pub const ROLES: [&str; 3] = [ROLE_CUSTOMER, ROLE_BARBER, ROLE_OWNER];

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Profile {
    pub id: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(full_name: String, phone: Option<String>, role: &str) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            full_name,
            phone,
            role: role.to_string(),
            active: true,
            created_at: Utc::now(),
        }
    }

    pub fn is_active_barber(&self) -> bool {
        self.active && self.role == ROLE_BARBER
    }

    pub fn is_active_customer(&self) -> bool {
        self.active && self.role == ROLE_CUSTOMER
    }
}
