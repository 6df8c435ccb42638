use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_CONFIRMED: &str = "confirmed";
pub const STATUS_COMPLETED: &str = "completed";
pub const STATUS_CANCELLED: &str = "cancelled";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => STATUS_PENDING,
            AppointmentStatus::Confirmed => STATUS_CONFIRMED,
            AppointmentStatus::Completed => STATUS_COMPLETED,
            AppointmentStatus::Cancelled => STATUS_CANCELLED,
        }
    }

    /// Cancelled is terminal; completed work cannot be cancelled afterwards.
    pub fn can_transition_to(&self, next: AppointmentStatus) -> bool {
        match (self, next) {
            (AppointmentStatus::Cancelled, _) => false,
            (AppointmentStatus::Completed, AppointmentStatus::Cancelled) => false,
            _ => true,
        }
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            STATUS_PENDING => Ok(AppointmentStatus::Pending),
            STATUS_CONFIRMED => Ok(AppointmentStatus::Confirmed),
            STATUS_COMPLETED => Ok(AppointmentStatus::Completed),
            STATUS_CANCELLED => Ok(AppointmentStatus::Cancelled),
            other => Err(format!("Unknown appointment status: {}", other)),
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Appointment {
    pub id: String,
    pub customer_id: String,
    pub barber_id: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub status: String,
    pub notes: Option<String>,
    pub payment_reference: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewAppointmentParams {
    pub customer_id: String,
    pub barber_id: String,
    pub service_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub notes: Option<String>,
    pub payment_reference: Option<String>,
}

impl Appointment {
    pub fn new(params: NewAppointmentParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            customer_id: params.customer_id,
            barber_id: params.barber_id,
            service_id: params.service_id,
            date: params.date,
            time: params.time,
            status: STATUS_PENDING.to_string(),
            notes: params.notes,
            payment_reference: params.payment_reference,
            created_at: Utc::now(),
        }
    }
}

/// The slice of a stored appointment the occupancy calculation needs,
/// joined with its service duration.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, Eq)]
pub struct BookedSlot {
    pub time: String,
    pub barber_id: String,
    pub service_duration_minutes: Option<i32>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppointmentFilter {
    pub date: Option<NaiveDate>,
    pub barber_id: Option<String>,
    pub customer_id: Option<String>,
}
