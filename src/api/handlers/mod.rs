pub mod appointment;
pub mod health;
pub mod profile;
pub mod service;
pub mod slots;

use chrono::NaiveDate;
use crate::error::AppError;

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Invalid date format (YYYY-MM-DD)".into()))
}

/// Query strings send `barber_id=` when nothing is picked.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}
