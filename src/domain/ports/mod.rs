use crate::domain::models::{
    appointment::{Appointment, AppointmentFilter, BookedSlot},
    profile::Profile,
    service::Service,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};

#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    async fn create(&self, appointment: &Appointment) -> Result<Appointment, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Appointment>, AppError>;
    async fn list(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>, AppError>;
    /// Non-cancelled appointments on `date` held by active barbers, joined with their service duration.
    /// Aggregate occupancy must come from the same roster as `count_active_barbers`.
    async fn list_booked_slots(&self, date: NaiveDate, barber_id: Option<&str>) -> Result<Vec<BookedSlot>, AppError>;
    async fn update_status(&self, id: &str, status: &str) -> Result<Appointment, AppError>;
}

#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn create(&self, service: &Service) -> Result<Service, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Service>, AppError>;
    async fn list_active(&self) -> Result<Vec<Service>, AppError>;
    async fn update(&self, service: &Service) -> Result<Service, AppError>;
    async fn deactivate(&self, id: &str) -> Result<(), AppError>;
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn create(&self, profile: &Profile) -> Result<Profile, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Profile>, AppError>;
    async fn list_active_barbers(&self) -> Result<Vec<Profile>, AppError>;
    async fn count_active_barbers(&self) -> Result<i64, AppError>;
    async fn deactivate(&self, id: &str) -> Result<(), AppError>;
}

/// Source of "now" in the shop's local time.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}
