use std::sync::Arc;
use crate::domain::ports::{AppointmentRepository, Clock, ProfileRepository, ServiceRepository};
use crate::domain::services::availability::SlotEngine;
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub appointment_repo: Arc<dyn AppointmentRepository>,
    pub service_repo: Arc<dyn ServiceRepository>,
    pub profile_repo: Arc<dyn ProfileRepository>,
    pub clock: Arc<dyn Clock>,
    pub engine: Arc<SlotEngine>,
}
