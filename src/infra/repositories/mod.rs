pub mod sqlite_appointment_repo;
pub mod sqlite_profile_repo;
pub mod sqlite_service_repo;
