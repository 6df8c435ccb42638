use axum::{extract::{Path, Query, State}, response::IntoResponse, http::StatusCode, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateAppointmentRequest, ListAppointmentsQuery, UpdateAppointmentStatusRequest};
use crate::api::handlers::{non_empty, parse_date};
use crate::domain::models::appointment::{Appointment, AppointmentFilter, AppointmentStatus, NewAppointmentParams};
use crate::domain::services::availability::resolve_date_index;
use crate::domain::services::time_codec::TimeLabel;
use crate::error::AppError;
use std::sync::Arc;
use tracing::{info, warn};

pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&payload.date)?;
    let start = TimeLabel::parse(&payload.time)
        .ok_or(AppError::Validation("Invalid time format (e.g. 2:30 PM)".into()))?;

    if !state.engine.grid().contains(&start) {
        return Err(AppError::Validation(format!("{} is not a bookable time", start)));
    }

    let service = state.service_repo.find_by_id(&payload.service_id).await?
        .filter(|s| s.active)
        .ok_or(AppError::NotFound("Service not found".into()))?;

    let barber = state.profile_repo.find_by_id(&payload.barber_id).await?
        .filter(|p| p.is_active_barber())
        .ok_or(AppError::NotFound("Barber not found".into()))?;

    let customer = state.profile_repo.find_by_id(&payload.customer_id).await?
        .filter(|p| p.is_active_customer())
        .ok_or(AppError::NotFound("Customer not found".into()))?;

    let now = state.clock.now();
    let dates = state.engine.booking_dates(now.date());
    if resolve_date_index(&dates, date).is_none() {
        return Err(AppError::Validation("Date is outside the booking window".into()));
    }

    info!("create_appointment: Checking {} {} with barber {}", date, start, barber.id);

    let booked = state.appointment_repo.list_booked_slots(date, Some(barber.id.as_str())).await?;
    let available = state.engine.available_slots(&booked, date, Some(barber.id.as_str()), None, now);

    let covered = state.engine.covered_labels(start, service.duration_minutes);
    if let Some(blocked) = covered.iter().find(|label| !available.contains(label)) {
        warn!("Appointment rejected: {} is not available for barber {} on {}", blocked, barber.id, date);
        return Err(AppError::Conflict("Selected time slot is not available".into()));
    }

    let appointment = Appointment::new(NewAppointmentParams {
        customer_id: customer.id,
        barber_id: barber.id,
        service_id: service.id,
        date,
        time: start.to_string(),
        notes: non_empty(payload.notes),
        payment_reference: non_empty(payload.payment_reference),
    });

    let created = state.appointment_repo.create(&appointment).await?;

    info!("Appointment booked: {} on {} at {}", created.id, created.date, created.time);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListAppointmentsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = match non_empty(params.date) {
        Some(raw) => Some(parse_date(&raw)?),
        None => None,
    };

    let filter = AppointmentFilter {
        date,
        barber_id: non_empty(params.barber_id),
        customer_id: non_empty(params.customer_id),
    };

    let appointments = state.appointment_repo.list(&filter).await?;
    Ok(Json(appointments))
}

pub async fn get_appointment(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let appointment = state.appointment_repo.find_by_id(&appointment_id).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;
    Ok(Json(appointment))
}

pub async fn update_appointment_status(
    State(state): State<Arc<AppState>>,
    Path(appointment_id): Path<String>,
    Json(payload): Json<UpdateAppointmentStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let next: AppointmentStatus = payload.status.parse().map_err(AppError::Validation)?;

    let appointment = state.appointment_repo.find_by_id(&appointment_id).await?
        .ok_or(AppError::NotFound("Appointment not found".into()))?;

    let current: AppointmentStatus = appointment.status.parse()
        .map_err(|e: String| AppError::InternalWithMsg(format!("Stored appointment {} has bad status: {}", appointment.id, e)))?;

    if current == next {
        return Ok(Json(appointment));
    }
    if !current.can_transition_to(next) {
        return Err(AppError::Conflict(format!("Cannot change a {} appointment to {}", current, next)));
    }

    let updated = state.appointment_repo.update_status(&appointment.id, next.as_str()).await?;

    info!("Appointment {} moved from {} to {}", updated.id, current, next);
    Ok(Json(updated))
}
