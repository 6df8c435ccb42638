use axum::{extract::{Path, State}, response::IntoResponse, http::StatusCode, Json};
use crate::state::AppState;
use crate::api::dtos::requests::{CreateServiceRequest, UpdateServiceRequest};
use crate::domain::models::service::Service;
use crate::domain::services::time_codec::MINUTES_PER_DAY;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

fn validate_fields(name: &str, price_cents: i64, duration_minutes: Option<i32>) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::Validation("Service name is required".into()));
    }
    if price_cents < 0 {
        return Err(AppError::Validation("Price cannot be negative".into()));
    }
    if duration_minutes.is_some_and(|d| d <= 0) {
        return Err(AppError::Validation("Duration must be positive".into()));
    }
    if duration_minutes.is_some_and(|d| i64::from(d) > i64::from(MINUTES_PER_DAY)) {
        return Err(AppError::Validation(format!("Duration cannot exceed {} minutes", MINUTES_PER_DAY)));
    }
    Ok(())
}

pub async fn list_services(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let services = state.service_repo.list_active().await?;
    Ok(Json(services))
}

pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = state.service_repo.find_by_id(&service_id).await?
        .ok_or(AppError::NotFound("Service not found".into()))?;
    Ok(Json(service))
}

pub async fn create_service(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    validate_fields(&payload.name, payload.price_cents, payload.duration_minutes)?;

    let service = Service::new(
        payload.name.trim().to_string(),
        payload.description,
        payload.price_cents,
        payload.duration_minutes,
    );
    let created = state.service_repo.create(&service).await?;

    info!("Service created: {} ({})", created.name, created.id);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_service(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
    Json(payload): Json<UpdateServiceRequest>,
) -> Result<impl IntoResponse, AppError> {
    let mut service = state.service_repo.find_by_id(&service_id).await?
        .ok_or(AppError::NotFound("Service not found".into()))?;

    if let Some(name) = payload.name { service.name = name.trim().to_string(); }
    if let Some(price) = payload.price_cents { service.price_cents = price; }
    if let Some(duration) = payload.duration_minutes { service.duration_minutes = duration; }

    if let Some(description) = payload.description {
        if description.is_empty() {
            service.description = None;
        } else {
            service.description = Some(description);
        }
    }

    validate_fields(&service.name, service.price_cents, service.duration_minutes)?;

    let updated = state.service_repo.update(&service).await?;
    Ok(Json(updated))
}

pub async fn delete_service(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.service_repo.deactivate(&service_id).await?;
    info!("Service deactivated: {}", service_id);
    Ok(StatusCode::NO_CONTENT)
}
