use axum::{extract::{Path, State}, response::IntoResponse, http::StatusCode, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CreateProfileRequest;
use crate::domain::models::profile::{Profile, ROLES};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn create_profile(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateProfileRequest>,
) -> Result<impl IntoResponse, AppError> {
    let full_name = payload.full_name.trim();
    if full_name.is_empty() {
        return Err(AppError::Validation("Full name is required".into()));
    }

    let role = payload.role.trim().to_ascii_lowercase();
    if !ROLES.contains(&role.as_str()) {
        return Err(AppError::Validation(format!("Role must be one of {}", ROLES.join(", "))));
    }

    let profile = Profile::new(full_name.to_string(), payload.phone, &role);
    let created = state.profile_repo.create(&profile).await?;

    info!("Profile created: {} as {}", created.id, created.role);
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn get_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let profile = state.profile_repo.find_by_id(&profile_id).await?
        .ok_or(AppError::NotFound("Profile not found".into()))?;
    Ok(Json(profile))
}

pub async fn list_barbers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let barbers = state.profile_repo.list_active_barbers().await?;
    Ok(Json(barbers))
}

pub async fn deactivate_profile(
    State(state): State<Arc<AppState>>,
    Path(profile_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state.profile_repo.deactivate(&profile_id).await?;
    info!("Profile deactivated: {}", profile_id);
    Ok(StatusCode::NO_CONTENT)
}
