use axum::{extract::{Query, State}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::SlotsQuery;
use crate::api::dtos::responses::{DatesResponse, SlotsResponse};
use crate::api::handlers::{non_empty, parse_date};
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn get_booking_dates(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let today = state.clock.now().date();
    Ok(Json(DatesResponse {
        today,
        dates: state.engine.booking_dates(today),
    }))
}

pub async fn get_slots(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SlotsQuery>,
) -> Result<impl IntoResponse, AppError> {
    let date = parse_date(&params.date)?;
    let barber_id = non_empty(params.barber_id);

    let barber_count = match &barber_id {
        Some(id) => {
            let barber = state.profile_repo.find_by_id(id).await?
                .filter(|p| p.is_active_barber())
                .ok_or(AppError::NotFound("Barber not found".into()))?;
            info!("get_slots: Per-barber availability for {} on {}", barber.id, date);
            None
        }
        None => {
            let count = state.profile_repo.count_active_barbers().await?;
            info!("get_slots: Aggregate availability on {} across {} barbers", date, count);
            usize::try_from(count).ok()
        }
    };

    let booked = state.appointment_repo.list_booked_slots(date, barber_id.as_deref()).await?;
    let now = state.clock.now();

    let slots = state.engine.available_slots(&booked, date, barber_id.as_deref(), barber_count, now);

    Ok(Json(SlotsResponse {
        date,
        barber_id,
        slots,
    }))
}
