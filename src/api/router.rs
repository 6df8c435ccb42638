use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, slots, appointment, service, profile};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Booking flow
        .route("/api/v1/dates", get(slots::get_booking_dates))
        .route("/api/v1/slots", get(slots::get_slots))
        .route("/api/v1/appointments", get(appointment::list_appointments).post(appointment::create_appointment))
        .route("/api/v1/appointments/{appointment_id}", get(appointment::get_appointment))
        .route("/api/v1/appointments/{appointment_id}/status", put(appointment::update_appointment_status))

        // Catalogue
        .route("/api/v1/services", get(service::list_services).post(service::create_service))
        .route("/api/v1/services/{service_id}", get(service::get_service).put(service::update_service).delete(service::delete_service))

        // People
        .route("/api/v1/barbers", get(profile::list_barbers))
        .route("/api/v1/profiles", post(profile::create_profile))
        .route("/api/v1/profiles/{profile_id}", get(profile::get_profile).delete(profile::deactivate_profile))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
