use barber_booking::{
    api::router::create_router,
    config::Config,
    infra::{clock::FixedClock, factory::{build_state, run_sqlite_migrations}},
    state::AppState,
};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::sync::Arc;
use std::str::FromStr;
use uuid::Uuid;
use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    Router,
};
use chrono::{NaiveDate, NaiveDateTime};
use tower::ServiceExt;
use serde_json::{json, Value};

/// Wednesday 2025-06-11, 2:15 PM shop time.
pub fn default_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 6, 11).unwrap().and_hms_opt(14, 15, 0).unwrap()
}

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        Self::at(default_now()).await
    }

    pub async fn at(now: NaiveDateTime) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        run_sqlite_migrations(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
            shop_timezone: chrono_tz::UTC,
            open_hour: 10,
            close_hour: 23,
            weekday_close: 23 * 60,
            weekend_close: 21 * 60,
            booking_horizon_days: 14,
        };

        let mut state = build_state(&config, pool.clone());
        state.clock = Arc::new(FixedClock(now));
        let state = Arc::new(state);

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    pub async fn request(&self, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    pub async fn create_profile(&self, name: &str, role: &str) -> String {
        let (status, body) = self.request("POST", "/api/v1/profiles", Some(json!({
            "full_name": name,
            "role": role
        }))).await;
        assert_eq!(status, StatusCode::CREATED, "profile creation failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn create_service(&self, name: &str, duration_minutes: Option<i32>) -> String {
        let (status, body) = self.request("POST", "/api/v1/services", Some(json!({
            "name": name,
            "price_cents": 2500,
            "duration_minutes": duration_minutes
        }))).await;
        assert_eq!(status, StatusCode::CREATED, "service creation failed: {body}");
        body["id"].as_str().unwrap().to_string()
    }

    pub async fn book(&self, customer: &str, barber: &str, service: &str, date: &str, time: &str) -> (StatusCode, Value) {
        self.request("POST", "/api/v1/appointments", Some(json!({
            "customer_id": customer,
            "barber_id": barber,
            "service_id": service,
            "date": date,
            "time": time
        }))).await
    }

    pub async fn slots(&self, date: &str, barber: Option<&str>) -> Vec<String> {
        let uri = match barber {
            Some(id) => format!("/api/v1/slots?date={}&barber_id={}", date, id),
            None => format!("/api/v1/slots?date={}", date),
        };
        let (status, body) = self.request("GET", &uri, None).await;
        assert_eq!(status, StatusCode::OK, "slots request failed: {body}");
        body["slots"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
        let _ = std::fs::remove_file(format!("{}-wal", self.db_filename));
        let _ = std::fs::remove_file(format!("{}-shm", self.db_filename));
    }
}
