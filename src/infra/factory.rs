use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use crate::infra::clock::SystemClock;
use crate::infra::repositories::{
    sqlite_appointment_repo::SqliteAppointmentRepo,
    sqlite_profile_repo::SqliteProfileRepo,
    sqlite_service_repo::SqliteServiceRepo,
};

pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    info!("Initializing SQLite connection with WAL Mode...");

    let opts = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;

    run_sqlite_migrations(&pool).await?;

    Ok(build_state(config, pool))
}

/// Wires repositories over an already migrated pool.
pub fn build_state(config: &Config, pool: SqlitePool) -> AppState {
    AppState {
        config: config.clone(),
        appointment_repo: Arc::new(SqliteAppointmentRepo::new(pool.clone())),
        service_repo: Arc::new(SqliteServiceRepo::new(pool.clone())),
        profile_repo: Arc::new(SqliteProfileRepo::new(pool)),
        clock: Arc::new(SystemClock::new(config.shop_timezone)),
        engine: Arc::new(config.slot_engine()),
    }
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/sqlite").run(pool).await?;
    info!("SQLite migrations applied");
    Ok(())
}
