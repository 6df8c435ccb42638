use std::env;
use std::str::FromStr;
use chrono_tz::Tz;
use crate::domain::services::availability::{BusinessHours, SlotEngine, DEFAULT_BOOKING_HORIZON_DAYS};
use crate::domain::services::slot_grid::{DEFAULT_CLOSE_HOUR, DEFAULT_OPEN_HOUR};
use crate::domain::services::time_codec::{MinuteOffset, TimeLabel};
use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub shop_timezone: Tz,
    pub open_hour: u32,
    pub close_hour: u32,
    pub weekday_close: MinuteOffset,
    pub weekend_close: MinuteOffset,
    pub booking_horizon_days: u32,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let config = Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://barbershop.db?mode=rwc".to_string()),
            port: parse_var("PORT", 3000)?,
            shop_timezone: parse_var("SHOP_TIMEZONE", chrono_tz::UTC)?,
            open_hour: parse_var("OPEN_HOUR", DEFAULT_OPEN_HOUR)?,
            close_hour: parse_var("CLOSE_HOUR", DEFAULT_CLOSE_HOUR)?,
            weekday_close: closing_var("WEEKDAY_CLOSE", "11:00 PM")?,
            weekend_close: closing_var("WEEKEND_CLOSE", "9:00 PM")?,
            booking_horizon_days: parse_var("BOOKING_HORIZON_DAYS", DEFAULT_BOOKING_HORIZON_DAYS)?,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.open_hour > self.close_hour || self.close_hour > 23 {
            return Err(AppError::Config(format!(
                "OPEN_HOUR ({}) and CLOSE_HOUR ({}) must satisfy OPEN_HOUR <= CLOSE_HOUR <= 23",
                self.open_hour, self.close_hour
            )));
        }
        if self.booking_horizon_days == 0 {
            return Err(AppError::Config("BOOKING_HORIZON_DAYS must be at least 1".into()));
        }
        Ok(())
    }

    pub fn business_hours(&self) -> BusinessHours {
        BusinessHours::new(self.weekday_close, self.weekend_close)
    }

    pub fn slot_engine(&self) -> SlotEngine {
        SlotEngine::new(self.open_hour, self.close_hour, self.business_hours(), self.booking_horizon_days)
    }
}

fn parse_var<T: FromStr>(name: &str, default: T) -> Result<T, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AppError::Config(format!("{} has an invalid value: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

/// Closing times are configured the way appointment times are written, e.g. `9:00 PM`.
fn closing_var(name: &str, default: &str) -> Result<MinuteOffset, AppError> {
    let raw = env::var(name).unwrap_or_else(|_| default.to_string());
    TimeLabel::parse(&raw)
        .map(|label| label.minutes())
        .ok_or_else(|| AppError::Config(format!("{} must look like \"9:00 PM\", got: {}", name, raw)))
}
