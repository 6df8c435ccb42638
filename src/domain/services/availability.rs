use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Weekday};
use std::collections::HashSet;
use tracing::debug;
use crate::domain::models::appointment::BookedSlot;
use crate::domain::services::occupancy::{compute_occupancy, AppointmentOccupancy, OccupancyMode, OccupancyResult};
use crate::domain::services::slot_grid::{generate_grid, DEFAULT_CLOSE_HOUR, DEFAULT_OPEN_HOUR};
use crate::domain::services::time_codec::{MinuteOffset, TimeLabel};

pub const DEFAULT_WEEKDAY_CLOSE: MinuteOffset = 23 * 60;
pub const DEFAULT_WEEKEND_CLOSE: MinuteOffset = 21 * 60;
pub const DEFAULT_BOOKING_HORIZON_DAYS: u32 = 14;

/// Closing offset per weekday, indexed from Sunday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessHours {
    closing: [MinuteOffset; 7],
}

impl BusinessHours {
    pub fn new(weekday_close: MinuteOffset, weekend_close: MinuteOffset) -> Self {
        let mut closing = [weekday_close; 7];
        closing[Weekday::Sun.num_days_from_sunday() as usize] = weekend_close;
        closing[Weekday::Sat.num_days_from_sunday() as usize] = weekend_close;
        Self { closing }
    }

    pub fn closing_for(&self, weekday: Weekday) -> MinuteOffset {
        self.closing[weekday.num_days_from_sunday() as usize]
    }
}

impl Default for BusinessHours {
    fn default() -> Self {
        Self::new(DEFAULT_WEEKDAY_CLOSE, DEFAULT_WEEKEND_CLOSE)
    }
}

/// Today followed by the next `horizon_days - 1` days.
pub fn booking_dates(today: NaiveDate, horizon_days: u32) -> Vec<NaiveDate> {
    (0..horizon_days)
        .filter_map(|offset| today.checked_add_days(Days::new(offset as u64)))
        .collect()
}

pub fn resolve_date_index(dates: &[NaiveDate], date: NaiveDate) -> Option<usize> {
    dates.iter().position(|d| *d == date)
}

/// Narrows the grid to the slots a customer may still book.
///
/// Occupancy is checked first. In aggregate mode a slot only disappears once
/// every known barber is busy; with no barber count the occupancy step is
/// skipped entirely. When `selected_date_index` is `None` the date could not
/// be placed in the booking window and neither the weekday closing time nor
/// the past-time cutoff is applied. Both fallbacks show more slots, not fewer.
pub fn filter_available(
    grid: &[TimeLabel],
    occupancy: &OccupancyResult,
    barber_count: Option<usize>,
    selected_date_index: Option<usize>,
    now: NaiveDateTime,
    business_hours: &BusinessHours,
) -> Vec<TimeLabel> {
    let selected_date = selected_date_index
        .and_then(|index| now.date().checked_add_days(Days::new(index as u64)));
    let closing = selected_date.map(|date| business_hours.closing_for(date.weekday()));

    grid.iter()
        .copied()
        .filter(|label| match occupancy {
            OccupancyResult::PerBarber(occupied) => !occupied.contains(label),
            OccupancyResult::Aggregate(counts) => match barber_count {
                Some(total) if total > 0 => counts.get(label).copied().unwrap_or(0) < total,
                _ => true,
            },
        })
        .filter(|label| closing.is_none_or(|close| label.minutes() <= close))
        .filter(|label| match selected_date {
            Some(date) => label
                .to_naive_time()
                .is_some_and(|time| date.and_time(time) > now),
            None => true,
        })
        .collect()
}

/// The configured grid and opening rules, wired together for one shop.
#[derive(Debug, Clone)]
pub struct SlotEngine {
    grid: Vec<TimeLabel>,
    business_hours: BusinessHours,
    horizon_days: u32,
}

impl SlotEngine {
    pub fn new(open_hour: u32, close_hour: u32, business_hours: BusinessHours, horizon_days: u32) -> Self {
        Self {
            grid: generate_grid(open_hour, close_hour),
            business_hours,
            horizon_days,
        }
    }

    pub fn grid(&self) -> &[TimeLabel] {
        &self.grid
    }

    pub fn business_hours(&self) -> &BusinessHours {
        &self.business_hours
    }

    pub fn booking_dates(&self, today: NaiveDate) -> Vec<NaiveDate> {
        booking_dates(today, self.horizon_days)
    }

    /// `booked` must already exclude cancelled appointments. With a barber
    /// selected it may contain other barbers' rows; they are ignored.
    pub fn available_slots(
        &self,
        booked: &[BookedSlot],
        date: NaiveDate,
        barber_id: Option<&str>,
        barber_count: Option<usize>,
        now: NaiveDateTime,
    ) -> Vec<TimeLabel> {
        let mode = match barber_id {
            Some(id) => OccupancyMode::PerBarber(id),
            None => OccupancyMode::Aggregate,
        };
        let occupancy = compute_occupancy(booked, &self.grid, mode);

        let dates = self.booking_dates(now.date());
        let date_index = resolve_date_index(&dates, date);
        if date_index.is_none() {
            debug!(%date, "Date outside booking window, skipping time filters");
        }

        filter_available(&self.grid, &occupancy, barber_count, date_index, now, &self.business_hours)
    }

    /// Grid labels a new appointment at `start` would hold.
    pub fn covered_labels(&self, start: TimeLabel, duration_minutes: Option<i32>) -> Vec<TimeLabel> {
        let in_grid: HashSet<TimeLabel> = self.grid.iter().copied().collect();
        let occupancy = AppointmentOccupancy::new("", start.minutes(), duration_minutes);
        occupancy
            .blocked_labels()
            .filter(|label| in_grid.contains(label))
            .collect()
    }
}

impl Default for SlotEngine {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_HOUR, DEFAULT_CLOSE_HOUR, BusinessHours::default(), DEFAULT_BOOKING_HORIZON_DAYS)
    }
}
