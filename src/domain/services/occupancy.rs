use std::collections::{HashMap, HashSet};
use tracing::warn;
use crate::domain::models::appointment::BookedSlot;
use crate::domain::services::slot_grid::SLOT_MINUTES;
use crate::domain::services::time_codec::{to_label, MinuteOffset, TimeLabel};

/// Fallback whenever a service has no recorded duration.
pub const DEFAULT_SERVICE_DURATION_MINUTES: u32 = 30;

/// One stored appointment reduced to what it blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppointmentOccupancy<'a> {
    pub barber_id: &'a str,
    pub start: MinuteOffset,
    pub duration_minutes: u32,
}

impl<'a> AppointmentOccupancy<'a> {
    pub fn new(barber_id: &'a str, start: MinuteOffset, duration_minutes: Option<i32>) -> Self {
        let duration_minutes = match duration_minutes {
            Some(d) => d.max(0) as u32,
            None => DEFAULT_SERVICE_DURATION_MINUTES,
        };
        Self { barber_id, start, duration_minutes }
    }

    /// `None` when the stored time string is unreadable.
    pub fn from_booked(slot: &'a BookedSlot) -> Option<Self> {
        let start = TimeLabel::parse(&slot.time)?.minutes();
        Some(Self::new(&slot.barber_id, start, slot.service_duration_minutes))
    }

    /// Number of half-hour slots held; the start slot is always held.
    pub fn slots_to_block(&self) -> u32 {
        self.duration_minutes.div_ceil(SLOT_MINUTES).max(1)
    }

    /// Labels covered by this appointment, stopping at midnight.
    pub fn blocked_labels(&self) -> impl Iterator<Item = TimeLabel> + '_ {
        (0..self.slots_to_block()).map_while(move |i| to_label(self.start + i * SLOT_MINUTES))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OccupancyMode<'a> {
    /// A barber has been picked; only their appointments matter.
    PerBarber(&'a str),
    /// No barber picked yet; count how many barbers are busy per slot.
    Aggregate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OccupancyResult {
    PerBarber(HashSet<TimeLabel>),
    Aggregate(HashMap<TimeLabel, usize>),
}

impl OccupancyResult {
    pub fn busy_barbers(&self, label: &TimeLabel) -> usize {
        match self {
            OccupancyResult::PerBarber(set) => usize::from(set.contains(label)),
            OccupancyResult::Aggregate(counts) => counts.get(label).copied().unwrap_or(0),
        }
    }
}

/// Callers pass only non-cancelled appointments for the date being viewed.
pub fn compute_occupancy(
    appointments: &[BookedSlot],
    grid: &[TimeLabel],
    mode: OccupancyMode<'_>,
) -> OccupancyResult {
    let in_grid: HashSet<TimeLabel> = grid.iter().copied().collect();

    let occupancies = appointments.iter().filter_map(|slot| {
        let occupancy = AppointmentOccupancy::from_booked(slot);
        if occupancy.is_none() {
            warn!(time = %slot.time, barber_id = %slot.barber_id, "Skipping appointment with unreadable time");
        }
        occupancy
    });

    match mode {
        OccupancyMode::PerBarber(barber_id) => {
            let occupied = occupancies
                .filter(|o| o.barber_id == barber_id)
                .flat_map(|o| o.blocked_labels().collect::<Vec<_>>())
                .filter(|label| in_grid.contains(label))
                .collect();
            OccupancyResult::PerBarber(occupied)
        }
        OccupancyMode::Aggregate => {
            let mut pairs: HashSet<(TimeLabel, &str)> = HashSet::new();
            for o in occupancies {
                for label in o.blocked_labels() {
                    if in_grid.contains(&label) {
                        pairs.insert((label, o.barber_id));
                    }
                }
            }

            let mut counts: HashMap<TimeLabel, usize> = HashMap::new();
            for (label, _) in pairs {
                *counts.entry(label).or_insert(0) += 1;
            }
            OccupancyResult::Aggregate(counts)
        }
    }
}
