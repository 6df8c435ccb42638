use crate::domain::services::time_codec::{to_label, MinuteOffset, TimeLabel};

pub const SLOT_MINUTES: MinuteOffset = 30;
pub const DEFAULT_OPEN_HOUR: u32 = 10;
pub const DEFAULT_CLOSE_HOUR: u32 = 23;

/// Half-hour labels from `start_hour:00` through `end_hour:00`.
/// The closing hour never gets a `:30` slot.
pub fn generate_grid(start_hour: u32, end_hour: u32) -> Vec<TimeLabel> {
    let mut grid = Vec::new();

    for hour in start_hour..=end_hour {
        let minutes: &[MinuteOffset] = if hour == end_hour { &[0] } else { &[0, SLOT_MINUTES] };
        for minute in minutes {
            if let Some(label) = to_label(hour * 60 + minute) {
                grid.push(label);
            }
        }
    }

    grid
}
