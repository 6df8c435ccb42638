pub mod availability;
pub mod booking_session;
pub mod occupancy;
pub mod slot_grid;
pub mod time_codec;
