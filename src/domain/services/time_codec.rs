use chrono::NaiveTime;
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;

/// Minutes since midnight, `0..=1439`.
pub type MinuteOffset = u32;

pub const MINUTES_PER_DAY: MinuteOffset = 1440;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

/// A 12-hour clock label such as `"2:30 PM"`, the format appointment times
/// are stored and displayed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeLabel {
    hour: u8,
    minute: u8,
    meridiem: Meridiem,
}

impl TimeLabel {
    /// Parses `"<hour>:<minute> <AM|PM>"`. Anything else yields `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        let (clock, meridiem) = raw.trim().split_once(' ')?;

        let meridiem = match meridiem.trim() {
            m if m.eq_ignore_ascii_case("AM") => Meridiem::Am,
            m if m.eq_ignore_ascii_case("PM") => Meridiem::Pm,
            _ => return None,
        };

        let (hour, minute) = clock.split_once(':')?;
        if hour.is_empty() || minute.len() != 2 {
            return None;
        }
        if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let hour: u8 = hour.parse().ok()?;
        let minute: u8 = minute.parse().ok()?;
        if !(1..=12).contains(&hour) || minute >= 60 {
            return None;
        }

        Some(Self { hour, minute, meridiem })
    }

    /// Inverse of [`TimeLabel::minutes`]. Offsets at or past midnight never wrap.
    pub fn from_minutes(offset: MinuteOffset) -> Option<Self> {
        if offset >= MINUTES_PER_DAY {
            return None;
        }

        let hour_24 = offset / 60;
        let minute = (offset % 60) as u8;
        let meridiem = if hour_24 < 12 { Meridiem::Am } else { Meridiem::Pm };
        let hour = match hour_24 % 12 {
            0 => 12,
            h => h as u8,
        };

        Some(Self { hour, minute, meridiem })
    }

    pub fn minutes(&self) -> MinuteOffset {
        let hour_24 = match (self.hour, self.meridiem) {
            (12, Meridiem::Am) => 0,
            (12, Meridiem::Pm) => 12,
            (h, Meridiem::Am) => h as u32,
            (h, Meridiem::Pm) => h as u32 + 12,
        };
        hour_24 * 60 + self.minute as u32
    }

    pub fn to_naive_time(&self) -> Option<NaiveTime> {
        let minutes = self.minutes();
        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
    }
}

impl fmt::Display for TimeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let meridiem = match self.meridiem {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        };
        write!(f, "{}:{:02} {}", self.hour, self.minute, meridiem)
    }
}

impl Ord for TimeLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.minutes().cmp(&other.minutes())
    }
}

impl PartialOrd for TimeLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for TimeLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn to_minutes(label: &str) -> Option<MinuteOffset> {
    TimeLabel::parse(label).map(|l| l.minutes())
}

pub fn to_label(offset: MinuteOffset) -> Option<TimeLabel> {
    TimeLabel::from_minutes(offset)
}
