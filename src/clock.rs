//! Wall-clock time sources.

use chrono::Timelike;

/// The first hour (inclusive) that counts as night.
pub const NIGHT_START_HOUR: u32 = 20;

/// The last hour (inclusive) that counts as night.
pub const NIGHT_END_HOUR: u32 = 6;

/// A source of the current hour of the day.
pub trait Clock {
    /// The current hour, from 0 to 23.
    fn hour(&self) -> u32;

    /// The current phase of the day.
    fn day_phase(&self) -> DayPhase {
        DayPhase::from_hour(self.hour())
    }
}

/// Reads the local wall-clock time.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn hour(&self) -> u32 {
        chrono::Local::now().hour()
    }
}

/// A clock stuck at a single hour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub u32);

impl Clock for FixedClock {
    fn hour(&self) -> u32 {
        self.0
    }
}

/// Whether it is day or night. Some obstacles change shape at night.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DayPhase {
    Day,
    Night,
}

impl DayPhase {
    /// Night wraps around midnight, from 20:00 to the end of 06:00.
    pub fn from_hour(hour: u32) -> Self {
        if hour >= NIGHT_START_HOUR || hour <= NIGHT_END_HOUR {
            DayPhase::Night
        } else {
            DayPhase::Day
        }
    }

    pub fn is_night(self) -> bool {
        self == DayPhase::Night
    }
}
