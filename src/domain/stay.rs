// src/domain/stay.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use super::core::{Day, Errors, DAYS_IN_MONTH};

/// The nights from `check_in` up to but not including `check_out`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawStay")]
pub struct Stay {
    #[serde(rename = "checkIn")]
    check_in: Day,
    #[serde(rename = "checkOut")]
    check_out: Day,
}

#[derive(Deserialize)]
struct RawStay {
    #[serde(rename = "checkIn")]
    check_in: Day,
    #[serde(rename = "checkOut")]
    check_out: Day,
}

impl TryFrom<RawStay> for Stay {
    type Error = Errors;

    fn try_from(raw: RawStay) -> Result<Self, Self::Error> {
        Stay::new(raw.check_in, raw.check_out)
    }
}

impl Stay {
    pub fn new(check_in: Day, check_out: Day) -> Result<Self, Errors> {
        if check_in < 1 || check_out > DAYS_IN_MONTH || check_in >= check_out {
            return Err(Errors::InvalidStay { check_in, check_out });
        }
        Ok(Stay { check_in, check_out })
    }

    pub fn check_in(&self) -> Day {
        self.check_in
    }

    pub fn check_out(&self) -> Day {
        self.check_out
    }

    pub fn nights(&self) -> u8 {
        self.check_out - self.check_in
    }

    pub fn days(&self) -> Range<Day> {
        self.check_in..self.check_out
    }

    /// True when `day` is one of the nights of the stay.
    pub fn covers(&self, day: Day) -> bool {
        self.check_in <= day && day < self.check_out
    }
}

impl fmt::Display for Stay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day {} to day {}", self.check_in, self.check_out)
    }
}
