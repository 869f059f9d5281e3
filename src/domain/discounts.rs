// src/domain/discounts.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::money::Price;
use super::core::{Day, Errors};
use super::stay::Stay;

pub const PAYDAYS: [Day; 2] = [15, 30];
pub const STAY4_GET1_MIN_NIGHTS: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountCode {
    /// Staff rate, 10% off the whole stay.
    IWorkHere,
    /// Stays of five nights or more get one night at the undiscounted room rate for free.
    Stay4Get1,
    /// 7% off when the stay includes day 15 or day 30.
    Payday,
}

/// Why a discount code cannot be used for a given stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason")]
pub enum Ineligibility {
    StayTooShort { nights: u8, required: u8 },
    MissesPayday { check_in: Day, check_out: Day },
}

impl fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ineligibility::StayTooShort { nights, required } => {
                write!(f, "stay of {} night(s) is shorter than the required {}", nights, required)
            }
            Ineligibility::MissesPayday { check_in, check_out } => {
                write!(f, "stay from day {} to day {} includes neither day 15 nor day 30", check_in, check_out)
            }
        }
    }
}

impl DiscountCode {
    /// Parses operator input where an empty (or blank) entry means no discount.
    pub fn parse_optional(s: &str) -> Result<Option<DiscountCode>, Errors> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed
            .parse::<DiscountCode>()
            .map(Some)
            .map_err(|_| Errors::UnknownDiscountCode(trimmed.to_string()))
    }

    pub fn check_eligibility(&self, stay: &Stay) -> Result<(), Ineligibility> {
        match self {
            DiscountCode::IWorkHere => Ok(()),
            DiscountCode::Stay4Get1 => {
                if stay.nights() >= STAY4_GET1_MIN_NIGHTS {
                    Ok(())
                } else {
                    Err(Ineligibility::StayTooShort {
                        nights: stay.nights(),
                        required: STAY4_GET1_MIN_NIGHTS,
                    })
                }
            }
            DiscountCode::Payday => {
                if PAYDAYS.iter().any(|&day| stay.covers(day)) {
                    Ok(())
                } else {
                    Err(Ineligibility::MissesPayday {
                        check_in: stay.check_in(),
                        check_out: stay.check_out(),
                    })
                }
            }
        }
    }

    /// Applies the discount to a pre-discount subtotal. The length and payday
    /// guards are repeated here, so an ineligible code leaves the subtotal as is.
    pub fn apply(&self, subtotal: Price, nightly_rate: Price, stay: &Stay) -> Price {
        match self {
            DiscountCode::IWorkHere => subtotal * 0.90,
            DiscountCode::Stay4Get1 => {
                if stay.nights() >= STAY4_GET1_MIN_NIGHTS {
                    subtotal - nightly_rate
                } else {
                    subtotal
                }
            }
            DiscountCode::Payday => {
                if self.check_eligibility(stay).is_ok() {
                    subtotal * 0.93
                } else {
                    subtotal
                }
            }
        }
    }
}

impl Serialize for DiscountCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for DiscountCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: serde::Deserializer<'de> {
        let text = String::deserialize(deserializer)?;
        DiscountCode::from_str(&text).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for DiscountCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiscountCode::IWorkHere => write!(f, "I_WORK_HERE"),
            DiscountCode::Stay4Get1 => write!(f, "STAY4_GET1"),
            DiscountCode::Payday => write!(f, "PAYDAY"),
        }
    }
}

impl FromStr for DiscountCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "I_WORK_HERE" => Ok(DiscountCode::IWorkHere),
            "STAY4_GET1" => Ok(DiscountCode::Stay4Get1),
            "PAYDAY" => Ok(DiscountCode::Payday),
            _ => Err(format!("Unknown discount code: {}", s)),
        }
    }
}
