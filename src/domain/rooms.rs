// src/domain/rooms.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::money::Price;
use super::core::{validate_day, Day, Errors, RoomNo, DAYS_IN_MONTH};
use super::stay::Stay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoomType {
    Standard,
    /// 20% above the hotel base price.
    Deluxe,
    /// 35% above the hotel base price.
    Executive,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [RoomType::Standard, RoomType::Deluxe, RoomType::Executive];

    pub fn multiplier(&self) -> f64 {
        match self {
            RoomType::Standard => 1.00,
            RoomType::Deluxe => 1.20,
            RoomType::Executive => 1.35,
        }
    }
}

impl Serialize for RoomType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: serde::Serializer {
        serializer.serialize_str(&self.to_string())
    }
}
impl<'de> Deserialize<'de> for RoomType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: serde::Deserializer<'de> {
        let text = String::deserialize(deserializer)?;
        RoomType::from_str(&text).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomType::Standard => write!(f, "Standard"),
            RoomType::Deluxe => write!(f, "Deluxe"),
            RoomType::Executive => write!(f, "Executive"),
        }
    }
}

impl FromStr for RoomType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(RoomType::Standard),
            "deluxe" => Ok(RoomType::Deluxe),
            "executive" => Ok(RoomType::Executive),
            _ => Err(format!("Unknown room type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    room_no: RoomNo,
    room_type: RoomType,
    base_price: Price,
    availability: [bool; DAYS_IN_MONTH as usize],
    date_modifiers: [f64; DAYS_IN_MONTH as usize],
}

fn slot(day: Day) -> Result<usize, Errors> {
    validate_day(day).map(|d| usize::from(d) - 1)
}

impl Room {
    /// A room free on every day of the month with no date modifiers.
    pub fn new(room_no: RoomNo, room_type: RoomType, base_price: Price) -> Self {
        Room {
            room_no,
            room_type,
            base_price,
            availability: [true; DAYS_IN_MONTH as usize],
            date_modifiers: [1.0; DAYS_IN_MONTH as usize],
        }
    }

    pub fn room_no(&self) -> RoomNo {
        self.room_no
    }

    pub fn floor(&self) -> RoomNo {
        self.room_no / 100
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn base_price(&self) -> Price {
        self.base_price
    }

    pub fn set_base_price(&mut self, base_price: Price) {
        self.base_price = base_price;
    }

    /// Nightly rate before any date modifier.
    pub fn price(&self) -> Price {
        self.base_price * self.room_type.multiplier()
    }

    pub fn date_modifier(&self, day: Day) -> Result<f64, Errors> {
        Ok(self.date_modifiers[slot(day)?])
    }

    /// Bounds on the multiplier are the hotel's concern.
    pub fn set_date_modifier(&mut self, day: Day, multiplier: f64) -> Result<(), Errors> {
        self.date_modifiers[slot(day)?] = multiplier;
        Ok(())
    }

    pub fn is_available(&self, day: Day) -> Result<bool, Errors> {
        Ok(self.availability[slot(day)?])
    }

    pub fn first_conflict(&self, stay: &Stay) -> Option<Day> {
        stay.days().find(|&day| !self.availability[usize::from(day) - 1])
    }

    pub fn is_available_for(&self, stay: &Stay) -> bool {
        self.first_conflict(stay).is_none()
    }

    pub fn has_bookings(&self) -> bool {
        self.availability.iter().any(|free| !free)
    }

    pub fn booked_days(&self) -> Vec<Day> {
        (1..=DAYS_IN_MONTH)
            .filter(|&day| !self.availability[usize::from(day) - 1])
            .collect()
    }

    /// Free/booked flag per day, day 1 first.
    pub fn calendar(&self) -> &[bool] {
        &self.availability
    }

    /// Marks every night of the stay as booked, or changes nothing when any of
    /// them is already taken.
    pub fn book(&mut self, stay: &Stay) -> Result<(), Errors> {
        if let Some(day) = self.first_conflict(stay) {
            return Err(Errors::RoomUnavailable { room_no: self.room_no, day });
        }
        for day in stay.days() {
            self.availability[usize::from(day) - 1] = false;
        }
        Ok(())
    }

    // Unconditional: the calendar cannot tell which reservation booked a day.
    pub fn cancel(&mut self, stay: &Stay) {
        for day in stay.days() {
            self.availability[usize::from(day) - 1] = true;
        }
    }
}
