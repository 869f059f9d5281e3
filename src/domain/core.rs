// src/domain/core.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use crate::money::Price;
use super::discounts::Ineligibility;

pub type RoomNo = u32;
pub type Day = u8;

pub const DAYS_IN_MONTH: Day = 31;
pub const MAX_ROOMS: usize = 50;
pub const ROOMS_PER_FLOOR: usize = 10;

pub const DEFAULT_BASE_PRICE: Price = Price::new(1229.0);
pub const MIN_BASE_PRICE: Price = Price::new(100.0);

pub const MIN_DATE_MODIFIER: f64 = 0.5;
pub const MAX_DATE_MODIFIER: f64 = 1.5;

pub fn validate_day(day: Day) -> Result<Day, Errors> {
    if (1..=DAYS_IN_MONTH).contains(&day) {
        Ok(day)
    } else {
        Err(Errors::InvalidDay(day))
    }
}

/// Case-insensitive comparison used for hotel and guest names.
pub fn names_match(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

/// How the caller should react to a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The hotel is full; retry with fewer rooms.
    Capacity,
    NotFound,
    /// The input is malformed or out of range; re-prompt.
    Validation,
    /// The input is fine but the current state forbids the operation.
    Conflict,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Capacity => write!(f, "capacity"),
            ErrorKind::NotFound => write!(f, "not_found"),
            ErrorKind::Validation => write!(f, "validation"),
            ErrorKind::Conflict => write!(f, "conflict"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Errors {
    #[error("Cannot add {requested} room(s), only {remaining} left before the limit of 50")]
    CapacityExceeded { requested: usize, remaining: usize },

    #[error("Unknown hotel: {0}")]
    UnknownHotel(String),

    #[error("Unknown room: {0}")]
    UnknownRoom(RoomNo),

    #[error("No reservation found for: {0}")]
    UnknownReservation(String),

    #[error("Invalid day: {0}, expected 1 to 31")]
    InvalidDay(Day),

    #[error("Invalid stay: check-in {check_in}, check-out {check_out}")]
    InvalidStay { check_in: Day, check_out: Day },

    #[error("Date price modifier {0} is outside 0.5 to 1.5")]
    ModifierOutOfRange(f64),

    #[error("Base price {0} is below the minimum of 100")]
    BasePriceTooLow(Price),

    #[error("Base price {0} is not a finite amount")]
    InvalidBasePrice(Price),

    #[error("Invalid number of rooms: {0}")]
    InvalidRoomCount(usize),

    #[error("Hotel name must not be empty")]
    InvalidHotelName,

    #[error("Guest name must not be empty")]
    InvalidGuestName,

    #[error("Unknown discount code: {0}")]
    UnknownDiscountCode(String),

    #[error("Discount code not applicable: {0}")]
    DiscountNotApplicable(Ineligibility),

    #[error("Hotel already exists: {0}")]
    HotelAlreadyExists(String),

    #[error("Room already exists: {0}")]
    DuplicateRoom(RoomNo),

    #[error("Room {0} has a reservation and cannot be removed")]
    RoomHasBookings(RoomNo),

    #[error("Cannot update base price while {0} reservation(s) exist")]
    ReservationsExist(usize),

    #[error("Room {room_no} is already booked on day {day}")]
    RoomUnavailable { room_no: RoomNo, day: Day },
}

impl Errors {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Errors::CapacityExceeded { .. } => ErrorKind::Capacity,

            Errors::UnknownHotel(_)
            | Errors::UnknownRoom(_)
            | Errors::UnknownReservation(_) => ErrorKind::NotFound,

            Errors::InvalidDay(_)
            | Errors::InvalidStay { .. }
            | Errors::ModifierOutOfRange(_)
            | Errors::BasePriceTooLow(_)
            | Errors::InvalidBasePrice(_)
            | Errors::InvalidRoomCount(_)
            | Errors::InvalidHotelName
            | Errors::InvalidGuestName
            | Errors::UnknownDiscountCode(_)
            | Errors::DiscountNotApplicable(_) => ErrorKind::Validation,

            Errors::HotelAlreadyExists(_)
            | Errors::DuplicateRoom(_)
            | Errors::RoomHasBookings(_)
            | Errors::ReservationsExist(_)
            | Errors::RoomUnavailable { .. } => ErrorKind::Conflict,
        }
    }
}
