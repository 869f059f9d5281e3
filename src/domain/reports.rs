// src/domain/reports.rs
use serde::{Deserialize, Serialize};
use crate::money::Price;
use super::core::{Day, RoomNo};
use super::discounts::DiscountCode;
use super::hotels::Hotel;
use super::reservations::{PriceQuote, Reservation, ReservationId};
use super::rooms::{Room, RoomType};
use super::stay::Stay;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelSummary {
    pub name: String,
    #[serde(rename = "roomCount")]
    pub room_count: usize,
    #[serde(rename = "basePrice")]
    pub base_price: Price,
}

impl From<&Hotel> for HotelSummary {
    fn from(hotel: &Hotel) -> Self {
        HotelSummary {
            name: hotel.name().to_string(),
            room_count: hotel.room_count(),
            base_price: hotel.base_price(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelOverview {
    pub name: String,
    #[serde(rename = "roomCount")]
    pub room_count: usize,
    #[serde(rename = "basePrice")]
    pub base_price: Price,
    #[serde(rename = "totalEarnings")]
    pub total_earnings: Price,
    #[serde(rename = "reservationCount")]
    pub reservation_count: usize,
}

impl From<&Hotel> for HotelOverview {
    fn from(hotel: &Hotel) -> Self {
        HotelOverview {
            name: hotel.name().to_string(),
            room_count: hotel.room_count(),
            base_price: hotel.base_price(),
            total_earnings: hotel.total_earnings(),
            reservation_count: hotel.reservations().len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomInfo {
    #[serde(rename = "roomNo")]
    pub room_no: RoomNo,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    #[serde(rename = "pricePerNight")]
    pub price_per_night: Price,
    /// Day 1 first; `true` means free.
    pub availability: Vec<bool>,
}

impl RoomInfo {
    pub fn booked_days(&self) -> Vec<Day> {
        self.availability
            .iter()
            .zip(1..)
            .filter(|(free, _)| !**free)
            .map(|(_, day)| day)
            .collect()
    }
}

impl From<&Room> for RoomInfo {
    fn from(room: &Room) -> Self {
        RoomInfo {
            room_no: room.room_no(),
            room_type: room.room_type(),
            price_per_night: room.price(),
            availability: room.calendar().to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationInfo {
    pub id: ReservationId,
    #[serde(rename = "guestName")]
    pub guest_name: String,
    #[serde(rename = "roomNo")]
    pub room_no: RoomNo,
    #[serde(rename = "roomType")]
    pub room_type: RoomType,
    #[serde(flatten)]
    pub stay: Stay,
    #[serde(rename = "discountCode")]
    pub discount_code: Option<DiscountCode>,
    #[serde(rename = "totalPrice")]
    pub total_price: Price,
    pub breakdown: PriceQuote,
}

impl From<&Reservation> for ReservationInfo {
    fn from(reservation: &Reservation) -> Self {
        ReservationInfo {
            id: reservation.id(),
            guest_name: reservation.guest_name().to_string(),
            room_no: reservation.room_no(),
            room_type: reservation.room_type(),
            stay: reservation.stay(),
            discount_code: reservation.discount(),
            total_price: reservation.total_price(),
            breakdown: reservation.quote().clone(),
        }
    }
}

/// Rooms free for a whole stay versus rooms with at least one booked night in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    #[serde(flatten)]
    pub stay: Stay,
    pub available: usize,
    pub booked: usize,
}
