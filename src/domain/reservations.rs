// src/domain/reservations.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;
use crate::money::Price;
use super::core::{names_match, Day, Errors, RoomNo};
use super::discounts::DiscountCode;
use super::rooms::{Room, RoomType};
use super::stay::Stay;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(Uuid);

impl ReservationId {
    pub fn new() -> Self {
        ReservationId(Uuid::new_v4())
    }
}

impl Default for ReservationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NightlyCharge {
    pub day: Day,
    pub rate: Price,
    pub modifier: f64,
    pub amount: Price,
}

/// The price of a stay in a room, night by night.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub nights: Vec<NightlyCharge>,
    pub subtotal: Price,
    pub discount: Option<DiscountCode>,
    #[serde(rename = "discountAmount")]
    pub discount_amount: Price,
    pub total: Price,
}

impl PriceQuote {
    pub fn compute(room: &Room, stay: &Stay, discount: Option<DiscountCode>) -> Result<Self, Errors> {
        let rate = room.price();
        let nights = stay
            .days()
            .map(|day| {
                let modifier = room.date_modifier(day)?;
                Ok(NightlyCharge { day, rate, modifier, amount: rate * modifier })
            })
            .collect::<Result<Vec<_>, Errors>>()?;

        let subtotal: Price = nights.iter().map(|n| n.amount).sum();
        let total = match discount {
            Some(code) => code.apply(subtotal, rate, stay),
            None => subtotal,
        };

        Ok(PriceQuote {
            nights,
            subtotal,
            discount,
            discount_amount: subtotal - total,
            total,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reservation {
    id: ReservationId,
    guest_name: String,
    stay: Stay,
    room_no: RoomNo,
    room_type: RoomType,
    quote: PriceQuote,
}

impl Reservation {
    /// Prices the stay. Availability and discount eligibility are the booking
    /// engine's checks; an ineligible code simply yields no reduction here.
    pub fn new(guest_name: &str, stay: Stay, room: &Room, discount: Option<DiscountCode>) -> Result<Self, Errors> {
        Ok(Reservation {
            id: ReservationId::new(),
            guest_name: guest_name.to_string(),
            stay,
            room_no: room.room_no(),
            room_type: room.room_type(),
            quote: PriceQuote::compute(room, &stay, discount)?,
        })
    }

    pub fn id(&self) -> ReservationId {
        self.id
    }

    pub fn guest_name(&self) -> &str {
        &self.guest_name
    }

    pub fn stay(&self) -> Stay {
        self.stay
    }

    pub fn check_in(&self) -> Day {
        self.stay.check_in()
    }

    pub fn check_out(&self) -> Day {
        self.stay.check_out()
    }

    pub fn room_no(&self) -> RoomNo {
        self.room_no
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn discount(&self) -> Option<DiscountCode> {
        self.quote.discount
    }

    pub fn quote(&self) -> &PriceQuote {
        &self.quote
    }

    pub fn total_price(&self) -> Price {
        self.quote.total
    }

    pub fn is_for_guest(&self, guest_name: &str) -> bool {
        names_match(&self.guest_name, guest_name)
    }

    /// Re-prices the stay against the room's current rates with another code.
    pub fn set_discount(&mut self, discount: Option<DiscountCode>, room: &Room) -> Result<(), Errors> {
        self.quote = PriceQuote::compute(room, &self.stay, discount)?;
        Ok(())
    }
}
