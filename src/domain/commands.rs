// src/domain/commands.rs
use serde::{Deserialize, Serialize};
use crate::money::Price;
use super::core::{Day, RoomNo};
use super::registry::RoomCounts;
use super::reports::{HotelOverview, HotelSummary, Occupancy, ReservationInfo, RoomInfo};
use super::rooms::RoomType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum Command {
    CreateHotel {
        name: String,
        #[serde(flatten)]
        rooms: RoomCounts,
    },
    RenameHotel {
        hotel: String,
        #[serde(rename = "newName")]
        new_name: String,
    },
    RemoveHotel {
        hotel: String,
    },
    AddRooms {
        hotel: String,
        #[serde(rename = "type")]
        room_type: RoomType,
        count: usize,
    },
    RemoveRoom {
        hotel: String,
        #[serde(rename = "roomNo")]
        room_no: RoomNo,
    },
    UpdateBasePrice {
        hotel: String,
        price: Price,
    },
    UpdateDateModifier {
        hotel: String,
        day: Day,
        modifier: f64,
    },
    Book {
        hotel: String,
        guest: String,
        #[serde(rename = "checkIn")]
        check_in: Day,
        #[serde(rename = "checkOut")]
        check_out: Day,
        #[serde(rename = "roomNo")]
        room_no: RoomNo,
        /// Raw operator input; blank means no discount.
        #[serde(rename = "discountCode", default)]
        discount_code: String,
    },
    CancelReservation {
        hotel: String,
        guest: String,
    },
    ChangeDiscount {
        hotel: String,
        guest: String,
        #[serde(rename = "discountCode", default)]
        discount_code: String,
    },

    ListHotels,
    HotelOverview {
        hotel: String,
    },
    ListRooms {
        hotel: String,
    },
    RoomInfo {
        hotel: String,
        #[serde(rename = "roomNo")]
        room_no: RoomNo,
    },
    ListGuests {
        hotel: String,
    },
    ReservationInfo {
        hotel: String,
        guest: String,
    },
    Occupancy {
        hotel: String,
        #[serde(rename = "checkIn")]
        check_in: Day,
        #[serde(rename = "checkOut")]
        check_out: Day,
    },
    AvailableRooms {
        hotel: String,
        #[serde(rename = "checkIn")]
        check_in: Day,
        #[serde(rename = "checkOut")]
        check_out: Day,
    },
}

impl Command {
    /// Queries leave the registry untouched.
    pub fn is_query(&self) -> bool {
        matches!(
            self,
            Command::ListHotels
                | Command::HotelOverview { .. }
                | Command::ListRooms { .. }
                | Command::RoomInfo { .. }
                | Command::ListGuests { .. }
                | Command::ReservationInfo { .. }
                | Command::Occupancy { .. }
                | Command::AvailableRooms { .. }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "$type")]
pub enum CommandSuccess {
    HotelCreated {
        hotel: HotelSummary,
        #[serde(rename = "roomNumbers")]
        room_numbers: Vec<RoomNo>,
    },
    HotelRenamed {
        hotel: HotelSummary,
    },
    HotelRemoved {
        hotel: HotelSummary,
    },
    RoomsAdded {
        hotel: String,
        #[serde(rename = "roomNumbers")]
        room_numbers: Vec<RoomNo>,
    },
    RoomRemoved {
        hotel: String,
        #[serde(rename = "roomNo")]
        room_no: RoomNo,
    },
    BasePriceUpdated {
        hotel: HotelSummary,
    },
    DateModifierUpdated {
        hotel: String,
        day: Day,
        modifier: f64,
    },
    Booked {
        reservation: ReservationInfo,
    },
    ReservationCancelled {
        reservation: ReservationInfo,
    },
    DiscountChanged {
        reservation: ReservationInfo,
    },

    Hotels {
        hotels: Vec<HotelSummary>,
    },
    Overview {
        hotel: HotelOverview,
    },
    Rooms {
        rooms: Vec<RoomInfo>,
    },
    Room {
        room: RoomInfo,
    },
    Guests {
        guests: Vec<String>,
    },
    Reservation {
        reservation: ReservationInfo,
    },
    Occupancy {
        occupancy: Occupancy,
    },
    AvailableRooms {
        rooms: Vec<RoomInfo>,
    },
}
