// src/domain/hotels.rs
use crate::money::Price;
use super::core::{
    validate_day, Day, Errors, RoomNo, DEFAULT_BASE_PRICE, MAX_DATE_MODIFIER, MAX_ROOMS,
    MIN_BASE_PRICE, MIN_DATE_MODIFIER, ROOMS_PER_FLOOR,
};
use super::discounts::DiscountCode;
use super::reports::Occupancy;
use super::reservations::{Reservation, ReservationId};
use super::rooms::{Room, RoomType};
use super::stay::Stay;

/// Room number of the `index`-th slot (1-based): ten rooms per floor, so
/// slot 1 is 101, slot 10 is 110 and slot 11 is 201. `None` outside 1 to 50.
pub fn room_number_for_index(index: usize) -> Option<RoomNo> {
    if !(1..=MAX_ROOMS).contains(&index) {
        return None;
    }
    let floor = (index - 1) / ROOMS_PER_FLOOR + 1;
    let slot = (index - 1) % ROOMS_PER_FLOOR + 1;
    Some((floor * 100 + slot) as RoomNo)
}

/// Inverse of [`room_number_for_index`]; `None` for numbers outside the 50 slots.
pub fn index_for_room_number(room_no: RoomNo) -> Option<usize> {
    let floor = (room_no / 100) as usize;
    let slot = (room_no % 100) as usize;
    let floors = MAX_ROOMS / ROOMS_PER_FLOOR;
    if (1..=floors).contains(&floor) && (1..=ROOMS_PER_FLOOR).contains(&slot) {
        Some((floor - 1) * ROOMS_PER_FLOOR + slot)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub guest_name: String,
    pub stay: Stay,
    pub room_no: RoomNo,
    pub discount: Option<DiscountCode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    name: String,
    rooms: Vec<Room>,
    base_price: Price,
    total_earnings: Price,
    reservations: Vec<Reservation>,
}

impl Hotel {
    /// An empty hotel at the default base price.
    pub fn new(name: &str) -> Self {
        Hotel {
            name: name.to_string(),
            rooms: Vec::new(),
            base_price: DEFAULT_BASE_PRICE,
            total_earnings: Price::ZERO,
            reservations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    pub fn remaining_capacity(&self) -> usize {
        MAX_ROOMS.saturating_sub(self.rooms.len())
    }

    pub fn base_price(&self) -> Price {
        self.base_price
    }

    pub fn total_earnings(&self) -> Price {
        self.total_earnings
    }

    pub fn reservations(&self) -> &[Reservation] {
        &self.reservations
    }

    /// Recomputed from scratch; always equal to [`Hotel::total_earnings`].
    pub fn earnings_from_reservations(&self) -> Price {
        self.reservations.iter().map(|r| r.total_price()).sum()
    }

    /// Smallest free room number, reusing numbers of removed rooms before
    /// extending past the highest one.
    pub fn next_available_room_number(&self) -> Result<RoomNo, Errors> {
        let count = self.rooms.len();
        if count >= MAX_ROOMS {
            return Err(Errors::CapacityExceeded { requested: 1, remaining: 0 });
        }

        let mut taken = [false; MAX_ROOMS + 1];
        for index in self.rooms.iter().filter_map(|room| index_for_room_number(room.room_no())) {
            taken[index] = true;
        }

        let index = (1..=MAX_ROOMS).find(|&index| !taken[index]).unwrap_or(count + 1);
        room_number_for_index(index).ok_or(Errors::CapacityExceeded { requested: 1, remaining: 0 })
    }

    pub fn add_room(&mut self, room: Room) -> Result<(), Errors> {
        if self.rooms.len() >= MAX_ROOMS {
            return Err(Errors::CapacityExceeded { requested: 1, remaining: 0 });
        }
        if self.find_room(room.room_no()).is_some() {
            return Err(Errors::DuplicateRoom(room.room_no()));
        }
        self.rooms.push(room);
        Ok(())
    }

    /// Adds `count` rooms of one type at the current base price. Nothing is
    /// added when the request does not fit.
    pub fn add_rooms(&mut self, room_type: RoomType, count: usize) -> Result<Vec<RoomNo>, Errors> {
        if count == 0 {
            return Err(Errors::InvalidRoomCount(count));
        }
        let remaining = self.remaining_capacity();
        if count > remaining {
            return Err(Errors::CapacityExceeded { requested: count, remaining });
        }

        let mut added = Vec::with_capacity(count);
        for _ in 0..count {
            let room_no = self.next_available_room_number()?;
            self.add_room(Room::new(room_no, room_type, self.base_price))?;
            added.push(room_no);
        }
        Ok(added)
    }

    /// Removes a room that has no booked day anywhere in the month.
    pub fn remove_room(&mut self, room_no: RoomNo) -> Result<Room, Errors> {
        let position = self
            .rooms
            .iter()
            .position(|room| room.room_no() == room_no)
            .ok_or(Errors::UnknownRoom(room_no))?;
        if self.rooms[position].has_bookings() {
            return Err(Errors::RoomHasBookings(room_no));
        }
        Ok(self.rooms.remove(position))
    }

    pub fn find_room(&self, room_no: RoomNo) -> Option<&Room> {
        self.rooms.iter().find(|room| room.room_no() == room_no)
    }

    /// Sets a new hotel-wide base price and applies it to every room.
    pub fn update_base_price(&mut self, base_price: Price) -> Result<(), Errors> {
        if !self.reservations.is_empty() {
            return Err(Errors::ReservationsExist(self.reservations.len()));
        }
        if !base_price.value().is_finite() {
            return Err(Errors::InvalidBasePrice(base_price));
        }
        if base_price < MIN_BASE_PRICE {
            return Err(Errors::BasePriceTooLow(base_price));
        }
        self.base_price = base_price;
        for room in self.rooms.iter_mut() {
            room.set_base_price(base_price);
        }
        Ok(())
    }

    pub fn update_date_modifier(&mut self, day: Day, modifier: f64) -> Result<(), Errors> {
        validate_day(day)?;
        if !(MIN_DATE_MODIFIER..=MAX_DATE_MODIFIER).contains(&modifier) {
            return Err(Errors::ModifierOutOfRange(modifier));
        }
        for room in self.rooms.iter_mut() {
            room.set_date_modifier(day, modifier)?;
        }
        Ok(())
    }

    pub fn available_rooms<'a>(&'a self, stay: &'a Stay) -> impl Iterator<Item = &'a Room> + 'a {
        self.rooms.iter().filter(move |room| room.is_available_for(stay))
    }

    pub fn occupancy(&self, stay: &Stay) -> Occupancy {
        let available = self.available_rooms(stay).count();
        Occupancy {
            stay: *stay,
            available,
            booked: self.rooms.len() - available,
        }
    }

    /// Validates and commits a booking: the room must exist and be free for the
    /// whole stay, and a discount code must be eligible for the stay. On any
    /// failure the hotel is left as it was.
    pub fn book(&mut self, request: BookingRequest) -> Result<&Reservation, Errors> {
        let guest_name = request.guest_name.trim();
        if guest_name.is_empty() {
            return Err(Errors::InvalidGuestName);
        }
        if let Some(code) = request.discount {
            code.check_eligibility(&request.stay)
                .map_err(Errors::DiscountNotApplicable)?;
        }

        let room = self
            .find_room(request.room_no)
            .ok_or(Errors::UnknownRoom(request.room_no))?;
        let reservation = Reservation::new(guest_name, request.stay, room, request.discount)?;

        self.add_reservation(reservation)
    }

    /// Blocks the reservation's nights on its room, then records it and its
    /// earnings. A room that is missing or already booked on any of those
    /// nights leaves the hotel unchanged.
    pub fn add_reservation(&mut self, reservation: Reservation) -> Result<&Reservation, Errors> {
        let room = self
            .rooms
            .iter_mut()
            .find(|room| room.room_no() == reservation.room_no())
            .ok_or(Errors::UnknownRoom(reservation.room_no()))?;
        room.book(&reservation.stay())?;

        self.total_earnings += reservation.total_price();
        let index = self.reservations.len();
        self.reservations.push(reservation);
        Ok(&self.reservations[index])
    }

    /// Drops a reservation, frees its nights and takes back its earnings.
    pub fn remove_reservation(&mut self, id: ReservationId) -> Result<Reservation, Errors> {
        let position = self
            .reservations
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| Errors::UnknownReservation(id.to_string()))?;
        let reservation = self.reservations.remove(position);

        self.total_earnings -= reservation.total_price();
        if let Some(room) = self.rooms.iter_mut().find(|room| room.room_no() == reservation.room_no()) {
            room.cancel(&reservation.stay());
        }
        Ok(reservation)
    }

    pub fn find_reservation(&self, guest_name: &str) -> Option<&Reservation> {
        self.reservations.iter().find(|r| r.is_for_guest(guest_name))
    }

    /// Cancels the first reservation held under `guest_name` (case-insensitive).
    pub fn cancel_reservation(&mut self, guest_name: &str) -> Result<Reservation, Errors> {
        let id = self
            .find_reservation(guest_name)
            .map(|r| r.id())
            .ok_or_else(|| Errors::UnknownReservation(guest_name.trim().to_string()))?;
        self.remove_reservation(id)
    }

    pub fn guests(&self) -> Vec<String> {
        self.reservations.iter().map(|r| r.guest_name().to_string()).collect()
    }

    /// Replaces the discount code of a guest's reservation and re-prices it,
    /// moving the difference into the hotel's earnings.
    pub fn change_discount(&mut self, guest_name: &str, discount: Option<DiscountCode>) -> Result<&Reservation, Errors> {
        let position = self
            .reservations
            .iter()
            .position(|r| r.is_for_guest(guest_name))
            .ok_or_else(|| Errors::UnknownReservation(guest_name.trim().to_string()))?;

        let stay = self.reservations[position].stay();
        if let Some(code) = discount {
            code.check_eligibility(&stay).map_err(Errors::DiscountNotApplicable)?;
        }
        let room_no = self.reservations[position].room_no();
        let room = self
            .rooms
            .iter()
            .find(|room| room.room_no() == room_no)
            .ok_or(Errors::UnknownRoom(room_no))?;

        let reservation = &mut self.reservations[position];
        let previous = reservation.total_price();
        reservation.set_discount(discount, room)?;
        self.total_earnings = self.total_earnings - previous + reservation.total_price();
        Ok(&self.reservations[position])
    }
}
