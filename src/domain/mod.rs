// src/domain/mod.rs
pub mod commands;
pub mod core;
pub mod discounts;
pub mod hotels;
pub mod registry;
pub mod reports;
pub mod reservations;
pub mod rooms;
pub mod stay;

use thiserror::Error;

pub use self::commands::*;
pub use self::core::*;
pub use self::discounts::*;
pub use self::hotels::*;
pub use self::registry::*;
pub use self::reports::*;
pub use self::reservations::*;
pub use self::rooms::*;
pub use self::stay::*;

#[derive(Debug, Error)]
pub enum HandleError {
    #[error("Hotel error: {0}")]
    HotelError(#[from] Errors),
}

impl HandleError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HandleError::HotelError(e) => e.kind(),
        }
    }
}

/// Applies one command to the registry. The registry is only handed back on
/// success, so a caller that keeps its previous copy never sees a half-applied
/// command.
pub fn handle(command: Command, mut registry: HotelRegistry) -> Result<(CommandSuccess, HotelRegistry), HandleError> {
    let success = match command {
        Command::CreateHotel { name, rooms } => {
            let hotel = registry.create_hotel(&name, rooms)?;
            CommandSuccess::HotelCreated {
                hotel: HotelSummary::from(hotel),
                room_numbers: hotel.rooms().iter().map(|room| room.room_no()).collect(),
            }
        }

        Command::RenameHotel { hotel, new_name } => {
            let hotel = registry.rename_hotel(&hotel, &new_name)?;
            CommandSuccess::HotelRenamed { hotel: HotelSummary::from(hotel) }
        }

        Command::RemoveHotel { hotel } => {
            let removed = registry.remove_hotel(&hotel)?;
            CommandSuccess::HotelRemoved { hotel: HotelSummary::from(&removed) }
        }

        Command::AddRooms { hotel, room_type, count } => {
            let hotel = registry.get_mut(&hotel)?;
            let room_numbers = hotel.add_rooms(room_type, count)?;
            CommandSuccess::RoomsAdded { hotel: hotel.name().to_string(), room_numbers }
        }

        Command::RemoveRoom { hotel, room_no } => {
            let hotel = registry.get_mut(&hotel)?;
            let removed = hotel.remove_room(room_no)?;
            CommandSuccess::RoomRemoved { hotel: hotel.name().to_string(), room_no: removed.room_no() }
        }

        Command::UpdateBasePrice { hotel, price } => {
            let hotel = registry.get_mut(&hotel)?;
            hotel.update_base_price(price)?;
            CommandSuccess::BasePriceUpdated { hotel: HotelSummary::from(&*hotel) }
        }

        Command::UpdateDateModifier { hotel, day, modifier } => {
            let hotel = registry.get_mut(&hotel)?;
            hotel.update_date_modifier(day, modifier)?;
            CommandSuccess::DateModifierUpdated { hotel: hotel.name().to_string(), day, modifier }
        }

        Command::Book { hotel, guest, check_in, check_out, room_no, discount_code } => {
            let stay = Stay::new(check_in, check_out)?;
            let discount = DiscountCode::parse_optional(&discount_code)?;
            let hotel = registry.get_mut(&hotel)?;
            let reservation = hotel.book(BookingRequest { guest_name: guest, stay, room_no, discount })?;
            CommandSuccess::Booked { reservation: ReservationInfo::from(reservation) }
        }

        Command::CancelReservation { hotel, guest } => {
            let hotel = registry.get_mut(&hotel)?;
            let cancelled = hotel.cancel_reservation(&guest)?;
            CommandSuccess::ReservationCancelled { reservation: ReservationInfo::from(&cancelled) }
        }

        Command::ChangeDiscount { hotel, guest, discount_code } => {
            let discount = DiscountCode::parse_optional(&discount_code)?;
            let hotel = registry.get_mut(&hotel)?;
            let reservation = hotel.change_discount(&guest, discount)?;
            CommandSuccess::DiscountChanged { reservation: ReservationInfo::from(reservation) }
        }

        Command::ListHotels => CommandSuccess::Hotels { hotels: registry.summaries() },

        Command::HotelOverview { hotel } => {
            let hotel = registry.get(&hotel)?;
            CommandSuccess::Overview { hotel: HotelOverview::from(hotel) }
        }

        Command::ListRooms { hotel } => {
            let hotel = registry.get(&hotel)?;
            CommandSuccess::Rooms { rooms: hotel.rooms().iter().map(RoomInfo::from).collect() }
        }

        Command::RoomInfo { hotel, room_no } => {
            let hotel = registry.get(&hotel)?;
            let room = hotel.find_room(room_no).ok_or(Errors::UnknownRoom(room_no))?;
            CommandSuccess::Room { room: RoomInfo::from(room) }
        }

        Command::ListGuests { hotel } => {
            let hotel = registry.get(&hotel)?;
            CommandSuccess::Guests { guests: hotel.guests() }
        }

        Command::ReservationInfo { hotel, guest } => {
            let hotel = registry.get(&hotel)?;
            let reservation = hotel
                .find_reservation(&guest)
                .ok_or_else(|| Errors::UnknownReservation(guest.trim().to_string()))?;
            CommandSuccess::Reservation { reservation: ReservationInfo::from(reservation) }
        }

        Command::Occupancy { hotel, check_in, check_out } => {
            let stay = Stay::new(check_in, check_out)?;
            let hotel = registry.get(&hotel)?;
            CommandSuccess::Occupancy { occupancy: hotel.occupancy(&stay) }
        }

        Command::AvailableRooms { hotel, check_in, check_out } => {
            let stay = Stay::new(check_in, check_out)?;
            let hotel = registry.get(&hotel)?;
            CommandSuccess::AvailableRooms { rooms: hotel.available_rooms(&stay).map(RoomInfo::from).collect() }
        }
    };

    Ok((success, registry))
}
