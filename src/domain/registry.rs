// src/domain/registry.rs
use serde::{Deserialize, Serialize};
use super::core::{names_match, Errors, MAX_ROOMS};
use super::hotels::Hotel;
use super::reports::HotelSummary;
use super::rooms::RoomType;

/// Number of rooms of each type a new hotel opens with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RoomCounts {
    #[serde(default)]
    pub standard: usize,
    #[serde(default)]
    pub deluxe: usize,
    #[serde(default)]
    pub executive: usize,
}

impl RoomCounts {
    /// `None` when the counts do not fit in a `usize`.
    pub fn total(&self) -> Option<usize> {
        self.standard
            .checked_add(self.deluxe)?
            .checked_add(self.executive)
    }

    fn by_type(&self) -> [(RoomType, usize); 3] {
        [
            (RoomType::Standard, self.standard),
            (RoomType::Deluxe, self.deluxe),
            (RoomType::Executive, self.executive),
        ]
    }
}

/// All hotels run by the operator during one session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HotelRegistry {
    hotels: Vec<Hotel>,
}

impl HotelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hotels(&self) -> &[Hotel] {
        &self.hotels
    }

    pub fn find(&self, name: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|hotel| names_match(hotel.name(), name))
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Hotel> {
        self.hotels.iter_mut().find(|hotel| names_match(hotel.name(), name))
    }

    pub fn get(&self, name: &str) -> Result<&Hotel, Errors> {
        self.find(name).ok_or_else(|| Errors::UnknownHotel(name.trim().to_string()))
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Hotel, Errors> {
        self.find_mut(name).ok_or_else(|| Errors::UnknownHotel(name.trim().to_string()))
    }

    /// Opens a hotel with standard rooms numbered first, then deluxe, then executive.
    pub fn create_hotel(&mut self, name: &str, counts: RoomCounts) -> Result<&Hotel, Errors> {
        let name = name.trim();
        if name.is_empty() {
            return Err(Errors::InvalidHotelName);
        }
        if self.find(name).is_some() {
            return Err(Errors::HotelAlreadyExists(name.to_string()));
        }
        let total = counts
            .total()
            .ok_or(Errors::CapacityExceeded { requested: usize::MAX, remaining: MAX_ROOMS })?;
        if total == 0 {
            return Err(Errors::InvalidRoomCount(total));
        }
        if total > MAX_ROOMS {
            return Err(Errors::CapacityExceeded { requested: total, remaining: MAX_ROOMS });
        }

        let mut hotel = Hotel::new(name);
        for (room_type, count) in counts.by_type() {
            if count > 0 {
                hotel.add_rooms(room_type, count)?;
            }
        }

        let index = self.hotels.len();
        self.hotels.push(hotel);
        Ok(&self.hotels[index])
    }

    /// Only another hotel can hold the new name; re-casing a hotel's own name is fine.
    pub fn rename_hotel(&mut self, name: &str, new_name: &str) -> Result<&Hotel, Errors> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(Errors::InvalidHotelName);
        }
        let position = self
            .hotels
            .iter()
            .position(|hotel| names_match(hotel.name(), name))
            .ok_or_else(|| Errors::UnknownHotel(name.trim().to_string()))?;
        let taken = self
            .hotels
            .iter()
            .enumerate()
            .any(|(i, hotel)| i != position && names_match(hotel.name(), new_name));
        if taken {
            return Err(Errors::HotelAlreadyExists(new_name.to_string()));
        }

        self.hotels[position].set_name(new_name);
        Ok(&self.hotels[position])
    }

    pub fn remove_hotel(&mut self, name: &str) -> Result<Hotel, Errors> {
        let position = self
            .hotels
            .iter()
            .position(|hotel| names_match(hotel.name(), name))
            .ok_or_else(|| Errors::UnknownHotel(name.trim().to_string()))?;
        Ok(self.hotels.remove(position))
    }

    pub fn summaries(&self) -> Vec<HotelSummary> {
        self.hotels.iter().map(HotelSummary::from).collect()
    }
}
