use hotel_reservations::domain::{
    BookingRequest, DiscountCode, Hotel, HotelRegistry, RoomCounts, RoomNo, Stay,
};
use hotel_reservations::money::Price;
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

// Sample data for tests
pub fn sample_hotel_name() -> String {
    "Alpha".to_string()
}

pub fn sample_guest() -> String {
    "Juan Dela Cruz".to_string()
}

pub fn other_guest() -> String {
    "Maria Clara".to_string()
}

pub fn base_price() -> Price {
    Price::new(1229.0)
}

pub fn standard_rooms(count: usize) -> RoomCounts {
    RoomCounts { standard: count, deluxe: 0, executive: 0 }
}

pub fn mixed_rooms() -> RoomCounts {
    RoomCounts { standard: 2, deluxe: 2, executive: 1 }
}

pub fn stay(check_in: u8, check_out: u8) -> Stay {
    Stay::new(check_in, check_out).unwrap()
}

/// "Alpha" with three standard rooms at the default base price.
pub fn sample_registry() -> HotelRegistry {
    let mut registry = HotelRegistry::new();
    registry.create_hotel(&sample_hotel_name(), standard_rooms(3)).unwrap();
    registry
}

pub fn sample_hotel() -> Hotel {
    sample_registry().get(&sample_hotel_name()).unwrap().clone()
}

pub fn booking(guest: &str, room_no: RoomNo, stay: Stay, discount: Option<DiscountCode>) -> BookingRequest {
    BookingRequest {
        guest_name: guest.to_string(),
        stay,
        room_no,
        discount,
    }
}

pub fn assert_price(actual: Price, expected: f64) {
    assert!(
        actual.approx_eq(Price::new(expected)),
        "expected {} but was {}",
        expected,
        actual.value()
    );
}

