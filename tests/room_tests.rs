use hotel_reservations::domain::{Errors, Room, RoomType, DAYS_IN_MONTH};
use hotel_reservations::money::Price;
#[path="utils/mod.rs"] mod utils;
use utils::*;

fn sample_room(room_type: RoomType) -> Room {
    Room::new(101, room_type, base_price())
}

#[test]
fn test_nightly_price_by_room_type() {
    for base in [100.0, 1229.0, 4999.5] {
        let price = Price::new(base);
        assert_price(Room::new(101, RoomType::Standard, price).price(), base);
        assert_price(Room::new(101, RoomType::Deluxe, price).price(), base * 1.20);
        assert_price(Room::new(101, RoomType::Executive, price).price(), base * 1.35);
    }
}

#[test]
fn test_set_base_price_keeps_calendar_and_modifiers() {
    let mut room = sample_room(RoomType::Deluxe);
    room.book(&stay(3, 5)).unwrap();
    room.set_date_modifier(4, 1.25).unwrap();

    room.set_base_price(Price::new(2000.0));

    assert_price(room.price(), 2400.0);
    assert_eq!(room.date_modifier(4), Ok(1.25));
    assert_eq!(room.booked_days(), vec![3, 4]);
}

#[test]
fn test_new_room_is_free_all_month_with_neutral_modifiers() {
    let room = sample_room(RoomType::Standard);
    for day in 1..=DAYS_IN_MONTH {
        assert_eq!(room.is_available(day), Ok(true));
        assert_eq!(room.date_modifier(day), Ok(1.0));
    }
    assert!(!room.has_bookings());
}

#[test]
fn test_book_then_cancel_restores_every_range() {
    for check_in in 1..DAYS_IN_MONTH {
        for check_out in (check_in + 1)..=DAYS_IN_MONTH {
            let mut room = sample_room(RoomType::Standard);
            let s = stay(check_in, check_out);

            room.book(&s).unwrap();
            for day in s.days() {
                assert_eq!(room.is_available(day), Ok(false));
            }
            assert_eq!(room.is_available(check_out), Ok(true));

            room.cancel(&s);
            for day in 1..=DAYS_IN_MONTH {
                assert_eq!(room.is_available(day), Ok(true));
            }
        }
    }
}

#[test]
fn test_overlapping_booking_is_refused_and_calendar_unchanged() {
    let mut room = sample_room(RoomType::Executive);
    room.book(&stay(10, 15)).unwrap();
    let before = room.clone();

    let result = room.book(&stay(8, 12));

    assert_eq!(result, Err(Errors::RoomUnavailable { room_no: 101, day: 10 }));
    assert_eq!(room, before);
    assert_eq!(room.is_available(8), Ok(true));
}

#[test]
fn test_back_to_back_stays_do_not_conflict() {
    let mut room = sample_room(RoomType::Standard);
    room.book(&stay(5, 10)).unwrap();
    assert!(room.is_available_for(&stay(10, 12)));
    assert!(room.book(&stay(10, 12)).is_ok());
    assert!(room.book(&stay(1, 5)).is_ok());
    assert_eq!(room.first_conflict(&stay(4, 6)), Some(5));
}

#[test]
fn test_date_modifier_is_per_day() {
    let mut room = sample_room(RoomType::Standard);
    room.set_date_modifier(15, 0.5).unwrap();
    assert_eq!(room.date_modifier(15), Ok(0.5));
    assert_eq!(room.date_modifier(14), Ok(1.0));
    assert_eq!(room.date_modifier(0), Err(Errors::InvalidDay(0)));
}

#[test]
fn test_floor_is_hundreds_digit() {
    assert_eq!(Room::new(101, RoomType::Standard, base_price()).floor(), 1);
    assert_eq!(Room::new(510, RoomType::Standard, base_price()).floor(), 5);
}
