use hotel_reservations::domain::{Command, CommandSuccess, ErrorKind};
use hotel_reservations::session::{run_session, Response, Session};
use serde_json::{from_str, Value};
#[path="utils/mod.rs"] mod utils;
use utils::*;

fn run(input: &str) -> (Vec<Value>, Session) {
    let mut session = Session::new();
    let mut output = Vec::new();
    run_session(input.as_bytes(), &mut output, &mut session).unwrap();

    let text = String::from_utf8(output).unwrap();
    let responses = text.lines().map(|line| from_str(line).unwrap()).collect();
    (responses, session)
}

#[test]
fn test_session_answers_every_command_line() {
    let input = r#"
# Alpha opens with three standard rooms
{"$type":"CreateHotel","name":"Alpha","standard":3}
{"$type":"Book","hotel":"alpha","guest":"Juan Dela Cruz","checkIn":5,"checkOut":10,"roomNo":101,"discountCode":"I_WORK_HERE"}
{"$type":"RemoveRoom","hotel":"Alpha","roomNo":101}
not a command
{"$type":"HotelOverview","hotel":"Alpha"}
"#;

    let (responses, session) = run(input);

    assert_eq!(responses.len(), 5);

    assert_eq!(responses[0]["status"], "ok");
    assert_eq!(responses[0]["result"]["$type"], "HotelCreated");
    assert_eq!(responses[0]["result"]["roomNumbers"], serde_json::json!([101, 102, 103]));

    assert_eq!(responses[1]["status"], "ok");
    assert_eq!(responses[1]["result"]["reservation"]["roomNo"], 101);

    assert_eq!(responses[2]["status"], "rejected");
    assert_eq!(responses[2]["kind"], "conflict");
    assert_eq!(responses[2]["message"], "Hotel error: Room 101 has a reservation and cannot be removed");

    assert_eq!(responses[3]["status"], "invalid");

    assert_eq!(responses[4]["status"], "ok");
    assert_eq!(responses[4]["result"]["hotel"]["reservationCount"], 1);
    assert_eq!(responses[4]["result"]["hotel"]["roomCount"], 3);

    let hotel = session.registry().find("Alpha").unwrap();
    assert_price(hotel.total_earnings(), 5530.5);
}

#[test]
fn test_oversized_room_counts_are_rejected_and_the_session_goes_on() {
    let input = r#"
{"$type":"CreateHotel","name":"Big","standard":18446744073709551615,"deluxe":1}
{"$type":"ListHotels"}
"#;

    let (responses, session) = run(input);

    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["status"], "rejected");
    assert_eq!(responses[0]["kind"], "capacity");
    assert_eq!(responses[1]["status"], "ok");
    assert!(session.registry().hotels().is_empty());
}

#[test]
fn test_rejected_command_leaves_registry_unchanged() {
    let mut session = Session::new();
    session.execute(Command::CreateHotel { name: sample_hotel_name(), rooms: standard_rooms(3) });
    let before = session.registry().clone();

    let response = session.execute(Command::UpdateBasePrice {
        hotel: sample_hotel_name(),
        price: hotel_reservations::money::Price::new(50.0),
    });

    match response {
        Response::Rejected { kind, .. } => assert_eq!(kind, ErrorKind::Validation),
        other => panic!("Expected rejection, got {:?}", other),
    }
    assert_eq!(session.registry(), &before);
}

#[test]
fn test_booking_flow_lists_rooms_then_books_then_cancels() {
    let mut session = Session::new();
    session.execute(Command::CreateHotel { name: sample_hotel_name(), rooms: mixed_rooms() });

    let response = session.execute(Command::AvailableRooms {
        hotel: sample_hotel_name(),
        check_in: 14,
        check_out: 16,
    });
    let rooms = match response {
        Response::Ok { result: CommandSuccess::AvailableRooms { rooms } } => rooms,
        other => panic!("Expected available rooms, got {:?}", other),
    };
    assert_eq!(rooms.len(), 5);
    let executive = rooms.iter().find(|room| room.room_no == 105).unwrap();
    assert_price(executive.price_per_night, 1229.0 * 1.35);

    let response = session.execute(Command::Book {
        hotel: sample_hotel_name(),
        guest: other_guest(),
        check_in: 14,
        check_out: 16,
        room_no: 105,
        discount_code: "PAYDAY".to_string(),
    });
    assert!(matches!(response, Response::Ok { result: CommandSuccess::Booked { .. } }));

    let response = session.execute(Command::RoomInfo { hotel: sample_hotel_name(), room_no: 105 });
    match response {
        Response::Ok { result: CommandSuccess::Room { room } } => {
            assert_eq!(room.booked_days(), vec![14, 15]);
            assert_eq!(room.availability.len(), 31);
        }
        other => panic!("Expected room info, got {:?}", other),
    }

    let response = session.execute(Command::Occupancy { hotel: sample_hotel_name(), check_in: 15, check_out: 20 });
    match response {
        Response::Ok { result: CommandSuccess::Occupancy { occupancy } } => {
            assert_eq!((occupancy.available, occupancy.booked), (4, 1));
        }
        other => panic!("Expected occupancy, got {:?}", other),
    }

    let response = session.execute(Command::CancelReservation { hotel: sample_hotel_name(), guest: "MARIA CLARA".to_string() });
    assert!(matches!(response, Response::Ok { result: CommandSuccess::ReservationCancelled { .. } }));

    let response = session.execute(Command::ListGuests { hotel: sample_hotel_name() });
    assert_eq!(response, Response::Ok { result: CommandSuccess::Guests { guests: vec![] } });
}

#[test]
fn test_blank_lines_and_comments_are_skipped() {
    let mut session = Session::new();
    assert_eq!(session.execute_line("   "), None);
    assert_eq!(session.execute_line("# note"), None);
    assert!(matches!(
        session.execute_line(r#"{"$type":"ListHotels"}"#),
        Some(Response::Ok { result: CommandSuccess::Hotels { .. } })
    ));
}
