//! End-to-end booking flow tests
//!
//! Drive the orchestrator the way the front desk would: open an account,
//! browse rooms, book, hit the refusal paths, cancel and audit the ledger.

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use gameclub_booking::*;

fn at(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
}

fn club_at(now: DateTime<Utc>) -> (BookingOrchestrator, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(now));
    let orchestrator =
        BookingOrchestrator::with_clock(BookingConfig::default(), clock.clone()).unwrap();
    (orchestrator, clock)
}

/// The seeded catalog matches the club floor plan
#[test]
fn test_seeded_catalog() {
    let (orchestrator, _) = club_at(at(10, 12));

    let rooms = orchestrator.list_rooms();
    assert_eq!(rooms.len(), 6);
    let by_category = |category: RoomCategory| {
        rooms
            .iter()
            .filter(|v| v.room.category == category)
            .count()
    };
    assert_eq!(by_category(RoomCategory::Vip), 2);
    assert_eq!(by_category(RoomCategory::Standard), 2);
    assert_eq!(by_category(RoomCategory::Vr), 2);

    // vr-2 starts out under maintenance, everything else is free
    for view in &rooms {
        if view.room.id.as_str() == "vr-2" {
            assert_eq!(view.status, RoomStatus::Maintenance);
        } else {
            assert_eq!(view.status, RoomStatus::Free);
        }
    }

    assert_eq!(orchestrator.games().len(), 5);
}

/// A three hour VIP session costs 1350₽ after the 10% tier discount
#[test]
fn test_discounted_vip_booking() {
    let (orchestrator, _) = club_at(at(10, 12));
    let account_id = orchestrator.open_account().unwrap();

    assert_eq!(orchestrator.quote(&"vip-1".into(), 3).unwrap(), 1350);

    let reservation = orchestrator
        .create_reservation(&BookingRequest {
            room_id: "vip-1".into(),
            game_id: "ml".into(),
            account_id,
            start_time: at(10, 16),
            duration_hours: 3,
        })
        .unwrap();

    assert_eq!(reservation.price, 1350);
    assert_eq!(reservation.status, ReservationStatus::Confirmed);
    assert_eq!(orchestrator.get_balance(account_id).unwrap(), 1150);
}

/// Overlapping bookings of the same room are refused; other rooms and
/// non-overlapping slots are not affected
#[test]
fn test_slot_conflicts() {
    let (orchestrator, _) = club_at(at(10, 12));
    let first_member = orchestrator.open_account().unwrap();
    let second_member = orchestrator.open_account().unwrap();

    orchestrator
        .create_reservation(&BookingRequest {
            room_id: "std-1".into(),
            game_id: "csgo".into(),
            account_id: first_member,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap();

    // Identical slot in the same room
    let err = orchestrator
        .create_reservation(&BookingRequest {
            room_id: "std-1".into(),
            game_id: "dota2".into(),
            account_id: second_member,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap_err();
    assert!(matches!(err, BookingError::SlotConflict { .. }));

    // Partial overlap is also a conflict
    let err = orchestrator
        .create_reservation(&BookingRequest {
            room_id: "std-1".into(),
            game_id: "dota2".into(),
            account_id: second_member,
            start_time: at(10, 17),
            duration_hours: 2,
        })
        .unwrap_err();
    assert!(matches!(err, BookingError::SlotConflict { .. }));

    // Back-to-back is fine: [16,18) then [18,20)
    orchestrator
        .create_reservation(&BookingRequest {
            room_id: "std-1".into(),
            game_id: "dota2".into(),
            account_id: second_member,
            start_time: at(10, 18),
            duration_hours: 2,
        })
        .unwrap();

    // So is the same slot in a different room
    orchestrator
        .create_reservation(&BookingRequest {
            room_id: "std-2".into(),
            game_id: "csgo".into(),
            account_id: second_member,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap();
}

/// A member who cannot cover the price is refused, keeps their balance,
/// and leaves the slot bookable
#[test]
fn test_insufficient_balance_leaves_no_trace() {
    let (orchestrator, _) = club_at(at(10, 12));
    let poor_member = orchestrator.open_account_with(400).unwrap();

    let err = orchestrator
        .create_reservation(&BookingRequest {
            room_id: "std-1".into(),
            game_id: "csgo".into(),
            account_id: poor_member,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap_err();

    assert_eq!(
        err,
        BookingError::InsufficientBalance {
            required: 600,
            available: 400
        }
    );
    assert_eq!(orchestrator.get_balance(poor_member).unwrap(), 400);

    // No charge was ever logged
    let causes: Vec<_> = orchestrator
        .transactions(poor_member)
        .into_iter()
        .map(|e| e.cause)
        .collect();
    assert_eq!(causes, vec![TxCause::OpeningBalance]);

    // The slot is free for the next member
    let solvent_member = orchestrator.open_account().unwrap();
    orchestrator
        .create_reservation(&BookingRequest {
            room_id: "std-1".into(),
            game_id: "csgo".into(),
            account_id: solvent_member,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap();
}

/// VR-only titles cannot be booked into PC rooms and vice versa
#[test]
fn test_game_compatibility_is_enforced() {
    let (orchestrator, _) = club_at(at(10, 12));
    let account_id = orchestrator.open_account().unwrap();

    let err = orchestrator
        .create_reservation(&BookingRequest {
            room_id: "vr-1".into(),
            game_id: "valorant".into(),
            account_id,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap_err();
    assert_eq!(
        err,
        BookingError::IncompatibleGame {
            game: "valorant".into(),
            category: RoomCategory::Vr,
        }
    );

    let err = orchestrator
        .create_reservation(&BookingRequest {
            room_id: "vip-1".into(),
            game_id: "vr5".into(),
            account_id,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap_err();
    assert!(matches!(err, BookingError::IncompatibleGame { .. }));

    // The VR title books fine in a VR room
    orchestrator
        .create_reservation(&BookingRequest {
            room_id: "vr-1".into(),
            game_id: "vr5".into(),
            account_id,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap();
}

/// Cancellation refunds the full charged price and frees the slot
#[test]
fn test_cancellation_refund_and_slot_release() {
    let (orchestrator, _) = club_at(at(10, 12));
    let account_id = orchestrator.open_account().unwrap();

    let reservation = orchestrator
        .create_reservation(&BookingRequest {
            room_id: "vr-1".into(),
            game_id: "vr5".into(),
            account_id,
            start_time: at(10, 18),
            duration_hours: 2,
        })
        .unwrap();
    // 800 * 2 with the 10% VR tier
    assert_eq!(reservation.price, 1440);
    assert_eq!(orchestrator.get_balance(account_id).unwrap(), 1060);

    let cancelled = orchestrator.cancel_reservation(reservation.id).unwrap();
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);
    assert_eq!(orchestrator.get_balance(account_id).unwrap(), 2500);

    // The slot can be booked again
    orchestrator
        .create_reservation(&BookingRequest {
            room_id: "vr-1".into(),
            game_id: "vr5".into(),
            account_id,
            start_time: at(10, 18),
            duration_hours: 2,
        })
        .unwrap();
}

/// Cancellation is refused inside the lead-time window
#[test]
fn test_cancellation_lead_time_window() {
    let (orchestrator, clock) = club_at(at(10, 12));
    let account_id = orchestrator.open_account().unwrap();

    let reservation = orchestrator
        .create_reservation(&BookingRequest {
            room_id: "std-1".into(),
            game_id: "csgo".into(),
            account_id,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap();

    // 90 minutes before start is inside the 2 hour window
    clock.set(Utc.with_ymd_and_hms(2024, 6, 10, 14, 30, 0).unwrap());
    let err = orchestrator.cancel_reservation(reservation.id).unwrap_err();
    assert!(matches!(err, BookingError::Validation(_)));
    // No refund happened
    assert_eq!(orchestrator.get_balance(account_id).unwrap(), 1900);
}

/// Room status follows the timeline of a confirmed reservation
#[test]
fn test_room_status_lifecycle() {
    let (orchestrator, clock) = club_at(at(10, 12));
    let account_id = orchestrator.open_account().unwrap();
    let room_id: RoomId = "std-1".into();

    orchestrator
        .create_reservation(&BookingRequest {
            room_id: room_id.clone(),
            game_id: "csgo".into(),
            account_id,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap();

    assert_eq!(
        orchestrator.get_room(&room_id).unwrap().status,
        RoomStatus::Reserved
    );

    clock.set(at(10, 17));
    assert_eq!(
        orchestrator.get_room(&room_id).unwrap().status,
        RoomStatus::Occupied
    );

    clock.set(at(10, 18));
    assert_eq!(
        orchestrator.get_room(&room_id).unwrap().status,
        RoomStatus::Free
    );

    // The elapsed session can be swept to Completed
    assert_eq!(orchestrator.sweep_completed(), 1);
    let history = orchestrator.reservations_for_account(account_id);
    assert_eq!(history[0].status, ReservationStatus::Completed);
}

/// Maintenance blocks booking until the room returns to service
#[test]
fn test_maintenance_blocks_booking() {
    let (orchestrator, _) = club_at(at(10, 12));
    let account_id = orchestrator.open_account_with(10_000).unwrap();
    let request = BookingRequest {
        room_id: "vr-2".into(),
        game_id: "vr5".into(),
        account_id,
        start_time: at(10, 16),
        duration_hours: 2,
    };

    let err = orchestrator.create_reservation(&request).unwrap_err();
    assert!(matches!(err, BookingError::RoomUnavailable { .. }));

    orchestrator.set_maintenance(&"vr-2".into(), false).unwrap();
    orchestrator.create_reservation(&request).unwrap();
}

/// Unknown rooms, games, accounts and reservations report NotFound errors
#[test]
fn test_not_found_taxonomy() {
    let (orchestrator, _) = club_at(at(10, 12));
    let account_id = orchestrator.open_account().unwrap();

    let err = orchestrator
        .create_reservation(&BookingRequest {
            room_id: "vip-9".into(),
            game_id: "csgo".into(),
            account_id,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap_err();
    assert!(matches!(err, BookingError::RoomNotFound(_)));

    let err = orchestrator
        .create_reservation(&BookingRequest {
            room_id: "vip-1".into(),
            game_id: "tetris".into(),
            account_id,
            start_time: at(10, 16),
            duration_hours: 2,
        })
        .unwrap_err();
    assert!(matches!(err, BookingError::GameNotFound(_)));

    let err = orchestrator
        .cancel_reservation(ReservationId::new())
        .unwrap_err();
    assert!(matches!(err, BookingError::ReservationNotFound(_)));

    let err = orchestrator.get_balance(AccountId::new()).unwrap_err();
    assert!(matches!(err, BookingError::AccountNotFound(_)));
}

/// Duration bounds and past start times are rejected up front
#[test]
fn test_request_validation() {
    let (orchestrator, _) = club_at(at(10, 12));
    let account_id = orchestrator.open_account_with(50_000).unwrap();
    let request = |start: DateTime<Utc>, hours: u8| BookingRequest {
        room_id: "std-1".into(),
        game_id: "csgo".into(),
        account_id,
        start_time: start,
        duration_hours: hours,
    };

    assert!(matches!(
        orchestrator.create_reservation(&request(at(10, 16), 0)),
        Err(BookingError::Validation(_))
    ));
    assert!(matches!(
        orchestrator.create_reservation(&request(at(10, 16), 7)),
        Err(BookingError::Validation(_))
    ));
    assert!(matches!(
        orchestrator.create_reservation(&request(at(10, 11), 2)),
        Err(BookingError::Validation(_))
    ));
    // Starting exactly now is allowed
    orchestrator
        .create_reservation(&request(at(10, 12), 2))
        .unwrap();
}
