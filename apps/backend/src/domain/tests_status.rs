use crate::domain::format::DraftFormat;
use crate::domain::status::{classify, DraftListEntry, DraftStatus, SeatTally, Viewer};

const ALICE: Viewer = Viewer::User(7);

#[test]
fn members_are_members_even_when_finished() {
    assert_eq!(classify(true, true, ALICE, 0), DraftStatus::Member);
    assert_eq!(classify(true, false, ALICE, 3), DraftStatus::Member);
}

#[test]
fn finished_drafts_are_open_to_spectators() {
    assert_eq!(classify(false, true, Viewer::Anonymous, 0), DraftStatus::Spectator);
    assert_eq!(classify(false, true, ALICE, 2), DraftStatus::Spectator);
}

#[test]
fn anonymous_viewers_see_running_drafts_closed() {
    assert_eq!(classify(false, false, Viewer::Anonymous, 0), DraftStatus::Closed);
    assert_eq!(classify(false, false, Viewer::Anonymous, 5), DraftStatus::Closed);
}

#[test]
fn full_tables_are_spectated_and_open_tables_joinable() {
    assert_eq!(classify(false, false, ALICE, 0), DraftStatus::Spectator);
    assert_eq!(classify(false, false, ALICE, 1), DraftStatus::Joinable);
}

#[test]
fn draft_without_seats_is_not_finished() {
    let tally = SeatTally::default();
    assert!(!tally.is_finished(&DraftFormat::STANDARD));
}

#[test]
fn draft_finishes_when_slowest_seat_passes_last_round() {
    let f = DraftFormat::STANDARD;
    let running = SeatTally {
        seats: 8,
        available_seats: 0,
        joined: false,
        min_round: Some(3),
    };
    assert!(!running.is_finished(&f));
    let done = SeatTally {
        min_round: Some(4),
        ..running
    };
    assert!(done.is_finished(&f));
}

#[test]
fn entry_serializes_camel_case_with_lowercase_status() {
    let entry = DraftListEntry::from_tally(
        3,
        "cube night".into(),
        SeatTally {
            seats: 8,
            available_seats: 2,
            joined: false,
            min_round: Some(1),
        },
        ALICE,
        &DraftFormat::STANDARD,
    );
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["availableSeats"], 2);
    assert_eq!(json["status"], "joinable");
    assert_eq!(json["finished"], false);
}

#[test]
fn viewer_wire_id_is_zero_for_anonymous() {
    assert_eq!(Viewer::Anonymous.wire_id(), 0);
    assert_eq!(Viewer::from_user_id(Some(0)), Viewer::Anonymous);
    assert_eq!(Viewer::from_user_id(Some(9)).wire_id(), 9);
}
