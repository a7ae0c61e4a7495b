use proptest::prelude::*;

use crate::domain::format::DraftFormat;
use crate::domain::routing::next_position;
use crate::domain::seat_state::{QueuedPack, SeatSnapshot, SeatState};

#[test]
fn seat_walks_through_all_rounds_at_pack_boundaries() {
    let f = DraftFormat::STANDARD;
    let mut round = 1;
    for picks in 1..=45u64 {
        round = f.advance_round(round, picks);
        let expected = match picks {
            0..=14 => 1,
            15..=29 => 2,
            30..=44 => 3,
            _ => 4,
        };
        assert_eq!(round, expected, "after {picks} picks");
    }
    assert!(f.is_past_last_round(round));
}

#[test]
fn advancing_never_lowers_a_round() {
    let f = DraftFormat::STANDARD;
    assert_eq!(f.advance_round(3, 15), 3);
    assert_eq!(f.advance_round(2, 0), 2);
}

#[test]
fn finished_seat_reports_draft_finished() {
    let f = DraftFormat::STANDARD;
    let seat = SeatSnapshot {
        seat_id: 1,
        position: 0,
        user_id: Some(1),
        contact_id: None,
        round: f.advance_round(3, 45),
        picks_pile_size: 45,
        queued: vec![QueuedPack { pack_id: 2, round: 3, count: 0 }],
    };
    assert_eq!(seat.state(&f), SeatState::DraftFinished);
}

proptest! {
    /// Simulate a full table picking in lockstep: each seat holds exactly one
    /// pack per pick, so every seat reaches the next round after
    /// `cards_per_pack` picks.
    #[test]
    fn lockstep_table_advances_together(
        table_size in 2u8..9,
        cards_per_pack in 1u32..16,
        round_count in 1i32..4,
    ) {
        let f = DraftFormat::new(table_size, cards_per_pack, round_count).unwrap();
        let seats = usize::from(table_size);
        let mut rounds = vec![1i32; seats];
        let mut picks = vec![0u64; seats];
        for round in 1..=round_count {
            for _ in 0..cards_per_pack {
                let mut passed_to = Vec::with_capacity(seats);
                for seat in 0..seats {
                    picks[seat] += 1;
                    let pos = i32::try_from(seat).unwrap();
                    passed_to.push(next_position(pos, round, table_size).unwrap());
                }
                passed_to.sort_unstable();
                passed_to.dedup();
                prop_assert_eq!(passed_to.len(), seats);
            }
            for seat in 0..seats {
                rounds[seat] = f.advance_round(rounds[seat], picks[seat]);
                prop_assert_eq!(rounds[seat], round + 1);
            }
        }
        prop_assert!(rounds.iter().all(|r| f.is_past_last_round(*r)));
    }
}
