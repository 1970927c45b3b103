use crate::{CourtResult, MatchSlot, Player, PlayerId, ValidationError, ValidationResult};
use chrono::{NaiveTime, TimeDelta};

pub const SEATS: usize = 9;
pub const ROUNDS: usize = 9;

/// Seat numbers (1-based) per round: court 1 team A/B, court 2 team A/B, sitting out.
///
/// Every pair of seats partners exactly once and every seat sits out once.
const ROUND_ROBIN_9: [[[u8; 2]; 4]; ROUNDS] = [
    [[2, 3], [4, 7], [5, 9], [6, 8]],
    [[3, 4], [5, 8], [6, 1], [7, 9]],
    [[4, 5], [6, 9], [7, 2], [8, 1]],
    [[5, 6], [7, 1], [8, 3], [9, 2]],
    [[6, 7], [8, 2], [9, 4], [1, 3]],
    [[7, 8], [9, 3], [1, 5], [2, 4]],
    [[8, 9], [1, 4], [2, 6], [3, 5]],
    [[9, 1], [2, 5], [3, 7], [4, 6]],
    [[1, 2], [3, 6], [4, 8], [5, 7]],
];

/// Lay the fixed nine-round schedule over exactly nine players, seated in
/// the order given. Round `r` starts at `start + (r - 1) * slot`.
pub fn round_robin(players: &[Player], start: NaiveTime, slot: TimeDelta) -> ValidationResult<Vec<MatchSlot>> {
    if players.len() != SEATS {
        return Err(ValidationError::PlayerCount {
            expected: SEATS,
            found: players.len(),
        });
    }

    let seat = |n: u8| -> PlayerId { players[usize::from(n) - 1].id };
    let team = |pair: [u8; 2]| -> [PlayerId; 2] { pair.map(seat) };

    let mut time = start;
    let mut matches = Vec::with_capacity(ROUNDS);
    for (idx, courts) in ROUND_ROBIN_9.iter().enumerate() {
        let round = idx as u8 + 1;
        matches.push(MatchSlot {
            round,
            time: time.format("%H:%M").to_string(),
            court1: CourtResult::new(team(courts[0]), team(courts[1])),
            court2: Some(CourtResult::new(team(courts[2]), team(courts[3]))),
            not_playing: seat(round),
        });
        time += slot;
    }
    Ok(matches)
}
