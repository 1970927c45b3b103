use crate::{MatchSlot, Player, PlayerId, Side};
use std::collections::HashMap;

/// Fold every court result into fresh per-player totals.
///
/// Returns new player records in input order with `score`, `games_won`,
/// `games_lost` and `game_differential` recomputed from zero; every other
/// field is carried over untouched. A side's games count toward its players
/// as soon as they are entered, but games lost are only booked once the
/// opponent's games are entered too, so a half-entered court can leave the
/// differential lopsided until the other side is filled in.
///
/// Ids on court that are not in `players` are skipped.
pub fn aggregate(players: &[Player], matches: &[MatchSlot]) -> Vec<Player> {
    let mut out: Vec<Player> = players
        .iter()
        .map(|p| Player {
            score: 0,
            games_won: 0,
            games_lost: 0,
            game_differential: 0,
            ..p.clone()
        })
        .collect();

    let index: HashMap<PlayerId, usize> = out.iter().enumerate().map(|(i, p)| (p.id, i)).collect();

    for slot in matches {
        for court in slot.courts() {
            let (points_a, points_b) = court.points();
            for (side, points, opponent) in [(Side::A, points_a, Side::B), (Side::B, points_b, Side::A)] {
                let Some(won) = court.games(side) else {
                    continue;
                };
                let lost = court.games(opponent);
                for id in court.team(side) {
                    let Some(&idx) = index.get(id) else {
                        continue;
                    };
                    let player = &mut out[idx];
                    player.score += u32::from(points);
                    player.games_won += u32::from(won);
                    if let Some(lost) = lost {
                        player.games_lost += u32::from(lost);
                    }
                }
            }
        }
    }

    for player in &mut out {
        player.game_differential = player.games_won as i32 - player.games_lost as i32;
    }

    out
}
