use crate::{MatchSlot, Player, PlayerId, Side};
use std::collections::{HashMap, HashSet};

/// Pairwise win counts between players.
///
/// `wins(a, b)` counts courts where a team containing `a` scored strictly
/// more tournament points than a team containing `b`. Drawn courts count for
/// nobody.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadToHead {
    wins: HashMap<(PlayerId, PlayerId), u32>,
}

/// Outcome of breaking one tie group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub order: Vec<Player>,
    /// Players ranked above at least one group member with a lower
    /// head-to-head score.
    pub winners: HashSet<PlayerId>,
}

impl HeadToHead {
    pub fn from_matches(matches: &[MatchSlot]) -> Self {
        let mut wins = HashMap::new();
        for slot in matches {
            for court in slot.courts() {
                let (winners, losers) = match court.winner() {
                    Some(Side::A) => (&court.team_a, &court.team_b),
                    Some(Side::B) => (&court.team_b, &court.team_a),
                    None => continue,
                };
                for &w in winners {
                    for &l in losers {
                        *wins.entry((w, l)).or_insert(0) += 1;
                    }
                }
            }
        }
        Self { wins }
    }

    pub fn wins(&self, player: PlayerId, opponent: PlayerId) -> u32 {
        self.wins.get(&(player, opponent)).copied().unwrap_or(0)
    }

    /// Sum of `member`'s wins over every other player in `group`.
    pub fn group_score(&self, member: PlayerId, group: &[Player]) -> u32 {
        group
            .iter()
            .filter(|p| p.id != member)
            .map(|p| self.wins(member, p.id))
            .sum()
    }

    /// Re-rank a tie group by mini-league score.
    ///
    /// This is a single pass: members still level after it keep their input
    /// order and are not split any further.
    pub fn resolve(&self, group: &[Player]) -> Resolution {
        let mut scored: Vec<(u32, &Player)> =
            group.iter().map(|p| (self.group_score(p.id, group), p)).collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        let lowest = scored.last().map(|(s, _)| *s).unwrap_or(0);
        let winners = scored
            .iter()
            .filter(|(s, _)| *s > lowest)
            .map(|(_, p)| p.id)
            .collect();

        Resolution {
            order: scored.into_iter().map(|(_, p)| p.clone()).collect(),
            winners,
        }
    }

    /// Square matrix of win counts, rows and columns in `players` order.
    pub fn matrix(&self, players: &[Player]) -> Vec<Vec<u32>> {
        players
            .iter()
            .map(|row| players.iter().map(|col| self.wins(row.id, col.id)).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CourtResult;

    fn court(a: [u32; 2], b: [u32; 2], ga: u8, gb: u8) -> CourtResult {
        CourtResult {
            games_a: Some(ga),
            games_b: Some(gb),
            ..CourtResult::new(a.map(PlayerId), b.map(PlayerId))
        }
    }

    fn slot(round: u8, c1: CourtResult, c2: Option<CourtResult>) -> MatchSlot {
        MatchSlot {
            round,
            time: String::new(),
            court1: c1,
            court2: c2,
            not_playing: PlayerId(99),
        }
    }

    fn group(ids: &[u32]) -> Vec<Player> {
        ids.iter().map(|&i| Player::new(i, format!("P{i}"))).collect()
    }

    fn ids(players: &[Player]) -> Vec<u32> {
        players.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn win_credits_every_winner_against_every_loser() {
        let h2h = HeadToHead::from_matches(&[slot(1, court([1, 2], [3, 4], 6, 3), None)]);
        for w in [1, 2] {
            for l in [3, 4] {
                assert_eq!(h2h.wins(PlayerId(w), PlayerId(l)), 1);
                assert_eq!(h2h.wins(PlayerId(l), PlayerId(w)), 0);
            }
        }
        assert_eq!(h2h.wins(PlayerId(1), PlayerId(2)), 0);
    }

    #[test]
    fn drawn_and_unplayed_courts_count_for_nobody() {
        let mut unplayed = court([1, 2], [3, 4], 0, 0);
        unplayed.games_b = None;
        let h2h = HeadToHead::from_matches(&[
            slot(1, court([1, 2], [3, 4], 4, 4), Some(unplayed)),
        ]);
        assert_eq!(h2h, HeadToHead::default());
    }

    #[test]
    fn three_way_cycle_stays_unresolved() {
        let h2h = HeadToHead::from_matches(&[
            slot(1, court([1, 4], [2, 5], 6, 2), None),
            slot(2, court([2, 6], [3, 7], 6, 2), None),
            slot(3, court([3, 8], [1, 9], 6, 2), None),
        ]);
        let tied = group(&[1, 2, 3]);
        for p in &tied {
            assert_eq!(h2h.group_score(p.id, &tied), 1);
        }
        let res = h2h.resolve(&tied);
        assert_eq!(ids(&res.order), vec![1, 2, 3]);
        assert!(res.winners.is_empty());
    }

    #[test]
    fn dominant_player_moves_up_and_is_marked() {
        let h2h = HeadToHead::from_matches(&[
            slot(1, court([1, 4], [2, 5], 6, 2), None),
            slot(2, court([1, 6], [3, 7], 6, 2), None),
            slot(3, court([3, 8], [2, 9], 6, 2), None),
        ]);
        let res = h2h.resolve(&group(&[2, 3, 1]));
        assert_eq!(ids(&res.order), vec![1, 3, 2]);
        assert_eq!(res.winners, HashSet::from([PlayerId(1), PlayerId(3)]));
    }

    #[test]
    fn sub_tie_keeps_input_order_and_only_the_bottom_is_unmarked() {
        // 1 and 2 both beat 3 once and never met
        let h2h = HeadToHead::from_matches(&[
            slot(1, court([1, 4], [3, 5], 6, 2), None),
            slot(2, court([2, 6], [3, 7], 6, 2), None),
        ]);
        let res = h2h.resolve(&group(&[3, 2, 1]));
        assert_eq!(ids(&res.order), vec![2, 1, 3]);
        assert_eq!(res.winners, HashSet::from([PlayerId(1), PlayerId(2)]));
    }

    #[test]
    fn wins_outside_the_group_are_ignored() {
        let h2h = HeadToHead::from_matches(&[
            slot(1, court([2, 4], [5, 6], 6, 0), None),
            slot(2, court([2, 7], [8, 9], 6, 0), None),
        ]);
        let res = h2h.resolve(&group(&[1, 2]));
        assert_eq!(ids(&res.order), vec![1, 2]);
        assert!(res.winners.is_empty());
    }

    #[test]
    fn decisive_court_is_antisymmetric() {
        let h2h = HeadToHead::from_matches(&[slot(1, court([1, 2], [3, 4], 5, 6), None)]);
        let players = group(&[1, 2, 3, 4]);
        let m = h2h.matrix(&players);
        for i in 0..4 {
            assert_eq!(m[i][i], 0);
            for j in 0..4 {
                assert!(m[i][j] == 0 || m[j][i] == 0);
            }
        }
        assert_eq!(m[2][0], 1);
        assert_eq!(m[0][2], 0);
    }
}
