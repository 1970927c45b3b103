use crate::{HeadToHead, MatchSlot, Player, PlayerId, Tournament, aggregate};
use log::debug;
use std::cmp::Ordering;
use std::ops::Range;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingRow {
    /// 1-based position.
    pub rank: usize,
    pub player: Player,
    pub won_by_head_to_head: bool,
}

/// Final table plus everything needed to explain it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Standings {
    pub rows: Vec<StandingRow>,
    pub head_to_head: HeadToHead,
    /// Index ranges into `rows` that were level on points, differential and
    /// games won before the head-to-head pass.
    pub tie_groups: Vec<Range<usize>>,
}

impl Standings {
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.rows.iter().map(|r| &r.player)
    }

    /// Players whose position was settled by the head-to-head mini-league.
    pub fn decided_by_head_to_head(&self) -> Vec<PlayerId> {
        self.rows
            .iter()
            .filter(|r| r.won_by_head_to_head)
            .map(|r| r.player.id)
            .collect()
    }

    pub fn row(&self, id: PlayerId) -> Option<&StandingRow> {
        self.rows.iter().find(|r| r.player.id == id)
    }
}

/// Points, then game differential, then games won, all descending.
pub fn compare(a: &Player, b: &Player) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| b.game_differential.cmp(&a.game_differential))
        .then_with(|| b.games_won.cmp(&a.games_won))
}

/// Maximal runs of two or more adjacent players with the same ranking key.
/// `sorted` must already be ordered by [`compare`].
pub fn tie_groups(sorted: &[Player]) -> Vec<Range<usize>> {
    let mut groups = Vec::new();
    let mut start = 0;
    for idx in 1..=sorted.len() {
        let boundary = idx == sorted.len() || sorted[idx].ranking_key() != sorted[start].ranking_key();
        if boundary {
            if idx - start >= 2 {
                groups.push(start..idx);
            }
            start = idx;
        }
    }
    groups
}

/// Rank already aggregated players, breaking exact ties head-to-head.
pub fn standings(players: &[Player], matches: &[MatchSlot]) -> Standings {
    let mut sorted = players.to_vec();
    sorted.sort_by(compare);

    let head_to_head = HeadToHead::from_matches(matches);
    let groups = tie_groups(&sorted);
    let mut flags = vec![false; sorted.len()];

    for range in &groups {
        let resolution = head_to_head.resolve(&sorted[range.clone()]);
        debug!(
            "tie at {:?} on {:?}: resolved to {:?}",
            range,
            sorted[range.start].ranking_key(),
            resolution.order.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
        );
        for (offset, player) in resolution.order.into_iter().enumerate() {
            let idx = range.start + offset;
            flags[idx] = resolution.winners.contains(&player.id);
            sorted[idx] = player;
        }
    }

    let rows = sorted
        .into_iter()
        .zip(flags)
        .enumerate()
        .map(|(idx, (player, won_by_head_to_head))| StandingRow {
            rank: idx + 1,
            player,
            won_by_head_to_head,
        })
        .collect();

    Standings {
        rows,
        head_to_head,
        tie_groups: groups,
    }
}

/// Full recompute from raw results: aggregate, then rank.
pub fn compute(tournament: &Tournament) -> Standings {
    let players = aggregate(&tournament.players, &tournament.matches);
    standings(&players, &tournament.matches)
}
