pub mod aggregate;
pub mod export;
pub mod head_to_head;
pub mod points;
pub mod schedule;
pub mod table;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub use aggregate::aggregate;
pub use head_to_head::{HeadToHead, Resolution};
pub use points::points_for;
pub use table::{StandingRow, Standings, compute, standings};

pub type ValidationResult<T> = Result<T, ValidationError>;

// ---------------------------------------------------------------------------
// Domain types: mirror the persisted tournament document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A player and the totals derived from match results.
///
/// The derived fields are only ever written by [`aggregate`]; values read from
/// disk are overwritten on the next aggregation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    #[serde(default)]
    pub score: u32,
    #[serde(default)]
    pub games_won: u32,
    #[serde(default)]
    pub games_lost: u32,
    #[serde(default)]
    pub game_differential: i32,
}

impl Player {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: PlayerId(id),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Composite standings key: points, then differential, then games won.
    pub fn ranking_key(&self) -> (u32, i32, u32) {
        (self.score, self.game_differential, self.games_won)
    }
}

/// Tennis-style in-progress point, only consulted when games are level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PointToken {
    #[serde(rename = "0")]
    Zero,
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "40")]
    Forty,
    #[serde(rename = "AD")]
    Advantage,
}

impl PointToken {
    pub const ALL: [PointToken; 5] = [
        PointToken::Zero,
        PointToken::Fifteen,
        PointToken::Thirty,
        PointToken::Forty,
        PointToken::Advantage,
    ];

    /// Index in the fixed order 0, 15, 30, 40, AD.
    pub fn rank(self) -> usize {
        match self {
            PointToken::Zero => 0,
            PointToken::Fifteen => 1,
            PointToken::Thirty => 2,
            PointToken::Forty => 3,
            PointToken::Advantage => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PointToken::Zero => "0",
            PointToken::Fifteen => "15",
            PointToken::Thirty => "30",
            PointToken::Forty => "40",
            PointToken::Advantage => "AD",
        }
    }

    /// Step forward through unset → 0 → 15 → 30 → 40 → AD → unset.
    pub fn next(token: Option<Self>) -> Option<Self> {
        match token {
            None => Some(PointToken::Zero),
            Some(PointToken::Advantage) => None,
            Some(t) => Self::ALL.get(t.rank() + 1).copied(),
        }
    }

    pub fn prev(token: Option<Self>) -> Option<Self> {
        match token {
            None => Some(PointToken::Advantage),
            Some(PointToken::Zero) => None,
            Some(t) => Self::ALL.get(t.rank() - 1).copied(),
        }
    }
}

impl fmt::Display for PointToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Court {
    One,
    Two,
}

impl Court {
    pub fn number(self) -> u8 {
        match self {
            Court::One => 1,
            Court::Two => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    A,
    B,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourtResult {
    pub team_a: [PlayerId; 2],
    pub team_b: [PlayerId; 2],
    #[serde(default)]
    pub games_a: Option<u8>,
    #[serde(default)]
    pub games_b: Option<u8>,
    #[serde(default, rename = "scoreA")]
    pub point_a: Option<PointToken>,
    #[serde(default, rename = "scoreB")]
    pub point_b: Option<PointToken>,
}

impl CourtResult {
    pub fn new(team_a: [PlayerId; 2], team_b: [PlayerId; 2]) -> Self {
        Self {
            team_a,
            team_b,
            ..Self::default()
        }
    }

    /// Tournament points for (team A, team B). The one place a court's
    /// result is turned into points, shared by display and aggregation.
    pub fn points(&self) -> (u8, u8) {
        points_for(self.games_a, self.games_b, self.point_a, self.point_b)
    }

    /// The side that scored strictly more tournament points, if any.
    pub fn winner(&self) -> Option<Side> {
        let (a, b) = self.points();
        match a.cmp(&b) {
            std::cmp::Ordering::Greater => Some(Side::A),
            std::cmp::Ordering::Less => Some(Side::B),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn team(&self, side: Side) -> &[PlayerId; 2] {
        match side {
            Side::A => &self.team_a,
            Side::B => &self.team_b,
        }
    }

    pub fn games(&self, side: Side) -> Option<u8> {
        match side {
            Side::A => self.games_a,
            Side::B => self.games_b,
        }
    }

    pub fn point(&self, side: Side) -> Option<PointToken> {
        match side {
            Side::A => self.point_a,
            Side::B => self.point_b,
        }
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.team_a.iter().chain(self.team_b.iter()).copied()
    }

    /// Both sides have games entered.
    pub fn is_complete(&self) -> bool {
        self.games_a.is_some() && self.games_b.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSlot {
    pub round: u8,
    #[serde(default)]
    pub time: String,
    pub court1: CourtResult,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub court2: Option<CourtResult>,
    pub not_playing: PlayerId,
}

impl MatchSlot {
    /// The courts played this round, in court order.
    pub fn courts(&self) -> impl Iterator<Item = &CourtResult> {
        std::iter::once(&self.court1).chain(self.court2.iter())
    }

    pub fn court(&self, court: Court) -> Option<&CourtResult> {
        match court {
            Court::One => Some(&self.court1),
            Court::Two => self.court2.as_ref(),
        }
    }

    pub fn court_mut(&mut self, court: Court) -> Option<&mut CourtResult> {
        match court {
            Court::One => Some(&mut self.court1),
            Court::Two => self.court2.as_mut(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub matches: Vec<MatchSlot>,
    #[serde(default = "first_round")]
    pub current_round: u8,
}

fn first_round() -> u8 {
    1
}

impl Tournament {
    pub fn is_empty(&self) -> bool {
        self.players.is_empty() && self.matches.is_empty()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Display name for a player id, falling back to the id itself.
    pub fn player_name(&self, id: PlayerId) -> String {
        self.player(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn round(&self, round: u8) -> Option<&MatchSlot> {
        self.matches.iter().find(|m| m.round == round)
    }

    pub fn rounds(&self) -> Vec<u8> {
        let mut rounds: Vec<u8> = self.matches.iter().map(|m| m.round).collect();
        rounds.sort_unstable();
        rounds.dedup();
        rounds
    }

    pub fn court(&self, round: u8, court: Court) -> Option<&CourtResult> {
        self.round(round)?.court(court)
    }

    pub fn court_mut(&mut self, round: u8, court: Court) -> Option<&mut CourtResult> {
        self.matches
            .iter_mut()
            .find(|m| m.round == round)?
            .court_mut(court)
    }

    /// Overwrite the games won by one side. Returns false if the court does not exist.
    pub fn set_games(&mut self, round: u8, court: Court, side: Side, games: Option<u8>) -> bool {
        let Some(result) = self.court_mut(round, court) else {
            return false;
        };
        match side {
            Side::A => result.games_a = games,
            Side::B => result.games_b = games,
        }
        true
    }

    pub fn set_point(
        &mut self,
        round: u8,
        court: Court,
        side: Side,
        point: Option<PointToken>,
    ) -> bool {
        let Some(result) = self.court_mut(round, court) else {
            return false;
        };
        match side {
            Side::A => result.point_a = point,
            Side::B => result.point_b = point,
        }
        true
    }

    pub fn clear_side(&mut self, round: u8, court: Court, side: Side) -> bool {
        self.set_games(round, court, side, None) && self.set_point(round, court, side, None)
    }

    /// Reject documents the standings engine cannot give a meaningful answer for.
    pub fn validate(&self) -> ValidationResult<()> {
        let mut known = HashSet::with_capacity(self.players.len());
        for player in &self.players {
            if !known.insert(player.id) {
                return Err(ValidationError::DuplicatePlayerId(player.id));
            }
        }
        if !self.players.is_empty() && self.players.len() != schedule::SEATS {
            return Err(ValidationError::PlayerCount {
                expected: schedule::SEATS,
                found: self.players.len(),
            });
        }

        let mut rounds = HashSet::with_capacity(self.matches.len());
        for slot in &self.matches {
            if !rounds.insert(slot.round) {
                return Err(ValidationError::DuplicateRound(slot.round));
            }

            if !known.contains(&slot.not_playing) {
                return Err(ValidationError::UnknownPlayer {
                    round: slot.round,
                    player: slot.not_playing,
                });
            }

            let mut in_round = HashSet::with_capacity(8);
            for (idx, court) in slot.courts().enumerate() {
                let court_no = idx as u8 + 1;
                let mut seen = HashSet::with_capacity(4);
                for player in court.players() {
                    if !known.contains(&player) {
                        return Err(ValidationError::UnknownPlayer { round: slot.round, player });
                    }
                    if !seen.insert(player) {
                        return Err(ValidationError::DuplicateOnCourt {
                            round: slot.round,
                            court: court_no,
                            player,
                        });
                    }
                    if !in_round.insert(player) {
                        return Err(ValidationError::OnBothCourts {
                            round: slot.round,
                            player,
                        });
                    }
                    if player == slot.not_playing {
                        return Err(ValidationError::SittingOutPlayerOnCourt {
                            round: slot.round,
                            player,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicatePlayerId(PlayerId),
    DuplicateRound(u8),
    UnknownPlayer { round: u8, player: PlayerId },
    DuplicateOnCourt { round: u8, court: u8, player: PlayerId },
    SittingOutPlayerOnCourt { round: u8, player: PlayerId },
    OnBothCourts { round: u8, player: PlayerId },
    PlayerCount { expected: usize, found: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicatePlayerId(id) => write!(f, "player id {id} is used twice"),
            ValidationError::DuplicateRound(round) => {
                write!(f, "round {round} is scheduled more than once")
            }
            ValidationError::UnknownPlayer { round, player } => {
                write!(f, "round {round} references unknown player {player}")
            }
            ValidationError::DuplicateOnCourt { round, court, player } => {
                write!(f, "player {player} appears twice on court {court} in round {round}")
            }
            ValidationError::SittingOutPlayerOnCourt { round, player } => {
                write!(f, "player {player} sits out round {round} but is also on court")
            }
            ValidationError::OnBothCourts { round, player } => {
                write!(f, "player {player} is on both courts in round {round}")
            }
            ValidationError::PlayerCount { expected, found } => {
                write!(f, "schedule needs {expected} players, got {found}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(a: u32, b: u32) -> [PlayerId; 2] {
        [PlayerId(a), PlayerId(b)]
    }

    fn small_tournament() -> Tournament {
        Tournament {
            id: "t1".into(),
            name: "Sunday Americano".into(),
            players: (1..=9).map(|i| Player::new(i, format!("P{i}"))).collect(),
            matches: vec![MatchSlot {
                round: 1,
                time: "10:00".into(),
                court1: CourtResult::new(ids(1, 2), ids(3, 4)),
                court2: None,
                not_playing: PlayerId(5),
            }],
            current_round: 1,
        }
    }

    #[test]
    fn point_token_cycles_through_unset() {
        let mut token = None;
        let mut seen = Vec::new();
        for _ in 0..6 {
            token = PointToken::next(token);
            seen.push(token);
        }
        assert_eq!(
            seen,
            vec![
                Some(PointToken::Zero),
                Some(PointToken::Fifteen),
                Some(PointToken::Thirty),
                Some(PointToken::Forty),
                Some(PointToken::Advantage),
                None,
            ]
        );
        assert_eq!(PointToken::prev(None), Some(PointToken::Advantage));
        assert_eq!(PointToken::prev(Some(PointToken::Zero)), None);
    }

    #[test]
    fn court_result_parses_persisted_shape() {
        let json = r#"{"teamA":[1,2],"teamB":[3,4],"gamesA":5,"gamesB":null,"scoreA":"AD"}"#;
        let court: CourtResult = serde_json::from_str(json).unwrap();
        assert_eq!(court.team_a, ids(1, 2));
        assert_eq!(court.games_a, Some(5));
        assert_eq!(court.games_b, None);
        assert_eq!(court.point_a, Some(PointToken::Advantage));
        assert_eq!(court.point_b, None);
    }

    #[test]
    fn court_result_rejects_three_player_team() {
        let json = r#"{"teamA":[1,2,5],"teamB":[3,4]}"#;
        assert!(serde_json::from_str::<CourtResult>(json).is_err());
    }

    #[test]
    fn court_result_rejects_unknown_point_token() {
        let json = r#"{"teamA":[1,2],"teamB":[3,4],"scoreA":"50"}"#;
        assert!(serde_json::from_str::<CourtResult>(json).is_err());
    }

    #[test]
    fn tournament_serializes_camel_case() {
        let json = serde_json::to_value(small_tournament()).unwrap();
        assert_eq!(json["currentRound"], 1);
        assert_eq!(json["matches"][0]["notPlaying"], 5);
        assert_eq!(json["players"][0]["gameDifferential"], 0);
        assert!(json["matches"][0].get("court2").is_none());
    }

    #[test]
    fn set_games_and_clear_side() {
        let mut t = small_tournament();
        assert!(t.set_games(1, Court::One, Side::A, Some(6)));
        assert!(t.set_point(1, Court::One, Side::A, Some(PointToken::Forty)));
        assert_eq!(t.court(1, Court::One).unwrap().games_a, Some(6));
        assert!(t.clear_side(1, Court::One, Side::A));
        let court = t.court(1, Court::One).unwrap();
        assert_eq!(court.games_a, None);
        assert_eq!(court.point_a, None);
        assert!(!t.set_games(1, Court::Two, Side::A, Some(1)));
        assert!(!t.set_games(7, Court::One, Side::A, Some(1)));
    }

    #[test]
    fn validate_accepts_well_formed_tournament() {
        assert_eq!(small_tournament().validate(), Ok(()));
        assert_eq!(Tournament::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_unknown_player() {
        let mut t = small_tournament();
        t.matches[0].court1.team_b = ids(3, 42);
        assert_eq!(
            t.validate(),
            Err(ValidationError::UnknownPlayer { round: 1, player: PlayerId(42) })
        );
    }

    #[test]
    fn validate_rejects_player_on_both_teams() {
        let mut t = small_tournament();
        t.matches[0].court1.team_b = ids(3, 1);
        assert_eq!(
            t.validate(),
            Err(ValidationError::DuplicateOnCourt { round: 1, court: 1, player: PlayerId(1) })
        );
    }

    #[test]
    fn validate_rejects_sitting_out_player_on_court() {
        let mut t = small_tournament();
        t.matches[0].not_playing = PlayerId(4);
        assert_eq!(
            t.validate(),
            Err(ValidationError::SittingOutPlayerOnCourt { round: 1, player: PlayerId(4) })
        );
    }

    #[test]
    fn validate_rejects_duplicate_rounds_and_ids() {
        let mut t = small_tournament();
        t.matches.push(t.matches[0].clone());
        assert_eq!(t.validate(), Err(ValidationError::DuplicateRound(1)));

        let mut t = small_tournament();
        t.players.push(Player::new(2, "Again"));
        assert_eq!(t.validate(), Err(ValidationError::DuplicatePlayerId(PlayerId(2))));
    }

    #[test]
    fn validate_rejects_wrong_player_count() {
        let mut t = small_tournament();
        t.players.truncate(5);
        assert_eq!(
            t.validate(),
            Err(ValidationError::PlayerCount { expected: 9, found: 5 })
        );
    }

    #[test]
    fn validate_rejects_player_on_both_courts() {
        let mut t = small_tournament();
        t.matches[0].court2 = Some(CourtResult::new(ids(1, 6), ids(7, 8)));
        assert_eq!(
            t.validate(),
            Err(ValidationError::OnBothCourts { round: 1, player: PlayerId(1) })
        );
    }
}
