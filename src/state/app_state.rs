use crate::app::MenuItem;
use padel_standings::{Court, CourtResult, PointToken, Side, Standings, Tournament, compute};

/// Highest games count the entry keys will go to.
pub const MAX_GAMES: u8 = 20;

/// The four editable team sides of a round, in screen order.
pub const SIDES: [(Court, Side); 4] = [
    (Court::One, Side::A),
    (Court::One, Side::B),
    (Court::Two, Side::A),
    (Court::Two, Side::B),
];

// ---------------------------------------------------------------------------
// Scorebook state: tournament document plus its derived standings
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ScorebookState {
    pub tournament: Tournament,
    /// Always recomputed in full from `tournament`, never patched.
    pub standings: Standings,
    /// The round shown on the Results tab.
    pub view_round: u8,
    /// Index into [`SIDES`].
    pub selected_side: usize,
}

impl ScorebookState {
    pub fn load(&mut self, tournament: Tournament) {
        let rounds = tournament.rounds();
        self.view_round = if rounds.contains(&tournament.current_round) {
            tournament.current_round
        } else {
            rounds.first().copied().unwrap_or(1)
        };
        self.selected_side = 0;
        self.tournament = tournament;
        self.recompute();
    }

    pub fn recompute(&mut self) {
        self.standings = compute(&self.tournament);
    }

    /// Returns whether the round changed.
    pub fn navigate_round_next(&mut self) -> bool {
        let next = self.tournament.rounds().into_iter().find(|r| *r > self.view_round);
        self.go_to_round(next)
    }

    pub fn navigate_round_prev(&mut self) -> bool {
        let prev = self.tournament.rounds().into_iter().rev().find(|r| *r < self.view_round);
        self.go_to_round(prev)
    }

    fn go_to_round(&mut self, round: Option<u8>) -> bool {
        let Some(round) = round else {
            return false;
        };
        self.view_round = round;
        self.tournament.current_round = round;
        // the new round may have fewer courts
        self.selected_side = self.selected_side.min(self.sides_in_view().saturating_sub(1));
        true
    }

    pub fn navigate_side_down(&mut self) {
        let max = self.sides_in_view().saturating_sub(1);
        if self.selected_side < max {
            self.selected_side += 1;
        }
    }

    pub fn navigate_side_up(&mut self) {
        self.selected_side = self.selected_side.saturating_sub(1);
    }

    pub fn selected(&self) -> (Court, Side) {
        SIDES[self.selected_side.min(SIDES.len() - 1)]
    }

    pub fn selected_court(&self) -> Option<&CourtResult> {
        let (court, _) = self.selected();
        self.tournament.court(self.view_round, court)
    }

    /// Step the selected side's games by `delta`. Going below zero unsets it.
    /// Returns whether anything changed.
    pub fn adjust_games(&mut self, delta: i8) -> bool {
        let (court, side) = self.selected();
        let Some(current) = self.selected_court().map(|c| c.games(side)) else {
            return false;
        };
        let next = match (current, delta.signum()) {
            (None, 1) => Some(0),
            (None, _) => None,
            (Some(0), -1) => None,
            (Some(g), _) => Some((i16::from(g) + i16::from(delta)).clamp(0, i16::from(MAX_GAMES)) as u8),
        };
        if next == current {
            return false;
        }
        self.apply(|t, round| t.set_games(round, court, side, next))
    }

    pub fn cycle_point(&mut self, forward: bool) -> bool {
        let (court, side) = self.selected();
        let Some(current) = self.selected_court().map(|c| c.point(side)) else {
            return false;
        };
        let next = if forward {
            PointToken::next(current)
        } else {
            PointToken::prev(current)
        };
        self.apply(|t, round| t.set_point(round, court, side, next))
    }

    pub fn clear_selected(&mut self) -> bool {
        let (court, side) = self.selected();
        self.apply(|t, round| t.clear_side(round, court, side))
    }

    fn apply(&mut self, edit: impl FnOnce(&mut Tournament, u8) -> bool) -> bool {
        let changed = edit(&mut self.tournament, self.view_round);
        if changed {
            self.recompute();
        }
        changed
    }

    fn sides_in_view(&self) -> usize {
        self.tournament
            .round(self.view_round)
            .map(|slot| slot.courts().count() * 2)
            .unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Root app state
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct AppState {
    pub active_tab: MenuItem,
    pub previous_tab: MenuItem,
    pub show_logs: bool,
    pub last_error: Option<String>,
    /// One-line feedback such as "saved" or "exported to ...".
    pub status: Option<String>,
    pub scorebook: ScorebookState,
    pub schedule_scroll: u16,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::store::new_tournament;

    fn scorebook() -> ScorebookState {
        let mut s = ScorebookState::default();
        s.load(new_tournament(&[]).unwrap());
        s
    }

    #[test]
    fn load_starts_on_current_round() {
        let mut t = new_tournament(&[]).unwrap();
        t.current_round = 4;
        let mut s = ScorebookState::default();
        s.load(t);
        assert_eq!(s.view_round, 4);
        assert_eq!(s.standings.rows.len(), 9);
    }

    #[test]
    fn games_step_from_unset_and_back() {
        let mut s = scorebook();
        assert!(s.adjust_games(1));
        assert_eq!(s.selected_court().unwrap().games_a, Some(0));
        assert!(s.adjust_games(1));
        assert!(s.adjust_games(1));
        assert_eq!(s.selected_court().unwrap().games_a, Some(2));
        assert!(s.adjust_games(-1));
        assert!(s.adjust_games(-1));
        assert!(s.adjust_games(-1));
        assert_eq!(s.selected_court().unwrap().games_a, None);
        assert!(!s.adjust_games(-1));
    }

    #[test]
    fn games_cap_at_max() {
        let mut s = scorebook();
        for _ in 0..(MAX_GAMES + 5) {
            s.adjust_games(1);
        }
        assert_eq!(s.selected_court().unwrap().games_a, Some(MAX_GAMES));
    }

    #[test]
    fn every_edit_recomputes_standings() {
        let mut s = scorebook();
        for _ in 0..7 {
            s.adjust_games(1);
        }
        s.navigate_side_down();
        s.adjust_games(1);
        s.adjust_games(1);
        s.adjust_games(1);
        // 6-2 on court one, team A wins clear
        assert_eq!(s.standings.rows[0].player.score, 3);
        s.clear_selected();
        assert_eq!(s.standings.rows[0].player.score, 0);
        assert_eq!(s.standings.rows[0].player.games_won, 6);
    }

    #[test]
    fn point_tokens_break_level_games() {
        let mut s = scorebook();
        s.adjust_games(1);
        s.cycle_point(true);
        s.cycle_point(true);
        s.navigate_side_down();
        s.adjust_games(1);
        s.cycle_point(true);
        let court = s.selected_court().unwrap();
        assert_eq!(court.point_a, Some(PointToken::Fifteen));
        assert_eq!(court.point_b, Some(PointToken::Zero));
        assert_eq!(court.points(), (1, 0));
        assert_eq!(s.standings.rows[0].player.score, 1);
    }

    #[test]
    fn round_navigation_stays_in_schedule() {
        let mut s = scorebook();
        s.navigate_round_prev();
        assert_eq!(s.view_round, 1);
        for _ in 0..20 {
            s.navigate_round_next();
        }
        assert_eq!(s.view_round, 9);
        assert_eq!(s.tournament.current_round, 9);
    }

    #[test]
    fn side_selection_is_bounded() {
        let mut s = scorebook();
        for _ in 0..10 {
            s.navigate_side_down();
        }
        assert_eq!(s.selected(), (Court::Two, Side::B));
        for _ in 0..10 {
            s.navigate_side_up();
        }
        assert_eq!(s.selected(), (Court::One, Side::A));
    }

    #[test]
    fn empty_tournament_ignores_edits() {
        let mut s = ScorebookState::default();
        s.load(Tournament::default());
        assert!(!s.adjust_games(1));
        assert!(!s.cycle_point(true));
        assert!(s.standings.rows.is_empty());
    }

    #[test]
    fn changing_round_keeps_cursor_on_a_real_court() {
        let mut s = scorebook();
        s.tournament.matches[1].court2 = None;
        for _ in 0..3 {
            s.navigate_side_down();
        }
        assert_eq!(s.selected(), (Court::Two, Side::B));

        assert!(s.navigate_round_next());
        assert_eq!(s.selected(), (Court::One, Side::B));
        assert!(s.adjust_games(1));
        assert_eq!(s.selected_court().unwrap().games_b, Some(0));
    }

    #[test]
    fn round_navigation_reports_changes() {
        let mut s = scorebook();
        assert!(!s.navigate_round_prev());
        assert!(s.navigate_round_next());
        assert!(s.navigate_round_prev());
    }
}
