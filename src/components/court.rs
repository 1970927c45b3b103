use padel_standings::{Court, CourtResult, Side, Tournament};
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::style::Style;
use tui::widgets::Widget;

use crate::components::theme::{Tone, resolve};

/// Rows per court card: title, team A, team B.
pub const COURT_HEIGHT: u16 = 3;

/// One court of the viewed round with both team lines and the points they earn.
pub struct CourtCard<'a> {
    pub tournament: &'a Tournament,
    pub court: Court,
    pub result: &'a CourtResult,
    /// Side under the cursor, if it is on this court.
    pub selected: Option<Side>,
}

impl Widget for CourtCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < COURT_HEIGHT || area.width < 12 {
            return;
        }
        let width = area.width as usize;
        let (points_a, points_b) = self.result.points();

        buf.set_string(
            area.x,
            area.y,
            format!("Court {}", self.court.number()),
            resolve(Tone::Header),
        );

        for (offset, side, points) in [(1u16, Side::A, points_a), (2u16, Side::B, points_b)] {
            let names = team_names(self.tournament, self.result, side);
            let line = format_side_line(
                &names,
                self.result.games(side),
                self.result.point(side).map(|p| p.label()),
                points,
                self.selected == Some(side),
                width,
            );
            buf.set_string(area.x, area.y + offset, line, side_style(self.result, side, self.selected));
        }
    }
}

fn side_style(result: &CourtResult, side: Side, selected: Option<Side>) -> Style {
    if selected == Some(side) {
        resolve(Tone::Selected)
    } else if result.winner() == Some(side) {
        resolve(Tone::Winner)
    } else if result.games(side).is_none() {
        resolve(Tone::Dim)
    } else {
        resolve(Tone::Normal)
    }
}

pub fn team_names(tournament: &Tournament, result: &CourtResult, side: Side) -> String {
    let [a, b] = result.team(side);
    format!("{} / {}", tournament.player_name(*a), tournament.player_name(*b))
}

/// `> Ana / Bea ......   6  40  +2` padded or clipped to exactly `width` chars.
pub fn format_side_line(
    names: &str,
    games: Option<u8>,
    point: Option<&str>,
    points: u8,
    selected: bool,
    width: usize,
) -> String {
    let marker = if selected { '>' } else { ' ' };
    let games = games.map_or("--".to_string(), |g| format!("{g:>2}"));
    let point = point.unwrap_or("-");
    let tail = format!(" {games} {point:>3} +{points}");
    let name_width = width.saturating_sub(tail.chars().count() + 2);

    let mut name: String = names.chars().take(name_width).collect();
    while name.chars().count() < name_width {
        name.push(' ');
    }
    let line: String = format!("{marker} {name}{tail}").chars().take(width).collect();
    line
}
