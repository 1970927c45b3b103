use padel_standings::{StandingRow, Standings};
use tui::buffer::Buffer;
use tui::layout::{Constraint, Rect};
use tui::widgets::{Cell, Row, Table, Widget};

use crate::components::theme::{Tone, resolve};

/// Marker shown next to a player whose place came from the head-to-head pass.
pub const TIE_BREAK_MARK: &str = "H2H";

const WIDTHS: [Constraint; 7] = [
    Constraint::Length(4),
    Constraint::Fill(1),
    Constraint::Length(4),
    Constraint::Length(4),
    Constraint::Length(4),
    Constraint::Length(5),
    Constraint::Length(4),
];

/// The league table: rank, player, points, games won/lost, differential and
/// the tie-break marker.
pub struct StandingsView<'a> {
    pub standings: &'a Standings,
}

impl Widget for StandingsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let header = Row::new(["#", "Player", "Pts", "W", "L", "+/-", ""]).style(resolve(Tone::Header));
        let rows = self.standings.rows.iter().enumerate().map(|(idx, row)| {
            let tone = row_tone(self.standings, idx, row);
            Row::new(format_row(row).into_iter().map(Cell::from)).style(resolve(tone))
        });

        Table::new(rows, WIDTHS)
            .header(header)
            .column_spacing(1)
            .render(area, buf);
    }
}

fn row_tone(standings: &Standings, idx: usize, row: &StandingRow) -> Tone {
    if row.won_by_head_to_head {
        Tone::TieBreak
    } else if standings.tie_groups.iter().any(|g| g.contains(&idx)) {
        Tone::Tied
    } else if row.rank == 1 && row.player.score > 0 {
        Tone::Leader
    } else {
        Tone::Normal
    }
}

pub fn format_row(row: &StandingRow) -> [String; 7] {
    let p = &row.player;
    [
        format!("{:>2}.", row.rank),
        p.name.clone(),
        format!("{:>3}", p.score),
        format!("{:>3}", p.games_won),
        format!("{:>3}", p.games_lost),
        format_differential(p.game_differential),
        if row.won_by_head_to_head {
            TIE_BREAK_MARK.to_string()
        } else {
            String::new()
        },
    ]
}

pub fn format_differential(diff: i32) -> String {
    match diff {
        0 => "  0".to_string(),
        d => format!("{d:>+3}"),
    }
}
