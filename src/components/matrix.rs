use padel_standings::Standings;
use tui::buffer::Buffer;
use tui::layout::Rect;
use tui::widgets::Widget;

use crate::components::theme::{Tone, resolve};

const LABEL_WIDTH: usize = 12;
const CELL_WIDTH: usize = 4;

/// Head-to-head grid in standings order. Cell (row, col) is how often the
/// row player beat the column player as opponents.
pub struct MatrixView<'a> {
    pub standings: &'a Standings,
}

impl Widget for MatrixView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let players: Vec<_> = self.standings.players().cloned().collect();
        let grid = self.standings.head_to_head.matrix(&players);

        let header: String = (1..=players.len()).map(|n| format!("{n:>CELL_WIDTH$}")).collect();
        buf.set_string(
            area.x,
            area.y,
            clip(&format!("{:LABEL_WIDTH$}{header}", ""), area.width),
            resolve(Tone::Header),
        );

        for (idx, (player, cells)) in players.iter().zip(&grid).enumerate() {
            let y = area.y + 1 + idx as u16;
            if y >= area.bottom() {
                break;
            }
            let tone = if self.standings.rows[idx].won_by_head_to_head {
                Tone::TieBreak
            } else {
                Tone::Normal
            };
            let label = row_label(idx + 1, &player.name);
            buf.set_string(area.x, y, clip(&label, area.width), resolve(tone));

            let mut x = area.x + LABEL_WIDTH as u16;
            for (col, wins) in cells.iter().enumerate() {
                if x + CELL_WIDTH as u16 > area.right() {
                    break;
                }
                let (text, tone) = cell(idx == col, *wins);
                buf.set_string(x, y, format!("{text:>CELL_WIDTH$}"), resolve(tone));
                x += CELL_WIDTH as u16;
            }
        }
    }
}

fn cell(diagonal: bool, wins: u32) -> (String, Tone) {
    match (diagonal, wins) {
        (true, _) => ("·".to_string(), Tone::Dim),
        (false, 0) => ("0".to_string(), Tone::Dim),
        (false, n) => (n.to_string(), Tone::Winner),
    }
}

pub fn row_label(number: usize, name: &str) -> String {
    let label = format!("{number:>2} {name}");
    let mut label: String = label.chars().take(LABEL_WIDTH - 1).collect();
    while label.chars().count() < LABEL_WIDTH {
        label.push(' ');
    }
    label
}

fn clip(text: &str, width: u16) -> String {
    text.chars().take(width as usize).collect()
}
