use tui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Header,
    Normal,
    Leader,
    /// Row level with a neighbour on points, differential and games.
    Tied,
    /// Row whose place the head-to-head pass decided.
    TieBreak,
    Selected,
    Dim,
    Winner,
}

pub fn resolve(tone: Tone) -> Style {
    match tone {
        Tone::Header => Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        Tone::Normal => Style::default().fg(Color::White),
        Tone::Leader => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        Tone::Tied => Style::default().fg(Color::Rgb(0, 122, 195)),
        Tone::TieBreak => Style::default().fg(Color::Rgb(255, 103, 31)),
        Tone::Selected => Style::default().fg(Color::Black).bg(Color::Yellow),
        Tone::Dim => Style::default().fg(Color::Indexed(240)),
        Tone::Winner => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    }
}
