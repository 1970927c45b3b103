use tui::backend::Backend;
use tui::layout::{Alignment, Constraint, Layout, Rect};
use tui::style::{Color, Modifier, Style};
use tui::text::{Line, Span};
use tui::widgets::{Block, BorderType, Borders, Paragraph, Tabs};
use tui::{Frame, Terminal};
use tui_logger::TuiLoggerWidget;

use crate::app::{App, MenuItem};
use crate::components::court::{COURT_HEIGHT, CourtCard};
use crate::components::matrix::MatrixView;
use crate::components::standings::{StandingsView, TIE_BREAK_MARK};
use crate::components::theme::{Tone, resolve};
use crate::ui::layout::LayoutAreas;
use padel_standings::Court;

static TABS: &[&str; 4] = &["Standings", "Results", "Head-to-Head", "Schedule"];

const HELP: &str = "q quit   1-4 tabs   ? help   f full screen   \" logs   e export CSV

Results tab
  h/l  previous/next round      j/k  move between team sides
  +/-  games up/down            ]/[  point token forward/back
  Backspace  clear the selected side

Points: win by 2+ games = 3, by 1 game = 2, level games go to the team
ahead on the point (1). Ties on points, differential and games won are
split by head-to-head wins; those places are marked H2H.";

pub fn draw<B>(terminal: &mut Terminal<B>, app: &mut App)
where
    B: Backend,
{
    let current_size = terminal.size().unwrap_or_default();
    if current_size.width <= 10 || current_size.height <= 10 {
        return;
    }

    let mut layout = LayoutAreas::new(current_size);

    let result = terminal.draw(|f| {
        layout.update(f.area(), app.settings.full_screen, app.state.show_logs);

        if !app.settings.full_screen {
            draw_tabs(f, layout.tab_bar, app);
            draw_status(f, layout.status, app);
        }

        match app.state.active_tab {
            MenuItem::Standings => draw_standings(f, layout.main, app),
            MenuItem::Results => draw_results(f, layout.main, app),
            MenuItem::HeadToHead => draw_head_to_head(f, layout.main, app),
            MenuItem::Schedule => draw_schedule(f, layout.main, app),
            MenuItem::Help => draw_placeholder(f, layout.main, HELP),
        }

        if app.state.show_logs {
            draw_logs(f, layout.logs);
        }
    });
    if let Err(e) = result {
        log::error!("draw failed: {e}");
    }
}

pub fn default_border<'a>(color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
}

fn draw_tabs(f: &mut Frame, tab_bar: [Rect; 2], app: &App) {
    let style = Style::default().fg(Color::White);
    let border_type = BorderType::Rounded;

    let tab_index = match app.state.active_tab {
        MenuItem::Standings => 0,
        MenuItem::Results => 1,
        MenuItem::HeadToHead => 2,
        MenuItem::Schedule => 3,
        MenuItem::Help => 0,
    };

    let titles: Vec<Line> = TABS.iter().map(|t| Line::from(*t)).collect();
    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .highlight_style(Style::default().add_modifier(Modifier::UNDERLINED))
        .select(tab_index)
        .style(style);
    f.render_widget(tabs, tab_bar[0]);

    let help = Paragraph::new("Help: ? ")
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::BOTTOM | Borders::TOP)
                .border_type(border_type),
        )
        .style(style);
    f.render_widget(help, tab_bar[1]);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let line = match (&app.state.last_error, &app.state.status) {
        (Some(err), _) => Line::from(Span::styled(format!(" {err}"), Style::default().fg(Color::Red))),
        (None, Some(status)) => Line::from(Span::styled(format!(" {status}"), resolve(Tone::Dim))),
        (None, None) => Line::from(Span::styled(
            format!(" {}", app.settings.data_path.display()),
            resolve(Tone::Dim),
        )),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn draw_standings(f: &mut Frame, area: Rect, app: &App) {
    let scorebook = &app.state.scorebook;
    let title = format!(" {} ", standings_title(&scorebook.tournament.name));
    let block = default_border(Color::White).title(title);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if scorebook.standings.rows.is_empty() {
        draw_empty(f, inner, app);
        return;
    }

    let [table_area, legend_area] =
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(inner);
    f.render_widget(
        StandingsView {
            standings: &scorebook.standings,
        },
        table_area,
    );

    let legend = if scorebook.standings.decided_by_head_to_head().is_empty() {
        String::new()
    } else {
        format!("{TIE_BREAK_MARK} = place decided by head-to-head wins")
    };
    f.render_widget(Paragraph::new(legend).style(resolve(Tone::TieBreak)), legend_area);
}

fn standings_title(name: &str) -> String {
    if name.is_empty() {
        "Standings".to_string()
    } else {
        format!("Standings | {name}")
    }
}

fn draw_results(f: &mut Frame, area: Rect, app: &App) {
    let scorebook = &app.state.scorebook;
    let tournament = &scorebook.tournament;
    let block = default_border(Color::White).title(" Results ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(slot) = tournament.round(scorebook.view_round) else {
        draw_empty(f, inner, app);
        return;
    };

    let [header_area, court1_area, _, court2_area, _, keys_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(COURT_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(COURT_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let header = format!(
        "Round {} of {} | {} | sitting out: {}",
        slot.round,
        tournament.rounds().len(),
        slot.time,
        tournament.player_name(slot.not_playing),
    );
    f.render_widget(Paragraph::new(header).style(resolve(Tone::Header)), header_area);

    let (selected_court, selected_side) = scorebook.selected();
    for (court, court_area) in [(Court::One, court1_area), (Court::Two, court2_area)] {
        let Some(result) = slot.court(court) else {
            continue;
        };
        f.render_widget(
            CourtCard {
                tournament,
                court,
                result,
                selected: (court == selected_court).then_some(selected_side),
            },
            court_area,
        );
    }

    f.render_widget(
        Paragraph::new("h/l round  j/k side  +/- games  ]/[ point  Backspace clear  e export")
            .style(resolve(Tone::Dim)),
        keys_area,
    );
}

fn draw_head_to_head(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Head-to-Head ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let standings = &app.state.scorebook.standings;
    if standings.rows.is_empty() {
        draw_empty(f, inner, app);
        return;
    }
    f.render_widget(MatrixView { standings }, inner);
}

fn draw_schedule(f: &mut Frame, area: Rect, app: &App) {
    let block = default_border(Color::White).title(" Schedule ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let tournament = &app.state.scorebook.tournament;
    if tournament.matches.is_empty() {
        draw_empty(f, inner, app);
        return;
    }

    let mut lines = Vec::with_capacity(tournament.matches.len() * 4);
    let mut round_starts = Vec::with_capacity(tournament.matches.len());
    for slot in &tournament.matches {
        round_starts.push(lines.len() as u16);
        let style = if slot.round == tournament.current_round {
            resolve(Tone::Leader)
        } else {
            resolve(Tone::Header)
        };
        lines.push(Line::from(Span::styled(format!("Round {}  {}", slot.round, slot.time), style)));
        for (idx, result) in slot.courts().enumerate() {
            let [a1, a2] = result.team_a;
            let [b1, b2] = result.team_b;
            lines.push(Line::from(format!(
                "  Court {}: {} / {}  vs  {} / {}",
                idx + 1,
                tournament.player_name(a1),
                tournament.player_name(a2),
                tournament.player_name(b1),
                tournament.player_name(b2),
            )));
        }
        lines.push(Line::from(Span::styled(
            format!("  Sitting out: {}", tournament.player_name(slot.not_playing)),
            resolve(Tone::Dim),
        )));
    }

    let offset = round_starts
        .get(app.state.schedule_scroll as usize)
        .copied()
        .unwrap_or_default();
    f.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
}

fn draw_empty(f: &mut Frame, area: Rect, app: &App) {
    let msg = match app.state.last_error.as_deref() {
        Some(err) => format!("Tournament could not be loaded:\n{err}"),
        None => "No tournament loaded".to_string(),
    };
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        area,
    );
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(default_border(Color::DarkGray).title(" Logs "))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(logs, area);
}

fn draw_placeholder(f: &mut Frame, area: Rect, msg: &str) {
    let block = default_border(Color::DarkGray);
    let inner = block.inner(area);
    f.render_widget(block, area);
    f.render_widget(
        Paragraph::new(msg)
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Left),
        inner,
    );
}
