use crate::app::{App, MenuItem};
use crossterm::event::KeyCode::Char;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub fn handle_key_bindings(key_event: KeyEvent, app: &mut App) {
    match (app.state.active_tab, key_event.code, key_event.modifiers) {
        // Quit
        (_, Char('q'), _) | (_, Char('c'), KeyModifiers::CONTROL) => {
            crate::cleanup_terminal();
            std::process::exit(0);
        }

        // Tab switching
        (_, Char('1'), _) => app.update_tab(MenuItem::Standings),
        (_, Char('2'), _) => app.update_tab(MenuItem::Results),
        (_, Char('3'), _) => app.update_tab(MenuItem::HeadToHead),
        (_, Char('4'), _) => app.update_tab(MenuItem::Schedule),
        (_, Char('?'), _) => app.update_tab(MenuItem::Help),
        (MenuItem::Help, KeyCode::Esc, _) => app.exit_help(),

        // Result entry
        (MenuItem::Results, Char('l') | KeyCode::Right, _) => app.results_next_round(),
        (MenuItem::Results, Char('h') | KeyCode::Left, _) => app.results_prev_round(),
        (MenuItem::Results, Char('j') | KeyCode::Down, _) => app.results_side_down(),
        (MenuItem::Results, Char('k') | KeyCode::Up, _) => app.results_side_up(),
        (MenuItem::Results, Char('+') | Char('='), _) => app.results_games_up(),
        (MenuItem::Results, Char('-'), _) => app.results_games_down(),
        (MenuItem::Results, Char(']'), _) => app.results_point_next(),
        (MenuItem::Results, Char('['), _) => app.results_point_prev(),
        (MenuItem::Results, KeyCode::Backspace | KeyCode::Delete, _) => app.results_clear_side(),

        // Schedule scrolling
        (MenuItem::Schedule, Char('j') | KeyCode::Down, _) => app.schedule_scroll_down(),
        (MenuItem::Schedule, Char('k') | KeyCode::Up, _) => app.schedule_scroll_up(),

        // Global
        (_, Char('e'), _) => app.export(),
        (_, Char('f'), _) => app.toggle_full_screen(),
        (_, Char('"'), _) => app.toggle_show_logs(),

        _ => {}
    }
}
