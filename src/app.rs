use crate::export::export_csv;
use crate::state::app_settings::AppSettings;
use crate::state::app_state::AppState;
use crate::state::store::{self, Loaded};
use chrono::Local;
use log::{error, info, warn};
use padel_standings::Tournament;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum MenuItem {
    #[default]
    Standings,
    Results,
    HeadToHead,
    Schedule,
    Help,
}

pub struct App {
    pub settings: AppSettings,
    pub state: AppState,
}

impl App {
    pub fn new() -> Self {
        Self::with_settings(AppSettings::load())
    }

    pub fn with_settings(settings: AppSettings) -> Self {
        let app = Self {
            state: AppState::new(),
            settings,
        };

        if let Some(level) = app.settings.log_level {
            log::set_max_level(level);
            tui_logger::set_default_level(level);
        }

        app
    }

    // -----------------------------------------------------------------------
    // Loading and saving
    // -----------------------------------------------------------------------

    /// Read the tournament from disk. Anything unreadable leaves an empty
    /// tournament on screen and the file untouched.
    pub fn load_tournament(&mut self) {
        match store::load_tournament(&self.settings.data_path, &self.settings.player_names) {
            Ok(Loaded::Existing(tournament)) => self.on_tournament_loaded(tournament),
            Ok(Loaded::Created(tournament)) => {
                self.on_tournament_loaded(tournament);
                self.save();
            }
            Err(message) => {
                error!("{message}");
                self.on_tournament_loaded(Tournament::default());
                self.on_error(message);
            }
        }
    }

    pub fn on_tournament_loaded(&mut self, tournament: Tournament) {
        self.state.last_error = None;
        info!("showing {} ({} rounds)", tournament.name, tournament.matches.len());
        self.state.scorebook.load(tournament);
    }

    /// Whole-document replace; the last write wins.
    pub fn save(&mut self) {
        let result = store::save_tournament(&self.settings.data_path, &self.state.scorebook.tournament);
        match result {
            Ok(()) => self.state.status = Some(format!("saved {}", Local::now().format("%H:%M:%S"))),
            Err(message) => {
                error!("{message}");
                self.on_error(message);
            }
        }
    }

    pub fn export(&mut self) {
        let dir = export_dir(&self.settings.data_path);
        let scorebook = &self.state.scorebook;
        match export_csv(&dir, &scorebook.tournament, &scorebook.standings) {
            Ok(files) => {
                self.state.status = Some(format!("exported {} files to {}", files.len(), dir.display()));
            }
            Err(e) => {
                warn!("export failed: {e}");
                self.on_error(format!("export failed: {e}"));
            }
        }
    }

    pub fn on_error(&mut self, message: String) {
        self.state.last_error = Some(message);
    }

    // -----------------------------------------------------------------------
    // Tab management
    // -----------------------------------------------------------------------

    pub fn update_tab(&mut self, next: MenuItem) {
        if self.state.active_tab == next {
            return;
        }
        self.state.previous_tab = self.state.active_tab;
        self.state.active_tab = next;
        if self.state.active_tab == MenuItem::Schedule {
            self.state.schedule_scroll = 0;
        }
    }

    pub fn exit_help(&mut self) {
        if self.state.active_tab == MenuItem::Help {
            self.state.active_tab = self.state.previous_tab;
        }
    }

    pub fn toggle_show_logs(&mut self) {
        self.state.show_logs = !self.state.show_logs;
    }

    pub fn toggle_full_screen(&mut self) {
        self.settings.full_screen = !self.settings.full_screen;
    }

    // -----------------------------------------------------------------------
    // Result entry: delegated to ScorebookState, saved on every change
    // -----------------------------------------------------------------------

    pub fn results_next_round(&mut self) {
        if self.state.scorebook.navigate_round_next() {
            self.save();
        }
    }

    pub fn results_prev_round(&mut self) {
        if self.state.scorebook.navigate_round_prev() {
            self.save();
        }
    }

    pub fn results_side_down(&mut self) {
        self.state.scorebook.navigate_side_down();
    }

    pub fn results_side_up(&mut self) {
        self.state.scorebook.navigate_side_up();
    }

    pub fn results_games_up(&mut self) {
        if self.state.scorebook.adjust_games(1) {
            self.save();
        }
    }

    pub fn results_games_down(&mut self) {
        if self.state.scorebook.adjust_games(-1) {
            self.save();
        }
    }

    pub fn results_point_next(&mut self) {
        if self.state.scorebook.cycle_point(true) {
            self.save();
        }
    }

    pub fn results_point_prev(&mut self) {
        if self.state.scorebook.cycle_point(false) {
            self.save();
        }
    }

    pub fn results_clear_side(&mut self) {
        if self.state.scorebook.clear_selected() {
            self.save();
        }
    }

    pub fn schedule_scroll_down(&mut self) {
        let max = self.state.scorebook.tournament.matches.len().saturating_sub(1) as u16;
        self.state.schedule_scroll = (self.state.schedule_scroll + 1).min(max);
    }

    pub fn schedule_scroll_up(&mut self) {
        self.state.schedule_scroll = self.state.schedule_scroll.saturating_sub(1);
    }
}

/// Exports go next to the data file, in `export/`.
pub fn export_dir(data_path: &std::path::Path) -> PathBuf {
    data_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.join("export"))
        .unwrap_or_else(|| PathBuf::from("export"))
}
