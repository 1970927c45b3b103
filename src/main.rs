mod app;
mod components;
mod draw;
mod export;
mod keys;
mod state;
mod ui;

use crate::app::App;
use crate::state::app_settings::AppSettings;
use crate::state::messages::UiEvent;
use crate::state::store::{self, Loaded};
use crossterm::event::{self as crossterm_event, Event};
use crossterm::{cursor, execute, terminal};
use padel_standings::compute;
use std::io::Stdout;
use std::path::PathBuf;
use std::{io, panic};
use tokio::sync::mpsc;
use tui::{Terminal, backend::CrosstermBackend};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if handle_cli_args()? {
        return Ok(());
    }

    better_panic::install();

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;

    setup_panic_hook();
    setup_terminal()?;

    tui_logger::init_logger(log::LevelFilter::Error)?;
    tui_logger::set_default_level(log::LevelFilter::Error);

    let app = App::new();

    let (ui_event_tx, ui_event_rx) = mpsc::channel::<UiEvent>(100);

    // Input handler thread
    let input_handler = tokio::spawn(input_handler_task(ui_event_tx.clone()));

    // Trigger tournament load on startup
    let _ = ui_event_tx.send(UiEvent::AppStarted).await;

    main_ui_loop(terminal, app, ui_event_rx).await;

    input_handler.abort();

    Ok(())
}

/// Returns `Ok(true)` when the arguments were handled and the UI should not start.
fn handle_cli_args() -> anyhow::Result<bool> {
    let mut args = std::env::args().skip(1);
    let Some(arg) = args.next() else {
        return Ok(false);
    };

    match arg.as_str() {
        "-h" | "--help" => {
            println!("{}", usage_text());
            Ok(true)
        }
        "-V" | "--version" => {
            println!("padeltui {}", env!("CARGO_PKG_VERSION"));
            Ok(true)
        }
        "--export" => {
            let Some(dir) = args.next() else {
                eprintln!("--export needs a directory\n\n{}", usage_text());
                std::process::exit(2);
            };
            export_headless(PathBuf::from(dir))?;
            Ok(true)
        }
        _ => {
            eprintln!("Unknown argument: {arg}\n\n{}", usage_text());
            std::process::exit(2);
        }
    }
}

/// Write the CSV sheets for the stored tournament without starting the UI.
fn export_headless(dir: PathBuf) -> anyhow::Result<()> {
    let settings = AppSettings::load();
    let tournament = match store::load_tournament(&settings.data_path, &settings.player_names) {
        Ok(Loaded::Existing(t)) | Ok(Loaded::Created(t)) => t,
        Err(message) => anyhow::bail!(message),
    };
    let standings = compute(&tournament);
    for path in export::export_csv(&dir, &tournament, &standings)? {
        println!("{}", path.display());
    }
    Ok(())
}

fn usage_text() -> &'static str {
    "padeltui - padel americano standings in the terminal

Usage:
  padeltui
  padeltui --export <dir>
  padeltui --help
  padeltui --version

Environment:
  PADELTUI_DATA         Tournament JSON file (default $XDG_CONFIG_HOME/padeltui/tournament.json)
  PADELTUI_PLAYERS      Comma separated names for a new tournament
  PADELTUI_LOG          Log level: error, warn, info, debug, trace (default error)
  PADELTUI_FULL_SCREEN  Start without tab and status bars (1/true/yes)"
}

async fn main_ui_loop(
    mut terminal: Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    mut ui_events: mpsc::Receiver<UiEvent>,
) {
    while let Some(ui_event) = ui_events.recv().await {
        if handle_ui_event(ui_event, &mut app) {
            draw::draw(&mut terminal, &mut app);
        }
    }
}

fn handle_ui_event(ui_event: UiEvent, app: &mut App) -> bool {
    match ui_event {
        UiEvent::AppStarted => {
            app.load_tournament();
            true
        }
        UiEvent::KeyPressed(key_event) => {
            keys::handle_key_bindings(key_event, app);
            true
        }
        UiEvent::Resize => true,
    }
}

async fn input_handler_task(ui_events: mpsc::Sender<UiEvent>) {
    loop {
        if let Ok(event) = crossterm_event::read() {
            let ui_event = match event {
                Event::Key(key_event) => Some(UiEvent::KeyPressed(key_event)),
                Event::Resize(_, _) => Some(UiEvent::Resize),
                _ => None,
            };

            if let Some(ui_event) = ui_event
                && ui_events.send(ui_event).await.is_err()
            {
                break;
            }
        }
    }
}

fn setup_terminal() -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;
    execute!(stdout, terminal::EnterAlternateScreen)?;
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
    terminal::enable_raw_mode()
}

pub fn cleanup_terminal() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::MoveTo(0, 0));
    let _ = execute!(stdout, terminal::Clear(terminal::ClearType::All));
    let _ = execute!(stdout, terminal::LeaveAlternateScreen);
    let _ = execute!(stdout, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

fn setup_panic_hook() {
    panic::set_hook(Box::new(|panic_info| {
        cleanup_terminal();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));
}
