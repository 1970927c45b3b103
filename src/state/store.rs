use chrono::{Local, NaiveTime, TimeDelta};
use log::{debug, info};
use padel_standings::schedule::{SEATS, round_robin};
use padel_standings::{Player, Tournament};
use std::path::Path;

const FIRST_ROUND_AT: (u32, u32) = (10, 0);
const ROUND_MINUTES: i64 = 25;

/// What came back from disk.
#[derive(Debug)]
pub enum Loaded {
    Existing(Tournament),
    /// Nothing saved yet; a fresh schedule was laid out.
    Created(Tournament),
}

/// Read the tournament document. A missing file yields a newly scheduled
/// tournament; a file that cannot be parsed or fails validation is an error.
pub fn load_tournament(path: &Path, player_names: &[String]) -> Result<Loaded, String> {
    if !path.exists() {
        info!("no tournament at {}, scheduling a new one", path.display());
        return new_tournament(player_names).map(Loaded::Created);
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("read {} failed: {e}", path.display()))?;
    let tournament: Tournament = serde_json::from_str(&content)
        .map_err(|e| format!("invalid tournament json at {}: {e}", path.display()))?;
    tournament
        .validate()
        .map_err(|e| format!("invalid tournament at {}: {e}", path.display()))?;
    debug!(
        "loaded {} with {} players, {} rounds",
        tournament.name,
        tournament.players.len(),
        tournament.matches.len()
    );
    Ok(Loaded::Existing(tournament))
}

/// Replace the whole document on disk.
pub fn save_tournament(path: &Path, tournament: &Tournament) -> Result<(), String> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| format!("create dir failed: {e}"))?;
    }
    let payload = serde_json::to_string_pretty(tournament)
        .map_err(|e| format!("serialize tournament failed: {e}"))?;
    std::fs::write(path, payload).map_err(|e| format!("write tournament failed: {e}"))?;
    debug!("saved tournament to {}", path.display());
    Ok(())
}

/// Nine players on the fixed schedule. Missing names become "Player N";
/// extra names are ignored.
pub fn new_tournament(player_names: &[String]) -> Result<Tournament, String> {
    let players: Vec<Player> = (0..SEATS)
        .map(|i| {
            let name = player_names
                .get(i)
                .cloned()
                .unwrap_or_else(|| format!("Player {}", i + 1));
            Player::new(i as u32 + 1, name)
        })
        .collect();

    let start = NaiveTime::from_hms_opt(FIRST_ROUND_AT.0, FIRST_ROUND_AT.1, 0)
        .ok_or_else(|| "invalid first round time".to_string())?;
    let matches = round_robin(&players, start, TimeDelta::minutes(ROUND_MINUTES))
        .map_err(|e| e.to_string())?;

    let now = Local::now();
    Ok(Tournament {
        id: format!("americano-{}", now.timestamp_millis()),
        name: format!("Americano {}", now.format("%Y-%m-%d")),
        players,
        matches,
        current_round: 1,
    })
}
