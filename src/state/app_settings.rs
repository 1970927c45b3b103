use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    /// Where the tournament document lives. See [`data_path`].
    pub data_path: PathBuf,
    /// Names for a freshly scheduled tournament.
    pub player_names: Vec<String>,
}

impl AppSettings {
    pub fn load() -> Self {
        Self {
            full_screen: env_flag("PADELTUI_FULL_SCREEN"),
            log_level: std::env::var("PADELTUI_LOG").ok().and_then(|v| parse_level(&v)),
            data_path: data_path(),
            player_names: std::env::var("PADELTUI_PLAYERS")
                .map(|v| parse_player_names(&v))
                .unwrap_or_default(),
        }
    }
}

fn env_flag(key: &str) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.trim(), "1" | "true" | "yes"))
        .unwrap_or(false)
}

pub fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}

pub fn parse_player_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// `$PADELTUI_DATA`, then the XDG config dir, then `~/.config`, then the cwd.
pub fn data_path() -> PathBuf {
    if let Ok(path) = std::env::var("PADELTUI_DATA")
        && !path.trim().is_empty()
    {
        return PathBuf::from(path);
    }
    if let Ok(config_dir) = std::env::var("XDG_CONFIG_HOME")
        && !config_dir.trim().is_empty()
    {
        return PathBuf::from(config_dir).join("padeltui").join("tournament.json");
    }
    if let Ok(home) = std::env::var("HOME")
        && !home.trim().is_empty()
    {
        return PathBuf::from(home)
            .join(".config")
            .join("padeltui")
            .join("tournament.json");
    }
    PathBuf::from("tournament.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn player_names_skip_blanks() {
        assert_eq!(parse_player_names(" Ana, Bea ,,Cris,"), vec!["Ana", "Bea", "Cris"]);
        assert!(parse_player_names("").is_empty());
    }

    #[test]
    fn log_levels_parse_case_insensitively() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("loud"), None);
    }
}
