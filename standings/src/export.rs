//! Flat tables for spreadsheet export. Every cell is already rendered to text;
//! writing them out is the caller's business.

use crate::{Court, Side, Standings, Tournament};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    fn new(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }
}

pub fn standings_table(standings: &Standings) -> Table {
    let mut table = Table::new(&[
        "Rank",
        "Player",
        "Points",
        "Games Won",
        "Games Lost",
        "Differential",
        "Head-to-Head",
    ]);
    for row in &standings.rows {
        let p = &row.player;
        table.rows.push(vec![
            row.rank.to_string(),
            p.name.clone(),
            p.score.to_string(),
            p.games_won.to_string(),
            p.games_lost.to_string(),
            format!("{:+}", p.game_differential),
            if row.won_by_head_to_head { "yes" } else { "" }.to_string(),
        ]);
    }
    table
}

pub fn results_table(tournament: &Tournament) -> Table {
    let mut table = Table::new(&[
        "Round",
        "Time",
        "Court",
        "Team A",
        "Team B",
        "Games A",
        "Games B",
        "Point A",
        "Point B",
        "Points A",
        "Points B",
        "Not Playing",
    ]);

    let team_name = |ids: &[crate::PlayerId; 2]| {
        format!("{} / {}", tournament.player_name(ids[0]), tournament.player_name(ids[1]))
    };
    let opt = |v: Option<String>| v.unwrap_or_default();

    let mut slots: Vec<_> = tournament.matches.iter().collect();
    slots.sort_by_key(|m| m.round);
    for slot in slots {
        for court_id in [Court::One, Court::Two] {
            let Some(court) = slot.court(court_id) else {
                continue;
            };
            let (points_a, points_b) = court.points();
            table.rows.push(vec![
                slot.round.to_string(),
                slot.time.clone(),
                court_id.number().to_string(),
                team_name(court.team(Side::A)),
                team_name(court.team(Side::B)),
                opt(court.games_a.map(|g| g.to_string())),
                opt(court.games_b.map(|g| g.to_string())),
                opt(court.point_a.map(|p| p.to_string())),
                opt(court.point_b.map(|p| p.to_string())),
                points_a.to_string(),
                points_b.to_string(),
                tournament.player_name(slot.not_playing),
            ]);
        }
    }
    table
}

/// Row player's wins over column player, in standings order.
pub fn head_to_head_table(standings: &Standings) -> Table {
    let players: Vec<_> = standings.players().cloned().collect();
    let mut header = vec![String::new()];
    header.extend(players.iter().map(|p| p.name.clone()));

    let rows = standings
        .head_to_head
        .matrix(&players)
        .into_iter()
        .zip(&players)
        .map(|(counts, player)| {
            let mut row = vec![player.name.clone()];
            row.extend(counts.into_iter().map(|n| n.to_string()));
            row
        })
        .collect();

    Table { header, rows }
}
