use log::info;
use padel_standings::export::{Table, head_to_head_table, results_table, standings_table};
use padel_standings::{Standings, Tournament};
use std::path::{Path, PathBuf};

pub const STANDINGS_FILE: &str = "standings.csv";
pub const RESULTS_FILE: &str = "results.csv";
pub const HEAD_TO_HEAD_FILE: &str = "head_to_head.csv";

/// Write the standings, results and head-to-head sheets into `dir`.
/// Returns the files written.
pub fn export_csv(dir: &Path, tournament: &Tournament, standings: &Standings) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let sheets = [
        (STANDINGS_FILE, standings_table(standings)),
        (RESULTS_FILE, results_table(tournament)),
        (HEAD_TO_HEAD_FILE, head_to_head_table(standings)),
    ];

    let mut written = Vec::with_capacity(sheets.len());
    for (name, table) in sheets {
        let path = dir.join(name);
        write_table(&path, &table)?;
        written.push(path);
    }
    info!("exported {} sheets to {}", written.len(), dir.display());
    Ok(written)
}

fn write_table(path: &Path, table: &Table) -> anyhow::Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&table.header)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
