//! Record Store
//!
//! Reads and writes one team's record file as an ordered sequence of rows.
//! Rewrites are whole-file: load everything, mutate in memory, write
//! everything back. Fields are stored as text; numeric fields are re-parsed
//! by consumers that do arithmetic.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::Path;

/// Fixed name of the per-team record file.
pub const RECORD_FILE: &str = "players.csv";

/// One stored row, all fields in their on-disk text form.
///
/// Field order here is the header order of the record file:
/// id, name, position, points, rebounds, assists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRow {
    pub id: String,
    pub name: String,
    pub position: String,
    pub points: String,
    pub rebounds: String,
    pub assists: String,
}

/// Load every row of the record file at `path`, in file order.
///
/// A missing file is not an error: it reads as an empty roster.
pub fn load(path: &Path) -> Result<Vec<PlayerRow>> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    let mut reader = csv::Reader::from_reader(file);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Overwrite `path` with a header row followed by `rows` in order.
///
/// An empty slice leaves a header-only file.
pub fn save(path: &Path, rows: &[PlayerRow]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    if rows.is_empty() {
        // Serde-driven headers are only emitted alongside a record, so an
        // empty roster writes them explicitly.
        writer.write_record(["id", "name", "position", "points", "rebounds", "assists"])?;
    }
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

/// Create a header-only record file at `path` if none exists. Idempotent.
pub fn ensure_initialized(path: &Path) -> Result<()> {
    if !path.exists() {
        save(path, &[])?;
    }
    Ok(())
}
