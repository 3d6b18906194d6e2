//! Hierarchy Walker
//!
//! Recursively visits the directory tree under a root and flattens every
//! record file it finds into one collection, tagging each row with the path
//! of the file it came from. The conference/team layout is a convention, not
//! a constraint: nesting of any depth is aggregated the same way.

use crate::error::Result;
use crate::store::{self, PlayerRow, RECORD_FILE};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// A stored row plus the record file it was loaded from.
///
/// The origin exists only in memory; it is what update and delete use to
/// target the one file that must be rewritten.
#[derive(Debug, Clone)]
pub struct TaggedRow {
    pub row: PlayerRow,
    pub origin: PathBuf,
}

/// Collect every row of every record file under `root`.
///
/// A missing root reads as an empty hierarchy. Ordering follows directory
/// listing order and is deterministic per run but otherwise unspecified.
pub fn collect_all(root: &Path) -> Result<Vec<TaggedRow>> {
    let mut all = Vec::new();
    if !root.exists() {
        return Ok(all);
    }
    debug!(root = %root.display(), "walking hierarchy");

    for entry in WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && entry.file_name() == std::ffi::OsStr::new(RECORD_FILE) {
            let origin = entry.path().to_path_buf();
            for row in store::load(&origin)? {
                all.push(TaggedRow {
                    row,
                    origin: origin.clone(),
                });
            }
        }
    }
    Ok(all)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_team(root: &Path, segments: &[&str], ids: &[&str]) -> PathBuf {
        let mut dir = root.to_path_buf();
        for s in segments {
            dir = dir.join(s);
        }
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(RECORD_FILE);
        let rows: Vec<PlayerRow> = ids
            .iter()
            .map(|id| PlayerRow {
                id: id.to_string(),
                name: format!("player-{id}"),
                position: "pivot".to_string(),
                points: "1".to_string(),
                rebounds: "2".to_string(),
                assists: "3".to_string(),
            })
            .collect();
        store::save(&path, &rows).unwrap();
        path
    }

    #[test]
    fn test_missing_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let rows = collect_all(&dir.path().join("nope")).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_collects_across_conferences_and_teams() {
        let dir = TempDir::new().unwrap();
        let east = write_team(dir.path(), &["east", "alpha"], &["a", "b"]);
        let west = write_team(dir.path(), &["west", "beta"], &["c"]);

        let rows = collect_all(dir.path()).unwrap();
        assert_eq!(rows.len(), 3);
        for tagged in &rows {
            let expected = if tagged.row.id == "c" { &west } else { &east };
            assert_eq!(&tagged.origin, expected);
        }
    }

    #[test]
    fn test_tolerates_depth_beyond_convention() {
        let dir = TempDir::new().unwrap();
        // Shallower and deeper than the three-level convention.
        write_team(dir.path(), &[], &["top"]);
        write_team(dir.path(), &["a", "b", "c", "d"], &["deep"]);
        fs::create_dir_all(dir.path().join("empty/branch")).unwrap();

        let rows = collect_all(dir.path()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_ignores_other_files() {
        let dir = TempDir::new().unwrap();
        write_team(dir.path(), &["east", "alpha"], &["a"]);
        fs::write(dir.path().join("east/alpha/notes.txt"), "not a roster").unwrap();
        fs::write(dir.path().join("east/readme.csv"), "id\nx").unwrap();

        let rows = collect_all(dir.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].row.id, "a");
    }
}
