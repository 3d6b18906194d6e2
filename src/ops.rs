//! Record Operations
//!
//! CRUD over the hierarchy. Create appends to one team's record file;
//! update and delete locate a row by identifier through a full recursive
//! traversal, then rewrite only the file that contains it. There is no
//! identifier index: every lookup pays the full traversal cost, and a
//! duplicated identifier (possible only through external tampering) resolves
//! to whichever row the traversal encounters first.

use crate::error::{Error, Result};
use crate::store::{self, PlayerRow, RECORD_FILE};
use crate::types::{NewPlayer, Player, PlayerPatch, Position};
use crate::walker::{self, TaggedRow};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use uuid::Uuid;

/// Handle over one hierarchy root. The base path is threaded in explicitly
/// so tests can point each case at its own temporary directory.
#[derive(Debug, Clone)]
pub struct Roster {
    base_dir: PathBuf,
}

impl Roster {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Roster {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Validate and persist a new player under `<base>/<conference>/<team>`.
    ///
    /// Validation happens before any filesystem mutation; a rejected field
    /// leaves the hierarchy exactly as it was. The team directory and its
    /// record file are created on first use.
    pub fn create(&self, conference: &str, team: &str, fields: &NewPlayer) -> Result<Player> {
        let name = fields.name.trim();
        if name.is_empty() {
            return Err(Error::validation("name"));
        }
        let position: Position = fields.position.parse()?;
        let points = parse_stat("points", &fields.points)?;
        let rebounds = parse_stat("rebounds", &fields.rebounds)?;
        let assists = parse_stat("assists", &fields.assists)?;

        let team_dir = self.base_dir.join(conference).join(team);
        fs::create_dir_all(&team_dir)?;
        let path = team_dir.join(RECORD_FILE);
        store::ensure_initialized(&path)?;

        let player = Player {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            position,
            points,
            rebounds,
            assists,
        };

        let mut rows = store::load(&path)?;
        rows.push(to_row(&player));
        store::save(&path, &rows)?;
        info!(id = %player.id, file = %path.display(), "player created");
        Ok(player)
    }

    /// Flatten the whole hierarchy into origin-tagged rows.
    pub fn collect_all(&self) -> Result<Vec<TaggedRow>> {
        walker::collect_all(&self.base_dir)
    }

    /// Apply a partial update to the player with the given identifier.
    ///
    /// The origin file is re-read fresh before rewriting so sibling rows
    /// added since the traversal snapshot are preserved. Returns the updated
    /// row in its stored text form.
    pub fn update(&self, id: &str, patch: &PlayerPatch) -> Result<PlayerRow> {
        let origin = self
            .find_origin(id)?
            .ok_or_else(|| Error::NotFound(id.to_string()))?;

        let mut rows = store::load(&origin)?;
        // The file may have changed between traversal and re-read.
        let index = rows
            .iter()
            .position(|row| row.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))?;
        apply_patch(&mut rows[index], patch);
        let updated = rows[index].clone();
        store::save(&origin, &rows)?;
        info!(id, file = %origin.display(), "player updated");
        Ok(updated)
    }

    /// Remove the player with the given identifier.
    ///
    /// Absence is not an error: returns whether a row was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let Some(origin) = self.find_origin(id)? else {
            debug!(id, "delete target not found");
            return Ok(false);
        };
        let rows = store::load(&origin)?;
        let remaining: Vec<PlayerRow> = rows.into_iter().filter(|r| r.id != id).collect();
        store::save(&origin, &remaining)?;
        info!(id, file = %origin.display(), "player deleted");
        Ok(true)
    }

    /// Full-traversal lookup; first match in traversal order wins.
    fn find_origin(&self, id: &str) -> Result<Option<PathBuf>> {
        let all = self.collect_all()?;
        Ok(all
            .into_iter()
            .find(|tagged| tagged.row.id == id)
            .map(|tagged| tagged.origin))
    }
}

fn parse_stat(field: &str, text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(v) if v >= 0.0 => Ok(v),
        _ => Err(Error::validation(field)),
    }
}

fn to_row(player: &Player) -> PlayerRow {
    PlayerRow {
        id: player.id.clone(),
        name: player.name.clone(),
        position: player.position.to_string(),
        points: player.points.to_string(),
        rebounds: player.rebounds.to_string(),
        assists: player.assists.to_string(),
    }
}

fn apply_patch(row: &mut PlayerRow, patch: &PlayerPatch) {
    if let Some(name) = &patch.name {
        row.name = name.clone();
    }
    if let Some(position) = &patch.position {
        row.position = position.clone();
    }
    if let Some(points) = &patch.points {
        row.points = points.clone();
    }
    if let Some(rebounds) = &patch.rebounds {
        row.rebounds = rebounds.clone();
    }
    if let Some(assists) = &patch.assists {
        row.assists = assists.clone();
    }
}
