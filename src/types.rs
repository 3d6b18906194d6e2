//! Domain types: player positions, validated players, and partial updates.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of court positions.
///
/// Parsed case-insensitively; the lowercase form is what gets persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    Base,
    Escolta,
    Alero,
    AlaPivot,
    Pivot,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Base => "base",
            Position::Escolta => "escolta",
            Position::Alero => "alero",
            Position::AlaPivot => "ala-pivot",
            Position::Pivot => "pivot",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "base" => Ok(Position::Base),
            "escolta" => Ok(Position::Escolta),
            "alero" => Ok(Position::Alero),
            "ala-pivot" => Ok(Position::AlaPivot),
            "pivot" => Ok(Position::Pivot),
            _ => Err(Error::validation("position")),
        }
    }
}

/// A fully validated player as returned to callers of `create`.
///
/// Numeric statistics are `f64` here; they are stringified only at the
/// storage boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
}

/// Raw field values for a new player, prior to validation.
#[derive(Debug, Clone, Default)]
pub struct NewPlayer {
    pub name: String,
    pub position: String,
    pub points: String,
    pub rebounds: String,
    pub assists: String,
}

/// Partial update: present fields overwrite, absent fields keep their
/// stored value. Values are applied as raw text.
#[derive(Debug, Clone, Default)]
pub struct PlayerPatch {
    pub name: Option<String>,
    pub position: Option<String>,
    pub points: Option<String>,
    pub rebounds: Option<String>,
    pub assists: Option<String>,
}

impl PlayerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.position.is_none()
            && self.points.is_none()
            && self.rebounds.is_none()
            && self.assists.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_parses_case_insensitively() {
        assert_eq!("BASE".parse::<Position>().unwrap(), Position::Base);
        assert_eq!("Ala-Pivot".parse::<Position>().unwrap(), Position::AlaPivot);
        assert_eq!("escolta".parse::<Position>().unwrap(), Position::Escolta);
    }

    #[test]
    fn test_position_rejects_unknown() {
        let err = "point-guard".parse::<Position>().unwrap_err();
        assert!(matches!(err, Error::Validation { ref field } if field == "position"));
    }

    #[test]
    fn test_position_round_trips_through_display() {
        for s in ["base", "escolta", "alero", "ala-pivot", "pivot"] {
            let p: Position = s.parse().unwrap();
            assert_eq!(p.to_string(), s);
        }
    }

    #[test]
    fn test_empty_patch() {
        assert!(PlayerPatch::default().is_empty());
        let patch = PlayerPatch {
            points: Some("12.5".to_string()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
