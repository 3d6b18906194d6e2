//! Aggregate statistics over a flattened collection of rows.

use crate::walker::TaggedRow;
use serde::Serialize;

/// Per-game arithmetic means across a collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Averages {
    pub points: f64,
    pub rebounds: f64,
    pub assists: f64,
}

/// Summary of a collection: total count, plus means when non-empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub averages: Option<Averages>,
}

fn numeric(text: &str) -> f64 {
    // Rows written by create always parse; tampered text degrades to zero
    // rather than aborting the whole summary.
    text.trim().parse().unwrap_or(0.0)
}

/// Compute count and per-field means. Empty input reports a zero count and
/// no averages. Full floating-point precision; rounding is a display concern.
pub fn summarize(rows: &[TaggedRow]) -> Summary {
    if rows.is_empty() {
        return Summary {
            count: 0,
            averages: None,
        };
    }
    let count = rows.len();
    let mut points = 0.0;
    let mut rebounds = 0.0;
    let mut assists = 0.0;
    for tagged in rows {
        points += numeric(&tagged.row.points);
        rebounds += numeric(&tagged.row.rebounds);
        assists += numeric(&tagged.row.assists);
    }
    let n = count as f64;
    Summary {
        count,
        averages: Some(Averages {
            points: points / n,
            rebounds: rebounds / n,
            assists: assists / n,
        }),
    }
}
