//! Roster: Hierarchical Flat-File Player Storage
//!
//! Manages a roster of players persisted as one CSV file per team inside a
//! conference/team directory hierarchy. Provides recursive collection over
//! the whole tree, origin-tagged rows, and whole-file read-modify-write
//! update and delete.

pub mod config;
pub mod error;
pub mod logging;
pub mod ops;
pub mod stats;
pub mod store;
pub mod tooling;
pub mod types;
pub mod walker;

pub use error::{Error, Result};
pub use ops::Roster;
