//! Papyrus board engine - geometry and move discovery for a tile-placement word game
//!
//! The engine answers questions about one grid snapshot: which runs of
//! tiles form candidate words, what a word scores, and where a computer
//! player could anchor its next play.
//!
//! # Architecture
//!
//! - **Position / Boundary**: axis-relative cells and immutable spans
//! - **Grid**: the N×N squares with premium modifiers and occupants
//! - **Runs**: candidate words under first-move and later-move rules
//! - **Scoring**: letter and word premiums plus the full-rack bonus
//! - **Expander**: every span where a future play could anchor
//! - **Play**: validation of a turn against a [`Dictionary`]
//!
//! The engine never mutates the grid during a query; callers own turn order
//! and hand it a consistent snapshot.
//!
//! # Example
//!
//! ```
//! use papyrus_board::{find_runs, score, Grid, Placement, PlayerId, Tile, TileId};
//!
//! let mut grid = Grid::standard();
//! let owner = Placement::Rack(PlayerId(1));
//! let tiles: Vec<Tile> = "CAT"
//!     .chars()
//!     .zip(1..)
//!     .map(|(letter, id)| Tile::standard(TileId(id), letter).with_placement(owner))
//!     .collect();
//! for (column, tile) in (7..).zip(&tiles) {
//!     grid.place(8, column, *tile).unwrap();
//! }
//!
//! // CA, AT and CAT all cover the center; only CAT uses every tile.
//! let runs = find_runs(&grid, &tiles, 7);
//! assert_eq!(runs.len(), 3);
//! let cat = runs.iter().find(|run| run.len() == 3).unwrap().boundary();
//! assert_eq!(grid.readable(&cat).as_deref(), Some("CAT"));
//! assert_eq!(score(&grid, &cat, &tiles), 10);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod boundary;
mod config;
mod dictionary;
mod error;
mod expander;
mod grid;
mod play;
mod position;
mod run;
mod score;
mod square;
mod tile;

pub mod invariants;

// Crate-level exports - Errors
pub use error::{BoardError, PlayError};

// Crate-level exports - Geometry
pub use boundary::Boundary;
pub use position::Position;

// Crate-level exports - Grid
pub use grid::{Grid, Occupancy, STANDARD_DIMENSION};
pub use square::{Modifier, ModifierLayout, Square};
pub use tile::{BLANK, Placement, PlayerId, Tile, TileId, letter_value};

// Crate-level exports - Queries
pub use expander::{
    BoundaryExpander, DEFAULT_REACH, find_playable_boundaries, find_same_axis_plays,
    intersecting_words,
};
pub use run::{Run, RunCell, find_runs};
pub use score::{DEFAULT_BINGO_BONUS, DEFAULT_BINGO_TILES, ScoringRules, score};

// Crate-level exports - Play evaluation
pub use dictionary::{Dictionary, WordList};
pub use play::{PlayOutcome, ScoredWord, evaluate_play};

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};
