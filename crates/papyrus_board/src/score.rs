//! Word scoring.

use crate::{Boundary, Grid, Tile, TileId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{instrument, trace};

/// Bonus for a word that uses a full rack.
pub const DEFAULT_BINGO_BONUS: u32 = 50;

/// Rack tiles a word must use to earn the bonus.
pub const DEFAULT_BINGO_TILES: usize = 7;

/// Knobs of the scoring formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    /// Points added when exactly `bingo_tiles` rack tiles are in the word.
    pub bingo_bonus: u32,
    /// Rack tiles needed for the bonus.
    pub bingo_tiles: usize,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            bingo_bonus: DEFAULT_BINGO_BONUS,
            bingo_tiles: DEFAULT_BINGO_TILES,
        }
    }
}

impl ScoringRules {
    /// Scores the tiles inside `boundary`.
    ///
    /// Letter premiums apply first, then the product of the word premiums
    /// of every occupied square. Empty squares add nothing and multiply by
    /// one. Totals saturate at `u32::MAX`. `rack` holds the current player's tiles; the bonus is added
    /// when exactly `bingo_tiles` of them lie inside the boundary.
    #[instrument(skip(self, grid, rack), fields(boundary = %boundary))]
    pub fn score(&self, grid: &Grid, boundary: &Boundary, rack: &[Tile]) -> u32 {
        let squares = grid.squares_in(boundary);
        let letters = squares
            .iter()
            .fold(0u32, |sum, s| sum.saturating_add(s.letter_value()));
        let multiplier = squares
            .iter()
            .fold(1u32, |product, s| product.saturating_mul(s.word_multiplier()));
        let mut value = letters.saturating_mul(multiplier);

        let rack_ids: HashSet<TileId> = rack.iter().map(Tile::id).collect();
        let from_rack = squares
            .iter()
            .filter_map(|s| s.occupant())
            .filter(|tile| rack_ids.contains(&tile.id()))
            .count();
        if from_rack == self.bingo_tiles {
            value = value.saturating_add(self.bingo_bonus);
        }
        trace!(letters, multiplier, from_rack, value, "Scored");
        value
    }
}

/// Scores `boundary` with the default rules.
pub fn score(grid: &Grid, boundary: &Boundary, rack: &[Tile]) -> u32 {
    ScoringRules::default().score(grid, boundary, rack)
}
