//! Validation and scoring of the tiles a player dropped this turn.

use crate::{
    BoardError, Boundary, BoundaryExpander, Dictionary, EngineConfig, Grid, PlayError, Position,
    Tile, find_runs,
};
use derive_getters::Getters;
use derive_new::new;
use tracing::{debug, instrument, warn};

/// A word formed by a play, with its score.
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
pub struct ScoredWord {
    /// Cells of the word.
    boundary: Boundary,
    /// Letters of the word.
    word: String,
    /// Points for the word.
    score: u32,
}

/// Every word a legal play forms and the points it earns.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct PlayOutcome {
    /// Main word first, then cross words in placement order.
    words: Vec<ScoredWord>,
    /// Sum of the word scores.
    total: u32,
}

/// Checks the tiles placed this turn and scores the words they form.
///
/// `placed` must already be on `grid` and not yet fixed; `rack` is the
/// current player's full rack, used for the full-rack bonus.
#[instrument(skip_all, fields(placed = placed.len()))]
pub fn evaluate_play(
    grid: &Grid,
    placed: &[Tile],
    rack: &[Tile],
    dictionary: &impl Dictionary,
    config: &EngineConfig,
) -> Result<PlayOutcome, PlayError> {
    if placed.is_empty() {
        return Err(PlayError::NoTiles);
    }
    let first_move = !grid.has_fixed_tiles();

    let positions = placed
        .iter()
        .map(|tile| {
            let (row, column) = grid.locate(tile.id()).ok_or(PlayError::NotOnBoard(tile.id()))?;
            Ok(grid.position(row, column, true)?)
        })
        .collect::<Result<Vec<Position>, PlayError>>()?;

    let main = match main_word(grid, &positions)? {
        Some(main) => main,
        None => {
            warn!(first_move, "Single tile touches nothing");
            return Err(if first_move {
                PlayError::TooShort
            } else {
                PlayError::Disconnected
            });
        }
    };

    let legal = find_runs(grid, placed, *config.rack_size())
        .iter()
        .any(|run| placed.iter().any(|tile| run.holds(tile)));
    if !legal {
        warn!(first_move, main = %main, "Play breaks placement rules");
        return Err(match (first_move, placed.len()) {
            (true, 1) => PlayError::TooShort,
            (true, _) => PlayError::MissingCenter,
            (false, _) => PlayError::Disconnected,
        });
    }

    let expander = BoundaryExpander::new(grid, *config.rack_size());
    let mut boundaries = vec![main];
    for position in &positions {
        let cell = position.with_horizontal(main.horizontal());
        boundaries.extend(expander.intersecting_words(&Boundary::new(cell, cell)?));
    }

    let rules = config.scoring();
    let mut words = Vec::with_capacity(boundaries.len());
    for boundary in boundaries {
        let word = grid.readable(&boundary).ok_or(PlayError::Gap)?;
        if !dictionary.is_valid_word(&word) {
            warn!(word = %word, "Word rejected by dictionary");
            return Err(PlayError::InvalidWord(word));
        }
        let score = rules.score(grid, &boundary, rack);
        words.push(ScoredWord::new(boundary, word, score));
    }
    let total = words.iter().map(|w| w.score).sum();
    debug!(words = words.len(), total, "Play accepted");
    Ok(PlayOutcome { words, total })
}

/// The filled run along the placed tiles' line, or `None` when a single
/// tile has no neighbour on either axis.
fn main_word(grid: &Grid, positions: &[Position]) -> Result<Option<Boundary>, PlayError> {
    let line = match grid.boundary_for_positions(positions) {
        Ok(line) => line,
        Err(BoardError::AmbiguousAxis) => return Ok(None),
        Err(BoardError::NotInLine) => return Err(PlayError::NotInLine),
        Err(err) => return Err(err.into()),
    };
    match grid.filled_run_through(&line.start()) {
        Some(word) if word.contains(&line) => Ok(Some(word)),
        _ => Err(PlayError::Gap),
    }
}
