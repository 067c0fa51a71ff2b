//! Candidate words formed by tiles dropped on the grid.
//!
//! Every row and every column is walked cell by cell. Each time the walk
//! reaches an occupied square, every gap-free stretch ending on that square
//! is tested against the rules of the current phase:
//!
//! - **First move** (no fixed tiles on the board): longer than one cell, no
//!   longer than the number of tiles placed this turn, covering the center.
//! - **Later moves**: holds at least one fixed tile and between one and
//!   `rack_size` tiles that are not fixed.
//!
//! Empty squares clear the walk, so runs never contain gaps. A play that
//! extends "CAT" with an "S" reports "CATS", "ATS" and "TS"; callers pick the
//! runs that read as words.

use crate::{Boundary, Grid, Position, Tile};
use derive_new::new;
use tracing::{debug, instrument, trace};

/// One cell of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, new)]
pub struct RunCell {
    /// Iterable offset along the run's line.
    pub offset: usize,
    /// Tile on the cell.
    pub tile: Option<Tile>,
}

/// A contiguous sequence of cells along one row or column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    boundary: Boundary,
    cells: Vec<RunCell>,
}

impl Run {
    /// Span covered by the run.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Cells in iterable order.
    pub fn cells(&self) -> &[RunCell] {
        &self.cells
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the run has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells holding tiles fixed on earlier turns.
    pub fn fixed_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.tile.is_some_and(|t| t.is_fixed()))
            .count()
    }

    /// Cells not holding a fixed tile.
    pub fn new_count(&self) -> usize {
        self.len() - self.fixed_count()
    }

    /// Whether any cell holds `tile`.
    pub fn holds(&self, tile: &Tile) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.tile.is_some_and(|t| t.id() == tile.id()))
    }

    /// Letters of the run, in order.
    pub fn word(&self) -> String {
        self.cells
            .iter()
            .filter_map(|cell| cell.tile.map(|t| t.letter()))
            .collect()
    }
}

/// Phase-specific acceptance rules for runs.
#[derive(Debug, Clone, Copy)]
struct RunRules {
    first_move: bool,
    placed: usize,
    rack_size: usize,
    center: (usize, usize),
}

impl RunRules {
    fn accepts(&self, run: &Run) -> bool {
        if self.first_move {
            let (row, column) = self.center;
            run.len() > 1 && run.len() <= self.placed && run.boundary.encompasses(row, column)
        } else {
            let new = run.new_count();
            run.fixed_count() > 0 && new > 0 && new <= self.rack_size
        }
    }
}

/// Finds every candidate run on the grid.
///
/// `placed` are the tiles dropped this turn and bound the first word's
/// length; `rack_size` bounds how many non-fixed tiles a later word may use.
#[instrument(skip(grid, placed), fields(placed = placed.len()))]
pub fn find_runs(grid: &Grid, placed: &[Tile], rack_size: usize) -> Vec<Run> {
    let rules = RunRules {
        first_move: !grid.has_fixed_tiles(),
        placed: placed.len(),
        rack_size,
        center: grid.center(),
    };

    let mut runs = Vec::new();
    for horizontal in [true, false] {
        for fixed in 1..=grid.dimension() {
            scan_line(grid, horizontal, fixed, &rules, &mut runs);
        }
    }
    debug!(count = runs.len(), first_move = rules.first_move, "Runs found");
    runs
}

fn scan_line(grid: &Grid, horizontal: bool, fixed: usize, rules: &RunRules, runs: &mut Vec<Run>) {
    let dimension = grid.dimension();
    let mut buffer: Vec<(Position, Tile)> = Vec::new();
    for iterable in 1..=dimension {
        let occupant = Position::new(dimension, horizontal, true, iterable, fixed)
            .ok()
            .and_then(|p| grid.square_at(&p).and_then(|s| s.occupant().copied()).map(|t| (p, t)));
        let Some(cell) = occupant else {
            buffer.clear();
            continue;
        };
        buffer.push(cell);
        for first in 0..buffer.len() {
            let Some(run) = run_of(&buffer[first..]) else {
                continue;
            };
            if rules.accepts(&run) {
                trace!(boundary = %run.boundary, "Run accepted");
                runs.push(run);
            }
        }
    }
}

fn run_of(cells: &[(Position, Tile)]) -> Option<Run> {
    let (first, _) = cells.first()?;
    let (last, _) = cells.last()?;
    let boundary = Boundary::new(*first, *last).ok()?;
    let cells = cells
        .iter()
        .map(|(position, tile)| RunCell::new(position.iterable(), Some(*tile)))
        .collect();
    Some(Run { boundary, cells })
}
