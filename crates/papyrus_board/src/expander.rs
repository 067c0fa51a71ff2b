//! Discovery of spans where a future play could anchor.
//!
//! Starting from words already on the board, the expander lists every span
//! on the same line that encloses the word, and every span on the crossing
//! lines that encloses the perpendicular word through each of its cells.
//! The move search tries dictionary lookups against these spans, so the
//! result for one grid snapshot should be computed once and reused.

use crate::{Boundary, Grid, Position};
use std::collections::HashSet;
use tracing::{debug, instrument, trace};

/// Default number of empty cells a candidate may add: one full rack.
pub const DEFAULT_REACH: usize = 7;

/// Expands word boundaries into candidate play boundaries.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryExpander<'a> {
    grid: &'a Grid,
    reach: usize,
}

impl<'a> BoundaryExpander<'a> {
    /// Creates an expander adding at most `reach` empty cells per candidate.
    pub fn new(grid: &'a Grid, reach: usize) -> Self {
        Self { grid, reach }
    }

    /// Empty cells a candidate may add.
    pub fn reach(&self) -> usize {
        self.reach
    }

    /// Every span on the boundary's line that encloses it.
    ///
    /// A candidate starts at or before the boundary and ends at or after
    /// it, fills at most `reach` empty cells, and has an empty square or the
    /// board edge on both outer sides so it never cuts a longer word short.
    /// The boundary itself is not returned.
    #[instrument(skip(self), fields(boundary = %boundary))]
    pub fn same_axis_plays(&self, boundary: &Boundary) -> HashSet<Boundary> {
        let start = boundary.start();
        let end = boundary.end();
        let lowest = self.reach_from(&start.with_ascending(false)).unwrap_or(start.iterable());
        let highest = self.reach_from(&end.with_ascending(true)).unwrap_or(end.iterable());

        let mut plays = HashSet::new();
        for s in lowest..=start.iterable() {
            for e in end.iterable()..=highest {
                if s == start.iterable() && e == end.iterable() {
                    continue;
                }
                if start.with_iterable(s - 1).is_some_and(|p| self.grid.is_filled(&p)) {
                    continue;
                }
                if end.with_iterable(e + 1).is_some_and(|p| self.grid.is_filled(&p)) {
                    continue;
                }
                let added = self.empties(&start, s..start.iterable())
                    + self.empties(&end, end.iterable() + 1..=e);
                if added > self.reach {
                    continue;
                }
                let candidate = start
                    .with_iterable(s)
                    .zip(end.with_iterable(e))
                    .and_then(|(a, b)| Boundary::new(a, b).ok());
                if let Some(candidate) = candidate {
                    debug_assert!(candidate.contains(boundary));
                    plays.insert(candidate);
                }
            }
        }
        trace!(count = plays.len(), "Same-axis plays");
        plays
    }

    /// Every candidate span anchored on the given words.
    ///
    /// Unions the same-axis plays of each boundary with the same-axis plays
    /// of the perpendicular word through each of its cells.
    #[instrument(skip(self, boundaries), fields(seeds = boundaries.len()))]
    pub fn playable_boundaries(&self, boundaries: &[Boundary]) -> HashSet<Boundary> {
        let mut all = HashSet::new();
        for boundary in boundaries {
            all.extend(self.same_axis_plays(boundary));
            for position in boundary.positions() {
                let across = position.with_horizontal(!boundary.horizontal());
                match self.grid.filled_run_through(&across) {
                    Some(word) => all.extend(self.same_axis_plays(&word)),
                    None => trace!(position = %position, "Skipped empty cell"),
                }
            }
        }
        debug!(count = all.len(), "Playable boundaries found");
        all
    }

    /// Perpendicular words of two or more letters crossing the boundary.
    #[instrument(skip(self), fields(boundary = %boundary))]
    pub fn intersecting_words(&self, boundary: &Boundary) -> Vec<Boundary> {
        boundary
            .positions()
            .filter_map(|p| {
                self.grid
                    .filled_run_through(&p.with_horizontal(!boundary.horizontal()))
            })
            .filter(|word| word.length() > 0)
            .collect()
    }

    /// Farthest iterable reachable past `edge` without adding more than
    /// `reach` empty cells.
    fn reach_from(&self, edge: &Position) -> Option<usize> {
        let first = edge.step()?;
        let mut empties = 0;
        first
            .next_while(|p| {
                if !self.grid.is_filled(p) {
                    empties += 1;
                }
                empties <= self.reach
            })
            .map(|p| p.iterable())
    }

    fn empties(&self, line: &Position, offsets: impl Iterator<Item = usize>) -> usize {
        offsets
            .filter_map(|i| line.with_iterable(i))
            .filter(|p| !self.grid.is_filled(p))
            .count()
    }
}

/// Same-axis plays with the default reach.
pub fn find_same_axis_plays(grid: &Grid, boundary: &Boundary) -> HashSet<Boundary> {
    BoundaryExpander::new(grid, DEFAULT_REACH).same_axis_plays(boundary)
}

/// Playable boundaries with the default reach.
pub fn find_playable_boundaries(grid: &Grid, boundaries: &[Boundary]) -> HashSet<Boundary> {
    BoundaryExpander::new(grid, DEFAULT_REACH).playable_boundaries(boundaries)
}

/// Cross words through every cell of `boundary`.
pub fn intersecting_words(grid: &Grid, boundary: &Boundary) -> Vec<Boundary> {
    BoundaryExpander::new(grid, DEFAULT_REACH).intersecting_words(boundary)
}
