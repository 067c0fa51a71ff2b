//! The square grid shared by every engine query.

use crate::invariants::{GridInvariants, Invariant, InvariantSet, SquaresInPlace};
use crate::{BoardError, Boundary, Modifier, ModifierLayout, Placement, Position, Square, Tile, TileId};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, trace};

/// Side length of the standard board.
pub const STANDARD_DIMENSION: usize = 15;

/// Occupancy of every square in row-major order.
///
/// This is all the state a grid carries between turns; squares, positions
/// and boundaries are derived from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occupancy {
    /// Side length of the grid.
    pub dimension: usize,
    /// Occupant of each square, row-major.
    pub tiles: Vec<Option<Tile>>,
}

/// An N×N grid of squares, addressed by 1-based `(row, column)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    dimension: usize,
    squares: Vec<Square>,
}

impl Grid {
    /// Builds a grid, mirroring `layout` around the center cell.
    ///
    /// The dimension must be odd so a center cell exists. Mirrored premium
    /// cells falling off a small board are dropped.
    #[instrument(skip(layout))]
    pub fn new(dimension: usize, layout: &ModifierLayout) -> Result<Self, BoardError> {
        if dimension == 0 || dimension % 2 == 0 {
            return Err(BoardError::InvalidDimension { dimension });
        }
        let grid = Self::build(dimension, layout);
        debug!(dimension, "Grid created");
        Ok(grid)
    }

    /// The standard 15×15 board.
    pub fn standard() -> Self {
        Self::build(STANDARD_DIMENSION, &ModifierLayout::standard())
    }

    fn build(dimension: usize, layout: &ModifierLayout) -> Self {
        let middle = dimension / 2 + 1;
        let squares = (1..=dimension)
            .flat_map(|row| (1..=dimension).map(move |column| (row, column)))
            .map(|(row, column)| {
                let (a, b) = (row.abs_diff(middle), column.abs_diff(middle));
                let modifier = Modifier::iter()
                    .find(|&m| layout.marks(m, a, b))
                    .unwrap_or(Modifier::None);
                Square::new(modifier, row, column)
            })
            .collect();
        let grid = Self { dimension, squares };
        debug_assert!(SquaresInPlace::holds(&grid));
        grid
    }

    /// Side length.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// `(row, column)` of the center cell.
    pub fn center(&self) -> (usize, usize) {
        let middle = self.dimension / 2 + 1;
        (middle, middle)
    }

    /// Square at an absolute cell.
    pub fn square(&self, row: usize, column: usize) -> Option<&Square> {
        self.index(row, column).map(|i| &self.squares[i])
    }

    /// Square under a position, if the position belongs to this grid.
    pub fn square_at(&self, position: &Position) -> Option<&Square> {
        if position.dimension() != self.dimension {
            return None;
        }
        self.square(position.row(), position.column())
    }

    /// `Some(true)` when the square is empty, `None` off the grid.
    pub fn empty_at(&self, position: &Position) -> Option<bool> {
        self.square_at(position).map(Square::is_empty)
    }

    /// Whether the position is on the grid and holds a tile.
    pub fn is_filled(&self, position: &Position) -> bool {
        self.empty_at(position) == Some(false)
    }

    /// Letter at the position.
    pub fn letter_at(&self, position: &Position) -> Option<char> {
        self.square_at(position)?.occupant().map(Tile::letter)
    }

    /// Position on the requested axis for an absolute cell of this grid.
    pub fn position(&self, row: usize, column: usize, horizontal: bool) -> Result<Position, BoardError> {
        Position::resolve(self.dimension, row, column, horizontal)
    }

    /// Puts a tile on an empty square.
    #[instrument(skip(self, tile), fields(tile = %tile.id(), letter = %tile.letter()))]
    pub fn place(&mut self, row: usize, column: usize, tile: Tile) -> Result<(), BoardError> {
        let index = self.checked_index(row, column)?;
        let square = &mut self.squares[index];
        if !square.is_empty() {
            return Err(BoardError::SquareOccupied { row, column });
        }
        square.set_occupant(Some(tile));
        trace!("Tile placed");
        Ok(())
    }

    /// Removes and returns the tile on a square.
    #[instrument(skip(self))]
    pub fn take(&mut self, row: usize, column: usize) -> Option<Tile> {
        let index = self.index(row, column)?;
        self.squares[index].set_occupant(None)
    }

    /// `(row, column)` of the tile with the given id.
    pub fn locate(&self, id: TileId) -> Option<(usize, usize)> {
        self.squares
            .iter()
            .find(|square| square.occupant().is_some_and(|tile| tile.id() == id))
            .map(|square| (square.row(), square.column()))
    }

    /// Whether any tile was committed on an earlier turn.
    pub fn has_fixed_tiles(&self) -> bool {
        self.squares
            .iter()
            .filter_map(Square::occupant)
            .any(Tile::is_fixed)
    }

    /// Commits every tile on the board; returns how many changed.
    #[instrument(skip(self))]
    pub fn fix_tiles(&mut self) -> usize {
        let mut fixed = 0;
        for square in &mut self.squares {
            if let Some(tile) = square.occupant_mut()
                && !tile.is_fixed()
            {
                *tile = tile.with_placement(Placement::Fixed);
                fixed += 1;
            }
        }
        debug_assert!(GridInvariants::check_all(self).is_ok());
        debug!(fixed, "Tiles fixed");
        fixed
    }

    /// Copies the occupancy array.
    pub fn snapshot(&self) -> Occupancy {
        Occupancy {
            dimension: self.dimension,
            tiles: self.squares.iter().map(|s| s.occupant().copied()).collect(),
        }
    }

    /// Replaces the occupancy array.
    #[instrument(skip(self, occupancy), fields(squares = occupancy.tiles.len()))]
    pub fn restore(&mut self, occupancy: Occupancy) -> Result<(), BoardError> {
        if occupancy.dimension != self.dimension {
            return Err(BoardError::DimensionMismatch {
                left: self.dimension,
                right: occupancy.dimension,
            });
        }
        if occupancy.tiles.len() != self.squares.len() {
            return Err(BoardError::SnapshotSize {
                expected: self.squares.len(),
                actual: occupancy.tiles.len(),
            });
        }
        for (square, tile) in self.squares.iter_mut().zip(occupancy.tiles) {
            square.set_occupant(tile);
        }
        Ok(())
    }

    /// Squares covered by a boundary, in iterable order.
    pub fn squares_in(&self, boundary: &Boundary) -> Vec<&Square> {
        boundary
            .positions()
            .filter_map(|p| self.square_at(&p))
            .collect()
    }

    /// Tiles covered by a boundary, skipping empty squares.
    pub fn tiles_in(&self, boundary: &Boundary) -> Vec<Tile> {
        self.squares_in(boundary)
            .into_iter()
            .filter_map(|s| s.occupant().copied())
            .collect()
    }

    /// Last empty position walking from `position`.
    pub fn next_while_empty(&self, position: &Position) -> Option<Position> {
        position.next_while(|p| self.empty_at(p) == Some(true))
    }

    /// Last filled position walking from `position`.
    pub fn next_while_filled(&self, position: &Position) -> Option<Position> {
        position.next_while(|p| self.is_filled(p))
    }

    /// Maximal run of filled cells through `position` on its axis.
    pub fn filled_run_through(&self, position: &Position) -> Option<Boundary> {
        let start = self.next_while_filled(&position.with_ascending(false))?;
        let end = self.next_while_filled(&position.with_ascending(true))?;
        Boundary::new(start, end).ok()
    }

    /// Resolves the axis of a single played cell from its neighbours.
    ///
    /// Prefers the word formed on the position's other axis, falls back to
    /// its own axis, and returns `None` when neither axis has an occupied
    /// neighbour (or the cell itself is empty).
    #[instrument(skip(self), fields(position = %position))]
    pub fn boundary_through(&self, position: &Position) -> Option<Boundary> {
        let other = position.with_horizontal(!position.horizontal());
        [other, *position]
            .iter()
            .filter_map(|candidate| self.filled_run_through(candidate))
            .find(|boundary| boundary.length() > 0)
    }

    /// Boundary for the cells touched during a turn.
    pub fn boundary_for_positions(&self, positions: &[Position]) -> Result<Boundary, BoardError> {
        match positions {
            [single] => self
                .boundary_through(single)
                .ok_or(BoardError::AmbiguousAxis),
            _ => Boundary::from_positions(positions),
        }
    }

    /// Letters inside a boundary, in order.
    ///
    /// `None` for a single-cell boundary or when any cell inside is empty.
    #[instrument(skip(self), fields(boundary = %boundary))]
    pub fn readable(&self, boundary: &Boundary) -> Option<String> {
        if boundary.start().iterable() >= boundary.end().iterable() {
            return None;
        }
        boundary.positions().map(|p| self.letter_at(&p)).collect()
    }

    fn index(&self, row: usize, column: usize) -> Option<usize> {
        if row == 0 || column == 0 || row > self.dimension || column > self.dimension {
            return None;
        }
        Some((row - 1) * self.dimension + (column - 1))
    }

    fn checked_index(&self, row: usize, column: usize) -> Result<usize, BoardError> {
        let dimension = self.dimension;
        let bad = [row, column]
            .into_iter()
            .find(|&value| value == 0 || value > dimension);
        match bad {
            Some(value) => Err(BoardError::CoordinateOutOfRange { value, dimension }),
            None => Ok((row - 1) * dimension + (column - 1)),
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::standard()
    }
}
