//! Axis-relative board coordinates.

use crate::BoardError;
use std::hash::{Hash, Hasher};
use tracing::instrument;

/// A single cell expressed relative to a word direction.
///
/// On a horizontal axis the row is `fixed` and the column is `iterable`;
/// on a vertical axis the column is `fixed` and the row is `iterable`.
/// `ascending` is the direction a walk from this position takes.
///
/// Two positions are equal when they name the same cell, whatever their
/// axis framing or direction.
#[derive(Debug, Clone, Copy)]
pub struct Position {
    iterable: usize,
    fixed: usize,
    horizontal: bool,
    ascending: bool,
    dimension: usize,
}

impl Position {
    /// Creates a position on the given axis, validating both coordinates.
    pub fn new(
        dimension: usize,
        horizontal: bool,
        ascending: bool,
        iterable: usize,
        fixed: usize,
    ) -> Result<Self, BoardError> {
        check_coordinate(iterable, dimension)?;
        check_coordinate(fixed, dimension)?;
        Ok(Self {
            iterable,
            fixed,
            horizontal,
            ascending,
            dimension,
        })
    }

    /// Maps an absolute `(row, column)` onto the requested axis.
    #[instrument(level = "trace")]
    pub fn resolve(
        dimension: usize,
        row: usize,
        column: usize,
        horizontal: bool,
    ) -> Result<Self, BoardError> {
        if horizontal {
            Self::new(dimension, true, true, column, row)
        } else {
            Self::new(dimension, false, true, row, column)
        }
    }

    /// Coordinate that varies along the word.
    pub fn iterable(&self) -> usize {
        self.iterable
    }

    /// Coordinate that stays constant along the word.
    pub fn fixed(&self) -> usize {
        self.fixed
    }

    /// Whether the axis runs along a row.
    pub fn horizontal(&self) -> bool {
        self.horizontal
    }

    /// Direction a walk from this position takes.
    pub fn ascending(&self) -> bool {
        self.ascending
    }

    /// Dimension of the board this position was validated against.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Absolute row (1-based).
    pub fn row(&self) -> usize {
        if self.horizontal {
            self.fixed
        } else {
            self.iterable
        }
    }

    /// Absolute column (1-based).
    pub fn column(&self) -> usize {
        if self.horizontal {
            self.iterable
        } else {
            self.fixed
        }
    }

    /// Copy with `iterable` replaced, or `None` when it leaves the board.
    pub fn with_iterable(&self, iterable: usize) -> Option<Self> {
        if iterable == 0 || iterable > self.dimension {
            return None;
        }
        Some(Self { iterable, ..*self })
    }

    /// Same cell re-expressed on the requested axis.
    pub fn with_horizontal(&self, horizontal: bool) -> Self {
        if horizontal == self.horizontal {
            return *self;
        }
        Self {
            iterable: self.fixed,
            fixed: self.iterable,
            horizontal,
            ..*self
        }
    }

    /// Copy walking in the requested direction.
    pub fn with_ascending(&self, ascending: bool) -> Self {
        Self { ascending, ..*self }
    }

    /// Neighbouring cell one step along the axis, in this position's direction.
    pub fn step(&self) -> Option<Self> {
        let next = if self.ascending {
            self.iterable.checked_add(1)?
        } else {
            self.iterable.checked_sub(1)?
        };
        self.with_iterable(next)
    }

    /// Walks along the axis while `predicate` holds.
    ///
    /// Returns the last position accepted, or `None` if this position is
    /// already rejected. The walk stops at the board edge.
    pub fn next_while<F>(&self, mut predicate: F) -> Option<Self>
    where
        F: FnMut(&Position) -> bool,
    {
        if !predicate(self) {
            return None;
        }
        let mut current = *self;
        while let Some(next) = current.step() {
            if !predicate(&next) {
                break;
            }
            current = next;
        }
        Some(current)
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.row() == other.row() && self.column() == other.column()
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row().hash(state);
        self.column().hash(state);
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.column())
    }
}

fn check_coordinate(value: usize, dimension: usize) -> Result<(), BoardError> {
    if value == 0 || value > dimension {
        return Err(BoardError::CoordinateOutOfRange { value, dimension });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_horizontal_fixes_row() {
        let pos = Position::resolve(15, 3, 9, true).unwrap();
        assert_eq!(pos.fixed(), 3);
        assert_eq!(pos.iterable(), 9);
        assert_eq!((pos.row(), pos.column()), (3, 9));
    }

    #[test]
    fn test_resolve_vertical_fixes_column() {
        let pos = Position::resolve(15, 3, 9, false).unwrap();
        assert_eq!(pos.fixed(), 9);
        assert_eq!(pos.iterable(), 3);
        assert_eq!((pos.row(), pos.column()), (3, 9));
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Position::resolve(15, 0, 1, true).is_err());
        assert!(Position::resolve(15, 1, 16, true).is_err());
    }

    #[test]
    fn test_equality_ignores_framing() {
        let h = Position::resolve(15, 4, 6, true).unwrap();
        let v = Position::resolve(15, 4, 6, false).unwrap().with_ascending(false);
        assert_eq!(h, v);
        assert_eq!(h.with_horizontal(false), h);
    }

    #[test]
    fn test_with_iterable_bounds() {
        let pos = Position::resolve(15, 8, 8, true).unwrap();
        assert!(pos.with_iterable(0).is_none());
        assert!(pos.with_iterable(16).is_none());
        assert_eq!(pos.with_iterable(15).map(|p| p.column()), Some(15));
    }

    #[test]
    fn test_next_while_stops_at_edge() {
        let pos = Position::resolve(15, 8, 12, true).unwrap();
        let last = pos.next_while(|_| true).unwrap();
        assert_eq!(last.column(), 15);

        let last = pos.with_ascending(false).next_while(|_| true).unwrap();
        assert_eq!(last.column(), 1);
    }

    #[test]
    fn test_next_while_rejects_start() {
        let pos = Position::resolve(15, 8, 8, true).unwrap();
        assert!(pos.next_while(|_| false).is_none());
    }

    #[test]
    fn test_next_while_stops_before_failure() {
        let pos = Position::resolve(15, 8, 8, true).unwrap();
        let last = pos.next_while(|p| p.column() < 11).unwrap();
        assert_eq!(last.column(), 10);
    }
}
