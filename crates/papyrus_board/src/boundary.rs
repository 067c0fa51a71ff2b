//! Axis-aligned spans of board cells.

use crate::invariants::{BoundaryInvariants, InvariantSet};
use crate::{BoardError, Position};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::ops::RangeInclusive;
use tracing::instrument;

/// An immutable span of cells on one row or column.
///
/// `start` and `end` share an axis and a fixed value, and `start` never
/// comes after `end`. Equality and hashing only look at the axis, the fixed
/// value and the two iterable values, so spans built along different paths
/// compare equal when they cover the same cells.
#[derive(Debug, Clone, Copy)]
pub struct Boundary {
    start: Position,
    end: Position,
}

impl Boundary {
    /// Creates a boundary between two positions on the same line.
    pub fn new(start: Position, end: Position) -> Result<Self, BoardError> {
        if start.dimension() != end.dimension() {
            return Err(BoardError::DimensionMismatch {
                left: start.dimension(),
                right: end.dimension(),
            });
        }
        if start.horizontal() != end.horizontal() {
            return Err(BoardError::MismatchedAxis);
        }
        if start.fixed() != end.fixed() {
            return Err(BoardError::MismatchedLine {
                start: start.fixed(),
                end: end.fixed(),
            });
        }
        if start.iterable() > end.iterable() {
            return Err(BoardError::InvertedSpan {
                start: start.iterable(),
                end: end.iterable(),
            });
        }
        let boundary = Self {
            start: start.with_ascending(false),
            end: end.with_ascending(true),
        };
        debug_assert!(BoundaryInvariants::check_all(&boundary).is_ok());
        Ok(boundary)
    }

    /// Smallest boundary enclosing a loose set of positions on one line.
    ///
    /// The axis is taken from the cells themselves: shared row means
    /// horizontal, shared column means vertical. A single position has no
    /// axis of its own and yields [`BoardError::AmbiguousAxis`]; use
    /// [`Grid::boundary_through`](crate::Grid::boundary_through) to resolve
    /// it against the board.
    #[instrument(skip(positions), fields(count = positions.len()))]
    pub fn from_positions(positions: &[Position]) -> Result<Self, BoardError> {
        let (first, rest) = positions.split_first().ok_or(BoardError::EmptyPositions)?;
        if rest.is_empty() {
            return Err(BoardError::AmbiguousAxis);
        }
        let horizontal = if rest.iter().all(|p| p.row() == first.row()) {
            true
        } else if rest.iter().all(|p| p.column() == first.column()) {
            false
        } else {
            return Err(BoardError::NotInLine);
        };

        let mut start = first.with_horizontal(horizontal);
        let mut end = start;
        for pos in rest {
            if pos.dimension() != first.dimension() {
                return Err(BoardError::DimensionMismatch {
                    left: first.dimension(),
                    right: pos.dimension(),
                });
            }
            let pos = pos.with_horizontal(horizontal);
            if pos.iterable() < start.iterable() {
                start = pos;
            }
            if pos.iterable() > end.iterable() {
                end = pos;
            }
        }
        Self::new(start, end)
    }

    /// First cell of the span.
    pub fn start(&self) -> Position {
        self.start
    }

    /// Last cell of the span.
    pub fn end(&self) -> Position {
        self.end
    }

    /// Whether the span runs along a row.
    pub fn horizontal(&self) -> bool {
        self.start.horizontal()
    }

    /// The shared row (horizontal) or column (vertical).
    pub fn fixed(&self) -> usize {
        self.start.fixed()
    }

    /// `end.iterable - start.iterable`; a single cell has length zero.
    pub fn length(&self) -> usize {
        self.end.iterable() - self.start.iterable()
    }

    /// Iterable values covered by the span.
    pub fn iterable_range(&self) -> RangeInclusive<usize> {
        self.start.iterable()..=self.end.iterable()
    }

    /// Every cell of the span in iterable order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iterable_range()
            .filter_map(move |i| self.start.with_iterable(i))
    }

    /// True when `other` lies on the same line within this span.
    pub fn contains(&self, other: &Boundary) -> bool {
        self.horizontal() == other.horizontal()
            && self.fixed() == other.fixed()
            && self.start.iterable() <= other.start.iterable()
            && self.end.iterable() >= other.end.iterable()
    }

    /// True when this span lies within `other`.
    pub fn contained_in(&self, other: &Boundary) -> bool {
        other.contains(self)
    }

    /// True when the spans cross: opposite axes, same fixed value and
    /// overlapping iterable ranges.
    pub fn intersects(&self, other: &Boundary) -> bool {
        self.horizontal() != other.horizontal()
            && self.fixed() == other.fixed()
            && self.overlaps(other)
    }

    /// True when `other` runs alongside this span on the neighbouring line
    /// and the two touch.
    pub fn adjacent_to(&self, other: &Boundary) -> bool {
        self.horizontal() == other.horizontal()
            && self.fixed().abs_diff(other.fixed()) == 1
            && self.overlaps(other)
    }

    /// Whether the absolute cell lies inside the span.
    pub fn encompasses(&self, row: usize, column: usize) -> bool {
        let (fixed, iterable) = if self.horizontal() {
            (row, column)
        } else {
            (column, row)
        };
        fixed == self.fixed() && self.iterable_range().contains(&iterable)
    }

    /// New span covering this one and the iterable values of both positions.
    ///
    /// The positions are read on this span's axis; their fixed value is
    /// ignored.
    pub fn stretch(&self, new_start: &Position, new_end: &Position) -> Option<Boundary> {
        let horizontal = self.horizontal();
        let low = new_start.with_horizontal(horizontal).iterable();
        let high = new_end.with_horizontal(horizontal).iterable();
        let start = self.start.with_iterable(self.start.iterable().min(low))?;
        let end = self.end.with_iterable(self.end.iterable().max(high))?;
        Self::new(start, end).ok()
    }

    /// Replaces `self` with [`stretch`](Self::stretch); returns whether it did.
    pub fn stretch_in_place(&mut self, new_start: &Position, new_end: &Position) -> bool {
        match self.stretch(new_start, new_end) {
            Some(stretched) => {
                *self = stretched;
                true
            }
            None => false,
        }
    }

    fn overlaps(&self, other: &Boundary) -> bool {
        other.start.iterable() <= self.end.iterable()
            && other.end.iterable() >= self.start.iterable()
    }

    fn key(&self) -> (bool, usize, usize, usize) {
        (
            self.horizontal(),
            self.fixed(),
            self.start.iterable(),
            self.end.iterable(),
        )
    }
}

impl PartialEq for Boundary {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Boundary {}

impl Hash for Boundary {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl PartialOrd for Boundary {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Boundary {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl std::fmt::Display for Boundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let axis = if self.horizontal() { "H" } else { "V" };
        write!(f, "{} {} - {}", axis, self.start, self.end)
    }
}
