//! Structural invariants of boundaries and grids.
//!
//! Public constructors validate their input, so these should never fail in
//! a release build. Construction paths `debug_assert!` them and tests check
//! them directly.

use crate::{Boundary, Grid, Placement};

/// A property of `S` that every public constructor preserves.
pub trait Invariant<S> {
    /// Whether `state` satisfies the property.
    fn holds(state: &S) -> bool;

    /// One-line statement of the property, used in violation reports.
    fn description() -> &'static str;
}

/// A property found not to hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Statement of the broken property.
    pub description: String,
}

impl InvariantViolation {
    /// Wraps a property statement.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Several invariants over the same state, checked in one call.
pub trait InvariantSet<S> {
    /// Every broken property, in declaration order.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn report(checks: &[(bool, &'static str)]) -> Result<(), Vec<InvariantViolation>> {
    let violations: Vec<_> = checks
        .iter()
        .filter(|(held, _)| !held)
        .map(|(_, description)| InvariantViolation::new(*description))
        .collect();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, A, B> InvariantSet<S> for (A, B)
where
    A: Invariant<S>,
    B: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        report(&[
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
        ])
    }
}

impl<S, A, B, C> InvariantSet<S> for (A, B, C)
where
    A: Invariant<S>,
    B: Invariant<S>,
    C: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        report(&[
            (A::holds(state), A::description()),
            (B::holds(state), B::description()),
            (C::holds(state), C::description()),
        ])
    }
}

/// Start and end lie on the same axis.
pub struct SharedAxis;

impl Invariant<Boundary> for SharedAxis {
    fn holds(boundary: &Boundary) -> bool {
        boundary.start().horizontal() == boundary.end().horizontal()
    }

    fn description() -> &'static str {
        "Boundary start and end share an axis"
    }
}

/// Start and end lie on the same row or column.
pub struct SharedLine;

impl Invariant<Boundary> for SharedLine {
    fn holds(boundary: &Boundary) -> bool {
        boundary.start().fixed() == boundary.end().fixed()
    }

    fn description() -> &'static str {
        "Boundary start and end share a fixed value"
    }
}

/// Start never comes after end.
pub struct OrderedSpan;

impl Invariant<Boundary> for OrderedSpan {
    fn holds(boundary: &Boundary) -> bool {
        boundary.start().iterable() <= boundary.end().iterable()
    }

    fn description() -> &'static str {
        "Boundary start does not come after its end"
    }
}

/// Every square sits at the index its coordinates imply.
pub struct SquaresInPlace;

impl Invariant<Grid> for SquaresInPlace {
    fn holds(grid: &Grid) -> bool {
        let dimension = grid.dimension();
        grid.squares().len() == dimension * dimension
            && grid.squares().iter().enumerate().all(|(index, square)| {
                square.row() == index / dimension + 1 && square.column() == index % dimension + 1
            })
    }

    fn description() -> &'static str {
        "Squares are stored in row-major order"
    }
}

/// No tile on the board claims to still be in the bag.
pub struct NoBaggedTilesOnBoard;

impl Invariant<Grid> for NoBaggedTilesOnBoard {
    fn holds(grid: &Grid) -> bool {
        grid.squares()
            .iter()
            .filter_map(|square| square.occupant())
            .all(|tile| tile.placement() != Placement::Bag)
    }

    fn description() -> &'static str {
        "Tiles on the board are never in the bag"
    }
}

/// All boundary invariants.
pub type BoundaryInvariants = (SharedAxis, SharedLine, OrderedSpan);

/// All grid invariants.
pub type GridInvariants = (SquaresInPlace, NoBaggedTilesOnBoard);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Tile, TileId};

    #[test]
    fn test_boundary_invariants_hold() {
        let boundary = Boundary::new(
            Position::new(15, true, false, 3, 8).unwrap(),
            Position::new(15, true, true, 6, 8).unwrap(),
        )
        .unwrap();
        assert!(BoundaryInvariants::check_all(&boundary).is_ok());
    }

    #[test]
    fn test_grid_invariants_hold_after_placement() {
        let mut grid = Grid::standard();
        let tile = Tile::standard(TileId(1), 'A').with_placement(Placement::Held);
        grid.place(8, 8, tile).unwrap();
        assert!(GridInvariants::check_all(&grid).is_ok());
    }

    #[test]
    fn test_bagged_tile_violates() {
        let mut grid = Grid::standard();
        grid.place(8, 8, Tile::standard(TileId(1), 'A')).unwrap();
        let violations = GridInvariants::check_all(&grid).unwrap_err();
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].description, NoBaggedTilesOnBoard::description());
    }
}
