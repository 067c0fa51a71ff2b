//! Tests for boundary construction and spatial predicates.

mod common;

use papyrus_board::invariants::{BoundaryInvariants, InvariantSet};
use papyrus_board::{BoardError, Boundary, Grid, Position};
use std::collections::HashSet;

fn pos(row: usize, column: usize, horizontal: bool) -> Position {
    Position::resolve(15, row, column, horizontal).expect("Bad position")
}

/// Every horizontal and vertical span on a small slice of the board.
fn sample_spans() -> Vec<Boundary> {
    let mut spans = Vec::new();
    for horizontal in [true, false] {
        for fixed in [1, 7, 8, 15] {
            for start in 5..=9 {
                for end in start..=10 {
                    let (a, b) = if horizontal {
                        (pos(fixed, start, true), pos(fixed, end, true))
                    } else {
                        (pos(start, fixed, false), pos(end, fixed, false))
                    };
                    spans.push(Boundary::new(a, b).expect("Bad span"));
                }
            }
        }
    }
    spans
}

#[test]
fn test_length_matches_iterables() {
    for span in sample_spans() {
        assert_eq!(span.length(), span.end().iterable() - span.start().iterable());
        assert_eq!(span.positions().count(), span.length() + 1);
        assert!(BoundaryInvariants::check_all(&span).is_ok());
    }
}

#[test]
fn test_contains_is_reflexive_and_antisymmetric() {
    let spans = sample_spans();
    for a in &spans {
        assert!(a.contains(a));
        for b in &spans {
            if a.contains(b) && b.contains(a) {
                assert_eq!(a, b);
            }
            assert_eq!(a.contains(b), b.contained_in(a));
        }
    }
}

#[test]
fn test_intersection_needs_opposite_axes() {
    let spans = sample_spans();
    for a in &spans {
        for b in &spans {
            if a.intersects(b) {
                assert_ne!(a.horizontal(), b.horizontal());
                assert!(b.intersects(a));
            }
        }
    }
}

#[test]
fn test_stretch_is_idempotent() {
    let span = Boundary::new(pos(8, 7, true), pos(8, 9, true)).expect("Bad span");
    let (low, high) = (pos(8, 4, true), pos(8, 12, true));
    let once = span.stretch(&low, &high).expect("Stretch failed");
    let twice = once.stretch(&low, &high).expect("Stretch failed");
    assert_eq!(once, twice);
    assert_eq!(once.iterable_range(), 4..=12);
    assert!(once.contains(&span));

    for span in sample_spans() {
        assert_eq!(span.stretch(&span.start(), &span.end()), Some(span));
    }
}

#[test]
fn test_stretch_in_place_reads_positions_on_own_axis() {
    let mut span = Boundary::new(pos(3, 8, false), pos(5, 8, false)).expect("Bad span");
    // Horizontally framed cells still stretch a vertical span by their row.
    assert!(span.stretch_in_place(&pos(2, 1, true), &pos(6, 1, true)));
    assert_eq!(span.iterable_range(), 2..=6);
    assert_eq!(span.fixed(), 8);
}

#[test]
fn test_constructor_rejections() {
    assert_eq!(
        Boundary::new(pos(8, 7, true), pos(8, 9, false)),
        Err(BoardError::MismatchedAxis)
    );
    assert_eq!(
        Boundary::new(pos(8, 7, true), pos(9, 9, true)),
        Err(BoardError::MismatchedLine { start: 8, end: 9 })
    );
    assert_eq!(
        Boundary::new(pos(8, 9, true), pos(8, 7, true)),
        Err(BoardError::InvertedSpan { start: 9, end: 7 })
    );
    let small = Position::resolve(5, 1, 1, true).expect("Bad position");
    assert_eq!(
        Boundary::new(small, pos(1, 3, true)),
        Err(BoardError::DimensionMismatch { left: 5, right: 15 })
    );
}

#[test]
fn test_start_and_end_face_outward() {
    let span = Boundary::new(pos(8, 7, true), pos(8, 9, true)).expect("Bad span");
    assert!(!span.start().ascending());
    assert!(span.end().ascending());
}

#[test]
fn test_from_positions_orders_and_infers_axis() {
    let row = Boundary::from_positions(&[pos(4, 9, false), pos(4, 6, false), pos(4, 7, true)])
        .expect("Row failed");
    assert!(row.horizontal());
    assert_eq!(row.fixed(), 4);
    assert_eq!(row.iterable_range(), 6..=9);

    let column = Boundary::from_positions(&[pos(11, 2, true), pos(9, 2, true)]).expect("Column failed");
    assert!(!column.horizontal());
    assert_eq!(column.iterable_range(), 9..=11);

    assert_eq!(Boundary::from_positions(&[]), Err(BoardError::EmptyPositions));
    assert_eq!(
        Boundary::from_positions(&[pos(4, 4, true)]),
        Err(BoardError::AmbiguousAxis)
    );
    assert_eq!(
        Boundary::from_positions(&[pos(4, 4, true), pos(5, 5, true)]),
        Err(BoardError::NotInLine)
    );
}

#[test]
fn test_equality_ignores_construction_path() {
    let direct = Boundary::new(pos(8, 7, true), pos(8, 9, true)).expect("Bad span");
    let grid = Grid::standard();
    let derived = common::span(&grid, (8, 7), (8, 9), true);
    let stretched = Boundary::new(pos(8, 8, true), pos(8, 8, true))
        .expect("Bad span")
        .stretch(&pos(8, 7, false), &pos(8, 9, false))
        .expect("Stretch failed");

    let set: HashSet<Boundary> = [direct, derived, stretched].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn test_adjacent_and_encompasses() {
    let a = Boundary::new(pos(8, 7, true), pos(8, 9, true)).expect("Bad span");
    let below = Boundary::new(pos(9, 9, true), pos(9, 12, true)).expect("Bad span");
    let far = Boundary::new(pos(10, 7, true), pos(10, 9, true)).expect("Bad span");
    assert!(a.adjacent_to(&below));
    assert!(!a.adjacent_to(&far));
    assert!(a.encompasses(8, 8));
    assert!(!a.encompasses(9, 8));
}

#[test]
fn test_display() {
    let span = Boundary::new(pos(2, 5, false), pos(4, 5, false)).expect("Bad span");
    assert_eq!(span.to_string(), "V (2, 5) - (4, 5)");
}
