//! Shared board builders for integration tests.

#![allow(dead_code)]

use papyrus_board::{Boundary, Grid, Placement, PlayerId, Tile, TileId};
use tracing_subscriber::EnvFilter;

/// Installs a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Tile dropped from player one's rack.
pub fn rack_tile(id: u32, letter: char) -> Tile {
    Tile::standard(TileId(id), letter).with_placement(Placement::Rack(PlayerId(1)))
}

/// Tile committed on an earlier turn.
pub fn fixed_tile(id: u32, letter: char) -> Tile {
    Tile::standard(TileId(id), letter).with_placement(Placement::Fixed)
}

/// Places `word` from `(row, column)` with tiles built by `make`, ids
/// starting at `first_id`. Returns the tiles in order.
pub fn lay_word(
    grid: &mut Grid,
    row: usize,
    column: usize,
    horizontal: bool,
    word: &str,
    first_id: u32,
    make: fn(u32, char) -> Tile,
) -> Vec<Tile> {
    word.chars()
        .enumerate()
        .map(|(i, letter)| {
            let tile = make(first_id + i as u32, letter);
            let (r, c) = if horizontal {
                (row, column + i)
            } else {
                (row + i, column)
            };
            grid.place(r, c, tile).expect("Failed to place tile");
            tile
        })
        .collect()
}

/// Boundary between two absolute cells on the given axis.
pub fn span(grid: &Grid, from: (usize, usize), to: (usize, usize), horizontal: bool) -> Boundary {
    Boundary::new(
        grid.position(from.0, from.1, horizontal).expect("Bad start"),
        grid.position(to.0, to.1, horizontal).expect("Bad end"),
    )
    .expect("Bad boundary")
}
