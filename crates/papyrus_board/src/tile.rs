//! Letter tiles and their placement state.

use serde::{Deserialize, Serialize};

/// Letter carried by a blank tile until it is played.
pub const BLANK: char = '?';

/// Stable identity of a physical tile.
///
/// Two tiles with the same letter and value are still different tiles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[display("#{}", _0)]
pub struct TileId(pub u32);

/// Identity of a player holding a rack.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display, derive_more::From,
)]
#[display("player {}", _0)]
pub struct PlayerId(pub u32);

/// Where a tile currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Placement {
    /// Still in the bag.
    Bag,
    /// On a player's rack, or dropped on the board this turn from it.
    Rack(PlayerId),
    /// Being dragged.
    Held,
    /// Committed to the board on an earlier turn.
    Fixed,
}

/// A letter tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    id: TileId,
    letter: char,
    value: u32,
    placement: Placement,
}

impl Tile {
    /// Creates a tile in the bag.
    pub fn new(id: TileId, letter: char, value: u32) -> Self {
        Self {
            id,
            letter,
            value,
            placement: Placement::Bag,
        }
    }

    /// Creates a tile valued by [`letter_value`].
    pub fn standard(id: TileId, letter: char) -> Self {
        Self::new(id, letter, letter_value(letter))
    }

    /// Tile identity.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Letter shown on the tile.
    pub fn letter(&self) -> char {
        self.letter
    }

    /// Point value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// Current placement.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Whether the tile was committed on an earlier turn.
    pub fn is_fixed(&self) -> bool {
        self.placement == Placement::Fixed
    }

    /// Whether the tile is a blank still waiting for a letter.
    pub fn is_blank(&self) -> bool {
        self.letter == BLANK
    }

    /// Copy with a new placement.
    pub fn with_placement(self, placement: Placement) -> Self {
        Self { placement, ..self }
    }

    /// Gives a blank its played letter. Returns `false` for lettered tiles.
    pub fn assign_letter(&mut self, letter: char) -> bool {
        if !self.is_blank() {
            return false;
        }
        self.letter = letter.to_ascii_uppercase();
        true
    }
}

/// Standard point value of a letter. Blanks and unknown characters score 0.
pub fn letter_value(letter: char) -> u32 {
    match letter.to_ascii_uppercase() {
        'A' | 'E' | 'I' | 'L' | 'N' | 'O' | 'R' | 'S' | 'T' | 'U' => 1,
        'D' | 'G' => 2,
        'B' | 'C' | 'M' | 'P' => 3,
        'F' | 'H' | 'V' | 'W' | 'Y' => 4,
        'K' => 5,
        'J' | 'X' => 8,
        'Q' | 'Z' => 10,
        _ => 0,
    }
}
