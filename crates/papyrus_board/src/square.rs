//! Board squares and the premium-square layout.

use crate::Tile;
use serde::{Deserialize, Serialize};

/// Premium carried by a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Modifier {
    /// Plain square.
    None,
    /// Center square; doubles the word.
    Center,
    /// Doubles the letter.
    DoubleLetter,
    /// Triples the letter.
    TripleLetter,
    /// Doubles the word.
    DoubleWord,
    /// Triples the word.
    TripleWord,
}

impl Modifier {
    /// Factor applied to the whole word.
    pub fn word_multiplier(self) -> u32 {
        match self {
            Modifier::Center | Modifier::DoubleWord => 2,
            Modifier::TripleWord => 3,
            _ => 1,
        }
    }

    /// Factor applied to the letter on this square.
    pub fn letter_multiplier(self) -> u32 {
        match self {
            Modifier::DoubleLetter => 2,
            Modifier::TripleLetter => 3,
            _ => 1,
        }
    }
}

/// A cell of the grid. Only the occupant changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Square {
    modifier: Modifier,
    row: usize,
    column: usize,
    occupant: Option<Tile>,
}

impl Square {
    pub(crate) fn new(modifier: Modifier, row: usize, column: usize) -> Self {
        Self {
            modifier,
            row,
            column,
            occupant: None,
        }
    }

    /// Premium of this square.
    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// Row (1-based).
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column (1-based).
    pub fn column(&self) -> usize {
        self.column
    }

    /// Tile on the square, if any.
    pub fn occupant(&self) -> Option<&Tile> {
        self.occupant.as_ref()
    }

    /// Whether no tile is on the square.
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Tile value times the letter multiplier; zero when empty.
    pub fn letter_value(&self) -> u32 {
        self.occupant
            .map_or(0, |tile| tile.value().saturating_mul(self.modifier.letter_multiplier()))
    }

    /// Word multiplier of an occupied square; 1 when empty.
    pub fn word_multiplier(&self) -> u32 {
        if self.occupant.is_some() {
            self.modifier.word_multiplier()
        } else {
            1
        }
    }

    pub(crate) fn set_occupant(&mut self, occupant: Option<Tile>) -> Option<Tile> {
        std::mem::replace(&mut self.occupant, occupant)
    }

    pub(crate) fn occupant_mut(&mut self) -> Option<&mut Tile> {
        self.occupant.as_mut()
    }
}

/// Premium squares as offsets from the center.
///
/// Each offset `(a, b)` marks the cells `(±a, ±b)` and `(±b, ±a)` around
/// the center, so one entry covers all four quadrants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModifierLayout {
    /// Center square offsets.
    pub center: Vec<(usize, usize)>,
    /// Double-letter offsets.
    pub double_letter: Vec<(usize, usize)>,
    /// Triple-letter offsets.
    pub triple_letter: Vec<(usize, usize)>,
    /// Double-word offsets.
    pub double_word: Vec<(usize, usize)>,
    /// Triple-word offsets.
    pub triple_word: Vec<(usize, usize)>,
}

impl ModifierLayout {
    /// Layout with no premium squares at all.
    pub fn empty() -> Self {
        Self {
            center: Vec::new(),
            double_letter: Vec::new(),
            triple_letter: Vec::new(),
            double_word: Vec::new(),
            triple_word: Vec::new(),
        }
    }

    /// The classic 15×15 layout.
    pub fn standard() -> Self {
        Self {
            center: vec![(0, 0)],
            double_letter: vec![(1, 1), (1, 5), (0, 4), (7, 4)],
            triple_letter: vec![(2, 6), (2, 2)],
            double_word: vec![(3, 3), (4, 4), (5, 5), (6, 6)],
            triple_word: vec![(7, 7), (0, 7)],
        }
    }

    /// Offsets listed for `modifier`.
    pub fn offsets(&self, modifier: Modifier) -> &[(usize, usize)] {
        match modifier {
            Modifier::None => &[],
            Modifier::Center => &self.center,
            Modifier::DoubleLetter => &self.double_letter,
            Modifier::TripleLetter => &self.triple_letter,
            Modifier::DoubleWord => &self.double_word,
            Modifier::TripleWord => &self.triple_word,
        }
    }

    /// Whether the center-relative offset `(a, b)` is listed for `modifier`,
    /// in either orientation.
    pub fn marks(&self, modifier: Modifier, a: usize, b: usize) -> bool {
        self.offsets(modifier)
            .iter()
            .any(|&(x, y)| (x, y) == (a, b) || (y, x) == (a, b))
    }
}

impl Default for ModifierLayout {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TileId;

    #[test]
    fn test_multipliers() {
        assert_eq!(Modifier::Center.word_multiplier(), 2);
        assert_eq!(Modifier::TripleWord.word_multiplier(), 3);
        assert_eq!(Modifier::TripleWord.letter_multiplier(), 1);
        assert_eq!(Modifier::DoubleLetter.letter_multiplier(), 2);
        assert_eq!(Modifier::None.word_multiplier(), 1);
    }

    #[test]
    fn test_empty_square_is_neutral() {
        let square = Square::new(Modifier::TripleWord, 1, 1);
        assert_eq!(square.letter_value(), 0);
        assert_eq!(square.word_multiplier(), 1);
    }

    #[test]
    fn test_occupied_square_applies_premium() {
        let mut square = Square::new(Modifier::TripleLetter, 2, 6);
        square.set_occupant(Some(Tile::standard(TileId(1), 'K')));
        assert_eq!(square.letter_value(), 15);
        assert_eq!(square.word_multiplier(), 1);
    }

    #[test]
    fn test_layout_marks_transposed_offsets() {
        let layout = ModifierLayout::standard();
        assert!(layout.marks(Modifier::TripleWord, 7, 0));
        assert!(layout.marks(Modifier::DoubleLetter, 5, 1));
        assert!(!layout.marks(Modifier::DoubleWord, 3, 4));
    }
}
