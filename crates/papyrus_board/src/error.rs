//! Error types for board geometry and play evaluation.

/// Failure to construct a geometric value or mutate the grid.
///
/// Constructors return these so callers can tell invalid input apart from
/// a query that simply found nothing (queries return `Option` or an empty
/// collection instead).
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// A row, column, iterable or fixed value fell outside `1..=dimension`.
    #[display("Coordinate {} is outside 1..={}", value, dimension)]
    CoordinateOutOfRange {
        /// Offending coordinate.
        value: usize,
        /// Board dimension the coordinate was checked against.
        dimension: usize,
    },

    /// Start and end positions lie on different axes.
    #[display("Start and end positions are on different axes")]
    MismatchedAxis,

    /// Start and end positions lie on different rows or columns.
    #[display("Start line {} does not match end line {}", start, end)]
    MismatchedLine {
        /// Fixed value of the start position.
        start: usize,
        /// Fixed value of the end position.
        end: usize,
    },

    /// Start position comes after the end position.
    #[display("Span is inverted: start {} is after end {}", start, end)]
    InvertedSpan {
        /// Iterable value of the start position.
        start: usize,
        /// Iterable value of the end position.
        end: usize,
    },

    /// Values built for boards of different sizes were combined.
    #[display("Dimension {} does not match dimension {}", left, right)]
    DimensionMismatch {
        /// Dimension of the first operand.
        left: usize,
        /// Dimension of the second operand.
        right: usize,
    },

    /// No positions were supplied.
    #[display("No positions supplied")]
    EmptyPositions,

    /// Positions do not share a row or a column.
    #[display("Positions do not share a row or column")]
    NotInLine,

    /// A single position cannot say which axis it belongs to.
    #[display("Cannot determine an axis from a single position")]
    AmbiguousAxis,

    /// Grids need an odd, non-zero dimension so a center cell exists.
    #[display("Invalid board dimension {}", dimension)]
    InvalidDimension {
        /// Requested dimension.
        dimension: usize,
    },

    /// The target square already holds a tile.
    #[display("Square ({}, {}) is already occupied", row, column)]
    SquareOccupied {
        /// Row of the square.
        row: usize,
        /// Column of the square.
        column: usize,
    },

    /// An occupancy snapshot does not fit the grid.
    #[display("Snapshot holds {} squares, grid needs {}", actual, expected)]
    SnapshotSize {
        /// Squares on the grid.
        expected: usize,
        /// Squares in the snapshot.
        actual: usize,
    },
}

impl std::error::Error for BoardError {}

/// Reasons a set of newly placed tiles is not a legal play.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum PlayError {
    /// No tiles were placed.
    #[display("No tiles placed")]
    NoTiles,

    /// A placed tile is not on the grid.
    #[display("Tile {} is not on the board", _0)]
    NotOnBoard(crate::TileId),

    /// Placed tiles do not share a row or column.
    #[display("Placed tiles are not in a single row or column")]
    NotInLine,

    /// Placed tiles leave an empty square between them.
    #[display("Placed tiles leave a gap")]
    Gap,

    /// First play has fewer than two letters.
    #[display("First word must be at least two letters")]
    TooShort,

    /// First play does not cover the center square.
    #[display("First word must cover the center square")]
    MissingCenter,

    /// Later play does not touch any fixed tile.
    #[display("Word must connect to tiles already on the board")]
    Disconnected,

    /// A formed word is rejected by the dictionary.
    #[display("{} is not a valid word", _0)]
    InvalidWord(String),

    /// Underlying geometry failed.
    #[display("Board error: {}", _0)]
    Board(BoardError),
}

impl std::error::Error for PlayError {}

impl From<BoardError> for PlayError {
    fn from(err: BoardError) -> Self {
        Self::Board(err)
    }
}
