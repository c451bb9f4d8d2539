//! Board representation for Gess

pub mod bitboard;
pub mod board;
pub mod direction;


use std::fmt;
use std::str::FromStr;

use crate::error::GessError;

// Re-exports
pub use bitboard::Bitboard;
pub use board::{Board, Footprint};
pub use direction::{Direction, MoveRanges};

/// Board size (20x20)
pub const BOARD_SIZE: usize = 20;
pub const TOTAL_CELLS: usize = BOARD_SIZE * BOARD_SIZE; // 400

/// Reach of a piece whose center cell is empty
pub const STANDARD_RANGE: u8 = 3;

/// Reach of a piece whose center cell holds a stone.
/// Longest possible center-to-center displacement (b..s / 2..19).
pub const MAX_RANGE: u8 = (BOARD_SIZE - 3) as u8;

const COLUMN_LETTERS: [char; BOARD_SIZE] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't',
];

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stone {
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Stone::Empty
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stone::Empty => "EMPTY",
            Stone::Black => "BLACK",
            Stone::White => "WHITE",
        };
        f.write_str(name)
    }
}

/// Ordinal index (0..19) of a column letter (a..t).
pub fn column_index(letter: char) -> Result<u8, GessError> {
    COLUMN_LETTERS
        .iter()
        .position(|&c| c == letter.to_ascii_lowercase())
        .map(|idx| idx as u8)
        .ok_or_else(|| GessError::BadCoordinate(letter.to_string()))
}

/// Column letter for an ordinal index (0..19).
pub fn column_letter(index: u8) -> Result<char, GessError> {
    COLUMN_LETTERS
        .get(index as usize)
        .copied()
        .ok_or(GessError::OutOfBounds {
            col: index as i32,
            row: 0,
        })
}

/// Position on the board.
///
/// `col` 0..19 maps to letters a..t, `row` 0..19 maps to rows 1..20
/// (row 1 is Black's home edge).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    col: u8,
    row: u8,
}

impl Pos {
    /// Panics in debug builds when out of range; use [`Pos::try_new`] for
    /// untrusted input.
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        debug_assert!(col < BOARD_SIZE as u8 && row < BOARD_SIZE as u8);
        Self { col, row }
    }

    pub fn try_new(col: i32, row: i32) -> Result<Self, GessError> {
        if Self::is_valid(col, row) {
            Ok(Self {
                col: col as u8,
                row: row as u8,
            })
        } else {
            Err(GessError::OutOfBounds { col, row })
        }
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            col: (idx % BOARD_SIZE) as u8,
            row: (idx / BOARD_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(col: i32, row: i32) -> bool {
        col >= 0 && col < BOARD_SIZE as i32 && row >= 0 && row < BOARD_SIZE as i32
    }

    /// True if a 3x3 piece centered here fits on the grid.
    #[inline]
    pub fn is_interior(self) -> bool {
        let last = BOARD_SIZE as u8 - 1;
        self.col > 0 && self.col < last && self.row > 0 && self.row < last
    }

    /// Position displaced by `(dc, dr)` cells.
    pub fn offset(self, dc: i32, dr: i32) -> Result<Pos, GessError> {
        Pos::try_new(self.col as i32 + dc, self.row as i32 + dr)
    }

    /// One unit step in `dir`.
    #[inline]
    pub fn step(self, dir: Direction) -> Result<Pos, GessError> {
        let (dc, dr) = dir.delta();
        self.offset(dc, dr)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", COLUMN_LETTERS[self.col as usize], self.row + 1)
    }
}

impl FromStr for Pos {
    type Err = GessError;

    /// Parses `"c3"`-style notation: column letter, then 1-based row.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| GessError::BadCoordinate(s.to_string()))?;
        let col = column_index(letter)?;
        let digits = chars.as_str();
        // Plain decimal only: no sign, no leading zero
        if digits.is_empty()
            || digits.starts_with('0')
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(GessError::BadCoordinate(s.to_string()));
        }
        let row: i32 = digits
            .parse()
            .map_err(|_| GessError::BadCoordinate(s.to_string()))?;
        Pos::try_new(col as i32, row - 1)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}
