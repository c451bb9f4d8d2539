//! Board structure and 3x3 footprints

use super::bitboard::Bitboard;
use super::direction::Direction;
use super::{Pos, Stone, BOARD_SIZE};
use crate::error::GessError;

/// Black's half of the standard opening, as (column, 1-based rows).
/// White's half is the mirror image across the middle of the board.
const OPENING_BLACK: [(u8, &[u8]); 18] = [
    (1, &[3]),
    (2, &[2, 3, 4, 7]),
    (3, &[3]),
    (4, &[2, 4]),
    (5, &[3, 7]),
    (6, &[2, 4]),
    (7, &[2, 3, 4]),
    (8, &[2, 3, 4, 7]),
    (9, &[2, 3, 4]),
    (10, &[2, 3, 4]),
    (11, &[2, 4, 7]),
    (12, &[2, 3, 4]),
    (13, &[2, 4]),
    (14, &[3, 7]),
    (15, &[2, 4]),
    (16, &[3]),
    (17, &[2, 3, 4, 7]),
    (18, &[3]),
];

/// Offsets of the 9 footprint cells, top row first: NW N NE / W C E / SW S SE
pub const FOOTPRINT_OFFSETS: [(i32, i32); 9] = [
    (-1, 1),
    (0, 1),
    (1, 1),
    (-1, 0),
    (0, 0),
    (1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

const CENTER_SLOT: usize = 4;

/// Game board: one bitboard per color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    /// Empty board
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Board set up with the standard Gess opening (43 stones per side)
    pub fn standard() -> Self {
        let mut board = Self::new();
        let top = BOARD_SIZE as u8 - 1;
        for &(col, rows) in OPENING_BLACK.iter() {
            for &row in rows {
                board.place_stone(Pos::new(col, row - 1), Stone::Black);
                board.place_stone(Pos::new(col, top - (row - 1)), Stone::White);
            }
        }
        board
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Place a stone, replacing whatever was there
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        self.remove_stone(pos);
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Number of stones of a color
    #[inline]
    pub fn count(&self, stone: Stone) -> u32 {
        self.stones(stone).map_or(0, |bb| bb.count())
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Snapshot of the 3x3 cells around `center`
    pub fn footprint(&self, center: Pos) -> Result<Footprint, GessError> {
        let mut cells = [Stone::Empty; 9];
        for (slot, &(dc, dr)) in FOOTPRINT_OFFSETS.iter().enumerate() {
            cells[slot] = self.get(center.offset(dc, dr)?);
        }
        Ok(Footprint { cells })
    }

    /// Write `footprint` onto the 9 cells at `addresses` (as produced by
    /// [`Footprint::addresses`]), empty cells included.
    pub fn stamp(&mut self, addresses: &[Pos; 9], footprint: &Footprint) {
        for (&pos, &stone) in addresses.iter().zip(footprint.cells.iter()) {
            self.place_stone(pos, stone);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Contents of the 9 cells of a piece, in [`FOOTPRINT_OFFSETS`] order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Footprint {
    cells: [Stone; 9],
}

impl Footprint {
    pub fn from_cells(cells: [Stone; 9]) -> Self {
        Self { cells }
    }

    /// The 9 board positions covered by a piece at `center`
    pub fn addresses(center: Pos) -> Result<[Pos; 9], GessError> {
        let mut out = [center; 9];
        for (slot, &(dc, dr)) in FOOTPRINT_OFFSETS.iter().enumerate() {
            out[slot] = center.offset(dc, dr)?;
        }
        Ok(out)
    }

    #[inline]
    pub fn cells(&self) -> &[Stone; 9] {
        &self.cells
    }

    #[inline]
    pub fn center(&self) -> Stone {
        self.cells[CENTER_SLOT]
    }

    /// The outer cell lying in `dir` from the center
    #[inline]
    pub fn edge(&self, dir: Direction) -> Stone {
        let (dc, dr) = dir.delta();
        self.cells[((1 - dr) * 3 + dc + 1) as usize]
    }

    pub fn contains(&self, stone: Stone) -> bool {
        self.cells.contains(&stone)
    }

    /// Both colors present
    pub fn is_mixed(&self) -> bool {
        self.contains(Stone::Black) && self.contains(Stone::White)
    }

    /// Eight `color` stones around an empty center
    pub fn is_ring_of(&self, color: Stone) -> bool {
        !color.is_empty()
            && self.center().is_empty()
            && Direction::ALL.iter().all(|&d| self.edge(d) == color)
    }
}
