//! Compass directions and per-direction move ranges

use std::fmt;

/// The 8 compass directions. North is toward row 20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::NE,
        Direction::E,
        Direction::SE,
        Direction::S,
        Direction::SW,
        Direction::W,
        Direction::NW,
    ];

    /// (column, row) displacement of one unit step
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::N => (0, 1),
            Direction::NE => (1, 1),
            Direction::E => (1, 0),
            Direction::SE => (1, -1),
            Direction::S => (0, -1),
            Direction::SW => (-1, -1),
            Direction::W => (-1, 0),
            Direction::NW => (-1, 1),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn is_diagonal(self) -> bool {
        let (dc, dr) = self.delta();
        dc != 0 && dr != 0
    }

    /// Classify a displacement as a direction and a distance.
    ///
    /// Returns `None` for a zero displacement or one that is neither
    /// axis-aligned nor a true diagonal.
    pub fn classify(dc: i32, dr: i32) -> Option<(Direction, u8)> {
        if dc == 0 && dr == 0 {
            return None;
        }
        if dc != 0 && dr != 0 && dc.abs() != dr.abs() {
            return None;
        }
        let unit = (dc.signum(), dr.signum());
        let dir = Direction::ALL.into_iter().find(|d| d.delta() == unit)?;
        let distance = dc.abs().max(dr.abs());
        Some((dir, distance.min(u8::MAX as i32) as u8))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::N => "N",
            Direction::NE => "NE",
            Direction::E => "E",
            Direction::SE => "SE",
            Direction::S => "S",
            Direction::SW => "SW",
            Direction::W => "W",
            Direction::NW => "NW",
        };
        f.write_str(name)
    }
}

/// Maximum step count per direction. A range of 0 means unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveRanges {
    ranges: [u8; 8],
}

impl MoveRanges {
    pub const fn new() -> Self {
        Self { ranges: [0; 8] }
    }

    /// Every direction available with the same range
    pub const fn uniform(range: u8) -> Self {
        Self { ranges: [range; 8] }
    }

    #[inline]
    pub fn set(&mut self, dir: Direction, range: u8) {
        self.ranges[dir.index()] = range;
    }

    /// Range in `dir`, or `None` if the piece cannot move that way
    #[inline]
    pub fn get(&self, dir: Direction) -> Option<u8> {
        match self.ranges[dir.index()] {
            0 => None,
            r => Some(r),
        }
    }

    /// Number of available directions
    pub fn count(&self) -> usize {
        self.ranges.iter().filter(|&&r| r > 0).count()
    }

    /// Available directions with their ranges, in compass order
    pub fn iter(&self) -> impl Iterator<Item = (Direction, u8)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.get(d).map(|r| (d, r)))
    }
}
