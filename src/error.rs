//! Error types for move requests

use thiserror::Error;

use crate::board::Direction;
use crate::game::GameState;

/// Why a chosen center does not name a legal piece for the mover
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PieceFault {
    #[error("center lies on the board edge")]
    BorderCenter,
    #[error("footprint holds stones of both colors")]
    MixedColors,
    #[error("footprint holds none of the mover's stones")]
    NotOwned,
    #[error("piece would overlap the mover's own ring")]
    TouchesOwnRing,
}

/// Why a destination cannot be reached by a valid piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveFault {
    #[error("destination equals the current center")]
    SameSquare,
    #[error("destination is neither in line nor on a diagonal")]
    NotAligned,
    #[error("piece cannot move {0}")]
    DirectionUnavailable(Direction),
    #[error("{requested} steps {direction} exceeds range {max}")]
    OutOfRange {
        direction: Direction,
        requested: u8,
        max: u8,
    },
    #[error("destination lies on the board edge")]
    BorderDestination,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GessError {
    #[error("invalid piece: {0}")]
    InvalidPiece(PieceFault),
    #[error("invalid move: {0}")]
    InvalidMove(MoveFault),
    #[error("coordinate ({col}, {row}) is off the board")]
    OutOfBounds { col: i32, row: i32 },
    #[error("cannot parse coordinate {0:?}")]
    BadCoordinate(String),
    #[error("game already over: {0}")]
    GameOver(GameState),
    #[error("the player to move must be black or white")]
    NoPlayerToMove,
}

impl From<PieceFault> for GessError {
    fn from(fault: PieceFault) -> Self {
        GessError::InvalidPiece(fault)
    }
}

impl From<MoveFault> for GessError {
    fn from(fault: MoveFault) -> Self {
        GessError::InvalidMove(fault)
    }
}
