//! Gess rules engine
//!
//! Gess is chess played with Go stones on a 20x20 grid:
//! - A piece is any 3x3 block of cells centered off the board edge that
//!   holds only the mover's stones
//! - The stones in a piece decide which ways it moves; an occupied center
//!   lets it move any distance
//! - A moving piece stops on contact and removes every stone it lands on
//! - Each player defends a ring (8 stones around an empty center); losing
//!   it loses the game
//!
//! # Architecture
//!
//! - [`board`]: Coordinates, directions and the bitboard-backed board
//! - [`rules`]: Piece identification, movement and ring tracking
//! - [`game`]: Turn order and game state
//! - [`error`]: Rejection reasons for pieces and moves
//!
//! # Quick Start
//!
//! ```
//! use gess::{Game, GameState, Pos};
//!
//! let mut game = Game::new();
//! let from: Pos = "i3".parse().unwrap();
//! let to: Pos = "i6".parse().unwrap();
//!
//! match game.make_move(from, to) {
//!     Ok(report) => println!("moved {} steps {}", report.steps, report.direction),
//!     Err(err) => println!("rejected: {}", err),
//! }
//! assert_eq!(game.state(), GameState::Ongoing);
//! ```
//!
//! The library emits `tracing` events and never installs a subscriber.

pub mod board;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types for convenience
pub use board::{Board, Direction, Pos, Stone, BOARD_SIZE};
pub use error::{GessError, MoveFault, PieceFault};
pub use game::{Game, GameState, MoveResult};
pub use rules::{MoveReport, Piece};
