//! Turn order and game state
//!
//! [`Game`] owns the single board and both players' ring records. Each move
//! request builds a fresh [`Piece`] from the live board, lends it the board
//! for the duration of the move, then either declares the mover the winner
//! (opponent ring broken) or hands the turn over.
//!
//! # Example
//!
//! ```
//! use gess::{Game, GameState, Stone};
//!
//! let mut game = Game::new();
//! let result = game.request_move("c3".parse().unwrap(), "c4".parse().unwrap());
//!
//! assert!(result.success);
//! assert_eq!(result.new_state, GameState::Ongoing);
//! assert_eq!(game.current_player(), Stone::White);
//! ```

use std::fmt;

use tracing::{debug, info, instrument};

use crate::board::{Board, Pos, Stone};
use crate::error::GessError;
use crate::rules::{MoveReport, Piece, RingTracker};

/// Overall game status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Ongoing,
    BlackWon,
    WhiteWon,
}

impl GameState {
    /// The state in which `color` has won
    pub fn won_by(color: Stone) -> Self {
        match color {
            Stone::Black => GameState::BlackWon,
            Stone::White => GameState::WhiteWon,
            Stone::Empty => GameState::Ongoing,
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        self != GameState::Ongoing
    }

    pub fn winner(self) -> Option<Stone> {
        match self {
            GameState::Ongoing => None,
            GameState::BlackWon => Some(Stone::Black),
            GameState::WhiteWon => Some(Stone::White),
        }
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Ongoing => "UNFINISHED",
            GameState::BlackWon => "BLACK_WON",
            GameState::WhiteWon => "WHITE_WON",
        };
        f.write_str(name)
    }
}

/// Outcome of [`Game::request_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    pub success: bool,
    /// Board after the move, present only on success
    pub new_board: Option<Board>,
    pub new_state: GameState,
}

/// A game of Gess
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Stone,
    rings: RingTracker,
    state: GameState,
}

impl Game {
    /// Standard opening, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::standard(),
            current: Stone::Black,
            rings: RingTracker::standard(),
            state: GameState::Ongoing,
        }
    }

    /// Start from an arbitrary position.
    ///
    /// Ring centers are taken as given; they are not checked against the
    /// board. Fails with [`GessError::NoPlayerToMove`] if `to_move` is
    /// `Stone::Empty`.
    pub fn with_position(
        board: Board,
        black_rings: Vec<Pos>,
        white_rings: Vec<Pos>,
        to_move: Stone,
    ) -> Result<Self, GessError> {
        if to_move.is_empty() {
            return Err(GessError::NoPlayerToMove);
        }
        Ok(Self {
            board,
            current: to_move,
            rings: RingTracker::new(black_rings, white_rings),
            state: GameState::Ongoing,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current
    }

    #[inline]
    pub fn non_current_player(&self) -> Stone {
        self.current.opponent()
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Recorded ring centers of `color`
    pub fn rings(&self, color: Stone) -> &[Pos] {
        self.rings.rings(color)
    }

    /// The piece the current player would move from `center`
    pub fn piece_at(&self, center: Pos) -> Result<Piece, GessError> {
        Piece::new(center, &self.board, self.current, &self.rings)
    }

    /// Move the current player's piece centered at `from` toward `to`.
    ///
    /// On error nothing changes and the same player is still to move.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn make_move(&mut self, from: Pos, to: Pos) -> Result<MoveReport, GessError> {
        if self.state.is_over() {
            return Err(GessError::GameOver(self.state));
        }

        let mut piece = self.piece_at(from)?;
        let report = piece.move_to(&mut self.board, &mut self.rings, to)?;

        if report.opponent_ring_intact {
            self.current = self.current.opponent();
            info!(%from, to = %report.to, steps = report.steps, "move accepted");
        } else {
            self.state = GameState::won_by(self.current);
            info!(%from, to = %report.to, state = %self.state, "opponent ring broken");
        }
        Ok(report)
    }

    /// Move request in success/failure form.
    ///
    /// A rejected request leaves the game unchanged.
    pub fn request_move(&mut self, from: Pos, to: Pos) -> MoveResult {
        match self.make_move(from, to) {
            Ok(_) => MoveResult {
                success: true,
                new_board: Some(self.board.clone()),
                new_state: self.state,
            },
            Err(err) => {
                debug!(%from, %to, error = %err, "move rejected");
                MoveResult {
                    success: false,
                    new_board: None,
                    new_state: self.state,
                }
            }
        }
    }

    /// The current player concedes. Has no effect once the game is over.
    #[instrument(skip(self), fields(player = %self.current))]
    pub fn resign(&mut self) -> GameState {
        if !self.state.is_over() {
            self.state = GameState::won_by(self.current.opponent());
            info!(state = %self.state, "player resigned");
        }
        self.state
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
