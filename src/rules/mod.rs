//! Game rules for Gess
//!
//! This module implements the rule set including:
//! - Piece identification and move ranges
//! - Unit-step movement with collision and capture
//! - Ring tracking (the win condition)

pub mod movement;
pub mod piece;
pub mod ring;

// Re-exports for convenient access
pub use movement::{captured_cells, step_footprints, MoveReport, StepFootprints};
pub use piece::{legal_ranges, Piece};
pub use ring::{forbidden_centers, ring_intact, RingTracker};
