//! Ring tracking and the ring-loss win condition
//!
//! A ring is 8 stones of one color around an empty center. Each player's
//! recorded ring centers follow the piece that forms them; a player whose
//! recorded rings are all broken has lost.

use tracing::debug;

use crate::board::{Board, Pos, Stone};

/// Pieces centered within this many steps of a player's ring overlap the
/// ring footprint.
const RING_GUARD_RADIUS: i32 = 2;

/// Check whether `center` still holds an intact ring of `color`.
///
/// A center on the board edge can never hold a ring.
pub fn ring_intact(board: &Board, center: Pos, color: Stone) -> bool {
    board
        .footprint(center)
        .map(|fp| fp.is_ring_of(color))
        .unwrap_or(false)
}

/// Centers a player may not pick while their single ring sits at `ring`.
///
/// Every on-grid cell within two steps of the ring center, except the
/// ring center itself (moving the ring as a whole is allowed).
pub fn forbidden_centers(ring: Pos) -> Vec<Pos> {
    let mut out = Vec::with_capacity(24);
    for dr in -RING_GUARD_RADIUS..=RING_GUARD_RADIUS {
        for dc in -RING_GUARD_RADIUS..=RING_GUARD_RADIUS {
            if dc == 0 && dr == 0 {
                continue;
            }
            if let Ok(pos) = ring.offset(dc, dr) {
                out.push(pos);
            }
        }
    }
    out
}

/// Recorded ring centers for both players
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingTracker {
    black: Vec<Pos>,
    white: Vec<Pos>,
}

impl RingTracker {
    pub fn new(black: Vec<Pos>, white: Vec<Pos>) -> Self {
        Self { black, white }
    }

    /// Rings of the standard opening: l3 for Black, l18 for White
    pub fn standard() -> Self {
        Self::new(vec![Pos::new(11, 2)], vec![Pos::new(11, 17)])
    }

    /// Recorded ring centers of `color` (empty slice for `Stone::Empty`)
    pub fn rings(&self, color: Stone) -> &[Pos] {
        match color {
            Stone::Black => self.black.as_slice(),
            Stone::White => self.white.as_slice(),
            Stone::Empty => &[],
        }
    }

    fn rings_mut(&mut self, color: Stone) -> Option<&mut Vec<Pos>> {
        match color {
            Stone::Black => Some(&mut self.black),
            Stone::White => Some(&mut self.white),
            Stone::Empty => None,
        }
    }

    /// True if `center` is off limits for `color` because it would
    /// disturb their ring.
    ///
    /// Applies only while exactly one ring is recorded. With zero or
    /// several recorded rings no center is restricted.
    pub fn forbids(&self, color: Stone, center: Pos) -> bool {
        match self.rings(color) {
            [ring] => forbidden_centers(*ring).contains(&center),
            _ => false,
        }
    }

    /// Move any ring of `color` recorded at `from` to `to`.
    pub fn follow(&mut self, color: Stone, from: Pos, to: Pos) {
        if let Some(rings) = self.rings_mut(color) {
            for ring in rings.iter_mut().filter(|r| **r == from) {
                debug!(%from, %to, ?color, "ring moved with piece");
                *ring = to;
            }
        }
    }

    /// True while at least one recorded ring of `color` is intact.
    ///
    /// A player with no recorded rings has nothing left to defend and
    /// counts as broken.
    pub fn any_intact(&self, board: &Board, color: Stone) -> bool {
        let intact = self
            .rings(color)
            .iter()
            .any(|&center| ring_intact(board, center, color));
        debug!(?color, intact, rings = ?self.rings(color), "ring check");
        intact
    }
}

impl Default for RingTracker {
    fn default() -> Self {
        Self::standard()
    }
}
