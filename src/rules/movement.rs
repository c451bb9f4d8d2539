//! Step-by-step piece movement
//!
//! A move is a run of unit steps. Before each step the frontier (cells the
//! piece is about to enter) is scanned; if it holds any stone the piece
//! still takes that step, landing on those stones, and the move ends there.
//!
//! Each step stamps the piece's 9 cells at the new center, overwriting
//! whatever was there, then clears the cells its rear edge left behind.
//! Stones overwritten this way are captured.

use tracing::{debug, trace};

use crate::board::{Board, Direction, Footprint, Pos};
use crate::error::GessError;

use super::piece::Piece;
use super::ring::RingTracker;

/// Cells left behind by one unit step, relative to the new center.
///
/// Axis moves leave the 3-cell rear edge; diagonal moves leave the
/// 5-cell L along both trailing edges. The frontier of a step is the
/// same shape mirrored ahead of the old center.
const REAR_EDGE: [&[(i32, i32)]; 8] = [
    // N
    &[(-1, -2), (0, -2), (1, -2)],
    // NE
    &[(-2, 0), (-2, -1), (-2, -2), (-1, -2), (0, -2)],
    // E
    &[(-2, 1), (-2, 0), (-2, -1)],
    // SE
    &[(-2, 0), (-2, 1), (-2, 2), (-1, 2), (0, 2)],
    // S
    &[(-1, 2), (0, 2), (1, 2)],
    // SW
    &[(2, 0), (2, 1), (2, 2), (1, 2), (0, 2)],
    // W
    &[(2, 1), (2, 0), (2, -1)],
    // NW
    &[(2, 0), (2, -1), (2, -2), (1, -2), (0, -2)],
];

/// Geometry of one unit step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepFootprints {
    pub from: Pos,
    pub to: Pos,
    /// 9 cells covered after the step
    pub covered: [Pos; 9],
    /// Cells covered after the step that were not covered before
    pub entered: Vec<Pos>,
    /// Cells covered before the step that are not covered after
    pub vacated: Vec<Pos>,
}

/// Compute the cells entered and vacated when a piece at `from` takes one
/// step in `dir`.
pub fn step_footprints(from: Pos, dir: Direction) -> Result<StepFootprints, GessError> {
    let to = from.step(dir)?;
    let covered = Footprint::addresses(to)?;
    let rear = REAR_EDGE[dir.index()];

    let entered = rear
        .iter()
        .map(|&(dc, dr)| from.offset(-dc, -dr))
        .collect::<Result<Vec<_>, _>>()?;
    let vacated = rear
        .iter()
        .map(|&(dc, dr)| to.offset(dc, dr))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(StepFootprints {
        from,
        to,
        covered,
        entered,
        vacated,
    })
}

/// Stones a step would land on and remove.
///
/// Only entered cells can hold stones that do not belong to the piece;
/// everything else under the new footprint is the piece itself.
pub fn captured_cells(board: &Board, step: &StepFootprints) -> Vec<Pos> {
    step.entered
        .iter()
        .copied()
        .filter(|&p| !board.is_empty(p))
        .collect()
}

/// What a committed move did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub from: Pos,
    /// Center after the last committed step
    pub to: Pos,
    pub direction: Direction,
    /// Steps asked for
    pub requested: u8,
    /// Steps committed to the board
    pub steps: u8,
    /// True if a frontier stone ended the move
    pub collided: bool,
    /// Stones removed by landing on them
    pub captured: Vec<Pos>,
    /// Opponent ring status after the last committed step
    pub opponent_ring_intact: bool,
}

impl Piece {
    /// Move the piece toward `dest`, mutating `board` one step at a time.
    ///
    /// All validation happens before the first write, so an `Err` leaves
    /// both `board` and `rings` untouched. On success at least one step
    /// has been committed.
    pub fn move_to(
        &mut self,
        board: &mut Board,
        rings: &mut RingTracker,
        dest: Pos,
    ) -> Result<MoveReport, GessError> {
        let (direction, distance) = self.plan(dest)?;

        // Every intermediate center lies between two interior centers, so
        // the whole path is on the grid; compute it before mutating.
        let mut path = Vec::with_capacity(distance as usize);
        let mut at = self.center;
        for _ in 0..distance {
            let step = step_footprints(at, direction)?;
            at = step.to;
            path.push(step);
        }

        let opponent = self.color.opponent();
        let mut report = MoveReport {
            from: self.center,
            to: self.center,
            direction,
            requested: distance,
            steps: 0,
            collided: false,
            captured: Vec::new(),
            opponent_ring_intact: true,
        };

        for step in path {
            let blocked = captured_cells(board, &step);
            trace!(
                from = %step.from,
                to = %step.to,
                frontier = ?step.entered,
                blocked = blocked.len(),
                "frontier scan"
            );

            rings.follow(self.color, step.from, step.to);

            board.stamp(&step.covered, &self.footprint);
            for &p in &step.vacated {
                board.remove_stone(p);
            }

            self.center = step.to;
            report.to = step.to;
            report.steps += 1;
            report.opponent_ring_intact = rings.any_intact(board, opponent);

            if !blocked.is_empty() {
                report.collided = true;
                report.captured = blocked;
                break;
            }
        }

        debug!(
            from = %report.from,
            to = %report.to,
            %direction,
            steps = report.steps,
            collided = report.collided,
            "piece moved"
        );
        Ok(report)
    }
}
