//! Piece identification and legal move ranges
//!
//! A piece is the 3x3 block of cells around a chosen center. It is legal
//! for a player when it sits fully on the board, holds only that player's
//! stones (at least one), and does not overlap the player's own ring.
//!
//! Which way a piece may move is read off its stones: each occupied outer
//! cell opens the matching compass direction, up to [`STANDARD_RANGE`]
//! steps. An occupied center opens all 8 directions up to [`MAX_RANGE`].

use tracing::debug;

use crate::board::{
    Board, Direction, Footprint, MoveRanges, Pos, Stone, MAX_RANGE, STANDARD_RANGE,
};
use crate::error::{GessError, MoveFault, PieceFault};

use super::ring::RingTracker;

/// A move-scoped view of one 3x3 piece
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub(super) center: Pos,
    pub(super) color: Stone,
    pub(super) footprint: Footprint,
    pub(super) ranges: MoveRanges,
}

impl Piece {
    /// Identify the piece centered at `center` for the player `color`.
    ///
    /// Checks run in order and the first failure is returned:
    /// border center, mixed colors, no own stones, own-ring overlap.
    pub fn new(
        center: Pos,
        board: &Board,
        color: Stone,
        rings: &RingTracker,
    ) -> Result<Self, GessError> {
        if !center.is_interior() {
            return Err(PieceFault::BorderCenter.into());
        }

        let footprint = board
            .footprint(center)
            .map_err(|_| GessError::InvalidPiece(PieceFault::BorderCenter))?;

        if footprint.is_mixed() {
            return Err(PieceFault::MixedColors.into());
        }
        if color.is_empty() || !footprint.contains(color) {
            return Err(PieceFault::NotOwned.into());
        }
        if rings.forbids(color, center) {
            return Err(PieceFault::TouchesOwnRing.into());
        }

        let ranges = legal_ranges(&footprint);
        debug!(%center, ?color, directions = ranges.count(), "piece identified");

        Ok(Self {
            center,
            color,
            footprint,
            ranges,
        })
    }

    #[inline]
    pub fn center(&self) -> Pos {
        self.center
    }

    #[inline]
    pub fn color(&self) -> Stone {
        self.color
    }

    /// Stones carried by the piece, as snapshotted at construction
    #[inline]
    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    #[inline]
    pub fn ranges(&self) -> &MoveRanges {
        &self.ranges
    }

    /// Board cells currently covered by the piece
    pub fn addresses(&self) -> [Pos; 9] {
        // Interior centers always have all 9 neighbors on the grid
        Footprint::addresses(self.center).unwrap_or([self.center; 9])
    }

    /// Every center this piece may be asked to move to.
    ///
    /// Respects direction and range only; a collision on the way can
    /// still end the move early.
    pub fn destinations(&self) -> Vec<Pos> {
        let mut out = Vec::new();
        for (dir, range) in self.ranges.iter() {
            let (dc, dr) = dir.delta();
            for k in 1..=range as i32 {
                match self.center.offset(dc * k, dr * k) {
                    Ok(pos) if pos.is_interior() => out.push(pos),
                    _ => break,
                }
            }
        }
        out
    }

    /// Validate a destination, returning the direction and step count.
    ///
    /// Never touches the board.
    pub fn plan(&self, dest: Pos) -> Result<(Direction, u8), GessError> {
        if dest == self.center {
            return Err(MoveFault::SameSquare.into());
        }

        let dc = dest.col() as i32 - self.center.col() as i32;
        let dr = dest.row() as i32 - self.center.row() as i32;
        let (direction, distance) =
            Direction::classify(dc, dr).ok_or(GessError::InvalidMove(MoveFault::NotAligned))?;

        let max = self
            .ranges
            .get(direction)
            .ok_or(GessError::InvalidMove(MoveFault::DirectionUnavailable(direction)))?;
        if distance > max {
            return Err(MoveFault::OutOfRange {
                direction,
                requested: distance,
                max,
            }
            .into());
        }
        if !dest.is_interior() {
            return Err(MoveFault::BorderDestination.into());
        }

        Ok((direction, distance))
    }
}

/// Direction ranges for a piece with these stones
pub fn legal_ranges(footprint: &Footprint) -> MoveRanges {
    if !footprint.center().is_empty() {
        return MoveRanges::uniform(MAX_RANGE);
    }
    let mut ranges = MoveRanges::new();
    for dir in Direction::ALL {
        if !footprint.edge(dir).is_empty() {
            ranges.set(dir, STANDARD_RANGE);
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Pos {
        s.parse().unwrap()
    }

    fn standard_piece(center: &str, color: Stone) -> Result<Piece, GessError> {
        Piece::new(
            pos(center),
            &Board::standard(),
            color,
            &RingTracker::standard(),
        )
    }

    #[test]
    fn test_border_center_rejected() {
        let err = standard_piece("a3", Stone::Black).unwrap_err();
        assert_eq!(err, GessError::InvalidPiece(PieceFault::BorderCenter));
        assert!(standard_piece("t3", Stone::Black).is_err());
        assert!(standard_piece("c1", Stone::Black).is_err());
        assert!(standard_piece("c20", Stone::White).is_err());
    }

    #[test]
    fn test_mixed_footprint_rejected() {
        let mut board = Board::new();
        board.place_stone(pos("e5"), Stone::Black);
        board.place_stone(pos("f6"), Stone::White);
        let err = Piece::new(pos("e6"), &board, Stone::Black, &RingTracker::standard())
            .unwrap_err();
        assert_eq!(err, GessError::InvalidPiece(PieceFault::MixedColors));
    }

    #[test]
    fn test_empty_or_opponent_footprint_rejected() {
        let err = standard_piece("j10", Stone::Black).unwrap_err();
        assert_eq!(err, GessError::InvalidPiece(PieceFault::NotOwned));

        let err = standard_piece("c18", Stone::Black).unwrap_err();
        assert_eq!(err, GessError::InvalidPiece(PieceFault::NotOwned));
    }

    #[test]
    fn test_own_ring_neighborhood_rejected() {
        let err = standard_piece("k4", Stone::Black).unwrap_err();
        assert_eq!(err, GessError::InvalidPiece(PieceFault::TouchesOwnRing));

        // White's ring does not restrict Black
        let err = standard_piece("k17", Stone::Black).unwrap_err();
        assert_eq!(err, GessError::InvalidPiece(PieceFault::NotOwned));
    }

    #[test]
    fn test_ring_itself_is_a_piece() {
        let piece = standard_piece("l3", Stone::Black).unwrap();
        assert_eq!(piece.ranges().count(), 8);
        assert!(piece.ranges().iter().all(|(_, r)| r == STANDARD_RANGE));
    }

    #[test]
    fn test_occupied_center_opens_all_directions() {
        let piece = standard_piece("c3", Stone::Black).unwrap();
        assert_eq!(piece.ranges(), &MoveRanges::uniform(MAX_RANGE));
    }

    #[test]
    fn test_empty_center_opens_only_occupied_edges() {
        let mut board = Board::new();
        board.place_stone(pos("h11"), Stone::White); // N of h10
        board.place_stone(pos("g9"), Stone::White); // SW of h10
        let piece = Piece::new(pos("h10"), &board, Stone::White, &RingTracker::standard())
            .unwrap();
        assert_eq!(
            piece.ranges().iter().collect::<Vec<_>>(),
            vec![(Direction::N, 3), (Direction::SW, 3)]
        );
    }

    #[test]
    fn test_addresses() {
        let piece = standard_piece("c3", Stone::Black).unwrap();
        let addresses = piece.addresses();
        assert_eq!(addresses[0], pos("b4"));
        assert_eq!(addresses[4], pos("c3"));
        assert_eq!(addresses[8], pos("d2"));
    }

    #[test]
    fn test_destinations_respect_range_and_edge() {
        let mut board = Board::new();
        board.place_stone(pos("c3"), Stone::Black); // E of b3
        let piece = Piece::new(pos("b3"), &board, Stone::Black, &RingTracker::standard())
            .unwrap();
        assert_eq!(piece.destinations(), vec![pos("c3"), pos("d3"), pos("e3")]);

        let solid = standard_piece("c3", Stone::Black).unwrap();
        let dests = solid.destinations();
        // Diagonal SW runs into the edge after one step
        assert!(dests.contains(&pos("b2")));
        assert!(!dests.contains(&pos("a1")));
        assert!(dests.contains(&pos("c19")));
        assert!(dests.iter().all(|p| p.is_interior()));
    }

    #[test]
    fn test_plan_same_square() {
        let piece = standard_piece("c3", Stone::Black).unwrap();
        assert_eq!(
            piece.plan(pos("c3")),
            Err(GessError::InvalidMove(MoveFault::SameSquare))
        );
    }

    #[test]
    fn test_plan_not_aligned() {
        let piece = standard_piece("c3", Stone::Black).unwrap();
        assert_eq!(
            piece.plan(pos("d5")),
            Err(GessError::InvalidMove(MoveFault::NotAligned))
        );
    }

    #[test]
    fn test_plan_unavailable_direction_and_range() {
        let mut board = Board::new();
        board.place_stone(pos("h11"), Stone::White);
        let piece = Piece::new(pos("h10"), &board, Stone::White, &RingTracker::standard())
            .unwrap();

        assert_eq!(piece.plan(pos("h12")), Ok((Direction::N, 2)));
        assert_eq!(
            piece.plan(pos("h9")),
            Err(GessError::InvalidMove(MoveFault::DirectionUnavailable(
                Direction::S
            )))
        );
        assert_eq!(
            piece.plan(pos("h14")),
            Err(GessError::InvalidMove(MoveFault::OutOfRange {
                direction: Direction::N,
                requested: 4,
                max: 3
            }))
        );
    }

    #[test]
    fn test_plan_border_destination() {
        let piece = standard_piece("c3", Stone::Black).unwrap();
        assert_eq!(
            piece.plan(pos("c1")),
            Err(GessError::InvalidMove(MoveFault::BorderDestination))
        );
        assert_eq!(piece.plan(pos("c19")), Ok((Direction::N, 16)));
    }
}
