use std::fmt;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::error::{BoardError, Rejection};
use crate::ko::KoState;
use crate::rules::{self, ApplyOptions, Move, Outcome};

/// A consistent game snapshot: the board, the live ko restriction and the
/// number of plies played so far. Session owners persist this as a unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub ko: Option<KoState>,
    pub history_len: usize,
}

impl Position {
    pub fn new(size: usize) -> Result<Self, BoardError> {
        Ok(Position::from_board(Board::new(size)?))
    }

    pub fn from_board(board: Board) -> Self {
        Position {
            board,
            ko: None,
            history_len: 0,
        }
    }

    pub fn outcome(&self, mv: Move, options: ApplyOptions) -> Outcome {
        rules::apply(&self.board, mv, self.ko.as_ref(), self.history_len, options)
    }

    pub fn is_legal(&self, mv: Move, options: ApplyOptions) -> bool {
        self.outcome(mv, options).is_accepted()
    }

    /// Play a stone. Returns the next position and the captured points.
    pub fn play(&self, mv: Move, options: ApplyOptions) -> Result<(Position, Vec<Point>), Rejection> {
        let t = self.outcome(mv, options).into_result()?;
        let next = Position {
            board: t.board,
            ko: t.ko,
            history_len: self.history_len + 1,
        };
        Ok((next, t.captured))
    }

    /// Count a ply that places no stone, such as a pass.
    pub fn skip(&self) -> Position {
        Position {
            board: self.board.clone(),
            ko: self.ko,
            history_len: self.history_len + 1,
        }
    }

    /// Rebuild a position by playing `moves` from an empty board.
    pub fn replay(size: usize, moves: &[Move], options: ApplyOptions) -> Result<Position, ReplayError> {
        let mut position = Position::new(size).map_err(ReplayError::Board)?;
        for (ply, &mv) in moves.iter().enumerate() {
            let (next, _) = position
                .play(mv, options)
                .map_err(|reason| ReplayError::Rejected { ply, mv, reason })?;
            position = next;
        }
        Ok(position)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    Board(BoardError),
    Rejected {
        ply: usize,
        mv: Move,
        reason: Rejection,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplayError::Board(e) => write!(f, "{e}"),
            ReplayError::Rejected { ply, mv, reason } => write!(
                f,
                "move {ply} ({} at {:?}) rejected: {reason}",
                mv.stone, mv.point
            ),
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Board(e) => Some(e),
            ReplayError::Rejected { reason, .. } => Some(reason),
        }
    }
}
