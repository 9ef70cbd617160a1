use std::fmt;

use crate::Point;

/// Why a move was refused. These are ordinary outcomes of player input and are
/// reported inside [`crate::Outcome`], never as panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rejection {
    /// Target is off the board or already holds a stone.
    Occupied,
    /// Immediate recapture at the current ko point.
    Ko,
    /// The mover's group would be left without liberties.
    Suicide,
}

impl Rejection {
    pub fn as_str(self) -> &'static str {
        match self {
            Rejection::Occupied => "occupied",
            Rejection::Ko => "ko",
            Rejection::Suicide => "suicide",
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::error::Error for Rejection {}

/// Malformed input handed to a constructor. This is a caller bug, kept apart
/// from [`Rejection`] so UIs can tell "pick another point" from "internal error".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    InvalidSize(usize),
    NotSquare { rows: usize, row: usize, len: usize },
    InvalidCell { point: Point, value: i8 },
    InvalidLayoutChar { point: Point, ch: char },
    InvalidStone(i8),
    CellCount { expected: usize, found: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize(size) => write!(f, "invalid board size {size}"),
            BoardError::NotSquare { rows, row, len } => {
                write!(f, "board is not square: row {row} has {len} cells, expected {rows}")
            }
            BoardError::InvalidCell { point, value } => {
                write!(f, "invalid cell value {value} at {point:?}")
            }
            BoardError::InvalidLayoutChar { point, ch } => {
                write!(f, "invalid layout character {ch:?} at {point:?}")
            }
            BoardError::InvalidStone(v) => write!(f, "{v} is not a stone color"),
            BoardError::CellCount { expected, found } => {
                write!(f, "expected {expected} cells, found {found}")
            }
        }
    }
}

impl std::error::Error for BoardError {}
