//! Board legality and capture rules for Go, shared by the authoritative
//! server and client-side move prediction.
//!
//! [`apply`] is a pure function of its inputs: the same board, move, ko state
//! and history length always give the same [`Outcome`]. Only the simple ko
//! rule is enforced; long-cycle repetition (superko) is not detected.

pub mod board;
pub mod error;
pub mod ko;
pub mod position;
pub mod rules;
pub mod stone;

/// `(col, row)`, both zero based.
pub type Point = (u8, u8);

pub use board::Board;
pub use error::{BoardError, Rejection};
pub use ko::KoState;
pub use position::{Position, ReplayError};
pub use rules::{ApplyOptions, Move, Outcome, Transition, apply, is_legal};
pub use stone::Stone;
