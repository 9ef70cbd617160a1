use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::error::Rejection;
use crate::ko::KoState;
use crate::stone::Stone;

/// A stone placement attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub point: Point,
    pub stone: Stone,
}

impl Move {
    pub fn new(stone: Stone, point: Point) -> Self {
        Move { point, stone }
    }
}

/// Rule switches for [`apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplyOptions {
    /// Allow moves that leave the mover's own group without liberties.
    /// Only variant rule sets turn this on.
    pub ignore_suicide: bool,
}

/// The board after an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition {
    pub board: Board,
    pub captured: Vec<Point>,
    pub ko: Option<KoState>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum Outcome {
    Accepted(Transition),
    Rejected(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Outcome::Accepted(_) => None,
            Outcome::Rejected(reason) => Some(*reason),
        }
    }

    pub fn into_result(self) -> Result<Transition, Rejection> {
        match self {
            Outcome::Accepted(t) => Ok(t),
            Outcome::Rejected(reason) => Err(reason),
        }
    }

    /// Resolve to the state the caller should hold next: the new state when
    /// accepted, otherwise the given board and ko unchanged with no captures.
    pub fn settle(self, board: Board, ko: Option<KoState>) -> Transition {
        match self {
            Outcome::Accepted(t) => t,
            Outcome::Rejected(_) => Transition {
                board,
                captured: Vec::new(),
                ko,
            },
        }
    }
}

/// Validate `mv` against `board` and resolve it.
///
/// `ko` and `history_len` must describe the same point in the game as
/// `board`; this is not checked. The caller's board is never modified.
pub fn apply(
    board: &Board,
    mv: Move,
    ko: Option<&KoState>,
    history_len: usize,
    options: ApplyOptions,
) -> Outcome {
    let Move { point, stone } = mv;

    if !board.on_board(point) || board.stone_at(point).is_some() {
        tracing::debug!(?point, %stone, "rejected: occupied");
        return Outcome::Rejected(Rejection::Occupied);
    }

    if ko.is_some_and(|ko| ko.forbids(point, history_len)) {
        tracing::debug!(?point, %stone, history_len, "rejected: ko");
        return Outcome::Rejected(Rejection::Ko);
    }

    let mut scratch = board.clone();
    scratch.set_stone(point, stone);

    // Opponent groups touching the new stone; the shared visited set keeps a
    // group reached from two sides from being collected twice.
    let opponent = stone.opp();
    let mut visited = scratch.visited_set();
    let mut captured = Vec::new();
    for n in scratch.neighbors(point) {
        if scratch.stone_at(n) != Some(opponent) || visited[scratch.idx(n)] {
            continue;
        }
        let group = scratch.group_from(n, &mut visited);
        if scratch.liberties(&group).is_empty() {
            captured.extend(group);
        }
    }
    scratch.clear_stones(&captured);

    let own = scratch.group(point);
    let liberties = scratch.liberties(&own);
    if liberties.is_empty() && !options.ignore_suicide {
        tracing::debug!(?point, %stone, "rejected: suicide");
        return Outcome::Rejected(Rejection::Suicide);
    }

    let ko = (captured.len() == 1 && own.len() == 1 && liberties.len() == 1)
        .then(|| KoState::new(captured[0], history_len + 1));

    if !captured.is_empty() {
        tracing::trace!(?point, %stone, captured = captured.len(), ?ko, "captured stones");
    }

    Outcome::Accepted(Transition {
        board: scratch,
        captured,
        ko,
    })
}

/// Whether `apply` would accept `mv`.
pub fn is_legal(
    board: &Board,
    mv: Move,
    ko: Option<&KoState>,
    history_len: usize,
    options: ApplyOptions,
) -> bool {
    apply(board, mv, ko, history_len, options).is_accepted()
}
