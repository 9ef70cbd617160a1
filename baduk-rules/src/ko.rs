use serde::{Deserialize, Serialize};

use crate::Point;

/// The point freed by a single-stone capture and the ply at which retaking it
/// is forbidden. Only the move played at exactly `turn_index` is restricted;
/// there is no superko tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KoState {
    pub point: Point,
    pub turn_index: usize,
}

impl KoState {
    pub fn new(point: Point, turn_index: usize) -> Self {
        KoState { point, turn_index }
    }

    pub fn forbids(&self, point: Point, history_len: usize) -> bool {
        self.point == point && self.turn_index == history_len
    }
}
