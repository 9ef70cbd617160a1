use std::collections::VecDeque;
use std::fmt;

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::Point;
use crate::error::BoardError;
use crate::stone::Stone;

/// Largest supported side length.
pub const MAX_SIZE: usize = 25;

/// A square Go board stored as a flat row-major array of cells
/// (`0` empty, `1` black, `-1` white).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr", into = "BoardRepr")]
pub struct Board {
    cells: Vec<i8>,
    size: u8,
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    size: usize,
    cells: Vec<i8>,
}

impl TryFrom<BoardRepr> for Board {
    type Error = BoardError;

    fn try_from(repr: BoardRepr) -> Result<Self, Self::Error> {
        let size = checked_size(repr.size)?;
        let expected = repr.size * repr.size;
        if repr.cells.len() != expected {
            return Err(BoardError::CellCount {
                expected,
                found: repr.cells.len(),
            });
        }
        for (i, &value) in repr.cells.iter().enumerate() {
            check_cell(value, ((i % repr.size) as u8, (i / repr.size) as u8))?;
        }
        Ok(Board {
            cells: repr.cells,
            size,
        })
    }
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        BoardRepr {
            size: board.size as usize,
            cells: board.cells,
        }
    }
}

fn checked_size(size: usize) -> Result<u8, BoardError> {
    if (1..=MAX_SIZE).contains(&size) {
        Ok(size as u8)
    } else {
        Err(BoardError::InvalidSize(size))
    }
}

fn check_cell(value: i8, point: Point) -> Result<(), BoardError> {
    if (-1..=1).contains(&value) {
        Ok(())
    } else {
        Err(BoardError::InvalidCell { point, value })
    }
}

impl Board {
    /// An empty `size` x `size` board.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        let size = checked_size(size)?;
        Ok(Board {
            cells: vec![0; size as usize * size as usize],
            size,
        })
    }

    /// Build a board from a `[row][col]` matrix.
    pub fn from_rows(rows: Vec<Vec<i8>>) -> Result<Self, BoardError> {
        let n = rows.len();
        let size = checked_size(n)?;

        let mut cells = Vec::with_capacity(n * n);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(BoardError::NotSquare {
                    rows: n,
                    row: r,
                    len: row.len(),
                });
            }
            for (c, value) in row.into_iter().enumerate() {
                check_cell(value, (c as u8, r as u8))?;
                cells.push(value);
            }
        }

        Ok(Board { cells, size })
    }

    /// Parse an ASCII layout, one string per row. `B`/`X` is black, `W`/`O`
    /// is white, `+`/`.` is empty.
    pub fn from_layout(layout: &[&str]) -> Result<Self, BoardError> {
        let rows = layout
            .iter()
            .enumerate()
            .map(|(r, line)| {
                line.chars()
                    .enumerate()
                    .map(|(c, ch)| match ch {
                        'B' | 'X' => Ok(Stone::Black.to_int()),
                        'W' | 'O' => Ok(Stone::White.to_int()),
                        '+' | '.' => Ok(0),
                        _ => Err(BoardError::InvalidLayoutChar {
                            point: (c as u8, r as u8),
                            ch,
                        }),
                    })
                    .collect::<Result<Vec<i8>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::from_rows(rows)
    }

    // -- Accessors --

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn to_rows(&self) -> Vec<Vec<i8>> {
        self.cells
            .chunks(self.size as usize)
            .map(|row| row.to_vec())
            .collect()
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        if self.on_board(point) {
            Stone::from_int(self.cells[self.idx(point)])
        } else {
            None
        }
    }

    pub fn on_board(&self, (col, row): Point) -> bool {
        col < self.size && row < self.size
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&s| s == 0)
    }

    pub fn stone_count(&self, stone: Stone) -> usize {
        self.cells.iter().filter(|&&s| s == stone.to_int()).count()
    }

    // -- Graph queries --

    /// The on-board orthogonal neighbors, in left, right, up, down order.
    pub fn neighbors(&self, (col, row): Point) -> ArrayVec<Point, 4> {
        let mut result = ArrayVec::new();
        if col > 0 {
            result.push((col - 1, row));
        }
        if col + 1 < self.size {
            result.push((col + 1, row));
        }
        if row > 0 {
            result.push((col, row - 1));
        }
        if row + 1 < self.size {
            result.push((col, row + 1));
        }
        result
    }

    /// Breadth-first flood fill of the group containing `point`. Empty for an
    /// empty or off-board point.
    pub fn group(&self, point: Point) -> Vec<Point> {
        let mut visited = vec![false; self.cells.len()];
        self.group_from(point, &mut visited)
    }

    /// Distinct empty points adjacent to any stone of `group`.
    pub fn liberties(&self, group: &[Point]) -> Vec<Point> {
        let mut seen = vec![false; self.cells.len()];
        let mut libs = Vec::new();
        for &p in group {
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !seen[ni] && self.cells[ni] == 0 {
                    seen[ni] = true;
                    libs.push(n);
                }
            }
        }
        libs
    }

    /// Group flood fill sharing a visited set across calls, so one group
    /// reached from two directions is only collected once.
    pub(crate) fn group_from(&self, point: Point, visited: &mut [bool]) -> Vec<Point> {
        let Some(stone) = self.stone_at(point) else {
            return Vec::new();
        };

        let mut result = Vec::new();
        let mut queue = VecDeque::from([point]);
        visited[self.idx(point)] = true;

        while let Some(p) = queue.pop_front() {
            result.push(p);
            for n in self.neighbors(p) {
                let ni = self.idx(n);
                if !visited[ni] && self.cells[ni] == stone.to_int() {
                    visited[ni] = true;
                    queue.push_back(n);
                }
            }
        }

        result
    }

    // -- Internal helpers --

    #[inline]
    pub(crate) fn idx(&self, (col, row): Point) -> usize {
        row as usize * self.size as usize + col as usize
    }

    pub(crate) fn visited_set(&self) -> Vec<bool> {
        vec![false; self.cells.len()]
    }

    pub(crate) fn set_stone(&mut self, point: Point, stone: Stone) {
        let i = self.idx(point);
        self.cells[i] = stone.to_int();
    }

    pub(crate) fn clear_stones(&mut self, points: &[Point]) {
        for &p in points {
            let i = self.idx(p);
            self.cells[i] = 0;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.chunks(self.size as usize).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for &cell in row {
                let ch = match Stone::from_int(cell) {
                    Some(Stone::Black) => 'B',
                    Some(Stone::White) => 'W',
                    None => '+',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
