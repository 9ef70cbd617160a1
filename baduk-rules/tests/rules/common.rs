#![allow(dead_code)]

use baduk_rules::{Board, Move, Point, Stone};
use tracing_subscriber::EnvFilter;

/// Route engine events to the test output. Set `RUST_LOG` to override.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "baduk_rules=debug".into()),
        )
        .with_test_writer()
        .try_init();
}

pub fn layout(rows: &[&str]) -> Board {
    Board::from_layout(rows).unwrap()
}

pub fn b(point: Point) -> Move {
    Move::new(Stone::Black, point)
}

pub fn w(point: Point) -> Move {
    Move::new(Stone::White, point)
}

pub fn sorted(mut points: Vec<Point>) -> Vec<Point> {
    points.sort();
    points
}

/// Every point of a `size` x `size` board in row-major order.
pub fn points(size: u8) -> impl Iterator<Item = Point> {
    (0..size).flat_map(move |row| (0..size).map(move |col| (col, row)))
}

/// Every 3x3 board in which each group has at least one liberty.
pub fn valid_3x3_boards() -> Vec<Board> {
    (0..3u32.pow(9))
        .map(|mut code| {
            let rows = (0..3)
                .map(|_| {
                    (0..3)
                        .map(|_| {
                            let v = [0, 1, -1][(code % 3) as usize];
                            code /= 3;
                            v
                        })
                        .collect()
                })
                .collect();
            Board::from_rows(rows).unwrap()
        })
        .filter(|board| {
            points(3).all(|p| {
                board.stone_at(p).is_none() || !board.liberties(&board.group(p)).is_empty()
            })
        })
        .collect()
}

/// `board` with `stone` written at `point`, bypassing the rules.
pub fn with_stone(board: &Board, point: Point, stone: Option<Stone>) -> Board {
    let mut rows = board.to_rows();
    rows[point.1 as usize][point.0 as usize] = stone.map_or(0, Stone::to_int);
    Board::from_rows(rows).unwrap()
}
