use baduk_rules::{ApplyOptions, Board, KoState, Move, Point, Position, Stone};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

/// Request body for [`apply_json`].
#[derive(Debug, Deserialize)]
struct ApplyRequest {
    board: Board,
    #[serde(rename = "move")]
    mv: Move,
    #[serde(default)]
    ko: Option<KoState>,
    history_len: usize,
    #[serde(default)]
    options: ApplyOptions,
}

/// Stateless JSON form of `baduk_rules::apply`.
/// Takes `{ board, move, ko?, history_len, options? }` and returns the
/// serialized outcome, or `{ "error": "message" }` for malformed input.
#[wasm_bindgen]
pub fn apply_json(request_json: &str) -> String {
    let req: ApplyRequest = match serde_json::from_str(request_json) {
        Ok(r) => r,
        Err(e) => return error_json(&e.to_string()),
    };
    let outcome = baduk_rules::apply(
        &req.board,
        req.mv,
        req.ko.as_ref(),
        req.history_len,
        req.options,
    );
    serde_json::to_string(&outcome).unwrap_or_else(|e| error_json(&e.to_string()))
}

fn error_json(message: &str) -> String {
    serde_json::json!({ "error": message }).to_string()
}

/// Client-side move prediction. Holds the last position the server confirmed
/// plus any optimistic moves played since; the server's state always wins.
#[wasm_bindgen]
pub struct WasmPredictor {
    position: Position,
    options: ApplyOptions,
    last_captures: Vec<Point>,
}

#[wasm_bindgen]
impl WasmPredictor {
    /// Fails with a message for an unsupported board size.
    #[wasm_bindgen(constructor)]
    pub fn new(size: usize) -> Result<WasmPredictor, String> {
        let position = Position::new(size).map_err(|e| e.to_string())?;
        Ok(Self {
            position,
            options: ApplyOptions::default(),
            last_captures: Vec::new(),
        })
    }

    pub fn set_ignore_suicide(&mut self, ignore: bool) {
        self.options.ignore_suicide = ignore;
    }

    // -- Prediction --

    /// Play optimistically. Returns an empty string when accepted, otherwise
    /// the rejection name (`occupied`, `ko`, `suicide`, or `invalid stone`).
    pub fn try_play(&mut self, col: u8, row: u8, stone: i8) -> String {
        let Some(stone) = Stone::from_int(stone) else {
            return "invalid stone".to_string();
        };
        match self.position.play(Move::new(stone, (col, row)), self.options) {
            Ok((next, captured)) => {
                self.position = next;
                self.last_captures = captured;
                String::new()
            }
            Err(reason) => reason.to_string(),
        }
    }

    pub fn is_legal(&self, col: u8, row: u8, stone: i8) -> bool {
        Stone::from_int(stone)
            .is_some_and(|stone| self.position.is_legal(Move::new(stone, (col, row)), self.options))
    }

    /// Count a ply that places no stone.
    pub fn skip(&mut self) {
        self.position = self.position.skip();
        self.last_captures.clear();
    }

    // -- Server sync --

    pub fn state_json(&self) -> String {
        serde_json::to_string(&self.position).unwrap_or_else(|e| error_json(&e.to_string()))
    }

    /// Replace the local position with the authoritative one.
    /// Returns false and keeps the current state if the JSON is invalid.
    pub fn adopt_state(&mut self, json: &str) -> bool {
        match serde_json::from_str::<Position>(json) {
            Ok(position) => {
                self.position = position;
                self.last_captures.clear();
                true
            }
            Err(_) => false,
        }
    }

    // -- Accessors (WASM-friendly types) --

    pub fn board(&self) -> js_sys::Int8Array {
        js_sys::Int8Array::from(self.position.board.cells())
    }

    pub fn size(&self) -> u8 {
        self.position.board.size()
    }

    pub fn history_len(&self) -> usize {
        self.position.history_len
    }

    pub fn ko_col(&self) -> i8 {
        self.position.ko.map_or(-1, |ko| ko.point.0 as i8)
    }

    pub fn ko_row(&self) -> i8 {
        self.position.ko.map_or(-1, |ko| ko.point.1 as i8)
    }

    /// Points captured by the last accepted `try_play`, as `[[col, row], ...]`.
    pub fn last_captures_json(&self) -> String {
        let pts: Vec<[u8; 2]> = self.last_captures.iter().map(|&(c, r)| [c, r]).collect();
        serde_json::to_string(&pts).unwrap_or_else(|_| "[]".into())
    }
}
