use wasm_bindgen::prelude::*;

pub mod ai;
pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod types;
pub mod wasm;

pub use ai::search::{Searcher, best_move};
pub use board::{Board, directions_for};
pub use error::MoveError;
pub use game::{GameInstance, MoveSelector};
pub use movegen::{allowed_moves, is_allowed};
pub use types::{Color, GameResult, GameState, Move, Piece, PieceType, Position};

#[wasm_bindgen]
pub fn wasm_ready() -> bool {
    true
}
