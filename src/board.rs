use once_cell::sync::Lazy;
use serde::Serialize;

use crate::types::{Color, Move, Piece, PieceType, Position, in_bounds};

pub const BOARD_SIZE: usize = 8;
const MAN_VALUE: i32 = 10;
const KING_VALUE: i32 = 50;

const KING_DIRECTIONS: &[(i8, i8)] = &[(-1, -1), (-1, 1), (1, -1), (1, 1)];
const RED_MAN_DIRECTIONS: &[(i8, i8)] = &[(-1, -1), (-1, 1)];
const BLACK_MAN_DIRECTIONS: &[(i8, i8)] = &[(1, -1), (1, 1)];

static STARTING_BOARD: Lazy<Board> = Lazy::new(|| {
    let mut board = Board::empty();
    for row in 0..BOARD_SIZE as u8 {
        let color = match row {
            0..=2 => Color::Black,
            5..=7 => Color::Red,
            _ => continue,
        };
        for col in 0..BOARD_SIZE as u8 {
            let pos = Position::new(row, col);
            if pos.is_dark() {
                board.set(pos, Some(Piece::man(color)));
            }
        }
    }
    board
});

/// Checkers board: an 8x8 grid of optional pieces.
///
/// The board is a plain value. Every transformation returns a new board and
/// leaves the receiver untouched, so copies never share storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the starting layout:
    /// black men on the dark squares of rows 0-2, red men on rows 5-7.
    pub fn new() -> Self {
        *STARTING_BOARD
    }

    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.get(pos.row as i32, pos.col as i32)
    }

    /// Bounds-checked lookup. Coordinates off the board hold no piece.
    pub fn get(&self, row: i32, col: i32) -> Option<Piece> {
        if in_bounds(row, col) {
            self.cells[row as usize][col as usize]
        } else {
            None
        }
    }

    /// Puts `piece` on `pos`, replacing whatever was there.
    ///
    /// Precondition: `pos` lies on the board. Unlike [`Board::get`] this is
    /// not bounds-checked and panics on an off-board position.
    pub fn set(&mut self, pos: Position, piece: Option<Piece>) {
        debug_assert!(
            in_bounds(pos.row as i32, pos.col as i32),
            "set on off-board square {pos:?}"
        );
        self.cells[pos.row as usize][pos.col as usize] = piece;
    }

    /// Iterates over all pieces of `color` in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Position, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(move |(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| match cell {
                Some(piece) if piece.color == color => {
                    Some((Position::new(row as u8, col as u8), *piece))
                }
                _ => None,
            })
        })
    }

    /// Returns `(red_count, black_count)`.
    pub fn count(&self) -> (u8, u8) {
        (
            self.pieces(Color::Red).count() as u8,
            self.pieces(Color::Black).count() as u8,
        )
    }

    /// Returns the board after `mv`.
    ///
    /// Precondition: `mv` came from [`crate::movegen::allowed_moves`] for this
    /// board, or was checked against it. Nothing is validated here beyond a
    /// debug assertion that the origin square is occupied.
    pub fn apply_move(&self, mv: &Move) -> Board {
        let mut next = *self;
        let piece = next.cells[mv.from.row as usize][mv.from.col as usize].take();
        debug_assert!(piece.is_some(), "apply_move from an empty square");

        for captured in &mv.captures {
            next.set(*captured, None);
        }

        if let Some(piece) = piece {
            let landing = mv.destination();
            next.set(landing, Some(piece.promoted_on(landing.row)));
        }

        next
    }

    /// Material balance from `perspective`: men count 10, kings 50.
    /// The score is zero-sum, `evaluate(Red) == -evaluate(Black)`.
    pub fn evaluate(&self, perspective: Color) -> i32 {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .map(|piece| {
                let value = match piece.kind {
                    PieceType::Man => MAN_VALUE,
                    PieceType::King => KING_VALUE,
                };
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Diagonal steps available to `piece`. Kings go all four ways, men only
/// forward for their color.
pub fn directions_for(piece: Piece) -> &'static [(i8, i8)] {
    match (piece.kind, piece.color) {
        (PieceType::King, _) => KING_DIRECTIONS,
        (PieceType::Man, Color::Red) => RED_MAN_DIRECTIONS,
        (PieceType::Man, Color::Black) => BLACK_MAN_DIRECTIONS,
    }
}
