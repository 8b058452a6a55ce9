use serde::{Deserialize, Serialize};

use crate::board::Board;

/// Side of the game. Red moves toward row 0, black toward row 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Row on which a man of this color is promoted.
    pub fn promotion_row(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Black => 7,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceType {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    #[serde(rename = "type")]
    pub kind: PieceType,
}

impl Piece {
    pub const fn man(color: Color) -> Self {
        Self {
            color,
            kind: PieceType::Man,
        }
    }

    pub const fn king(color: Color) -> Self {
        Self {
            color,
            kind: PieceType::King,
        }
    }

    pub fn is_king(self) -> bool {
        self.kind == PieceType::King
    }

    /// Returns the piece as it stands after landing on `row`.
    /// Men reaching their promotion row become kings; kings never change.
    pub fn promoted_on(self, row: u8) -> Self {
        if self.kind == PieceType::Man && row == self.color.promotion_row() {
            Self::king(self.color)
        } else {
            self
        }
    }
}

/// A board coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Steps `distance` squares along `(dr, dc)`.
    /// Returns `None` when the target falls off the board.
    pub fn offset(self, (dr, dc): (i8, i8), distance: i8) -> Option<Self> {
        let row = self.row as i8 + dr * distance;
        let col = self.col as i8 + dc * distance;
        if in_bounds(row as i32, col as i32) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    pub fn is_dark(self) -> bool {
        (self.row + self.col) % 2 == 1
    }
}

pub(crate) fn in_bounds(row: i32, col: i32) -> bool {
    (0..8).contains(&row) && (0..8).contains(&col)
}

/// One move of a single piece.
///
/// `path` holds every landing square in order; `captures` holds the square of
/// each jumped piece in the order it was taken. For jumps both have the same
/// length, a simple step has one path entry and no captures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Position,
    pub path: Vec<Position>,
    pub captures: Vec<Position>,
}

impl Move {
    pub fn simple(from: Position, to: Position) -> Self {
        Self {
            from,
            path: vec![to],
            captures: Vec::new(),
        }
    }

    pub fn jump(from: Position, path: Vec<Position>, captures: Vec<Position>) -> Self {
        debug_assert_eq!(path.len(), captures.len());
        Self {
            from,
            path,
            captures,
        }
    }

    pub fn is_jump(&self) -> bool {
        !self.captures.is_empty()
    }

    /// Final landing square.
    pub fn destination(&self) -> Position {
        *self.path.last().unwrap_or(&self.from)
    }
}

/// Public game state handed to listeners and to the JS side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    pub allowed_moves: Vec<Move>,
    pub is_game_over: bool,
    pub winner: Option<Color>,
    pub status: String,
}

/// Final result after game over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub winner: Option<Color>,
    pub red_count: u8,
    pub black_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_stays_on_board() {
        let corner = Position::new(0, 0);

        assert_eq!(corner.offset((1, 1), 2), Some(Position::new(2, 2)));
        assert_eq!(corner.offset((-1, 1), 1), None);
        assert_eq!(Position::new(7, 6).offset((1, -1), 1), None);
    }

    #[test]
    fn men_promote_only_on_their_far_row() {
        assert!(Piece::man(Color::Red).promoted_on(0).is_king());
        assert!(!Piece::man(Color::Red).promoted_on(7).is_king());
        assert!(Piece::man(Color::Black).promoted_on(7).is_king());
        assert!(!Piece::man(Color::Black).promoted_on(0).is_king());
        assert_eq!(
            Piece::king(Color::Red).promoted_on(5),
            Piece::king(Color::Red)
        );
    }

    #[test]
    fn move_equality_is_order_sensitive() {
        let a = Move::jump(
            Position::new(5, 0),
            vec![Position::new(3, 2), Position::new(1, 4)],
            vec![Position::new(4, 1), Position::new(2, 3)],
        );
        let mut b = a.clone();
        b.captures.reverse();

        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(a.destination(), Position::new(1, 4));
        assert!(a.is_jump());
        assert!(!Move::simple(Position::new(5, 0), Position::new(4, 1)).is_jump());
    }
}
