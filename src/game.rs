use log::{debug, warn};

use crate::ai::search::Searcher;
use crate::board::Board;
use crate::error::MoveError;
use crate::movegen::{allowed_moves, is_allowed};
use crate::types::{Color, GameResult, GameState, Move};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 10;

pub trait MoveSelector {
    fn select_move(&self, board: &Board, turn: Color, level: u8) -> Option<Move>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstLegalMoveSelector;

impl MoveSelector for FirstLegalMoveSelector {
    fn select_move(&self, board: &Board, turn: Color, _level: u8) -> Option<Move> {
        allowed_moves(board, turn).into_iter().next()
    }
}

/// Minimax search with `level` used as the search depth.
#[derive(Debug, Default, Clone, Copy)]
pub struct MinimaxSelector;

impl MoveSelector for MinimaxSelector {
    fn select_move(&self, board: &Board, turn: Color, level: u8) -> Option<Move> {
        Searcher::new().search(board, level, turn)
    }
}

/// Handle returned by [`GameInstance::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn Fn(&GameState)>;

/// A running game: the current board, whose turn it is and who is watching.
pub struct GameInstance {
    board: Board,
    turn: Color,
    level: u8,
    is_game_over: bool,
    last_move: Option<Move>,
    selector: Box<dyn MoveSelector>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
}

impl GameInstance {
    pub fn new(level: u8, selector: Box<dyn MoveSelector>) -> Self {
        Self::with_position(Board::new(), Color::Red, level, selector)
    }

    pub fn new_with_default_selector(level: u8) -> Self {
        Self::new(level, Box::new(MinimaxSelector))
    }

    /// Starts a game from an arbitrary position.
    pub fn with_position(
        board: Board,
        turn: Color,
        level: u8,
        selector: Box<dyn MoveSelector>,
    ) -> Self {
        let mut game = Self {
            board,
            turn,
            level: level.clamp(MIN_LEVEL, MAX_LEVEL),
            is_game_over: false,
            last_move: None,
            selector,
            listeners: Vec::new(),
            next_listener_id: 0,
        };
        game.refresh_game_over();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn level(&self) -> u8 {
        self.level
    }

    /// Sets the search depth used for AI moves, clamped to `MIN_LEVEL..=MAX_LEVEL`.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.clamp(MIN_LEVEL, MAX_LEVEL);
    }

    pub fn is_game_over(&self) -> bool {
        self.is_game_over
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.last_move.as_ref()
    }

    pub fn allowed_moves(&self) -> Vec<Move> {
        allowed_moves(&self.board, self.turn)
    }

    /// Applies `mv` for the side to move if it is one of the allowed moves.
    pub fn try_move(&mut self, mv: &Move) -> Result<(), MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }
        if !is_allowed(&self.board, self.turn, mv) {
            warn!("rejected move for {:?}: {mv:?}", self.turn);
            return Err(MoveError::IllegalMove);
        }

        self.board = self.board.apply_move(mv);
        self.last_move = Some(mv.clone());
        self.turn = self.turn.opponent();
        self.refresh_game_over();
        debug!(
            "applied {mv:?}; {:?} to move, game over: {}",
            self.turn, self.is_game_over
        );

        self.notify();
        Ok(())
    }

    /// Same as [`Self::try_move`], reporting only success.
    pub fn move_piece(&mut self, mv: &Move) -> bool {
        self.try_move(mv).is_ok()
    }

    /// Asks the selector for a move at the current level without playing it.
    pub fn suggest_move(&self) -> Option<Move> {
        if self.is_game_over {
            return None;
        }
        self.selector.select_move(&self.board, self.turn, self.level)
    }

    /// Lets the selector play for the side to move.
    pub fn do_ai_move(&mut self) -> Result<Move, MoveError> {
        if self.is_game_over {
            return Err(MoveError::GameOver);
        }
        if self.allowed_moves().is_empty() {
            return Err(MoveError::NoLegalMoves);
        }

        let selected = self.suggest_move().ok_or(MoveError::SelectorFailed)?;
        self.try_move(&selected)?;
        Ok(selected)
    }

    /// Restores the starting position with red to move.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.turn = Color::Red;
        self.last_move = None;
        self.refresh_game_over();
        self.notify();
    }

    /// Registers `listener`, called after every change in registration order.
    pub fn subscribe(&mut self, listener: impl Fn(&GameState) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Returns `false` if `id` was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(listener_id, _)| *listener_id != id);
        self.listeners.len() != before
    }

    pub fn winner(&self) -> Option<Color> {
        self.is_game_over.then(|| self.turn.opponent())
    }

    pub fn status(&self) -> String {
        match self.winner() {
            Some(winner) => format!("{} wins", winner.name()),
            None => format!("{} to move", self.turn.name()),
        }
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            board: self.board,
            turn: self.turn,
            allowed_moves: self.allowed_moves(),
            is_game_over: self.is_game_over,
            winner: self.winner(),
            status: self.status(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (red_count, black_count) = self.board.count();
        GameResult {
            winner: self.winner(),
            red_count,
            black_count,
        }
    }

    fn refresh_game_over(&mut self) {
        self.is_game_over = self.allowed_moves().is_empty();
    }

    fn notify(&self) {
        if self.listeners.is_empty() {
            return;
        }
        let state = self.to_game_state();
        for (_, listener) in &self.listeners {
            listener(&state);
        }
    }
}
