use thiserror::Error;

/// Reasons a game session refuses to apply a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("game is already over")]
    GameOver,
    #[error("illegal move")]
    IllegalMove,
    #[error("side to move has no legal moves")]
    NoLegalMoves,
    #[error("AI could not select a move")]
    SelectorFailed,
}
