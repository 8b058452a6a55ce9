use crate::board::{Board, directions_for};
use crate::types::{Color, Move, Piece, Position};

/// Returns every legal move for `turn`.
///
/// Captures are mandatory: if any piece of `turn` can jump, only jumps are
/// returned. Jumps are always carried to the end of their chain; a chain
/// that could continue is never returned on its own.
pub fn allowed_moves(board: &Board, turn: Color) -> Vec<Move> {
    let mut captures = Vec::new();
    let mut simple = Vec::new();

    for (pos, piece) in board.pieces(turn) {
        let before = captures.len();
        collect_captures(
            board,
            pos,
            piece,
            pos,
            &mut Vec::new(),
            &mut Vec::new(),
            &mut captures,
        );
        if captures.len() == before {
            collect_simple_moves(board, pos, piece, &mut simple);
        }
    }

    if captures.is_empty() { simple } else { captures }
}

/// Returns `true` when `mv` is one of the legal moves for `turn`.
pub fn is_allowed(board: &Board, turn: Color, mv: &Move) -> bool {
    allowed_moves(board, turn).iter().any(|allowed| allowed == mv)
}

/// Depth-first search of jump chains for `piece`, currently standing on `at`.
///
/// `board` is the simulated position with every previous hop of the chain
/// already applied. Directions come from the piece as it started the move,
/// so a man reaching the far row mid-chain keeps moving like a man.
fn collect_captures(
    board: &Board,
    origin: Position,
    piece: Piece,
    at: Position,
    path: &mut Vec<Position>,
    taken: &mut Vec<Position>,
    out: &mut Vec<Move>,
) {
    let mut extended = false;

    for &dir in directions_for(piece) {
        let (Some(enemy_pos), Some(landing)) = (at.offset(dir, 1), at.offset(dir, 2)) else {
            continue;
        };
        let is_enemy = board
            .piece_at(enemy_pos)
            .is_some_and(|other| other.color != piece.color);
        if !is_enemy || board.piece_at(landing).is_some() {
            continue;
        }

        let mut next = *board;
        next.set(enemy_pos, None);
        next.set(at, None);
        next.set(landing, Some(piece));

        path.push(landing);
        taken.push(enemy_pos);
        collect_captures(&next, origin, piece, landing, path, taken, out);
        path.pop();
        taken.pop();
        extended = true;
    }

    if !extended && !path.is_empty() {
        out.push(Move::jump(origin, path.clone(), taken.clone()));
    }
}

fn collect_simple_moves(board: &Board, pos: Position, piece: Piece, out: &mut Vec<Move>) {
    for &dir in directions_for(piece) {
        if let Some(target) = pos.offset(dir, 1)
            && board.piece_at(target).is_none()
        {
            out.push(Move::simple(pos, target));
        }
    }
}
