use checkers::{Board, Color, Piece, Position, Searcher, allowed_moves, directions_for};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn piece_strategy() -> impl Strategy<Value = Option<Piece>> {
    prop_oneof![
        6 => Just(None::<Piece>),
        2 => Just(Some(Piece::man(Color::Red))),
        2 => Just(Some(Piece::man(Color::Black))),
        1 => Just(Some(Piece::king(Color::Red))),
        1 => Just(Some(Piece::king(Color::Black))),
    ]
}

/// Random positions with pieces on the 32 dark squares.
fn board_strategy() -> impl Strategy<Value = Board> {
    prop::collection::vec(piece_strategy(), 32).prop_map(|cells| {
        let mut board = Board::empty();
        let dark = (0..8u8)
            .flat_map(|row| (0..8u8).map(move |col| Position::new(row, col)))
            .filter(|pos| pos.is_dark());
        for (pos, piece) in dark.zip(cells) {
            board.set(pos, piece);
        }
        board
    })
}

fn color_strategy() -> impl Strategy<Value = Color> {
    prop_oneof![Just(Color::Red), Just(Color::Black)]
}

proptest! {
    #[test]
    fn evaluation_is_zero_sum(board in board_strategy()) {
        prop_assert_eq!(board.evaluate(Color::Red), -board.evaluate(Color::Black));
    }

    #[test]
    fn move_lists_are_all_jumps_or_all_steps(board in board_strategy(), turn in color_strategy()) {
        let moves = allowed_moves(&board, turn);
        let jumps = moves.iter().filter(|mv| mv.is_jump()).count();

        prop_assert!(jumps == 0 || jumps == moves.len());
    }

    #[test]
    fn generated_moves_are_well_formed(board in board_strategy(), turn in color_strategy()) {
        for mv in allowed_moves(&board, turn) {
            let piece = board.piece_at(mv.from).expect("move starts on a piece");
            prop_assert_eq!(piece.color, turn);

            if mv.is_jump() {
                prop_assert_eq!(mv.path.len(), mv.captures.len());
                let mut at = mv.from;
                for (landing, captured) in mv.path.iter().zip(&mv.captures) {
                    let dr = landing.row as i8 - at.row as i8;
                    let dc = landing.col as i8 - at.col as i8;
                    prop_assert_eq!((dr.abs(), dc.abs()), (2, 2));
                    prop_assert!(directions_for(piece).contains(&(dr / 2, dc / 2)));
                    prop_assert_eq!(at.offset((dr / 2, dc / 2), 1), Some(*captured));
                    at = *landing;
                }
            } else {
                prop_assert_eq!(mv.path.len(), 1);
                let target = mv.path[0];
                let dr = target.row as i8 - mv.from.row as i8;
                let dc = target.col as i8 - mv.from.col as i8;
                prop_assert!(directions_for(piece).contains(&(dr, dc)));
                prop_assert!(board.piece_at(target).is_none());
            }
        }
    }

    #[test]
    fn apply_move_leaves_the_input_untouched(board in board_strategy(), turn in color_strategy()) {
        let snapshot = board;
        for mv in allowed_moves(&board, turn) {
            let next = board.apply_move(&mv);
            prop_assert_eq!(board, snapshot);
            prop_assert!(next.piece_at(mv.destination()).is_some());
            for captured in &mv.captures {
                prop_assert_eq!(next.piece_at(*captured), None);
            }
        }
    }

    #[test]
    fn search_picks_a_legal_move_or_none(
        board in board_strategy(),
        turn in color_strategy(),
        seed in any::<u64>(),
    ) {
        let legal = allowed_moves(&board, turn);
        let mut searcher = Searcher::with_rng(StdRng::seed_from_u64(seed));

        match searcher.search(&board, 2, turn) {
            Some(mv) => prop_assert!(legal.contains(&mv)),
            None => prop_assert!(legal.is_empty()),
        }
    }
}
