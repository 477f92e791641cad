use checkers_move::game::search::children;
use checkers_move::game::{capture_path, reachable_landings, SearchState};
use checkers_move::error::BoardError;
use checkers_move::{
    can_move, can_move_on, Board, Coord, MoveError, MoveRequest, Player, Rules, RulesConfig,
    StepRule,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn c(row: isize, col: isize) -> Coord {
    Coord::new(row, col)
}

fn with_pieces(pieces: &[(isize, isize, u8)]) -> Vec<u8> {
    let mut board = Board::empty(5).unwrap();
    for &(r, col, tag) in pieces {
        board.set(c(r, col), tag);
    }
    board.to_flat()
}

#[test]
fn jump_chain_reaches_target() {
    #[rustfmt::skip]
    let board = [
        0, 0, 0, 0, 0,
        0, 2, 0, 2, 0,
        1, 0, 0, 0, 0,
        0, 0, 0, 2, 0,
        0, 0, 0, 0, 0,
    ];
    assert_eq!(can_move(&board, c(2, 0), c(4, 2), 1, 5), Ok(true));
}

#[test]
fn orthogonal_neighbour_is_not_reachable() {
    let board = with_pieces(&[(1, 0, 1)]);
    assert_eq!(can_move(&board, c(1, 0), c(0, 0), 1, 5), Ok(false));
}

#[test]
fn single_jump_lands_on_target() {
    let board = with_pieces(&[(1, 2, 2), (2, 1, 1)]);
    assert_eq!(can_move(&board, c(2, 1), c(0, 3), 1, 5), Ok(true));
}

#[test]
fn backward_step_without_capture_is_illegal_by_default() {
    let board = with_pieces(&[(2, 1, 1)]);
    assert_eq!(can_move(&board, c(2, 1), c(1, 0), 1, 5), Ok(false));
}

#[test]
fn backward_step_is_legal_under_any_diagonal() {
    let board = Board::from_flat(&with_pieces(&[(2, 1, 1)]), 5).unwrap();
    let config = RulesConfig {
        step_rule: StepRule::AnyDiagonal,
        ..RulesConfig::default()
    };
    assert_eq!(
        can_move_on(&board, c(2, 1), c(1, 0), Player::ONE, &config),
        Ok(true)
    );
}

#[test]
fn player_two_captures_player_one() {
    let board = with_pieces(&[(3, 3, 2), (2, 2, 1)]);
    assert_eq!(can_move(&board, c(3, 3), c(1, 1), 2, 5), Ok(true));
    assert!(matches!(
        can_move(&board, c(3, 3), c(1, 1), 1, 5),
        Err(MoveError::StartNotOwnedByPlayer { .. })
    ));
}

#[test]
fn third_tag_is_capturable() {
    let board = with_pieces(&[(2, 1, 1), (1, 2, 7)]);
    assert_eq!(can_move(&board, c(2, 1), c(0, 3), 1, 5), Ok(true));
}

#[test]
fn larger_board_sizes_work() {
    let mut board = Board::empty(8).unwrap();
    board.set(c(7, 0), 1);
    board.set(c(6, 1), 2);
    board.set(c(4, 3), 2);
    board.set(c(2, 5), 2);
    let flat = board.to_flat();
    assert_eq!(can_move(&flat, c(7, 0), c(1, 6), 1, 8), Ok(true));
    assert_eq!(can_move(&flat, c(7, 0), c(0, 7), 1, 8), Ok(false));
}

#[test]
fn board_must_match_configured_size() {
    let board = Board::from_flat(&with_pieces(&[(2, 1, 1)]), 5).unwrap();
    let config = RulesConfig {
        board_size: 8,
        ..RulesConfig::default()
    };
    assert_eq!(
        can_move_on(&board, c(2, 1), c(3, 2), Player::ONE, &config),
        Err(MoveError::Board(BoardError::SizeMismatch {
            expected: 8,
            actual: 5
        }))
    );
}

#[test]
fn huge_board_size_is_an_error() {
    assert_eq!(
        can_move(&[], c(0, 0), c(1, 1), 1, usize::MAX),
        Err(MoveError::Board(BoardError::SizeTooLarge(usize::MAX)))
    );
}

#[test]
fn caller_board_is_untouched() {
    let board = with_pieces(&[(1, 2, 2), (2, 1, 1)]);
    let before = board.clone();
    let _ = can_move(&board, c(2, 1), c(0, 3), 1, 5);
    assert_eq!(board, before);
}

fn random_board(rng: &mut StdRng, size: usize) -> Board {
    let flat: Vec<u8> = (0..size * size)
        .map(|_| match rng.random_range(0..10) {
            0..=5 => 0,
            6..=7 => 1,
            _ => 2,
        })
        .collect();
    Board::from_flat(&flat, size).unwrap()
}

fn random_coord(rng: &mut StdRng, size: usize) -> Coord {
    let size = size as i64;
    c(
        rng.random_range(0..size) as isize,
        rng.random_range(0..size) as isize,
    )
}

#[test]
fn occupied_end_is_always_rejected() {
    let mut rng = StdRng::seed_from_u64(7);
    let rules = Rules::default();
    for _ in 0..500 {
        let board = random_board(&mut rng, 5);
        let start = random_coord(&mut rng, 5);
        let end = random_coord(&mut rng, 5);
        if start == end || board.get(start) != Some(1) {
            continue;
        }
        let result = rules.check(&board, &MoveRequest::new(start, end, Player::ONE));
        match board.get(end) {
            Some(0) => assert!(result.is_ok()),
            Some(tag) => assert_eq!(result, Err(MoveError::EndOccupied { end, tag })),
            None => unreachable!(),
        }
    }
}

#[test]
fn owned_start_to_itself_is_legal() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..200 {
        let board = random_board(&mut rng, 6);
        let start = random_coord(&mut rng, 6);
        let Some(tag) = board.get(start).filter(|&t| t != 0) else {
            continue;
        };
        let config = RulesConfig {
            board_size: 6,
            ..RulesConfig::default()
        };
        assert_eq!(
            can_move_on(&board, start, start, Player::new(tag), &config),
            Ok(true)
        );
    }
}

#[test]
fn capture_search_agrees_with_exhaustive_landings() {
    let mut rng = StdRng::seed_from_u64(42);
    let rules = Rules::new(RulesConfig {
        step_rule: StepRule::Ignored,
        ..RulesConfig::default()
    });
    for _ in 0..300 {
        let board = random_board(&mut rng, 5);
        let start = random_coord(&mut rng, 5);
        let end = random_coord(&mut rng, 5);
        if start == end || board.get(start) != Some(1) || board.get(end) != Some(0) {
            continue;
        }
        let landings = reachable_landings(&board, start, Player::ONE);
        let result = rules.check(&board, &MoveRequest::new(start, end, Player::ONE));
        assert_eq!(result, Ok(landings.contains(&end)), "board:\n{board}");
    }
}

#[test]
fn every_jump_removes_exactly_one_enemy_piece() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let board = random_board(&mut rng, 5);
        let start = random_coord(&mut rng, 5);
        if board.get(start) != Some(1) {
            continue;
        }
        let enemies = board.to_flat().iter().filter(|&&t| t == 2).count();

        // Walk the whole capture tree, checking each step against its parent.
        let mut stack = vec![(SearchState::new(start, board), 0usize)];
        while let Some((state, depth)) = stack.pop() {
            assert!(depth <= enemies, "chain longer than the enemy count");
            for child in children(&state, Player::ONE) {
                assert_eq!(
                    child.board.occupied_count(),
                    state.board.occupied_count() - 1
                );
                let captured = state.position.midpoint(child.position);
                assert_eq!(state.board.get(captured), Some(2));
                assert_eq!(child.board.get(captured), Some(0));
                stack.push((child, depth + 1));
            }
        }
    }
}

#[test]
fn found_chains_are_no_longer_than_enemy_count() {
    let mut rng = StdRng::seed_from_u64(19);
    for _ in 0..300 {
        let board = random_board(&mut rng, 5);
        let start = random_coord(&mut rng, 5);
        let end = random_coord(&mut rng, 5);
        if board.get(start) != Some(1) {
            continue;
        }
        let enemies = board.to_flat().iter().filter(|&&t| t == 2).count();
        if let Some(path) = capture_path(&board, start, end, Player::ONE) {
            assert!(!path.is_empty());
            assert!(path.len() <= enemies);
            assert_eq!(path.last(), Some(&end));
        }
    }
}
