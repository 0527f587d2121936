//! Tests for the game engine's public contract.

use strictly_gridtoe::{BoardSize, Cell, GameEngine, GameStatus, Line, MoveError, Player, Position};
use strum::IntoEnumIterator;

fn play(game: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(row, column) in moves {
        game.apply_move(Position::new(row, column)).expect("Valid move");
    }
}

/// Alternates moves from `xs` and `os`, X first.
fn play_interleaved(game: &mut GameEngine, xs: &[(usize, usize)], os: &[(usize, usize)]) {
    let mut os = os.iter();
    for &x in xs {
        play(game, &[x]);
        if let Some(&o) = os.next() {
            play(game, &[o]);
        }
    }
}

#[test]
fn test_fresh_engine_for_every_size() {
    for size in BoardSize::iter() {
        let game = GameEngine::with_size(size);
        assert_eq!(game.moves_played(), 0);
        assert!(!game.is_terminal());
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.winner(), None);
        assert_eq!(game.last_move(), None);
        assert_eq!(game.board().size(), size.side());
    }
}

#[test]
fn test_occupied_cell_rejected_without_mutation() {
    let mut game = GameEngine::with_size(BoardSize::Middle);
    play(&mut game, &[(2, 3)]);
    let board_before = game.board().clone();

    let result = game.apply_move(Position::new(2, 3));

    assert_eq!(result, Err(MoveError::CellOccupied(Position::new(2, 3))));
    assert_eq!(game.board(), &board_before);
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.moves_played(), 1);
}

#[test]
fn test_out_of_bounds_rejected_without_mutation() {
    for size in BoardSize::iter() {
        let mut game = GameEngine::with_size(size);
        let side = size.side();

        assert!(matches!(
            game.apply_move(Position::new(side, 0)),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert!(matches!(
            game.apply_move(Position::new(0, side)),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert!(matches!(
            game.apply_coordinates(-1, 0),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert!(matches!(
            game.apply_coordinates(0, -3),
            Err(MoveError::OutOfBounds { .. })
        ));
        assert_eq!(game.moves_played(), 0);
        assert_eq!(game.board().occupied_count(), 0);
    }
}

#[test]
fn test_row_win_scenario() {
    let mut game = GameEngine::with_size(BoardSize::Small);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert!(!game.is_terminal());

    play(&mut game, &[(0, 2)]);

    assert!(game.is_terminal());
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.winning_line(), Some(Line::Row(0)));
    assert_eq!(game.moves_played(), 5);
}

#[test]
fn test_diagonal_win_scenario() {
    let mut game = GameEngine::with_size(BoardSize::Small);
    play(&mut game, &[(0, 0), (0, 1), (1, 1), (0, 2), (2, 2)]);
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.winning_line(), Some(Line::MainDiagonal));
}

#[test]
fn test_o_wins_column_on_middle_board() {
    let mut game = GameEngine::with_size(BoardSize::Middle);
    // X scatters along row 4, O fills column 2.
    play(
        &mut game,
        &[
            (4, 0),
            (0, 2),
            (4, 1),
            (1, 2),
            (3, 0),
            (2, 2),
            (3, 1),
            (3, 2),
            (0, 0),
        ],
    );
    assert!(!game.is_terminal());
    play(&mut game, &[(4, 2)]);
    assert_eq!(game.status(), GameStatus::Won(Player::O));
    assert_eq!(game.winning_line(), Some(Line::Column(2)));
}

#[test]
fn test_anti_diagonal_win_on_large_board() {
    let mut game = GameEngine::with_size(BoardSize::Large);
    for i in 0..7 {
        game.apply_move(Position::new(i, 6 - i)).unwrap();
        if i < 6 {
            // O plays along column 0, never completing it.
            game.apply_move(Position::new(i, 0)).unwrap();
        }
    }
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.winning_line(), Some(Line::AntiDiagonal));
    assert_eq!(game.moves_played(), 13);
}

#[test]
fn test_row_win_on_middle_board() {
    let mut game = GameEngine::with_size(BoardSize::Middle);
    let xs: Vec<_> = (0..5).map(|c| (1, c)).collect();
    let os: Vec<_> = (0..4).map(|c| (3, c)).collect();
    play_interleaved(&mut game, &xs, &os);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_line(), Some(Line::Row(1)));
    assert_eq!(game.moves_played(), 9);
}

#[test]
fn test_main_diagonal_win_on_middle_board() {
    let mut game = GameEngine::with_size(BoardSize::Middle);
    let xs: Vec<_> = (0..5).map(|i| (i, i)).collect();
    let os: Vec<_> = (1..5).map(|c| (0, c)).collect();
    play_interleaved(&mut game, &xs, &os);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_line(), Some(Line::MainDiagonal));
    assert_eq!(game.last_move(), Some(Position::new(4, 4)));
}

#[test]
fn test_anti_diagonal_win_on_middle_board() {
    let mut game = GameEngine::with_size(BoardSize::Middle);
    let xs: Vec<_> = (0..5).map(|i| (i, 4 - i)).collect();
    let os: Vec<_> = (0..4).map(|c| (4, c + 1)).collect();
    play_interleaved(&mut game, &xs, &os);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_line(), Some(Line::AntiDiagonal));
}

#[test]
fn test_center_completes_anti_diagonal_only() {
    // O holds (0, 0), so the main diagonal through the center stays open.
    let mut game = GameEngine::with_size(BoardSize::Middle);
    play_interleaved(
        &mut game,
        &[(0, 4), (1, 3), (3, 1), (4, 0), (2, 2)],
        &[(0, 0), (0, 1), (0, 2), (0, 3)],
    );
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_line(), Some(Line::AntiDiagonal));
    assert_eq!(game.last_move(), Some(Position::new(2, 2)));
    assert_eq!(game.moves_played(), 9);
}

#[test]
fn test_center_completes_main_diagonal_only() {
    let mut game = GameEngine::with_size(BoardSize::Large);
    let xs: Vec<_> = [0, 1, 2, 4, 5, 6, 3].iter().map(|&i| (i, i)).collect();
    // O takes the rest of the anti-diagonal, leaving the center to X.
    let os: Vec<_> = (0..7).map(|r| (r, 6 - r)).filter(|&p| p != (3, 3)).collect();
    play_interleaved(&mut game, &xs, &os);
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.winning_line(), Some(Line::MainDiagonal));
    assert_eq!(game.last_move(), Some(Position::new(3, 3)));
    assert_eq!(game.moves_played(), 13);
}

#[test]
fn test_row_win_on_large_board() {
    let mut game = GameEngine::with_size(BoardSize::Large);
    let xs: Vec<_> = (0..7).map(|c| (3, c)).collect();
    let os: Vec<_> = (0..6).map(|c| (0, c)).collect();
    play_interleaved(&mut game, &xs, &os);
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.winning_line(), Some(Line::Row(3)));
    assert_eq!(game.moves_played(), 13);
}

#[test]
fn test_column_win_on_large_board() {
    let mut game = GameEngine::with_size(BoardSize::Large);
    let xs: Vec<_> = (0..7).map(|r| (r, 5)).collect();
    let os: Vec<_> = (0..6).map(|r| (r, 1)).collect();
    play_interleaved(&mut game, &xs, &os);
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.winning_line(), Some(Line::Column(5)));
}

#[test]
fn test_main_diagonal_win_on_large_board() {
    let mut game = GameEngine::with_size(BoardSize::Large);
    let xs: Vec<_> = (0..7).map(|i| (i, i)).collect();
    let os: Vec<_> = (0..6).map(|i| (i, i + 1)).collect();
    play_interleaved(&mut game, &xs, &os);
    assert_eq!(game.winner(), Some(Player::X));
    assert_eq!(game.winning_line(), Some(Line::MainDiagonal));
    assert_eq!(game.moves_played(), 13);
}

#[test]
fn test_draw_on_small_board() {
    let mut game = GameEngine::with_size(BoardSize::Small);
    // X O X / X O O / O X X
    play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert!(game.is_terminal());
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.winner(), None);
    assert_eq!(game.moves_played(), 9);
}

#[test]
fn test_draw_on_middle_board() {
    // Column pairs alternate X X O O X, shifted every row, so no line completes.
    let pattern = ["XXOOX", "OOXXO", "XXOOX", "OOXXO", "XXOOX"];
    let mut xs = Vec::new();
    let mut os = Vec::new();
    for (row, line) in pattern.iter().enumerate() {
        for (column, ch) in line.chars().enumerate() {
            let pos = Position::new(row, column);
            if ch == 'X' {
                xs.push(pos)
            } else {
                os.push(pos)
            }
        }
    }
    assert_eq!(xs.len(), 13);
    assert_eq!(os.len(), 12);

    let mut game = GameEngine::with_size(BoardSize::Middle);
    let mut os = os.into_iter();
    for x in xs {
        game.apply_move(x).unwrap();
        if let Some(o) = os.next() {
            game.apply_move(o).unwrap();
        }
    }
    assert_eq!(game.status(), GameStatus::Draw);
    assert!(game.board().is_full());
}

#[test]
fn test_moves_after_end_rejected() {
    let mut game = GameEngine::with_size(BoardSize::Small);
    play(&mut game, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);
    let snapshot = game.clone();

    assert_eq!(game.apply_move(Position::new(2, 2)), Err(MoveError::GameAlreadyOver));
    assert_eq!(game.apply_move(Position::new(0, 0)), Err(MoveError::GameAlreadyOver));
    assert_eq!(game.apply_move(Position::new(8, 8)), Err(MoveError::GameAlreadyOver));
    assert_eq!(game.apply_coordinates(-1, -1), Err(MoveError::GameAlreadyOver));
    assert_eq!(game, snapshot);
}

#[test]
fn test_history_and_board_agree() {
    let game = GameEngine::replay(
        BoardSize::Middle,
        &[Position::new(0, 0), Position::new(4, 4), Position::new(2, 1)],
    )
    .unwrap();
    let players: Vec<Player> = game.history().iter().map(|m| m.player()).collect();
    assert_eq!(players, vec![Player::X, Player::O, Player::X]);
    for action in game.history() {
        assert_eq!(
            game.board().get(action.position()),
            Ok(Cell::Occupied(action.player()))
        );
    }
    assert_eq!(game.board().occupied_count(), game.moves_played());
}

#[test]
fn test_replay_stops_at_first_error() {
    let result = GameEngine::replay(
        BoardSize::Small,
        &[Position::new(1, 1), Position::new(1, 1)],
    );
    assert_eq!(result, Err(MoveError::CellOccupied(Position::new(1, 1))));
}

#[test]
fn test_snapshot_serializes() {
    let game = GameEngine::replay(BoardSize::Small, &[Position::new(1, 1)]).unwrap();
    let json = serde_json::to_value(&game).unwrap();
    assert_eq!(json["moves_played"], 1);
    assert_eq!(json["current_player"], "O");
    assert_eq!(json["board"]["size"], 3);
    assert_eq!(json["board"]["cells"][4]["Occupied"], "X");
}
