//! Tests for the tic-tac-toe typestate engine.

use term_arcade::{
    Board, GameInProgress, GameSetup, GameStep, Mark, Move, MoveError, Outcome, Position, Square,
};

#[test]
fn test_typestate_lifecycle() {
    let game = GameSetup::new();
    let game = game.start(Mark::X);
    assert_eq!(game.to_move(), Mark::X);

    let action = Move::new(Mark::X, Position::Center);
    let result = game.make_move(action).expect("Valid move");

    let game = match result {
        GameStep::InProgress(g) => g,
        GameStep::Finished(_) => panic!("Game shouldn't finish after one move"),
    };

    assert_eq!(game.to_move(), Mark::O);
    assert_eq!(game.history().len(), 1);
}

#[test]
fn test_occupied_square_rejected() {
    let game = GameSetup::new().start(Mark::X);

    let game = match game.make_move(Move::new(Mark::X, Position::Center)).unwrap() {
        GameStep::InProgress(g) => g,
        GameStep::Finished(_) => panic!("Unexpected finish"),
    };

    let result = game.clone().make_move(Move::new(Mark::O, Position::Center));
    assert!(matches!(
        result,
        Err(MoveError::SquareOccupied(Position::Center))
    ));
}

#[test]
fn test_wrong_turn_rejected() {
    let game = GameSetup::new().start(Mark::X);

    let result = game.make_move(Move::new(Mark::O, Position::Center));
    assert!(matches!(result, Err(MoveError::WrongTurn(Mark::O))));
}

#[test]
fn test_rejected_move_leaves_game_unchanged() {
    let game = GameSetup::new().start(Mark::X);
    let game = match game.make_move(Move::new(Mark::X, Position::Center)).unwrap() {
        GameStep::InProgress(g) => g,
        GameStep::Finished(_) => panic!("Unexpected finish"),
    };

    let before_board = game.board().clone();
    let before_history = game.history().to_vec();

    // Clone, fail, and confirm the original is untouched and playable.
    let err = game
        .clone()
        .make_move(Move::new(Mark::O, Position::Center))
        .unwrap_err();
    assert_eq!(err, MoveError::SquareOccupied(Position::Center));
    assert_eq!(game.board(), &before_board);
    assert_eq!(game.history(), before_history.as_slice());

    let step = game.make_move(Move::new(Mark::O, Position::TopLeft));
    assert!(step.is_ok());
}

#[test]
fn test_replay_from_history() {
    let moves = vec![
        Move::new(Mark::X, Position::Center),
        Move::new(Mark::O, Position::TopLeft),
        Move::new(Mark::X, Position::BottomRight),
        Move::new(Mark::O, Position::TopRight),
        Move::new(Mark::X, Position::BottomLeft),
    ];

    let result = GameInProgress::replay(&moves).expect("Valid replay");

    match result {
        GameStep::InProgress(game) => {
            assert_eq!(game.history().len(), 5);
            assert_eq!(game.to_move(), Mark::O);
        }
        GameStep::Finished(_) => panic!("Game shouldn't finish"),
    }
}

#[test]
fn test_win_detection() {
    let moves = vec![
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopCenter),
        Move::new(Mark::O, Position::BottomLeft),
        Move::new(Mark::X, Position::TopRight), // X wins top row
    ];

    let result = GameInProgress::replay(&moves).expect("Valid replay");

    match result {
        GameStep::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Winner(Mark::X));
        }
        GameStep::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_draw_detection() {
    let moves = vec![
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopRight),
        Move::new(Mark::O, Position::TopCenter),
        Move::new(Mark::X, Position::MiddleLeft),
        Move::new(Mark::O, Position::MiddleRight),
        Move::new(Mark::X, Position::BottomCenter),
        Move::new(Mark::O, Position::BottomLeft),
        Move::new(Mark::X, Position::BottomRight), // Draw
    ];

    let result = GameInProgress::replay(&moves).expect("Valid replay");

    match result {
        GameStep::Finished(game) => {
            assert_eq!(game.outcome(), &Outcome::Draw);
        }
        GameStep::InProgress(_) => panic!("Game should be finished"),
    }
}

#[test]
fn test_moves_after_finish_are_impossible() {
    // A finished game has no make_move; the only way forward is restart.
    let moves = vec![
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopCenter),
        Move::new(Mark::O, Position::BottomLeft),
        Move::new(Mark::X, Position::TopRight),
    ];

    let result = GameInProgress::replay(&moves).unwrap();
    if let GameStep::Finished(game) = result {
        let fresh = game.restart().start(Mark::X);
        assert_eq!(fresh.to_move(), Mark::X);
        assert!(fresh.history().is_empty());
    } else {
        panic!("Game should be finished");
    }
}

#[test]
fn test_valid_moves_empty_iff_board_full() {
    let mut board = Board::new();
    for (idx, pos) in Position::ALL.iter().enumerate() {
        assert!(!Position::valid_moves(&board).is_empty());
        let mark = if idx % 2 == 0 { Mark::X } else { Mark::O };
        board.set(*pos, Square::Occupied(mark));
    }
    assert!(Position::valid_moves(&board).is_empty());
}

#[test]
fn test_replay_stops_at_first_terminal_state() {
    // The trailing move after X's win is never applied.
    let moves = vec![
        Move::new(Mark::X, Position::TopLeft),
        Move::new(Mark::O, Position::Center),
        Move::new(Mark::X, Position::TopCenter),
        Move::new(Mark::O, Position::BottomLeft),
        Move::new(Mark::X, Position::TopRight),
        Move::new(Mark::O, Position::BottomRight),
    ];

    match GameInProgress::replay(&moves).unwrap() {
        GameStep::Finished(game) => {
            assert_eq!(game.history().len(), 5);
            assert_eq!(game.outcome(), &Outcome::Winner(Mark::X));
        }
        GameStep::InProgress(_) => panic!("Game should be finished"),
    }
}
