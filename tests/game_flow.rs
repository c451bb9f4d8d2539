use gess::{Board, Game, GameState, GessError, MoveFault, Pos, Stone};

fn pos(s: &str) -> Pos {
    s.parse().unwrap()
}

/// White ring around k10, a black piece below it at k6 with a single north
/// stone, and a black ring at c3 far away.
fn ring_attack_position() -> Game {
    let mut board = Board::new();
    for s in ["j9", "k9", "l9", "j10", "l10", "j11", "k11", "l11"] {
        board.place_stone(pos(s), Stone::White);
    }
    for s in ["b2", "c2", "d2", "b3", "d3", "b4", "c4", "d4"] {
        board.place_stone(pos(s), Stone::Black);
    }
    board.place_stone(pos("k7"), Stone::Black);
    Game::with_position(board, vec![pos("c3")], vec![pos("k10")], Stone::Black).unwrap()
}

#[test]
fn opening_move_north_switches_player() {
    let mut game = Game::new();
    let result = game.request_move(pos("c3"), pos("c4"));

    assert!(result.success);
    assert_eq!(result.new_state, GameState::Ongoing);
    assert_eq!(game.current_player(), Stone::White);
    assert_eq!(game.non_current_player(), Stone::Black);

    let board = result.new_board.expect("board on success");
    assert_eq!(board.get(pos("c5")), Stone::Black);
    assert_eq!(board.get(pos("c4")), Stone::Black);
    assert!(board.is_empty(pos("c2")));
    assert!(board.is_empty(pos("b2")));
    assert_eq!(board.count(Stone::Black), 43);
}

#[test]
fn identical_initial_and_final_is_rejected() {
    let mut game = Game::new();
    let result = game.request_move(pos("c3"), pos("c3"));

    assert!(!result.success);
    assert!(result.new_board.is_none());
    assert_eq!(game.board(), &Board::standard());
    assert_eq!(game.current_player(), Stone::Black);
}

#[test]
fn scripted_opening_alternates_turns() {
    let mut game = Game::new();

    let report = game.make_move(pos("c3"), pos("c4")).unwrap();
    assert_eq!(report.steps, 1);
    assert_eq!(game.current_player(), Stone::White);

    let report = game.make_move(pos("c18"), pos("c17")).unwrap();
    assert_eq!(report.steps, 1);
    assert_eq!(game.current_player(), Stone::Black);

    // i7 sits in the frontier of the third step, which still completes
    let report = game.make_move(pos("i3"), pos("i9")).unwrap();
    assert_eq!(report.steps, 3);
    assert!(report.collided);
    assert_eq!(report.to, pos("i6"));
    assert_eq!(game.current_player(), Stone::White);
    assert_eq!(game.state(), GameState::Ongoing);
}

#[test]
fn out_of_range_request_changes_nothing() {
    let mut game = Game::new();
    // The ring piece has an empty center, so it reaches 3 at most
    let err = game.make_move(pos("l3"), pos("l7")).unwrap_err();
    assert_eq!(
        err,
        GessError::InvalidMove(MoveFault::OutOfRange {
            direction: gess::Direction::N,
            requested: 4,
            max: 3,
        })
    );
    assert_eq!(game.board(), &Board::standard());
    assert_eq!(game.rings(Stone::Black), &[pos("l3")]);
}

#[test]
fn moving_the_ring_moves_its_record() {
    let mut game = Game::new();
    game.make_move(pos("l3"), pos("l5")).unwrap();
    assert_eq!(game.rings(Stone::Black), &[pos("l5")]);
    assert_eq!(game.state(), GameState::Ongoing);
}

#[test]
fn breaking_the_opponent_ring_wins() {
    let mut game = ring_attack_position();

    let result = game.request_move(pos("k6"), pos("k8"));
    assert!(result.success);
    assert_eq!(result.new_state, GameState::BlackWon);
    assert_eq!(game.state(), GameState::BlackWon);
    // Winner keeps the turn marker; nobody moves again
    assert_eq!(game.current_player(), Stone::Black);

    let again = game.request_move(pos("c3"), pos("c5"));
    assert!(!again.success);
    assert_eq!(again.new_state, GameState::BlackWon);
    assert_eq!(
        game.make_move(pos("c3"), pos("c5")).unwrap_err(),
        GessError::GameOver(GameState::BlackWon)
    );
}

#[test]
fn resignation_hands_the_win_over() {
    let mut game = Game::new();
    game.make_move(pos("c3"), pos("c4")).unwrap();
    assert_eq!(game.resign(), GameState::BlackWon);
    assert!(!game.request_move(pos("c18"), pos("c17")).success);
}
