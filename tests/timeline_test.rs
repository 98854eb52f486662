//! End-to-end tests for the time-travel timeline.

use retroboard::{
    Action, Board, GameStatus, Player, Position, Square, Timeline, rules,
};

#[test]
fn test_first_play_and_repeat_is_ignored() {
    let timeline = Timeline::new().play(Position::TopLeft);

    assert_eq!(
        timeline.current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
    assert_eq!(timeline.next_player(), Player::O);

    // Same square again: silently ignored, history untouched.
    let after = timeline.clone().play(Position::TopLeft);
    assert_eq!(after, timeline);
    assert_eq!(
        after.current_board().get(Position::TopLeft),
        Square::Occupied(Player::X)
    );
}

#[test]
fn test_left_column_win() {
    // X: 0, 3, 6 / O: 1, 4
    let timeline = Timeline::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
    ]);

    for (pos, player) in [
        (Position::TopLeft, Player::X),
        (Position::TopCenter, Player::O),
        (Position::MiddleLeft, Player::X),
        (Position::Center, Player::O),
        (Position::BottomLeft, Player::X),
    ] {
        assert_eq!(timeline.current_board().get(pos), Square::Occupied(player));
    }

    assert_eq!(
        rules::check_winner(timeline.current_board()),
        Some(Player::X)
    );
    assert_eq!(timeline.status(), GameStatus::Won(Player::X));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    // X O X / O X O / O X O - no three in a row anywhere.
    let marks = [
        Player::X,
        Player::O,
        Player::X,
        Player::O,
        Player::X,
        Player::O,
        Player::O,
        Player::X,
        Player::O,
    ];
    let mut board = Board::new();
    for (i, player) in marks.iter().enumerate() {
        board.set(
            Position::from_index(i).expect("index 0-8"),
            Square::Occupied(*player),
        );
    }

    assert_eq!(rules::check_winner(&board), None);
    assert!(board.is_full());
    assert!(rules::is_draw(&board));
}

#[test]
fn test_draw_reached_through_play() {
    let timeline = Timeline::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ]);

    assert_eq!(timeline.len(), 10);
    assert_eq!(timeline.status(), GameStatus::Draw);
    // A draw board rejects nothing by winner, but every square is taken.
    let after = timeline.clone().play(Position::Center);
    assert_eq!(after, timeline);
}

#[test]
fn test_history_grows_one_per_valid_play() {
    let mut timeline = Timeline::new();
    for (i, pos) in [
        Position::TopLeft,
        Position::Center,
        Position::BottomRight,
        Position::TopCenter,
    ]
    .into_iter()
    .enumerate()
    {
        timeline = timeline.play(pos);
        assert_eq!(timeline.len(), i + 2);
        assert_eq!(timeline.current(), timeline.len() - 1);
    }
    assert_eq!(timeline.boards()[0], Board::new());
}

#[test]
fn test_branching_discards_the_future() {
    // History of length 5, cursor at 4.
    let timeline = Timeline::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::BottomLeft,
    ]);
    assert_eq!(timeline.len(), 5);
    assert_eq!(timeline.current(), 4);

    let base = timeline.boards()[2];
    let branched = timeline.jump_to(2).play(Position::MiddleRight);

    assert_eq!(branched.len(), 4);
    assert_eq!(branched.current(), 3);
    assert_eq!(
        *branched.current_board(),
        base.with(Position::MiddleRight, Square::Occupied(Player::X))
    );
}

#[test]
fn test_jump_only_moves_the_cursor() {
    let timeline = Timeline::replay(&[Position::TopLeft, Position::Center, Position::TopRight]);
    let boards_before = timeline.boards().to_vec();

    let jumped = timeline.reduce(Action::JumpTo(0));

    assert_eq!(jumped.boards(), boards_before.as_slice());
    assert_eq!(jumped.current(), 0);
    assert_eq!(jumped.next_player(), Player::X);
    assert_eq!(jumped.current_board(), &Board::new());
}

#[test]
fn test_status_line_inputs() {
    let timeline = Timeline::new();
    assert_eq!(timeline.status().to_string(), "In progress");
    assert_eq!(timeline.next_player().to_string(), "X");

    let won = Timeline::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::Center,
        Position::BottomLeft,
    ]);
    assert_eq!(won.status().to_string(), "Winner: X");
}

#[test]
fn test_timeline_serializes_mid_game() {
    let timeline = Timeline::replay(&[Position::TopLeft, Position::Center]).jump_to(1);

    let json = serde_json::to_string(&timeline).expect("serialize");
    let restored: Timeline = serde_json::from_str(&json).expect("deserialize");

    assert_eq!(restored, timeline);
    assert_eq!(restored.current(), 1);
    assert_eq!(restored.len(), 3);
}
