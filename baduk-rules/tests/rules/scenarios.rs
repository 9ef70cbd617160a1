use baduk_rules::{
    ApplyOptions, Board, KoState, Outcome, Position, Rejection, Stone, apply,
};

use crate::common::{b, init_tracing, layout, sorted, w};

#[test]
fn basic_capture() {
    init_tracing();
    let opts = ApplyOptions::default();
    let moves = [b((1, 2)), w((2, 2)), b((3, 2)), w((0, 0)), b((2, 1)), w((4, 4))];
    let p = Position::replay(5, &moves, opts).unwrap();
    assert_eq!(
        p.board.liberties(&p.board.group((2, 2))),
        vec![(2, 3)]
    );

    let (p, captured) = p.play(b((2, 3)), opts).unwrap();
    assert_eq!(captured, vec![(2, 2)]);
    assert_eq!(p.board.stone_at((2, 2)), None);
    assert_eq!(p.history_len, 7);
}

#[test]
fn surrounded_point_is_suicide() {
    init_tracing();
    let board = layout(&["+++++", "++W++", "+W+W+", "++W++", "+++++"]);
    let before = board.clone();
    let outcome = apply(&board, b((2, 2)), None, 4, ApplyOptions::default());
    assert_eq!(outcome, Outcome::Rejected(Rejection::Suicide));
    assert_eq!(board, before);
}

#[test]
fn ko_cycle() {
    init_tracing();
    let opts = ApplyOptions::default();
    let board = layout(&["+WB+", "WB+B", "+WB+", "++++"]);
    let p = Position {
        board,
        ko: None,
        history_len: 20,
    };

    // White takes the black stone at (1, 1).
    let (p, captured) = p.play(w((2, 1)), opts).unwrap();
    assert_eq!(captured, vec![(1, 1)]);
    assert_eq!(p.ko, Some(KoState::new((1, 1), 21)));

    // Black may not take back at once.
    assert_eq!(p.play(b((1, 1)), opts), Err(Rejection::Ko));
    assert_eq!(
        apply(&p.board, b((1, 1)), p.ko.as_ref(), 22, opts).rejection(),
        None
    );

    // Black plays elsewhere, white answers elsewhere, and the retake is legal.
    let (p, _) = p.play(b((3, 3)), opts).unwrap();
    assert_eq!(p.ko, None);
    let (p, _) = p.play(w((0, 3)), opts).unwrap();
    let (p, captured) = p.play(b((1, 1)), opts).unwrap();
    assert_eq!(captured, vec![(2, 1)]);
    assert_eq!(p.ko, Some(KoState::new((2, 1), 24)));
}

#[test]
fn captures_two_separate_groups() {
    init_tracing();
    let board = layout(&["+++++", "+B+B+", "BW+WB", "+BBWB", "+++B+"]);
    let t = apply(&board, b((2, 2)), None, 0, ApplyOptions::default())
        .into_result()
        .unwrap();
    assert_eq!(sorted(t.captured), vec![(1, 2), (3, 2), (3, 3)]);
    assert_eq!(t.board.stone_count(Stone::White), 0);
    assert_eq!(t.board.stone_count(Stone::Black), board.stone_count(Stone::Black) + 1);
    assert_eq!(t.ko, None);
}

#[test]
fn occupied_wins_over_everything() {
    init_tracing();
    let opts = ApplyOptions::default();
    let board = layout(&["+W+", "WBW", "+W+"]);

    // Off the board.
    let empty = Board::new(5).unwrap();
    assert_eq!(apply(&empty, b((5, 0)), None, 0, opts), Outcome::Rejected(Rejection::Occupied));
    assert_eq!(apply(&empty, w((0, 5)), None, 0, opts), Outcome::Rejected(Rejection::Occupied));

    // On a stone that is also the live ko point.
    let ko = KoState::new((1, 1), 3);
    assert_eq!(apply(&board, w((1, 1)), Some(&ko), 3, opts), Outcome::Rejected(Rejection::Occupied));

    // Onto a stone, even with suicide ignored.
    let lenient = ApplyOptions {
        ignore_suicide: true,
    };
    assert_eq!(apply(&board, b((1, 0)), None, 0, lenient), Outcome::Rejected(Rejection::Occupied));
}

#[test]
fn single_point_board() {
    let board = Board::new(1).unwrap();
    let opts = ApplyOptions::default();
    assert_eq!(apply(&board, b((0, 0)), None, 0, opts), Outcome::Rejected(Rejection::Suicide));

    let lenient = ApplyOptions {
        ignore_suicide: true,
    };
    let t = apply(&board, b((0, 0)), None, 0, lenient).into_result().unwrap();
    assert_eq!(t.board.stone_at((0, 0)), Some(Stone::Black));
}

#[test]
fn outcome_json_round_trip() {
    let board = layout(&["+B", "B+"]);
    let outcome = apply(&board, w((1, 1)), None, 0, ApplyOptions::default());
    let json = serde_json::to_string(&outcome).unwrap();
    assert_eq!(json, r#"{"status":"rejected","detail":"suicide"}"#);

    let outcome = apply(&board, b((1, 1)), None, 0, ApplyOptions::default());
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["status"], "accepted");
    assert_eq!(json["detail"]["board"]["cells"], serde_json::json!([0, 1, 1, 1]));
    assert_eq!(json["detail"]["ko"], serde_json::Value::Null);
}
