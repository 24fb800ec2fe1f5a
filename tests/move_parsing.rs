use hotseat::{ClickOutcome, Move, Session, Side};

#[test]
fn apply_startpos_moves_sequence() {
    let mut s = Session::new();
    for m in ["e2e4", "e7e5", "g1f3"] {
        let mv: Move = m.parse().expect("well formed move");
        assert!(matches!(s.try_move(mv), ClickOutcome::Moved(_)), "{m} should be legal");
    }
    assert_eq!(s.to_move(), Side::Black, "expected black to move after 3 plies");
    assert_eq!(s.ply(), 3);
}

#[test]
fn malformed_moves_are_parse_errors() {
    for bad in ["", "e2", "e2e9", "z2e4", "e2-e4"] {
        assert!(bad.parse::<Move>().is_err(), "{bad:?} should not parse");
    }
}
