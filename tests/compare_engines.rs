//! Cross-checks check and mate detection against cozy-chess on positions
//! reached by random play. The FEN carries no castling rights and no en
//! passant square, which is exactly the rule set this engine implements.

use cozy_chess::Board as CozyBoard;
use hotseat::rules::{has_legal_move, in_check, legal_moves};
use hotseat::{Board, Kind, Side};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn to_cozy(board: &Board, side: Side) -> Option<CozyBoard> {
    let stm = if side == Side::White { "w" } else { "b" };
    let fen = format!("{} {} - - 0 1", board.to_fen_placement(), stm);
    CozyBoard::from_fen(&fen, false).ok()
}

// Promotions collapse onto their from/to pair; the engine never promotes.
fn cozy_moves(board: &CozyBoard) -> Vec<String> {
    let mut out = Vec::new();
    board.generate_moves(|ml| {
        for m in ml { out.push(format!("{}", m)[..4].to_string()); }
        false
    });
    out.sort();
    out.dedup();
    out
}

fn pawn_on_back_rank(board: &Board) -> bool {
    board.occupied().any(|(sq, p)| p.kind == Kind::Pawn && (sq.row == 0 || sq.row == 7))
}

#[test]
fn random_play_agrees_with_cozy() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut compared = 0usize;
    let mut checks = 0usize;
    for _game in 0..20 {
        let mut board = Board::initial();
        let mut side = Side::White;
        for _ply in 0..120 {
            if pawn_on_back_rank(&board) { break; }
            let Some(cozy) = to_cozy(&board, side) else { break };
            let ours = legal_moves(&board, side);
            let mut ours_str: Vec<String> = ours.iter().map(|m| m.to_string()).collect();
            ours_str.sort();
            let fen = board.to_fen_placement();
            assert_eq!(ours_str, cozy_moves(&cozy), "legal moves differ at {fen} ({side})");
            assert_eq!(in_check(&board, side), !cozy.checkers().is_empty(), "check differs at {fen} ({side})");
            assert_eq!(has_legal_move(&board, side), !ours.is_empty());
            compared += 1;
            if in_check(&board, side) { checks += 1; }
            if ours.is_empty() { break; }
            let m = ours[rng.gen_range(0..ours.len())];
            board.apply(m.from, m.to);
            side = side.other();
        }
    }
    assert!(compared > 200, "only {compared} positions compared");
    assert!(checks > 0, "random play never produced a check");
}

#[test]
fn known_mates_agree_with_cozy() {
    let fens = [
        // fool's mate, scholar's mate, back rank
        ("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR", Side::White),
        ("r1bqkb1r/pppp1Qpp/2n2n2/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR", Side::Black),
        ("R5k1/5ppp/8/8/8/8/8/6K1", Side::Black),
    ];
    for (placement, side) in fens {
        let board = board_from_placement(placement);
        let cozy = to_cozy(&board, side).expect("valid position");
        assert!(in_check(&board, side));
        assert!(!has_legal_move(&board, side));
        assert!(!cozy.checkers().is_empty());
        assert!(cozy_moves(&cozy).is_empty(), "{placement}");
    }
}

fn board_from_placement(placement: &str) -> Board {
    let mut rows = Vec::new();
    for rank in placement.split('/') {
        let mut row = String::new();
        for c in rank.chars() {
            match c.to_digit(10) {
                Some(n) => (0..n).for_each(|_| row.push('.')),
                None => row.push(c),
            }
        }
        rows.push(row);
    }
    Board::from_diagram(&rows.join("\n")).expect("valid diagram")
}

#[test]
fn placement_round_trips_through_the_helper() {
    let b = Board::initial();
    assert_eq!(board_from_placement(&b.to_fen_placement()), b);
}
