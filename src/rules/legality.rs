use super::moves::Move;
use super::path::clear_path;
use crate::board::{Board, Kind, Piece, Side};

/// Piece-movement legality for `side` playing `mv`, ignoring whether the
/// mover's own king is left attacked. Pure over its inputs.
pub fn valid_move(board: &Board, mv: Move, side: Side) -> bool {
    let piece = match board.get(mv.from) {
        Some(p) if p.side == side => p,
        _ => return false,
    };
    let target = board.get(mv.to);
    if matches!(target, Some(t) if t.side == side) { return false; }

    let (dr, dc) = mv.deltas();
    match piece.kind {
        Kind::Pawn => pawn_move(board, mv, piece, target),
        Kind::Rook => (dr == 0 || dc == 0) && clear_path(board, mv.from, mv.to),
        Kind::Knight => matches!((dr, dc), (1, 2) | (2, 1)),
        Kind::Bishop => dr == dc && clear_path(board, mv.from, mv.to),
        Kind::Queen => (dr == 0 || dc == 0 || dr == dc) && clear_path(board, mv.from, mv.to),
        Kind::King => dr <= 1 && dc <= 1,
    }
}

fn pawn_move(board: &Board, mv: Move, pawn: Piece, target: Option<Piece>) -> bool {
    let step = mv.to.row as i8 - mv.from.row as i8;
    let fwd = pawn.side.forward();
    let (_, dc) = mv.deltas();
    match (dc, target) {
        // Pushes: never onto an occupied square.
        (0, None) => {
            step == fwd
                || (step == 2 * fwd && mv.from.row == pawn.side.pawn_row() && clear_path(board, mv.from, mv.to))
        }
        // Captures: one step diagonally onto an enemy, no en passant.
        (1, Some(_)) => step == fwd,
        _ => false,
    }
}
