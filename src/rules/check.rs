use super::legality::valid_move;
use super::moves::Move;
use crate::board::{Board, Side, Square};
use serde::{Deserialize, Serialize};

/// Whether `side`'s king is attacked. A board without that king is never in check.
pub fn in_check(board: &Board, side: Side) -> bool {
    let king = match board.king_square(side) {
        Some(sq) => sq,
        None => return false,
    };
    let enemy = side.other();
    board.pieces(enemy).any(|(sq, _)| valid_move(board, Move::new(sq, king), enemy))
}

/// Plays `mv` on a scratch copy and reports whether `side` would be in check.
pub fn leaves_king_in_check(board: &Board, mv: Move, side: Side) -> bool {
    let mut scratch = board.clone();
    scratch.apply(mv.from, mv.to);
    in_check(&scratch, side)
}

fn candidates(board: &Board, side: Side) -> impl Iterator<Item = Move> + '_ {
    board
        .pieces(side)
        .flat_map(|(from, _)| Square::all().map(move |to| Move::new(from, to)))
        .filter(move |&mv| valid_move(board, mv, side))
        .filter(move |&mv| !leaves_king_in_check(board, mv, side))
}

/// True as soon as one move for `side` is found that keeps its king safe.
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    candidates(board, side).next().is_some()
}

/// Every fully legal move for `side`, sources and then destinations in row-major order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    candidates(board, side).collect()
}

pub fn is_checkmate(board: &Board, side: Side) -> bool {
    in_check(board, side) && !has_legal_move(board, side)
}

/// Status of the side to move. There is no stalemate: draws are not detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ongoing,
    Check,
    Checkmate,
}

impl Status {
    pub fn of(board: &Board, side: Side) -> Status {
        if !in_check(board, side) {
            Status::Ongoing
        } else if has_legal_move(board, side) {
            Status::Check
        } else {
            Status::Checkmate
        }
    }
}
