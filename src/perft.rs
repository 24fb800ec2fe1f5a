use crate::board::{Board, Side};
use crate::rules::{legal_moves, Move};
use log::trace;

// Copy-per-child perft; the engine has no unmake.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    let moves = legal_moves(board, side);
    if depth == 1 { return moves.len() as u64; }
    let mut nodes = 0u64;
    for m in moves {
        let mut child = board.clone();
        child.apply(m.from, m.to);
        nodes += perft(&child, side.other(), depth - 1);
    }
    nodes
}

/// Per-root-move node counts, in move generation order.
pub fn divide(board: &Board, side: Side, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 { return Vec::new(); }
    legal_moves(board, side)
        .into_iter()
        .map(|m| {
            let mut child = board.clone();
            child.apply(m.from, m.to);
            let n = perft(&child, side.other(), depth - 1);
            trace!("divide {m}: {n}");
            (m, n)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divide_sums_to_perft() {
        let b = Board::initial();
        let parts = divide(&b, Side::White, 2);
        assert_eq!(parts.len(), 20);
        assert!(parts.iter().all(|&(_, n)| n == 20));
        assert_eq!(parts.iter().map(|&(_, n)| n).sum::<u64>(), perft(&b, Side::White, 2));
    }
}
