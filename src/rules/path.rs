use crate::board::{Board, Square};

/// True when every square strictly between `from` and `to` is empty.
///
/// The squares must share a row, column or diagonal; anything else is a
/// caller bug. Adjacent squares have nothing in between and always pass.
pub fn clear_path(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row as i8 - from.row as i8).signum();
    let dc = (to.col as i8 - from.col as i8).signum();
    debug_assert!(
        from.row == to.row || from.col == to.col
            || (to.row as i8 - from.row as i8).abs() == (to.col as i8 - from.col as i8).abs(),
        "clear_path called off-line: {from} -> {to}"
    );
    let mut cur = from;
    loop {
        cur = match cur.offset(dr, dc) {
            Some(next) => next,
            None => return true,
        };
        if cur == to { return true; }
        if !board.is_empty(cur) { return false; }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square { s.parse().unwrap() }

    #[test]
    fn start_position_blocks_back_rank_pieces() {
        let b = Board::initial();
        assert!(!clear_path(&b, sq("a1"), sq("a3")));
        assert!(!clear_path(&b, sq("c1"), sq("e3")));
        assert!(clear_path(&b, sq("a2"), sq("a6")));
    }

    #[test]
    fn adjacent_squares_always_clear() {
        let b = Board::initial();
        assert!(clear_path(&b, sq("e1"), sq("e2")));
        assert!(clear_path(&b, sq("e1"), sq("f2")));
        assert!(clear_path(&b, sq("d1"), sq("d1")));
    }

    #[test]
    fn destination_occupant_does_not_block() {
        let b = Board::from_diagram(
            "........
             ........
             ........
             ...p....
             ........
             ........
             ........
             ...R....",
        ).unwrap();
        assert!(clear_path(&b, sq("d1"), sq("d5")));
        assert!(!clear_path(&b, sq("d1"), sq("d8")));
    }

    #[test]
    fn diagonal_walk_in_every_direction() {
        let b = Board::from_diagram(
            "........
             ........
             ........
             ...B....
             ........
             ........
             ........
             ........",
        ).unwrap();
        assert!(clear_path(&b, sq("a8"), sq("c6")));
        assert!(!clear_path(&b, sq("a8"), sq("g2")));
        assert!(!clear_path(&b, sq("h1"), sq("a8")));
        assert!(clear_path(&b, sq("h8"), sq("a1")));
    }
}
