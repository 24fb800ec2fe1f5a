pub mod piece;
pub mod square;

pub use piece::{Kind, Piece, Side};
pub use square::Square;

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;

const BACK_RANK: [Kind; 8] = [
    Kind::Rook, Kind::Knight, Kind::Bishop, Kind::Queen,
    Kind::King, Kind::Bishop, Kind::Knight, Kind::Rook,
];

/// 8x8 grid of occupants, indexed `[row][col]`. `None` is an empty square.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self { Self::initial() }
}

impl Board {
    pub fn empty() -> Self { Self { cells: [[None; 8]; 8] } }

    /// Standard starting arrangement, black on rows 0-1 and white on rows 6-7.
    pub fn initial() -> Self {
        let mut b = Self::empty();
        for col in 0..8 {
            b.cells[Side::Black.back_row() as usize][col] = Some(Piece::new(Side::Black, BACK_RANK[col]));
            b.cells[Side::Black.pawn_row() as usize][col] = Some(Piece::new(Side::Black, Kind::Pawn));
            b.cells[Side::White.pawn_row() as usize][col] = Some(Piece::new(Side::White, Kind::Pawn));
            b.cells[Side::White.back_row() as usize][col] = Some(Piece::new(Side::White, BACK_RANK[col]));
        }
        b
    }

    #[inline]
    pub fn get(&self, sq: Square) -> Option<Piece> { self.cells[sq.row as usize][sq.col as usize] }

    #[inline]
    pub fn set(&mut self, sq: Square, occupant: Option<Piece>) {
        self.cells[sq.row as usize][sq.col as usize] = occupant;
    }

    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool { self.get(sq).is_none() }

    /// Moves whatever is on `from` onto `to` without any rule checks and
    /// returns the previous occupant of `to`.
    pub fn apply(&mut self, from: Square, to: Square) -> Option<Piece> {
        let moving = self.get(from);
        let captured = self.get(to);
        self.set(to, moving);
        self.set(from, None);
        captured
    }

    /// Occupied squares in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn pieces(&self, side: Side) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.occupied().filter(move |(_, p)| p.side == side)
    }

    pub fn king_square(&self, side: Side) -> Option<Square> {
        self.pieces(side).find(|(_, p)| p.kind == Kind::King).map(|(sq, _)| sq)
    }

    /// Parses eight lines of eight cells: `.` for empty, upper case white,
    /// lower case black. Blank lines and surrounding whitespace are ignored.
    pub fn from_diagram(text: &str) -> Result<Self, ParseError> {
        let mut b = Self::empty();
        let rows: Vec<&str> = text.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.len() != 8 {
            return Err(ParseError::Diagram { row: rows.len(), reason: format!("expected 8 rows, got {}", rows.len()) });
        }
        for (r, line) in rows.iter().enumerate() {
            let cells: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if cells.len() != 8 {
                return Err(ParseError::Diagram { row: r, reason: format!("expected 8 cells, got {}", cells.len()) });
            }
            for (c, ch) in cells.into_iter().enumerate() {
                if ch == '.' { continue; }
                let piece = Piece::from_letter(ch)
                    .ok_or_else(|| ParseError::Diagram { row: r, reason: format!("unknown piece `{ch}`") })?;
                b.cells[r][c] = Some(piece);
            }
        }
        Ok(b)
    }

    /// Piece-placement field of a FEN string (rank 8 first).
    pub fn to_fen_placement(&self) -> String {
        let mut out = String::with_capacity(72);
        for (r, row) in self.cells.iter().enumerate() {
            let mut gap = 0;
            for cell in row {
                match cell {
                    None => gap += 1,
                    Some(p) => {
                        if gap > 0 { out.push_str(&gap.to_string()); gap = 0; }
                        out.push(p.letter());
                    }
                }
            }
            if gap > 0 { out.push_str(&gap.to_string()); }
            if r < 7 { out.push('/'); }
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|c| c.map_or('.', Piece::letter)).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
