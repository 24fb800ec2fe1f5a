use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::White, Side::Black];

    #[inline]
    pub fn other(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    /// Row delta of a single pawn step. White moves up the board (toward row 0).
    #[inline]
    pub fn forward(self) -> i8 {
        match self { Side::White => -1, Side::Black => 1 }
    }

    /// Row the side's pawns start on; the only row a double step is allowed from.
    #[inline]
    pub fn pawn_row(self) -> u8 {
        match self { Side::White => 6, Side::Black => 1 }
    }

    #[inline]
    pub fn back_row(self) -> u8 {
        match self { Side::White => 7, Side::Black => 0 }
    }

    #[inline]
    pub fn index(self) -> usize { self as usize }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::White => write!(f, "white"),
            Side::Black => write!(f, "black"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Kind {
    /// Lower-case letter, as used in diagrams and FEN.
    pub fn letter(self) -> char {
        match self {
            Kind::Pawn => 'p',
            Kind::Rook => 'r',
            Kind::Knight => 'n',
            Kind::Bishop => 'b',
            Kind::Queen => 'q',
            Kind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<Kind> {
        match c.to_ascii_lowercase() {
            'p' => Some(Kind::Pawn),
            'r' => Some(Kind::Rook),
            'n' => Some(Kind::Knight),
            'b' => Some(Kind::Bishop),
            'q' => Some(Kind::Queen),
            'k' => Some(Kind::King),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub side: Side,
    pub kind: Kind,
}

impl Piece {
    pub const fn new(side: Side, kind: Kind) -> Self { Self { side, kind } }

    /// Upper case for white, lower case for black.
    pub fn letter(self) -> char {
        let c = self.kind.letter();
        if self.side == Side::White { c.to_ascii_uppercase() } else { c }
    }

    pub fn from_letter(c: char) -> Option<Piece> {
        let kind = Kind::from_letter(c)?;
        let side = if c.is_ascii_uppercase() { Side::White } else { Side::Black };
        Some(Piece { side, kind })
    }

    pub fn glyph(self) -> char {
        match (self.side, self.kind) {
            (Side::White, Kind::King) => '♔',
            (Side::White, Kind::Queen) => '♕',
            (Side::White, Kind::Rook) => '♖',
            (Side::White, Kind::Bishop) => '♗',
            (Side::White, Kind::Knight) => '♘',
            (Side::White, Kind::Pawn) => '♙',
            (Side::Black, Kind::King) => '♚',
            (Side::Black, Kind::Queen) => '♛',
            (Side::Black, Kind::Rook) => '♜',
            (Side::Black, Kind::Bishop) => '♝',
            (Side::Black, Kind::Knight) => '♞',
            (Side::Black, Kind::Pawn) => '♟',
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_round_trip_with_case_as_side() {
        let p = Piece::from_letter('N').unwrap();
        assert_eq!(p, Piece::new(Side::White, Kind::Knight));
        assert_eq!(Piece::from_letter('q').unwrap().side, Side::Black);
        assert_eq!(Piece::new(Side::Black, Kind::King).letter(), 'k');
        assert!(Piece::from_letter('x').is_none());
    }

    #[test]
    fn pawn_direction_points_at_enemy_back_row() {
        for side in Side::BOTH {
            let target = side.other().back_row() as i8;
            let start = side.pawn_row() as i8;
            assert_eq!((target - start).signum(), side.forward());
        }
    }
}
