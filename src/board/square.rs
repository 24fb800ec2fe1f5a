use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A board coordinate. Row 0 is black's back rank (rank 8), row 7 is white's
/// (rank 1); column 0 is the a-file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < 8 && col < 8);
        Self { row, col }
    }

    pub fn try_new(row: i8, col: i8) -> Option<Self> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self { row: row as u8, col: col as u8 })
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square { row: i / 8, col: i % 8 })
    }

    #[inline]
    pub fn index(self) -> usize { self.row as usize * 8 + self.col as usize }

    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        Square::try_new(self.row as i8 + dr, self.col as i8 + dc)
    }

    pub fn file_char(self) -> char { (b'a' + self.col) as char }

    pub fn rank_char(self) -> char { (b'8' - self.row) as char }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl FromStr for Square {
    type Err = ParseError;

    /// Accepts algebraic (`e2`) or numeric `row,col` (`6,4`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let bad = || ParseError::Square(raw.to_string());
        if let Some((r, c)) = raw.split_once(',') {
            let row: i8 = r.trim().parse().map_err(|_| bad())?;
            let col: i8 = c.trim().parse().map_err(|_| bad())?;
            return Square::try_new(row, col).ok_or_else(bad);
        }
        let b = raw.as_bytes();
        if b.len() != 2 { return Err(bad()); }
        let f = b[0].to_ascii_lowercase();
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) { return Err(bad()); }
        Ok(Square { row: b'8' - r, col: f - b'a' })
    }
}
