use crate::board::Square;
use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    pub const fn new(from: Square, to: Square) -> Self { Self { from, to } }

    /// Absolute (row, col) distance.
    #[inline]
    pub fn deltas(self) -> (u8, u8) {
        (self.from.row.abs_diff(self.to.row), self.from.col.abs_diff(self.to.col))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim();
        let bad = || ParseError::Move(raw.to_string());
        if raw.len() != 4 || !raw.is_ascii() { return Err(bad()); }
        let from: Square = raw[0..2].parse().map_err(|_| bad())?;
        let to: Square = raw[2..4].parse().map_err(|_| bad())?;
        Ok(Move { from, to })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_coordinate_pairs() {
        let m: Move = "e2e4".parse().unwrap();
        assert_eq!(m, Move::new(Square::new(6, 4), Square::new(4, 4)));
        assert_eq!(m.to_string(), "e2e4");
        assert_eq!(m.deltas(), (2, 0));
        assert_eq!("e2e".parse::<Move>(), Err(ParseError::Move("e2e".into())));
        assert!("e2z4".parse::<Move>().is_err());
    }
}
