// src/square.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A board square as a linear index 0–63.
///
/// The index decomposes as `file = index % 8`, `rank = index / 8`, with rank 0
/// being the first rank written in a FEN placement field (Black's back rank in
/// the starting position). This is the same order a renderer walks the screen:
/// left to right, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    pub const COUNT: usize = 64;

    /// Build from an index already known to be in range.
    #[inline(always)]
    pub const fn from_index(index: u8) -> Self {
        debug_assert!(index < 64);
        Square(index & 63)
    }

    #[inline(always)]
    pub const fn from_coords(file: u8, rank: u8) -> Self {
        Square::from_index(rank * 8 + file)
    }

    #[inline(always)]
    pub const fn index(self) -> u8 {
        self.0
    }

    #[inline(always)]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline(always)]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Checkerboard shade: light when file and rank share parity.
    #[inline]
    pub const fn is_light(self) -> bool {
        self.file() % 2 == self.rank() % 2
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = String;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        if index < 64 {
            Ok(Square(index))
        } else {
            Err(format!("square index {} out of range 0-63", index))
        }
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl TryFrom<usize> for Square {
    type Error = String;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        u8::try_from(index)
            .map_err(|_| format!("square index {} out of range 0-63", index))
            .and_then(Square::try_from)
    }
}

/// Accepts either a linear index (`"52"`) or a coordinate name (`"e2"`).
///
/// Coordinate names follow the board's display orientation: rank 0 of the
/// grid is printed as `8`, rank 7 as `1`.
impl FromStr for Square {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(index) = s.parse::<u8>() {
            return Square::try_from(index);
        }

        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(format!("invalid square '{}'", s));
        }
        let file = bytes[0].to_ascii_lowercase().wrapping_sub(b'a');
        let rank_digit = bytes[1].wrapping_sub(b'1');
        if file > 7 || rank_digit > 7 {
            return Err(format!("invalid square '{}'", s));
        }
        Ok(Square::from_coords(file, 7 - rank_digit))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file()) as char;
        let rank = (b'8' - self.rank()) as char;
        write!(f, "{}{}", file, rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_decomposes_into_file_and_rank() {
        let sq = Square::from_index(52);
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.rank(), 6);
        assert_eq!(Square::from_coords(4, 6), sq);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        assert!(Square::try_from(64u8).is_err());
        assert!(Square::try_from(300usize).is_err());
        assert_eq!(Square::try_from(63u8), Ok(Square::from_index(63)));
    }

    #[test]
    fn parses_index_and_coordinate_forms() {
        assert_eq!("52".parse::<Square>(), Ok(Square::from_index(52)));
        // e2 sits on the seventh grid rank in display orientation.
        assert_eq!("e2".parse::<Square>(), Ok(Square::from_index(52)));
        assert_eq!("a8".parse::<Square>(), Ok(Square::from_index(0)));
        assert!("i9".parse::<Square>().is_err());
        assert!("e".parse::<Square>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for sq in Square::all() {
            assert_eq!(sq.to_string().parse::<Square>(), Ok(sq));
        }
    }

    #[test]
    fn deserialize_rejects_out_of_range_index() {
        assert_eq!(bincode::deserialize::<Square>(&[52]).ok(), Some(Square::from_index(52)));
        assert!(bincode::deserialize::<Square>(&[64]).is_err());
        assert!(bincode::deserialize::<Square>(&[200]).is_err());
        let bytes = bincode::serialize(&Square::from_index(63)).unwrap();
        assert_eq!(bytes, vec![63]);
    }

    #[test]
    fn corner_shades() {
        assert!(Square::from_index(0).is_light());
        assert!(!Square::from_index(1).is_light());
        assert!(!Square::from_index(8).is_light());
        assert!(Square::from_index(63).is_light());
    }
}
