//! Algebraic move notation
//!
//! Squares are written as a file letter `a`..`h` followed by a rank digit
//! `1`..`8`. Internally everything is 0-indexed, so `a1` is `(0, 0)` and
//! `h8` is `(7, 7)`.
//!
//! ```
//! use anti_othello::board::Pos;
//! use anti_othello::notation::{parse_square, to_algebraic};
//!
//! let pos = parse_square("d3").unwrap();
//! assert_eq!(pos, Pos::new(3, 2));
//! assert_eq!(to_algebraic(pos), "d3");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::board::Pos;
use crate::error::{GameError, GameResult};

/// Render a 0-indexed position as e.g. `d3`.
pub fn to_algebraic(pos: Pos) -> String {
    format!("{}{}", (b'a' + pos.x) as char, pos.y + 1)
}

/// Convert a file letter and rank digit to a 0-indexed position.
pub fn from_algebraic(letter: char, digit: char) -> GameResult<Pos> {
    match (letter, digit) {
        ('a'..='h', '1'..='8') => Ok(Pos::new(letter as u8 - b'a', digit as u8 - b'1')),
        _ => Err(GameError::InvalidCoordinate {
            input: format!("{letter}{digit}"),
        }),
    }
}

/// Parse a two-character square. Surrounding whitespace is ignored,
/// anything else (upper case, extra characters) is rejected.
pub fn parse_square(s: &str) -> GameResult<Pos> {
    let trimmed = s.trim();
    let mut chars = trimmed.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(letter), Some(digit), None) => {
            from_algebraic(letter, digit).map_err(|_| GameError::InvalidCoordinate {
                input: trimmed.to_string(),
            })
        }
        _ => Err(GameError::InvalidCoordinate {
            input: trimmed.to_string(),
        }),
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_algebraic(*self))
    }
}

impl FromStr for Pos {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_square(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners() {
        assert_eq!(to_algebraic(Pos::new(0, 0)), "a1");
        assert_eq!(to_algebraic(Pos::new(7, 0)), "h1");
        assert_eq!(to_algebraic(Pos::new(0, 7)), "a8");
        assert_eq!(to_algebraic(Pos::new(7, 7)), "h8");
    }

    #[test]
    fn test_round_trip_all_squares() {
        for pos in Pos::all() {
            let text = to_algebraic(pos);
            let mut chars = text.chars();
            let letter = chars.next().unwrap();
            let digit = chars.next().unwrap();
            assert_eq!(from_algebraic(letter, digit).unwrap(), pos);
            assert_eq!(text.parse::<Pos>().unwrap(), pos);
        }
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(from_algebraic('i', '1').is_err());
        assert!(from_algebraic('a', '0').is_err());
        assert!(from_algebraic('a', '9').is_err());
        assert!(from_algebraic('A', '1').is_err());
    }

    #[test]
    fn test_parse_square_shapes() {
        assert_eq!(parse_square(" e6 \n").unwrap(), Pos::new(4, 5));
        assert!(parse_square("").is_err());
        assert!(parse_square("e").is_err());
        assert!(parse_square("e66").is_err());

        match parse_square("z9") {
            Err(GameError::InvalidCoordinate { input }) => assert_eq!(input, "z9"),
            other => panic!("expected InvalidCoordinate, got {other:?}"),
        }
    }

    #[test]
    fn test_display_matches_algebraic() {
        assert_eq!(Pos::new(2, 3).to_string(), "c4");
    }
}
