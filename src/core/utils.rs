use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::definitions::ParseError;

/** Square packed in 0x88 form: high nibble is the row, low nibble the column.
 * Row 0 is rank 8 (black back rank), column 0 is the a-file. */
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        assert!(row < 8 && col < 8, "Square ({row}, {col}) is off the board!");
        Square(compact_pos(row, col))
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.0 >> 4
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.0 & 0x0f
    }

    /** Step by a 0x88 offset, `None` when the step leaves the board. */
    #[inline]
    pub fn offset(self, step: u8) -> Option<Square> {
        let pos = self.0.wrapping_add(step);
        if is_valid_coord(pos) {
            Some(Square(pos))
        } else {
            None
        }
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|idx| Square(compact_pos(idx / 8, idx % 8)))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col()) as char,
            (b'8' - self.row()) as char
        )
    }
}

impl TryFrom<u8> for Square {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if is_valid_coord(value) {
            Ok(Square(value))
        } else {
            Err(ParseError::InvalidSquare(format!("0x{value:02x}")))
        }
    }
}

impl From<Square> for u8 {
    fn from(value: Square) -> Self {
        value.0
    }
}

impl std::str::FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        square_from_str(s)
    }
}

pub struct DirectionIterator {
    position: Square,
    direction: u8,
}

impl Iterator for DirectionIterator {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next = self.position.offset(self.direction)?;
        self.position = next;
        Some(next)
    }
}

/// Walks from `position` (exclusive) towards the board edge.
pub fn in_direction(position: Square, direction: u8) -> DirectionIterator {
    DirectionIterator {
        position,
        direction,
    }
}

#[inline]
pub fn is_valid_coord(coord: u8) -> bool {
    coord & 0x88 == 0x00
}

#[inline]
pub fn compact_pos(row: u8, col: u8) -> u8 {
    row << 4 | col
}

/// Parses a square name such as `e2`.
pub fn square_from_str(name: &str) -> Result<Square, ParseError> {
    match name.as_bytes() {
        [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => Ok(Square::new(b'8' - rank, file - b'a')),
        _ => Err(ParseError::InvalidSquare(name.to_string())),
    }
}
