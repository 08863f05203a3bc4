use std::fmt::Display;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::definitions::{ParseError, Piece};
use crate::core::utils::{square_from_str, Square};

/** Frozen record of one ply. `piece_moved` and `piece_captured` are read
 * from the board when the move is built and never change afterwards.
 * Equality only looks at the start and end squares. */
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Move {
    start: Square,
    end: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
}

impl Move {
    pub fn new(start: Square, end: Square, board: &Board) -> Move {
        let Some(piece_moved) = board.get(start) else {
            panic!("That's a bug! No piece to move on {start}!");
        };
        Move {
            start,
            end,
            piece_moved,
            piece_captured: board.get(end),
        }
    }

    pub fn start(&self) -> Square {
        self.start
    }

    pub fn end(&self) -> Square {
        self.end
    }

    pub fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    pub fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /** Decimal packing of start row, start col, end row, end col. */
    pub fn move_id(&self) -> u16 {
        self.start.row() as u16 * 1000
            + self.start.col() as u16 * 100
            + self.end.row() as u16 * 10
            + self.end.col() as u16
    }

    pub fn to_algebraic(&self) -> String {
        format!("{}{}", self.start, self.end)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.start, self.end)
    }
}

/// Splits `e2e4`-style notation into its start and end squares.
pub fn parse_squares(notation: &str) -> Result<(Square, Square), ParseError> {
    if notation.len() != 4 || !notation.is_ascii() {
        return Err(ParseError::InvalidNotation(notation.to_string()));
    }
    let invalid = |_| ParseError::InvalidNotation(notation.to_string());
    let start = square_from_str(&notation[0..2]).map_err(invalid)?;
    let end = square_from_str(&notation[2..4]).map_err(invalid)?;
    Ok((start, end))
}
