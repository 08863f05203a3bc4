use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::moves::Move;

#[derive(PartialEq, Eq, Debug, Default, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Color {
    #[default]
    White,
    Black,
}

impl Color {
    pub fn opposite(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    pub fn code(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    fn from_code(code: char) -> Option<Color> {
        match code {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(if self == &Self::White {
            "White"
        } else {
            "Black"
        })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /** Pawns are written lowercase, everything else uppercase. */
    pub fn code(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }

    fn from_code(code: char) -> Option<PieceType> {
        match code.to_ascii_uppercase() {
            'P' => Some(PieceType::Pawn),
            'N' => Some(PieceType::Knight),
            'B' => Some(PieceType::Bishop),
            'R' => Some(PieceType::Rook),
            'Q' => Some(PieceType::Queen),
            'K' => Some(PieceType::King),
            _ => None,
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceType,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceType, color: Color) -> Piece {
        Piece { kind, color }
    }

    /// Parses a two character code like `wR` or `bp`.
    pub fn from_code(code: &str) -> Result<Piece, ParseError> {
        let mut chars = code.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(color), Some(kind), None) => Color::from_code(color)
                .zip(PieceType::from_code(kind))
                .map(|(color, kind)| Piece { kind, color })
                .ok_or_else(|| ParseError::UnknownPiece(code.to_string())),
            _ => Err(ParseError::UnknownPiece(code.to_string())),
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.color.code(), self.kind.code())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Figure(Piece),
}

impl From<Option<Piece>> for Cell {
    fn from(value: Option<Piece>) -> Self {
        value.map_or(Cell::Empty, Cell::Figure)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /** layout doesn't have exactly 8 rows */
    RowCount(usize),
    /** row doesn't have exactly 8 cells */
    ColumnCount { row: usize, found: usize },
    UnknownPiece(String),
    InvalidSquare(String),
    InvalidNotation(String),
    /** notation is well-formed, but nothing can play it */
    NoSuchMove(String),
    /** saved move log doesn't lead to the saved board */
    InconsistentHistory(String),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::RowCount(found) => write!(f, "expected 8 rows, found {found}"),
            ParseError::ColumnCount { row, found } => {
                write!(f, "expected 8 cells in row {row}, found {found}")
            }
            ParseError::UnknownPiece(code) => write!(f, "unknown piece code `{code}`"),
            ParseError::InvalidSquare(name) => write!(f, "invalid square `{name}`"),
            ParseError::InvalidNotation(text) => write!(f, "invalid move notation `{text}`"),
            ParseError::NoSuchMove(text) => write!(f, "no piece can play `{text}`"),
            ParseError::InconsistentHistory(_move) => {
                write!(f, "move `{_move}` in the log doesn't fit the board")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// What a presentation layer needs from a running match.
pub trait MatchInterface {
    fn current_board(&self) -> Vec<Vec<Cell>>;
    fn cell(&self, row: usize, col: usize) -> Option<Cell>;
    fn possible_moves(&self, row: usize, col: usize) -> Option<Vec<Move>>;
    fn execute_move(&mut self, _move: Move);
    fn take_back(&mut self) -> Option<Move>;
    fn current_player(&self) -> Color;
}
