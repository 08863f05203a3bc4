use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::core::definitions::{Cell, Color, ParseError, Piece, PieceType};
use crate::core::utils::Square;

const EMPTY_CODE: &str = "--";

/** 8x8 grid, indexed `[row][col]`. Row 0 is black's back rank. */
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: [[Option<Piece>; 8]; 8],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            grid: [[None; 8]; 8],
        }
    }

    /** Reads eight whitespace separated rows of `wR`/`bp`/`--` codes,
     * row 0 first. This is the same format `Display` prints. */
    pub fn from_layout(layout: &str) -> Result<Board, ParseError> {
        let rows: Vec<_> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != 8 {
            return Err(ParseError::RowCount(rows.len()));
        }
        let mut board = Board::empty();
        for (row, line) in rows.into_iter().enumerate() {
            let codes: Vec<_> = line.split_whitespace().collect();
            if codes.len() != 8 {
                return Err(ParseError::ColumnCount {
                    row,
                    found: codes.len(),
                });
            }
            for (col, code) in codes.into_iter().enumerate() {
                board.grid[row][col] = if code == EMPTY_CODE {
                    None
                } else {
                    Some(Piece::from_code(code)?)
                };
            }
        }
        Ok(board)
    }

    /// Builder for configured positions.
    pub fn place(mut self, square: Square, piece: Piece) -> Board {
        self.set(square, Some(piece));
        self
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.grid[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.grid[square.row() as usize][square.col() as usize] = piece;
    }

    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.grid
    }

    pub fn cell(&self, square: Square) -> Cell {
        self.get(square).into()
    }

    /// Occupied squares in row-major order.
    pub fn iter_pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        use PieceType::*;
        const BACK_RANK: [PieceType; 8] = [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.grid[0][col] = Some(Piece::new(kind, Color::Black));
            board.grid[1][col] = Some(Piece::new(Pawn, Color::Black));
            board.grid[6][col] = Some(Piece::new(Pawn, Color::White));
            board.grid[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.grid.iter() {
            let codes: Vec<_> = row
                .iter()
                .map(|cell| match cell {
                    Some(piece) => piece.to_string(),
                    None => EMPTY_CODE.to_string(),
                })
                .collect();
            writeln!(f, "{}", codes.join(" "))?;
        }
        Ok(())
    }
}
