use log::{debug, trace};
use rand::seq::IteratorRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::definitions::{Cell, Color, MatchInterface, ParseError};
use crate::core::movegen::{all_possible_moves, piece_moves};
use crate::core::moves::{parse_squares, Move};
use crate::core::utils::Square;

/** One game session: the board, who moves next and the applied moves. */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SavedGame")]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    move_log: Vec<Move>,
}

/** Unchecked wire form of `GameState`. */
#[derive(Deserialize)]
struct SavedGame {
    board: Board,
    side_to_move: Color,
    move_log: Vec<Move>,
}

impl TryFrom<SavedGame> for GameState {
    type Error = ParseError;

    /** Unwinds the log to its starting board, then replays it through the
     * move generator, so every logged move is one the rules produce. */
    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        let inconsistent = |_move: &Move| ParseError::InconsistentHistory(_move.to_string());
        let mut replay = GameState {
            board: saved.board.clone(),
            side_to_move: saved.side_to_move,
            move_log: saved.move_log.clone(),
        };
        for _move in saved.move_log.iter().rev() {
            if replay.board.get(_move.end()) != Some(_move.piece_moved())
                || replay.board.get(_move.start()).is_some()
                || _move.piece_moved().color == replay.side_to_move
            {
                return Err(inconsistent(_move));
            }
            replay.undo_move();
        }
        for _move in saved.move_log.iter() {
            let generated = replay
                .find_move(_move.start(), _move.end())
                .ok_or_else(|| inconsistent(_move))?;
            if generated.piece_captured() != _move.piece_captured() {
                return Err(inconsistent(_move));
            }
            replay.make_move(generated);
        }
        Ok(GameState {
            board: saved.board,
            side_to_move: saved.side_to_move,
            move_log: saved.move_log,
        })
    }
}

impl GameState {
    pub fn new() -> GameState {
        GameState::with_board(Board::default(), Color::White)
    }

    pub fn with_board(board: Board, side_to_move: Color) -> GameState {
        debug!("New game, {side_to_move} to move:\n{board}");
        GameState {
            board,
            side_to_move,
            move_log: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.move_log.last()
    }

    /** Apply a move generated against the *current* board. */
    pub fn make_move(&mut self, _move: Move) {
        assert!(
            self.board.get(_move.start()) == Some(_move.piece_moved()),
            "That's a bug! Move {_move} doesn't match the piece on its start square!"
        );
        assert!(
            self.board.get(_move.end()) == _move.piece_captured(),
            "That's a bug! Move {_move} doesn't match the piece on its end square!"
        );
        trace!("{} plays {_move}", self.side_to_move);
        self.board.set(_move.start(), None);
        self.board.set(_move.end(), Some(_move.piece_moved()));
        self.move_log.push(_move);
        self.side_to_move = self.side_to_move.opposite();
    }

    /** Reverts the latest move. Does nothing on an empty history. */
    pub fn undo_move(&mut self) -> Option<Move> {
        let Some(_move) = self.move_log.pop() else {
            debug!("Nothing to undo");
            return None;
        };
        trace!("Undo {_move}");
        self.board.set(_move.start(), Some(_move.piece_moved()));
        self.board.set(_move.end(), _move.piece_captured());
        self.side_to_move = self.side_to_move.opposite();
        Some(_move)
    }

    /// Pseudo-legal moves for the side to move; king safety isn't checked.
    pub fn get_valid_moves(&self) -> Vec<Move> {
        all_possible_moves(&self.board, self.side_to_move)
    }

    /// Moves of the piece on `square`, empty if it isn't ours to move.
    pub fn possible_moves(&self, square: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        if let Some(piece) = self.board.get(square) {
            if piece.color == self.side_to_move {
                piece_moves(&self.board, square, piece, &mut moves);
            }
        }
        moves
    }

    /// Matches a pair of selected squares against the valid moves.
    pub fn find_move(&self, start: Square, end: Square) -> Option<Move> {
        self.possible_moves(start)
            .into_iter()
            .find(|_move| _move.end() == end)
    }

    /// Resolves `e2e4`-style notation to one of the valid moves.
    pub fn parse_move(&self, notation: &str) -> Result<Move, ParseError> {
        let (start, end) = parse_squares(notation)?;
        self.find_move(start, end)
            .ok_or_else(|| ParseError::NoSuchMove(notation.to_string()))
    }

    pub fn make_random_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Move> {
        let chosen_move = self.get_valid_moves().into_iter().choose(rng);
        match chosen_move {
            Some(_move) => {
                self.make_move(_move);
                Some(_move)
            }
            None => {
                debug!("{} has no moves left", self.side_to_move);
                None
            }
        }
    }

    pub fn current_board(&self) -> Vec<Vec<Cell>> {
        self.board
            .rows()
            .iter()
            .map(|row| row.iter().map(|&piece| Cell::from(piece)).collect())
            .collect()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        if row < 8 && col < 8 {
            Some(self.board.cell(Square::new(row as u8, col as u8)))
        } else {
            None
        }
    }

    pub fn snapshot(&self) -> Result<Vec<u8>, postcard::Error> {
        postcard::to_allocvec(self)
    }

    /// Fails on corrupt bytes and on a log that doesn't replay to the board.
    pub fn restore(bytes: &[u8]) -> Result<GameState, postcard::Error> {
        postcard::from_bytes(bytes)
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl MatchInterface for GameState {
    fn current_board(&self) -> Vec<Vec<Cell>> {
        GameState::current_board(self)
    }

    fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        GameState::cell(self, row, col)
    }

    fn possible_moves(&self, row: usize, col: usize) -> Option<Vec<Move>> {
        if row >= 8 || col >= 8 {
            return None;
        }
        let moves = GameState::possible_moves(self, Square::new(row as u8, col as u8));
        if moves.is_empty() {
            None
        } else {
            Some(moves)
        }
    }

    fn execute_move(&mut self, _move: Move) {
        self.make_move(_move)
    }

    fn take_back(&mut self) -> Option<Move> {
        self.undo_move()
    }

    fn current_player(&self) -> Color {
        self.side_to_move
    }
}
