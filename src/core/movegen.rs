use crate::core::board::Board;
use crate::core::definitions::{Color, Piece, PieceType};
use crate::core::moves::Move;
use crate::core::utils::{in_direction, Square};

/** Tables directions for pieces, as 0x88 offsets */
const ROOK_DIR: &[u8] = &[0x10, 0xf0, 0x01, 0xff]; // down, up, right, left
const BISHOP_DIR: &[u8] = &[0x11, 0x0f, 0xf1, 0xef];

/** Possible moves for pieces */
const KING_MOVES: &[u8] = &[0x10, 0xf0, 0x01, 0xff, 0x11, 0x0f, 0xf1, 0xef];
const KNIGHT_MOVES: &[u8] = &[0x21, 0x1f, 0xe1, 0xdf, 0x12, 0x0e, 0xf2, 0xee];

/** Pseudo-legal moves of `side`, scanning the board row by row. */
pub fn all_possible_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut possible_moves = Vec::with_capacity(64);
    for (square, piece) in board
        .iter_pieces()
        .filter(|(_, piece)| piece.color == side)
    {
        piece_moves(board, square, piece, &mut possible_moves);
    }
    possible_moves
}

/// Appends the moves of `piece` standing on `square`.
pub fn piece_moves(board: &Board, square: Square, piece: Piece, moves: &mut Vec<Move>) {
    match piece.kind {
        PieceType::Pawn => pawn_moves(board, square, piece.color, moves),
        PieceType::Knight => step_moves(board, square, piece.color, KNIGHT_MOVES, moves),
        PieceType::Bishop => sliding_moves(board, square, piece.color, BISHOP_DIR, moves),
        PieceType::Rook => sliding_moves(board, square, piece.color, ROOK_DIR, moves),
        PieceType::Queen => {
            sliding_moves(board, square, piece.color, ROOK_DIR, moves);
            sliding_moves(board, square, piece.color, BISHOP_DIR, moves);
        }
        PieceType::King => step_moves(board, square, piece.color, KING_MOVES, moves),
    }
}

fn pawn_moves(board: &Board, square: Square, color: Color, moves: &mut Vec<Move>) {
    let (step, start_row): (u8, u8) = match color {
        Color::White => (0xf0, 6),
        Color::Black => (0x10, 1),
    };
    // pawns on the far rank have nowhere to go without promotion
    let Some(front) = square.offset(step) else {
        return;
    };
    // push
    if board.get(front).is_none() {
        moves.push(Move::new(square, front, board));
        // double push
        if square.row() == start_row {
            if let Some(double) = front.offset(step) {
                if board.get(double).is_none() {
                    moves.push(Move::new(square, double, board));
                }
            }
        }
    }
    // capture
    for side in [0xff, 0x01] {
        let Some(target) = front.offset(side) else {
            continue;
        };
        if matches!(board.get(target), Some(piece) if piece.color != color) {
            moves.push(Move::new(square, target, board));
        }
    }
}

fn step_moves(board: &Board, square: Square, color: Color, offsets: &[u8], moves: &mut Vec<Move>) {
    for target in offsets.iter().filter_map(|offset| square.offset(*offset)) {
        match board.get(target) {
            Some(piece) if piece.color == color => (),
            _ => moves.push(Move::new(square, target, board)),
        }
    }
}

fn sliding_moves(
    board: &Board,
    square: Square,
    color: Color,
    directions: &[u8],
    moves: &mut Vec<Move>,
) {
    for dir in directions {
        for target in in_direction(square, *dir) {
            match board.get(target) {
                None => moves.push(Move::new(square, target, board)),
                Some(piece) if piece.color != color => {
                    moves.push(Move::new(square, target, board));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
