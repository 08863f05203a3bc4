use std::{fmt::Display, ops::AddAssign};

use crate::core::game::GameState;
use crate::core::moves::Move;

/** Leaf statistics of a pseudo-legal move tree. */
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PerftResult {
    pub nodes: usize,
    pub captures: usize,
}

impl AddAssign for PerftResult {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
    }
}

impl Display for PerftResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - cp: {:<4}", self.nodes, self.captures)
    }
}

fn count_perft_result(moves: &[Move]) -> PerftResult {
    PerftResult {
        nodes: moves.len(),
        captures: moves.iter().filter(|_move| _move.is_capture()).count(),
    }
}

/// Walks the tree with make/undo, so `game` is left as it was given.
pub fn perft(game: &mut GameState, depth: usize) -> PerftResult {
    if depth == 0 {
        return PerftResult {
            nodes: 1,
            ..Default::default()
        };
    }
    let possible_moves = game.get_valid_moves();
    if depth == 1 {
        return count_perft_result(&possible_moves);
    }
    let mut result = PerftResult::default();
    for _move in possible_moves {
        game.make_move(_move);
        result += perft(game, depth - 1);
        game.undo_move();
    }
    result
}

/** Per-root-move breakdown of `perft`. Depth 0 has no root moves to
 * split by, so it yields an empty list. */
pub fn perft_divide(game: &mut GameState, depth: usize) -> Vec<(Move, PerftResult)> {
    if depth == 0 {
        return Vec::new();
    }
    game.get_valid_moves()
        .into_iter()
        .map(|_move| {
            game.make_move(_move);
            let result = perft(game, depth - 1);
            game.undo_move();
            (_move, result)
        })
        .collect()
}
