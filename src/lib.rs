pub mod core;
pub mod utils;

// module re-exports
pub use crate::core::board::Board;
pub use crate::core::definitions::{Cell, Color, MatchInterface, ParseError, Piece, PieceType};
pub use crate::core::game::GameState;
pub use crate::core::moves::Move;
pub use crate::core::utils::Square;
