//! A square-centric chess legal move engine.
//!
//! Ask a `Rules` for the moves of the piece on one square of any board implementing `Position`.
//! The reference `Board` reads and writes FEN and can apply the compound moves (castling, en
//! passant and promotion) the engine classifies.
//!
//! ```
//! use chess_rules::{Board, Rules, Square};
//! use std::str::FromStr;
//!
//! let board = Board::from_str("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("valid fen");
//! let rules = Rules::default();
//! let e1 = Square::from_str("e1").expect("valid square");
//!
//! let castles = rules
//!     .legal_moves(&board, e1)
//!     .iter()
//!     .filter(|m| m.is_castling())
//!     .count();
//! assert_eq!(castles, 2);
//! ```

mod attacks;
pub use crate::attacks::*;

mod board;
pub use crate::board::*;

mod castle_side;
pub use crate::castle_side::*;

mod chess_move;
pub use crate::chess_move::*;

mod color;
pub use crate::color::*;

mod error;
pub use crate::error::*;

pub mod movegen;

mod piece;
pub use crate::piece::*;

mod position;
pub use crate::position::*;

mod rules;
pub use crate::rules::*;

mod square;
pub use crate::square::*;
