use arrayvec::ArrayVec;
use log::{debug, trace};

use crate::attacks;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::pseudo_legal_moves;
use crate::piece::PieceKind;
use crate::position::Position;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

/// Every move available to one piece.  Sized for permissive mode, which offers all 64 squares.
pub type MoveList = ArrayVec<Move, NUM_SQUARES>;

/// How strictly does `Rules` judge moves?
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Validation {
    /// Full chess rules.
    Strict,
    /// Any piece may go to any square, its own included.  Useful for setting up positions by hand.
    Permissive,
}

impl Default for Validation {
    fn default() -> Validation {
        Validation::Strict
    }
}

/// The legal move engine.
///
/// `Rules` holds nothing but its `Validation` mode, so engines with different modes can be used
/// side by side.  It never modifies the board it is given.
///
/// ```
/// use chess_rules::{Board, Rules, Square, Validation};
///
/// let board = Board::default();
/// let e2 = Square::new(6, 4).unwrap();
///
/// assert_eq!(Rules::new(Validation::Strict).legal_moves(&board, e2).len(), 2);
/// assert_eq!(Rules::new(Validation::Permissive).legal_moves(&board, e2).len(), 64);
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Rules {
    validation: Validation,
}

impl Rules {
    /// Create an engine using `validation`.
    pub fn new(validation: Validation) -> Rules {
        Rules { validation }
    }

    /// Which mode is this engine in?
    #[inline]
    pub fn validation(&self) -> Validation {
        self.validation
    }

    /// Switch modes.
    pub fn set_validation(&mut self, validation: Validation) {
        self.validation = validation;
    }

    /// Every move the piece on `source` may make.  Empty if there is no piece there.
    pub fn legal_moves<P: Position>(&self, board: &P, source: Square) -> MoveList {
        let mut result = MoveList::new();
        let piece = match board.piece_on(source) {
            Some(piece) => piece,
            None => {
                debug!("no piece on {}", source);
                return result;
            }
        };

        match self.validation {
            Validation::Permissive => {
                for dest in ALL_SQUARES.iter() {
                    result.push(Move::new(source, *dest, piece));
                }
            }
            Validation::Strict => {
                for dest in pseudo_legal_moves(board, piece, source) {
                    let m = Move::new(source, dest, piece);
                    if keeps_king_safe(board, m) {
                        result.push(m);
                    } else {
                        trace!("{} leaves the {:?} king in check", m, piece.color);
                    }
                }
            }
        }

        result
    }

    /// May the piece on `source` move to `dest`?
    pub fn is_legal_move<P: Position>(&self, board: &P, source: Square, dest: Square) -> bool {
        self.legal_moves(board, source)
            .iter()
            .any(|m| m.get_dest() == dest)
    }

    /// Could the side opposing `color` capture on `square` next move?  See `is_attacked`.
    #[inline]
    pub fn is_attacked<P: Position>(&self, board: &P, color: Color, square: Square) -> bool {
        attacks::is_attacked(board, color, square)
    }

    /// Is the king of `color` attacked right now?  `false` if there is no such king.
    pub fn in_check<P: Position>(&self, board: &P, color: Color) -> bool {
        board
            .king_square(color)
            .map_or(false, |ksq| attacks::is_attacked(board, color, ksq))
    }
}

/// Play `m` on a scratch copy of `board` and see whether the mover's king survives.
///
/// The copy lives only for this call.  It is played with `apply_move_unchecked`, which never
/// comes back here.  If the king itself moved, look at its destination; otherwise it is still
/// where it was before the move.
fn keeps_king_safe<P: Position>(board: &P, m: Move) -> bool {
    let piece = m.get_piece();
    let king = if piece.kind == PieceKind::King {
        Some(m.get_dest())
    } else {
        board.king_square(piece.color)
    };

    let king = match king {
        Some(king) => king,
        None => return true,
    };

    let mut scratch = board.clone();
    scratch.apply_move_unchecked(m);
    !attacks::is_attacked(&scratch, piece.color, king)
}
