//! Pseudo-legal move generation, one piece at a time.
//!
//! A pseudo-legal move obeys the piece's geometry and never lands on a piece of its own color,
//! but may still leave its own king in check.  `Rules` filters those out afterwards.
//!
//! Apart from the pawn and castling generators, every generator takes only a `Color` rather than
//! a whole `Piece`.  The attack detector relies on that: it stands an imaginary piece of the
//! defending color on the queried square and walks the same geometry back toward the attackers.

use arrayvec::ArrayVec;
use log::trace;

use crate::attacks::is_attacked;
use crate::castle_side::ALL_CASTLE_SIDES;
use crate::chess_move::Move;
use crate::color::Color;
use crate::piece::{Piece, PieceKind};
use crate::position::Position;
use crate::square::Square;

/// Destinations for a single piece.  A queen in the middle of an empty board reaches 27 squares,
/// a king 8 plus two castles.
pub type SquareList = ArrayVec<Square, 32>;

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

const ROOK_DIRECTIONS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

/// May a piece of `color` finish its move on `square`?  Yes if it is empty or holds an enemy.
#[inline]
fn can_land<P: Position>(board: &P, color: Color, square: Square) -> bool {
    board.piece_on(square).map_or(true, |p| p.color != color)
}

#[inline]
fn leap<P: Position>(
    board: &P,
    color: Color,
    from: Square,
    offsets: &[(i8, i8)],
    out: &mut SquareList,
) {
    for &(rows, cols) in offsets {
        if let Some(dest) = from.offset(rows, cols) {
            if can_land(board, color, dest) {
                out.push(dest);
            }
        }
    }
}

/// Walk each direction until the edge of the board, a friendly piece (excluded) or an enemy
/// piece (included, then stop).
#[inline]
fn slide<P: Position>(
    board: &P,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    out: &mut SquareList,
) {
    for &(rows, cols) in directions {
        let mut cur = from;
        while let Some(dest) = cur.offset(rows, cols) {
            match board.piece_on(dest) {
                None => out.push(dest),
                Some(p) if p.color == color => break,
                Some(_) => {
                    out.push(dest);
                    break;
                }
            }
            cur = dest;
        }
    }
}

/// Knight destinations from `from` for a knight of `color`.
pub fn knight_moves<P: Position>(board: &P, color: Color, from: Square, out: &mut SquareList) {
    leap(board, color, from, &KNIGHT_OFFSETS, out);
}

/// Bishop destinations along the four diagonals.
pub fn bishop_moves<P: Position>(board: &P, color: Color, from: Square, out: &mut SquareList) {
    slide(board, color, from, &BISHOP_DIRECTIONS, out);
}

/// Rook destinations along the rank and file.
pub fn rook_moves<P: Position>(board: &P, color: Color, from: Square, out: &mut SquareList) {
    slide(board, color, from, &ROOK_DIRECTIONS, out);
}

/// Queen destinations: the rook's plus the bishop's.
pub fn queen_moves<P: Position>(board: &P, color: Color, from: Square, out: &mut SquareList) {
    rook_moves(board, color, from, out);
    bishop_moves(board, color, from, out);
}

/// The eight squares around the king.  Castling is generated by `castle_moves`.
pub fn king_moves<P: Position>(board: &P, color: Color, from: Square, out: &mut SquareList) {
    leap(board, color, from, &KING_OFFSETS, out);
}

/// Pawn destinations: single and double pushes, diagonal captures, and en passant against
/// `last_move`.
pub fn pawn_moves<P: Position>(
    board: &P,
    color: Color,
    from: Square,
    last_move: Option<Move>,
    out: &mut SquareList,
) {
    let forward = color.forward();

    if let Some(one) = from.offset(forward, 0) {
        if board.piece_on(one).is_none() {
            out.push(one);
            if from.row() == color.to_second_rank() {
                if let Some(two) = from.offset(2 * forward, 0) {
                    if board.piece_on(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for &cols in [-1, 1].iter() {
        if let Some(dest) = from.offset(forward, cols) {
            if board.piece_on(dest).map_or(false, |p| p.color != color) {
                out.push(dest);
            }
        }
    }

    if let Some(dest) = en_passant_dest(board, color, from, last_move) {
        out.push(dest);
    }
}

/// Where a pawn of `color` on `from` lands capturing en passant, if it can.
fn en_passant_dest<P: Position>(
    board: &P,
    color: Color,
    from: Square,
    last_move: Option<Move>,
) -> Option<Square> {
    let last = last_move?;
    let victim = last.get_dest();
    if !last.is_double_pawn_push() || last.get_piece().color == color {
        return None;
    }
    let cols = victim.col() as i8 - from.col() as i8;
    if victim.row() != from.row() || cols.abs() != 1 {
        return None;
    }
    if !board
        .piece_on(victim)
        .map_or(false, |p| p.is(PieceKind::Pawn, !color))
    {
        return None;
    }
    let dest = from.offset(color.forward(), cols)?;
    if board.piece_on(dest).is_some() {
        return None;
    }
    Some(dest)
}

/// Castling destinations for an unmoved `king` standing on `from`.
///
/// For each side: the rook on that side's corner of the king's row must be an unmoved rook of
/// the king's color, the king's destination two columns over must lie strictly between king and
/// rook, every square between them must be empty, and neither the king's square nor the two it
/// walks over may be attacked.  The rook's own destination is not checked for attacks.
pub fn castle_moves<P: Position>(board: &P, king: Piece, from: Square, out: &mut SquareList) {
    if king.kind != PieceKind::King || king.has_moved {
        return;
    }

    for side in ALL_CASTLE_SIDES.iter() {
        let rook_square = match side.rook_square(from.row()) {
            Some(sq) => sq,
            None => continue,
        };
        match board.piece_on(rook_square) {
            Some(rook) if rook.is(PieceKind::Rook, king.color) && !rook.has_moved => {}
            _ => {
                trace!("no unmoved rook on {} to castle with", rook_square);
                continue;
            }
        }

        let dir = side.direction();
        let span = (rook_square.col() as i8 - from.col() as i8) * dir;
        if span <= 2 {
            continue;
        }

        let blocked = (1..span).any(|step| {
            from.offset(0, step * dir)
                .map_or(true, |sq| board.piece_on(sq).is_some())
        });
        if blocked {
            trace!("castling {:?} from {} is blocked", side, from);
            continue;
        }

        let through_check = (0..=2).any(|step| {
            from.offset(0, step * dir)
                .map_or(true, |sq| is_attacked(board, king.color, sq))
        });
        if through_check {
            trace!("castling {:?} from {} crosses an attacked square", side, from);
            continue;
        }

        if let Some(dest) = from.offset(0, 2 * dir) {
            out.push(dest);
        }
    }
}

/// Every pseudo-legal destination for `piece` standing on `from`, castling included.
pub fn pseudo_legal_moves<P: Position>(board: &P, piece: Piece, from: Square) -> SquareList {
    let mut out = SquareList::new();
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, color, from, board.last_move(), &mut out),
        PieceKind::Knight => knight_moves(board, color, from, &mut out),
        PieceKind::Bishop => bishop_moves(board, color, from, &mut out),
        PieceKind::Rook => rook_moves(board, color, from, &mut out),
        PieceKind::Queen => queen_moves(board, color, from, &mut out),
        PieceKind::King => {
            king_moves(board, color, from, &mut out);
            castle_moves(board, piece, from, &mut out);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use std::str::FromStr;

    fn sq(s: &str) -> Square {
        Square::from_str(s).unwrap()
    }

    fn sorted(mut list: SquareList) -> Vec<String> {
        list.sort();
        list.iter().map(|s| s.to_string()).collect()
    }

    fn names(list: &[&str]) -> Vec<String> {
        let mut squares: Vec<Square> = list.iter().map(|s| sq(s)).collect();
        squares.sort();
        squares.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn knight_in_the_corner() {
        let board = Board::from_str("4k3/8/8/8/8/8/2P5/N3K3 w - - 0 1").unwrap();
        let mut out = SquareList::new();
        knight_moves(&board, Color::White, sq("a1"), &mut out);
        assert_eq!(sorted(out), names(&["b3"]));
    }

    #[test]
    fn queen_on_empty_board() {
        let board = Board::from_str("7k/8/8/8/3Q4/8/8/K7 w - - 0 1").unwrap();
        let moves = pseudo_legal_moves(&board, board.piece_on(sq("d4")).unwrap(), sq("d4"));
        // a1 holds the white king, h8 the black king
        assert_eq!(moves.len(), 26);
        assert!(moves.contains(&sq("h8")));
        assert!(!moves.contains(&sq("a1")));
    }

    #[test]
    fn rook_stops_at_blockers() {
        let board = Board::from_str("4k3/8/8/8/1p1R2P1/8/8/4K3 w - - 0 1").unwrap();
        let mut out = SquareList::new();
        rook_moves(&board, Color::White, sq("d4"), &mut out);
        assert_eq!(
            sorted(out),
            names(&["d1", "d2", "d3", "d5", "d6", "d7", "d8", "c4", "b4", "e4", "f4"])
        );
    }

    #[test]
    fn pawn_double_push_needs_both_squares() {
        let board = Board::from_str("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1").unwrap();
        let mut out = SquareList::new();
        pawn_moves(&board, Color::White, sq("e2"), None, &mut out);
        assert!(out.is_empty());

        let board = Board::from_str("4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1").unwrap();
        let mut out = SquareList::new();
        pawn_moves(&board, Color::White, sq("e2"), None, &mut out);
        assert_eq!(sorted(out), names(&["e3"]));
    }

    #[test]
    fn pawn_captures_only_enemies() {
        let board = Board::from_str("4k3/8/8/8/8/3p1N2/4P3/4K3 w - - 0 1").unwrap();
        let mut out = SquareList::new();
        pawn_moves(&board, Color::White, sq("e2"), None, &mut out);
        assert_eq!(sorted(out), names(&["d3", "e3", "e4"]));
    }

    #[test]
    fn black_pawns_walk_down() {
        let board = Board::default();
        let mut out = SquareList::new();
        pawn_moves(&board, Color::Black, sq("d7"), None, &mut out);
        assert_eq!(sorted(out), names(&["d6", "d5"]));
    }

    #[test]
    fn en_passant_from_either_side() {
        for fen in [
            "4k3/8/8/2PpP3/8/8/8/4K3 w - d6 0 1",
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
            "4k3/8/8/2Pp4/8/8/8/4K3 w - d6 0 1",
        ]
        .iter()
        {
            let board = Board::from_str(fen).unwrap();
            for from in ["c5", "e5"].iter() {
                if board.piece_on(sq(from)).is_none() {
                    continue;
                }
                let mut out = SquareList::new();
                pawn_moves(&board, Color::White, sq(from), board.last_move(), &mut out);
                assert!(out.contains(&sq("d6")), "{} from {}", fen, from);
            }
        }
    }

    #[test]
    fn en_passant_needs_a_fresh_double_push() {
        let board = Board::from_str("4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1").unwrap();
        let mut out = SquareList::new();
        pawn_moves(&board, Color::White, sq("e5"), board.last_move(), &mut out);
        assert_eq!(sorted(out), names(&["e6"]));
    }

    #[test]
    fn castling_both_ways() {
        let board = Board::from_str("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let mut out = SquareList::new();
        castle_moves(&board, board.piece_on(sq("e1")).unwrap(), sq("e1"), &mut out);
        assert_eq!(sorted(out), names(&["c1", "g1"]));
    }

    #[test]
    fn castling_blocked_or_attacked() {
        // knight on b1 blocks the long castle even though the king never crosses b1
        let board = Board::from_str("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1").unwrap();
        let mut out = SquareList::new();
        castle_moves(&board, board.piece_on(sq("e1")).unwrap(), sq("e1"), &mut out);
        assert_eq!(sorted(out), names(&["g1"]));

        // rook on f8 covers f1
        let board = Board::from_str("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let mut out = SquareList::new();
        castle_moves(&board, board.piece_on(sq("e1")).unwrap(), sq("e1"), &mut out);
        assert_eq!(sorted(out), names(&["c1"]));

        // rook on b8 covers b1, which only the rook crosses
        let board = Board::from_str("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let mut out = SquareList::new();
        castle_moves(&board, board.piece_on(sq("e1")).unwrap(), sq("e1"), &mut out);
        assert_eq!(sorted(out), names(&["c1", "g1"]));
    }

    #[test]
    fn no_castling_out_of_check_or_with_moved_pieces() {
        let board = Board::from_str("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
        let mut out = SquareList::new();
        castle_moves(&board, board.piece_on(sq("e1")).unwrap(), sq("e1"), &mut out);
        assert!(out.is_empty());

        let board = Board::from_str("4k3/8/8/8/8/8/8/R3K2R w K - 0 1").unwrap();
        let mut out = SquareList::new();
        castle_moves(&board, board.piece_on(sq("e1")).unwrap(), sq("e1"), &mut out);
        assert_eq!(sorted(out), names(&["g1"]));

        let board = Board::from_str("4k3/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
        let mut out = SquareList::new();
        castle_moves(&board, board.piece_on(sq("e1")).unwrap(), sq("e1"), &mut out);
        assert!(out.is_empty());
    }
}
