use crate::color::Color;
use crate::movegen::{bishop_moves, king_moves, knight_moves, queen_moves, rook_moves, SquareList};
use crate::piece::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// A generator that only needs to know the color of the piece it is moving.
type Geometry<P> = fn(&P, Color, Square, &mut SquareList);

/// Could any piece of the side opposing `defender` capture on `square` with its next move?
///
/// This works backwards from the square.  Pawns are checked directly: an enemy pawn attacks
/// `square` from one of the two diagonals *ahead* of it, as seen by the defender.  For every
/// other kind, pretend a defender's piece of that kind stands on `square`, generate its moves,
/// and look for an enemy piece of the same kind among the captures.
///
/// Whose turn it is does not matter, and `square` itself may be empty or occupied.
///
/// ```
/// use chess_rules::{is_attacked, Board, Color, Square};
///
/// let board = Board::default();
/// // e3 is covered by white's d2 and f2 pawns
/// assert!(is_attacked(&board, Color::Black, Square::new(5, 4).unwrap()));
/// // but nothing black reaches it yet
/// assert!(!is_attacked(&board, Color::White, Square::new(5, 4).unwrap()));
/// ```
pub fn is_attacked<P: Position>(board: &P, defender: Color, square: Square) -> bool {
    let attacker = !defender;

    for &cols in [-1, 1].iter() {
        if let Some(from) = square.offset(defender.forward(), cols) {
            if board
                .piece_on(from)
                .map_or(false, |p| p.is(PieceKind::Pawn, attacker))
            {
                return true;
            }
        }
    }

    let geometries: [(PieceKind, Geometry<P>); 5] = [
        (PieceKind::Knight, knight_moves::<P>),
        (PieceKind::Bishop, bishop_moves::<P>),
        (PieceKind::Rook, rook_moves::<P>),
        (PieceKind::Queen, queen_moves::<P>),
        (PieceKind::King, king_moves::<P>),
    ];

    for (kind, geometry) in geometries.iter() {
        let mut reach = SquareList::new();
        geometry(board, defender, square, &mut reach);
        let found = reach.iter().any(|&sq| {
            board
                .piece_on(sq)
                .map_or(false, |p| p.is(*kind, attacker))
        });
        if found {
            return true;
        }
    }

    false
}
