use crate::castle_side::ALL_CASTLE_SIDES;
use crate::chess_move::Move;
use crate::color::{Color, ALL_COLORS};
use crate::error::Error;
use crate::piece::{Piece, PieceKind, PROMOTION_KINDS};
use crate::position::Position;
use crate::rules::Rules;
use crate::square::{Square, ALL_SQUARES, NUM_SQUARES};

use log::debug;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The column both kings start on.
const KING_COL: u8 = 4;

/// A plain 8x8 chess board: who stands where, whose turn it is, and what the last move was.
///
/// The board does not know the rules.  `apply_move_unchecked` will happily play anything; use
/// `make_move` to go through a `Rules` first.
///
/// ```
/// use chess_rules::{Board, Rules, Square};
///
/// let mut board = Board::default();
/// let rules = Rules::default();
/// let e2 = Square::new(6, 4).unwrap();
/// let e4 = Square::new(4, 4).unwrap();
///
/// assert!(board.make_move(&rules, e2, e4, None).is_ok());
/// assert_eq!(
///     board.to_string(),
///     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
/// );
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Board {
    squares: [Option<Piece>; NUM_SQUARES],
    side_to_move: Color,
    last_move: Option<Move>,
}

impl Board {
    /// The standard starting position, white to move.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for (col, kind) in BACK_RANK.iter().enumerate() {
            for color in ALL_COLORS.iter() {
                let col = col as u8;
                if let Some(sq) = Square::new(color.to_my_backrank(), col) {
                    board.set_piece(sq, Some(Piece::new(*kind, *color)));
                }
                if let Some(sq) = Square::new(color.to_second_rank(), col) {
                    board.set_piece(sq, Some(Piece::new(PieceKind::Pawn, *color)));
                }
            }
        }
        board
    }

    /// A board with nothing on it, white to move.
    pub fn empty() -> Board {
        Board {
            squares: [None; NUM_SQUARES],
            side_to_move: Color::White,
            last_move: None,
        }
    }

    /// Put the pieces back where they started.
    pub fn reset(&mut self) {
        *self = Board::new();
    }

    /// What piece is on a particular `Square`?  Is there even one?
    #[inline]
    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.squares[square.to_index()]
    }

    /// Place (or remove, with `None`) a piece.  Whatever stood there before is discarded.
    ///
    /// This can be used on self directly or in a builder pattern.
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) -> &mut Self {
        self.squares[square.to_index()] = piece;
        self
    }

    /// Clear a square on the board.
    pub fn clear_square(&mut self, square: Square) -> &mut Self {
        self.set_piece(square, None)
    }

    /// Who's turn is it?
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Hand the move to `color`.
    pub fn set_side_to_move(&mut self, color: Color) -> &mut Self {
        self.side_to_move = color;
        self
    }

    /// The last move played, if any.
    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Where is the king of `color`?
    pub fn king_square(&self, color: Color) -> Option<Square> {
        ALL_SQUARES
            .iter()
            .find(|sq| {
                self.piece_on(**sq)
                    .map_or(false, |p| p.is(PieceKind::King, color))
            })
            .copied()
    }

    /// Does each side have exactly one king?
    pub fn is_sane(&self) -> bool {
        ALL_COLORS.iter().all(|color| {
            self.squares
                .iter()
                .filter(|p| p.map_or(false, |p| p.is(PieceKind::King, *color)))
                .count()
                == 1
        })
    }

    /// Play `m` without checking it against any rules.
    ///
    /// Besides moving the piece (and marking it as moved), this carries out the rest of a compound
    /// move: a castling king drags its rook along, and an en passant capture removes the pawn
    /// beside the capturing pawn's start.  The move becomes the last move and the turn passes.
    pub fn apply_move_unchecked(&mut self, m: Move) {
        let previous = self.last_move;
        let source = m.get_source();
        let dest = m.get_dest();
        let onto_empty = self.piece_on(dest).is_none();

        let mut piece = m.get_piece();
        piece.has_moved = true;
        self.clear_square(source);
        self.set_piece(dest, Some(piece));

        if let Some(side) = m.castle_side() {
            let row = source.row();
            if let (Some(from), Some(to)) = (side.rook_square(row), side.rook_dest(row)) {
                if let Some(mut rook) = self.piece_on(from) {
                    if rook.is(PieceKind::Rook, piece.color) {
                        rook.has_moved = true;
                        self.clear_square(from);
                        self.set_piece(to, Some(rook));
                    }
                }
            }
        }

        if onto_empty && m.is_en_passant(previous.as_ref()) {
            let captured = m.en_passant_capture_square();
            debug!("{} captures en passant on {}", m, captured);
            self.clear_square(captured);
        }

        debug!("applied {} for {}", m, piece.color);
        self.last_move = Some(m);
        self.side_to_move = !self.side_to_move;
    }

    /// Move the piece on `source` to `dest`, if `rules` allow it and it is that piece's turn.
    ///
    /// A pawn reaching the last row becomes `promotion`, or a queen if no (or no valid) choice
    /// was given.
    pub fn make_move(
        &mut self,
        rules: &Rules,
        source: Square,
        dest: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, Error> {
        let piece = match self.piece_on(source) {
            Some(p) if p.color == self.side_to_move => p,
            _ => {
                return Err(Error::InvalidMove {
                    mv: format!("{}{}", source, dest),
                })
            }
        };

        let m = Move::new(source, dest, piece);
        if !rules.is_legal_move(&*self, source, dest) {
            return Err(Error::InvalidMove { mv: m.to_string() });
        }

        self.apply_move_unchecked(m);

        if m.is_promotion() {
            let kind = promotion
                .filter(|k| PROMOTION_KINDS.contains(k))
                .unwrap_or(PieceKind::Queen);
            self.set_piece(
                dest,
                Some(Piece {
                    kind,
                    color: piece.color,
                    has_moved: true,
                }),
            );
        }

        Ok(m)
    }

    /// The FEN castling field, judging by which kings and rooks have moved.
    fn castle_string(&self) -> String {
        let mut result = String::new();
        for color in ALL_COLORS.iter() {
            let row = color.to_my_backrank();
            let king_home = Square::new(row, KING_COL)
                .and_then(|sq| self.piece_on(sq))
                .map_or(false, |p| p.is(PieceKind::King, *color) && !p.has_moved);
            if !king_home {
                continue;
            }
            for side in ALL_CASTLE_SIDES.iter() {
                let rook_home = side
                    .rook_square(row)
                    .and_then(|sq| self.piece_on(sq))
                    .map_or(false, |p| p.is(PieceKind::Rook, *color) && !p.has_moved);
                if rook_home {
                    result.push(side.to_char(*color));
                }
            }
        }
        if result.is_empty() {
            result.push('-');
        }
        result
    }
}

impl Default for Board {
    /// The standard starting position.
    fn default() -> Board {
        Board::new()
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.squares[index.to_index()]
    }
}

impl Position for Board {
    #[inline]
    fn piece_on(&self, square: Square) -> Option<Piece> {
        Board::piece_on(self, square)
    }

    #[inline]
    fn apply_move_unchecked(&mut self, m: Move) {
        Board::apply_move_unchecked(self, m)
    }

    #[inline]
    fn king_square(&self, color: Color) -> Option<Square> {
        Board::king_square(self, color)
    }

    #[inline]
    fn last_move(&self) -> Option<Move> {
        self.last_move
    }
}

impl fmt::Display for Board {
    /// Write the position as FEN.  The halfmove clock and fullmove number are not tracked, so
    /// they are always written as `0 1`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..8u8 {
            let mut count = 0;
            for col in 0..8u8 {
                match Square::new(row, col).and_then(|sq| self.piece_on(sq)) {
                    Some(piece) => {
                        if count != 0 {
                            write!(f, "{}", count)?;
                            count = 0;
                        }
                        write!(f, "{}", piece)?;
                    }
                    None => count += 1,
                }
            }
            if count != 0 {
                write!(f, "{}", count)?;
            }
            if row != 7 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {} ", self.side_to_move, self.castle_string())?;

        match self.last_move.filter(|m| m.is_double_pawn_push()) {
            Some(m) => {
                let skipped = (m.get_source().row() + m.get_dest().row()) / 2;
                match Square::new(skipped, m.get_dest().col()) {
                    Some(sq) => write!(f, "{}", sq)?,
                    None => write!(f, "-")?,
                }
            }
            None => write!(f, "-")?,
        }

        write!(f, " 0 1")
    }
}

impl FromStr for Board {
    type Err = Error;

    /// Read a FEN string.
    ///
    /// Castling rights are turned into `has_moved` flags: a missing right marks that corner's
    /// rook as moved, and a side with no rights at all has a moved king.  Kings, rooks and pawns
    /// standing away from their starting squares are marked as moved too.  An en passant target
    /// becomes the last move, as the two-square pawn advance that created it.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidFen {
            fen: value.to_string(),
        };

        let tokens: Vec<&str> = value.split_whitespace().collect();
        if tokens.len() < 4 {
            return Err(invalid());
        }
        let (placement, side, castles, ep) = (tokens[0], tokens[1], tokens[2], tokens[3]);

        let mut board = Board::empty();
        let ranks: Vec<&str> = placement.split('/').collect();
        if ranks.len() != 8 {
            return Err(invalid());
        }
        for (row, rank) in ranks.iter().enumerate() {
            let row = row as u8;
            let mut col = 0u8;
            for c in rank.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if skip == 0 || col as u32 + skip > 8 {
                        return Err(invalid());
                    }
                    col += skip as u8;
                    continue;
                }
                let mut piece = Piece::from_char(c).ok_or_else(invalid)?;
                let square = Square::new(row, col).ok_or_else(invalid)?;
                piece.has_moved = match piece.kind {
                    PieceKind::Pawn => row != piece.color.to_second_rank(),
                    PieceKind::King => {
                        row != piece.color.to_my_backrank() || col != KING_COL
                    }
                    PieceKind::Rook => {
                        row != piece.color.to_my_backrank() || (col != 0 && col != 7)
                    }
                    _ => false,
                };
                board.set_piece(square, Some(piece));
                col += 1;
            }
            if col != 8 {
                return Err(invalid());
            }
        }

        match side {
            "w" | "W" => board.side_to_move = Color::White,
            "b" | "B" => board.side_to_move = Color::Black,
            _ => return Err(invalid()),
        }

        if castles != "-" && !castles.chars().all(|c| "KQkq".contains(c)) {
            return Err(invalid());
        }
        for color in ALL_COLORS.iter() {
            let row = color.to_my_backrank();
            let mut any = false;
            for side in ALL_CASTLE_SIDES.iter() {
                if castles.contains(side.to_char(*color)) {
                    any = true;
                    continue;
                }
                if let Some(sq) = side.rook_square(row) {
                    if let Some(mut rook) = board.piece_on(sq) {
                        if rook.is(PieceKind::Rook, *color) {
                            rook.has_moved = true;
                            board.set_piece(sq, Some(rook));
                        }
                    }
                }
            }
            if !any {
                if let Some(sq) = board.king_square(*color) {
                    if let Some(mut king) = board.piece_on(sq) {
                        king.has_moved = true;
                        board.set_piece(sq, Some(king));
                    }
                }
            }
        }

        if ep != "-" {
            let target = Square::from_str(ep).map_err(|_| invalid())?;
            let mover = !board.side_to_move;
            let source = Square::new(mover.to_second_rank(), target.col()).ok_or_else(invalid)?;
            let dest = Square::new(mover.to_fourth_rank(), target.col()).ok_or_else(invalid)?;
            if target.row() != (source.row() + dest.row()) / 2 {
                return Err(invalid());
            }
            // the pawn just passed through both of these
            if board.piece_on(target).is_some() || board.piece_on(source).is_some() {
                return Err(invalid());
            }
            if !board
                .piece_on(dest)
                .map_or(false, |p| p.is(PieceKind::Pawn, mover))
            {
                return Err(invalid());
            }
            board.last_move = Some(Move::new(source, dest, Piece::new(PieceKind::Pawn, mover)));
        }

        if !board.is_sane() {
            return Err(Error::InvalidBoard);
        }

        Ok(board)
    }
}
