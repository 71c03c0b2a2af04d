use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Represent a square on the chess board.
///
/// Row 0 is black's back rank and row 7 is white's.  Column 0 is the a-file.  Both coordinates
/// are always in `0..8`; there is no way to build a `Square` off the board.
#[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Square {
    row: u8,
    col: u8,
}

/// How many squares are there?
pub const NUM_SQUARES: usize = 64;

/// A list of every square on the chessboard, row by row starting at row 0.
pub const ALL_SQUARES: [Square; NUM_SQUARES] = {
    let mut result = [Square { row: 0, col: 0 }; NUM_SQUARES];
    let mut i = 0;
    while i < NUM_SQUARES {
        result[i] = Square {
            row: (i / 8) as u8,
            col: (i % 8) as u8,
        };
        i += 1;
    }
    result
};

impl Square {
    /// Make a square given a row and a column.  Returns `None` if either is off the board.
    #[inline]
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if row < 8 && col < 8 {
            Some(Square { row, col })
        } else {
            None
        }
    }

    /// Make a square from signed coordinates, as produced by walking a direction.
    #[inline]
    pub fn from_coords(row: i8, col: i8) -> Option<Square> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Return the row of this square.
    #[inline]
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Return the column of this square.
    #[inline]
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Step `rows` and `cols` away from this square.  `None` if that leaves the board.
    #[inline]
    pub fn offset(&self, rows: i8, cols: i8) -> Option<Square> {
        let row = (self.row as i8).checked_add(rows)?;
        let col = (self.col as i8).checked_add(cols)?;
        Square::from_coords(row, col)
    }

    /// Convert this `Square` to a `usize` for table lookup purposes
    #[inline]
    pub fn to_index(&self) -> usize {
        (self.row as usize) * 8 + self.col as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}",
            (b'a' + self.col) as char,
            (b'8' - self.row) as char
        )
    }
}

impl FromStr for Square {
    type Err = Error;

    /// Parse algebraic notation, such as `e2`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(Error::InvalidSquare);
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(Error::InvalidSquare);
        }
        Square::new(b'8' - rank, file - b'a').ok_or(Error::InvalidSquare)
    }
}
