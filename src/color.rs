use std::fmt;
use std::ops::Not;

/// Represent a color.
#[derive(PartialOrd, PartialEq, Eq, Copy, Clone, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub enum Color {
    White,
    Black,
}

/// How many colors are there?
pub const NUM_COLORS: usize = 2;
/// List all colors
pub const ALL_COLORS: [Color; NUM_COLORS] = [Color::White, Color::Black];

impl Color {
    /// Which way do my pawns walk?  White walks toward row 0, black toward row 7.
    #[inline]
    pub fn forward(&self) -> i8 {
        match *self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row my pieces start on.
    #[inline]
    pub fn to_my_backrank(&self) -> u8 {
        match *self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// The row my opponent's pieces start on, which is where my pawns promote.
    #[inline]
    pub fn to_their_backrank(&self) -> u8 {
        (!*self).to_my_backrank()
    }

    /// The row my pawns start on, from which they may advance two squares.
    #[inline]
    pub fn to_second_rank(&self) -> u8 {
        match *self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The row a pawn of mine lands on after a two-square advance.
    #[inline]
    pub fn to_fourth_rank(&self) -> u8 {
        match *self {
            Color::White => 4,
            Color::Black => 3,
        }
    }
}

impl Not for Color {
    type Output = Color;

    /// Get the other color.
    #[inline]
    fn not(self) -> Color {
        if self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Color::White => write!(f, "w"),
            Color::Black => write!(f, "b"),
        }
    }
}
