use failure::Fail;

/// Sometimes, bad stuff happens.
///
/// Breaking a chess rule is not one of those things.  An illegal move is simply missing from the
/// move list; errors are reserved for text that cannot be parsed and for the checked
/// `Board::make_move` path.
#[derive(Clone, Debug, Fail)]
pub enum Error {
    /// The FEN string is invalid
    #[fail(display = "Invalid FEN string: {}", fen)]
    InvalidFen { fen: String },

    /// The square is not written as a file letter followed by a rank digit
    #[fail(display = "The string specified does not contain a valid algebraic notation square")]
    InvalidSquare,

    /// The board does not have exactly one king of each color
    #[fail(display = "The board specified did not pass sanity checks.  Are you sure each side has exactly one king?")]
    InvalidBoard,

    /// The move was out of turn or broke the rules
    #[fail(display = "Illegal move: {}", mv)]
    InvalidMove { mv: String },
}
