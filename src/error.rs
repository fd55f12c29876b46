// Copyright (C) 2020-2026 Andy Kurnia.

use super::board::Tile;

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// caller mistakes building a board, a play or a hand. scoring never
// produces these, it has play_scorer::Rejection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("({col},{row}) is off the board")]
    OutOfBounds { col: i8, row: i8 },

    #[error("({col},{row}) already holds {existing}, cannot place {attempted}")]
    Conflict {
        col: i8,
        row: i8,
        existing: Tile,
        attempted: Tile,
    },

    #[error("{0:?} is not a lowercase letter")]
    InvalidLetter(char),

    #[error("{len} tiles do not fit a rack of {rack_size}")]
    TooManyTiles { len: usize, rack_size: i8 },

    #[error("{len} blanks, the bag only has {available}")]
    TooManyBlanks { len: u8, available: u8 },
}
