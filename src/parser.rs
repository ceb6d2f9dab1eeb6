use crate::cursor::Cursor;
use std::error::Error;

/// Core parser trait
///
/// `Output` is the attribute the parser reports on success. It is fixed by
/// the parser's type, so composed grammars know their attribute shape
/// without looking at any input.
pub trait Parser<'code>: Sized {
    type Cursor: Cursor<'code>;
    type Output;
    type Error: Error;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns Ok with the parsed value and updated cursor on success,
    /// or Err if the parse fails. Failures do not consume input.
    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error>;
}
