use std::error::Error;

/// Position into an immutable input sequence of character units
///
/// A cursor is a plain value: parsers take it by value and hand back an
/// advanced copy on success. Because a failed parse returns no cursor, the
/// caller's copy is never moved by a failure, which is what backtracking
/// in composed grammars relies on.
pub trait Cursor<'code>: Copy + Clone + Sized {
    /// The character unit this cursor iterates over
    type Element;

    /// Error type returned when cursor operations fail
    type Error: Error;

    /// Get the unit at the current cursor position
    ///
    /// Returns an error if the cursor is positioned at the end of the input.
    /// This is the only way parsers read input, so a read past the end is
    /// never possible.
    fn value(&self) -> Result<Self::Element, Self::Error>;

    /// Advance the cursor by one unit
    ///
    /// If already at the end, returns a cursor still positioned at the end
    fn next(self) -> Self;

    /// Advance the cursor by one unit, returning an error if that reaches or passes the end
    fn try_next(self) -> Result<Self, Self::Error>;

    /// Offset of the cursor from the start of the input
    ///
    /// At end of input this is the length of the input
    fn position(&self) -> usize;

    /// Check if the cursor is at the end of the input
    fn eos(&self) -> bool {
        self.value().is_err()
    }

    /// The whole input this cursor points into
    fn source(&self) -> &'code [Self::Element];

    /// Consume the cursor and return the input and current position
    fn inner(self) -> (&'code [Self::Element], usize);
}
