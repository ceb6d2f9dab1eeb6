use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{CodeLoc, ParsicharError};
use std::cmp::Ordering;

/// Cursor over a slice of character units
///
/// `EndOfFile` is the one-past-the-last position; it is never dereferenced.
#[derive(Debug, Copy, Clone)]
pub enum AtomicCursor<'code, T: Atomic> {
    Valid { data: &'code [T], position: usize },
    EndOfFile { data: &'code [T] },
}

impl<'code, T: Atomic> AtomicCursor<'code, T> {
    pub fn new(data: &'code [T]) -> Self {
        Self::at(data, 0)
    }

    /// Cursor at `position`, clamped to the end of `data`
    fn at(data: &'code [T], position: usize) -> Self {
        if position < data.len() {
            AtomicCursor::Valid { data, position }
        } else {
            AtomicCursor::EndOfFile { data }
        }
    }

    /// Units between this cursor and the end of the input
    pub fn remaining(&self) -> &'code [T] {
        let (data, position) = self.inner();
        &data[position..]
    }

    fn end_loc(&self) -> CodeLoc<'code, T> {
        let data = self.source();
        CodeLoc::new(data, data.len())
    }
}

impl<'code, T: Atomic> Cursor<'code> for AtomicCursor<'code, T> {
    type Element = T;
    type Error = ParsicharError<'code, T>;

    fn value(&self) -> Result<T, Self::Error> {
        self.remaining()
            .first()
            .copied()
            .ok_or_else(|| ParsicharError::CannotReadValueAtEof(self.end_loc()))
    }

    fn next(self) -> Self {
        let (data, position) = self.inner();
        Self::at(data, position.saturating_add(1))
    }

    fn try_next(self) -> Result<Self, Self::Error> {
        if self.eos() {
            return Err(ParsicharError::AlreadyAtEndOfFile(self.end_loc()));
        }
        let next = self.next();
        if next.eos() {
            return Err(ParsicharError::UnexpectedEndOfFile(next.end_loc()));
        }
        Ok(next)
    }

    fn position(&self) -> usize {
        self.inner().1
    }

    fn eos(&self) -> bool {
        matches!(self, AtomicCursor::EndOfFile { .. })
    }

    fn source(&self) -> &'code [T] {
        self.inner().0
    }

    fn inner(self) -> (&'code [T], usize) {
        match self {
            AtomicCursor::Valid { data, position } => (data, position),
            AtomicCursor::EndOfFile { data } => (data, data.len()),
        }
    }
}

// Cursors are only comparable when they point into the same input
impl<'code, T: Atomic> PartialEq for AtomicCursor<'code, T> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.source(), other.source()) && self.position() == other.position()
    }
}

impl<'code, T: Atomic> PartialOrd for AtomicCursor<'code, T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if std::ptr::eq(self.source(), other.source()) {
            Some(self.position().cmp(&other.position()))
        } else {
            None
        }
    }
}
