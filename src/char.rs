use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::encoding::{Encoding, Unit};
use crate::error::{CodeLoc, ParsicharError};
use crate::parser::Parser;
use std::borrow::Cow;
use std::marker::PhantomData;

/// A parser that consumes at most one unit, decided by a pure test
///
/// `test` is the lookahead: it says whether the parser would match a unit
/// without touching any cursor. Negation is built on it.
pub trait CharParser {
    type Encoding: Encoding;

    fn test(&self, unit: Unit<Self::Encoding>) -> bool;

    /// What the parser expects, for error messages
    fn what(&self) -> Cow<'static, str>;
}

/// Shared `parse` of every character parser
///
/// The end-of-input check comes first, so no test ever sees a unit past the end.
pub(crate) fn parse_unit<'code, P>(
    parser: &P,
    cursor: AtomicCursor<'code, Unit<P::Encoding>>,
) -> Result<
    (Unit<P::Encoding>, AtomicCursor<'code, Unit<P::Encoding>>),
    ParsicharError<'code, Unit<P::Encoding>>,
>
where
    P: CharParser,
{
    let unit = cursor.value()?;
    if parser.test(unit) {
        return Ok((unit, cursor.next()));
    }

    let (data, position) = cursor.inner();
    Err(ParsicharError::SyntaxError {
        message: format!("expected {}, found {}", parser.what(), unit.describe()).into(),
        loc: CodeLoc::new(data, position),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Constraint<U> {
    Any,
    Literal(U),
    /// Inclusive; empty when the bounds are reversed
    Range(U, U),
}

/// Parser for a single unit of encoding `E`: any unit, one literal, or an inclusive range
///
/// The attribute is the matched unit.
#[derive(Debug, Clone, Copy)]
pub struct Char<E: Encoding> {
    constraint: Constraint<E::Unit>,
    _encoding: PhantomData<E>,
}

impl<E: Encoding> Char<E> {
    pub fn any() -> Self {
        Self::with(Constraint::Any)
    }

    pub fn literal(unit: E::Unit) -> Self {
        Self::with(Constraint::Literal(unit))
    }

    pub fn range(first: E::Unit, last: E::Unit) -> Self {
        Self::with(Constraint::Range(first, last))
    }

    fn with(constraint: Constraint<E::Unit>) -> Self {
        Char {
            constraint,
            _encoding: PhantomData,
        }
    }
}

impl<E: Encoding> CharParser for Char<E> {
    type Encoding = E;

    fn test(&self, unit: E::Unit) -> bool {
        match self.constraint {
            Constraint::Any => true,
            Constraint::Literal(expected) => unit == expected,
            Constraint::Range(first, last) => first <= unit && unit <= last,
        }
    }

    fn what(&self) -> Cow<'static, str> {
        match self.constraint {
            Constraint::Any => Cow::Borrowed("any character"),
            Constraint::Literal(expected) => expected.describe().into(),
            Constraint::Range(first, last) => {
                format!("{}..={}", first.describe(), last.describe()).into()
            }
        }
    }
}

impl<'code, E: Encoding> Parser<'code> for Char<E> {
    type Cursor = AtomicCursor<'code, E::Unit>;
    type Output = E::Unit;
    type Error = ParsicharError<'code, E::Unit>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        parse_unit(self, cursor)
    }
}
