use crate::cursor::Cursor;
use crate::parser::Parser;

/// Advance `cursor` past everything `skipper` matches
///
/// Stops at end of input, at the first failure of the skipper, or when the
/// skipper succeeds without consuming anything. Applying it to its own
/// result returns that result unchanged.
pub fn skip_over<'code, S>(skipper: &S, mut cursor: S::Cursor) -> S::Cursor
where
    S: Parser<'code>,
{
    while !cursor.eos() {
        match skipper.parse(cursor) {
            Ok((_, next)) if next.position() > cursor.position() => cursor = next,
            _ => break,
        }
    }
    cursor
}

/// Parser combinator that runs a skipper before its subject
///
/// The skipper only ever sees the input in front of the subject's match, so
/// it cannot take units the subject would have matched after them.
#[derive(Debug, Clone, Copy)]
pub struct Skipped<P, S> {
    parser: P,
    skipper: S,
}

impl<P, S> Skipped<P, S> {
    pub fn new(parser: P, skipper: S) -> Self {
        Skipped { parser, skipper }
    }
}

impl<'code, P, S> Parser<'code> for Skipped<P, S>
where
    P: Parser<'code>,
    S: Parser<'code, Cursor = P::Cursor>,
{
    type Cursor = P::Cursor;
    type Output = P::Output;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let cursor = skip_over(&self.skipper, cursor);
        self.parser.parse(cursor)
    }
}

/// Extension trait to add .skipped() method support for parsers
pub trait SkipExt<'code>: Parser<'code> + Sized {
    fn skipped<S>(self, skipper: S) -> Skipped<Self, S>
    where
        S: Parser<'code, Cursor = Self::Cursor>,
    {
        Skipped::new(self, skipper)
    }
}

impl<'code, P> SkipExt<'code> for P where P: Parser<'code> {}
