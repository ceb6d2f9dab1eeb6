use crate::char::{Char, CharParser, parse_unit};
use crate::char_set::CharSet;
use crate::class::Class;
use crate::cursors::AtomicCursor;
use crate::encoding::{Encoding, Unit};
use crate::error::ParsicharError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Character parser that matches exactly the units its subject rejects
///
/// Unlike a negative lookahead this consumes the unit it matched and yields
/// it as attribute. It still fails on empty input, since there is no unit to
/// reject.
#[derive(Debug, Clone, Copy)]
pub struct Negated<P> {
    subject: P,
}

impl<P: CharParser> Negated<P> {
    pub fn new(subject: P) -> Self {
        Negated { subject }
    }

    pub fn subject(&self) -> &P {
        &self.subject
    }

    pub fn into_inner(self) -> P {
        self.subject
    }
}

impl<P: CharParser> CharParser for Negated<P> {
    type Encoding = P::Encoding;

    fn test(&self, unit: Unit<Self::Encoding>) -> bool {
        !self.subject.test(unit)
    }

    fn what(&self) -> Cow<'static, str> {
        format!("not {}", self.subject.what()).into()
    }
}

impl<'code, P: CharParser> Parser<'code> for Negated<P> {
    type Cursor = AtomicCursor<'code, Unit<P::Encoding>>;
    type Output = Unit<P::Encoding>;
    type Error = ParsicharError<'code, Unit<P::Encoding>>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        parse_unit(self, cursor)
    }
}

/// Negation of a character parser
///
/// Negating a [`Negated`] unwraps it instead of stacking another layer, so
/// `negate(negate(p))` has the type of `p`.
pub trait Negate: CharParser + Sized {
    type Output: CharParser<Encoding = Self::Encoding>;

    fn negate(self) -> Self::Output;
}

impl<E: Encoding> Negate for Char<E> {
    type Output = Negated<Self>;

    fn negate(self) -> Negated<Self> {
        Negated::new(self)
    }
}

impl<E: Encoding> Negate for CharSet<E> {
    type Output = Negated<Self>;

    fn negate(self) -> Negated<Self> {
        Negated::new(self)
    }
}

impl<E: Encoding> Negate for Class<E> {
    type Output = Negated<Self>;

    fn negate(self) -> Negated<Self> {
        Negated::new(self)
    }
}

impl<P: CharParser> Negate for Negated<P> {
    type Output = P;

    fn negate(self) -> P {
        self.subject
    }
}

/// Convenience function to negate a character parser
pub fn negate<P: Negate>(parser: P) -> P::Output {
    parser.negate()
}
