//! Attributes: the values successful parses report
//!
//! Every parser's attribute type is its associated [`Parser::Output`], known
//! as soon as the parser type is. Character parsers report the matched unit
//! in the unit type of their encoding; the adapters here suppress the
//! attribute or widen it into a caller-chosen type.

use crate::parser::Parser;
use std::marker::PhantomData;

/// The attribute type parser `P` reports
///
/// ```
/// use parsichar::attribute::AttributeOf;
/// use parsichar::class::Class;
/// use parsichar::encoding::{Iso8859_1, StandardWide, Unicode};
///
/// let _: AttributeOf<'static, Class<Iso8859_1>> = 0xE9u8;
/// let _: AttributeOf<'static, Class<StandardWide>> = 'é';
/// let _: AttributeOf<'static, Class<Unicode>> = 0xE9u32;
/// ```
pub type AttributeOf<'code, P> = <P as Parser<'code>>::Output;

/// Parser combinator that matches like its subject but reports no attribute
#[derive(Debug, Clone, Copy)]
pub struct Omit<P> {
    parser: P,
}

impl<P> Omit<P> {
    pub fn new(parser: P) -> Self {
        Omit { parser }
    }
}

impl<'code, P> Parser<'code> for Omit<P>
where
    P: Parser<'code>,
{
    type Cursor = P::Cursor;
    type Output = ();
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok(((), cursor))
    }
}

/// Convenience function to create an Omit parser
pub fn omit<'code, P>(parser: P) -> Omit<P>
where
    P: Parser<'code>,
{
    Omit::new(parser)
}

/// Parser combinator that converts its subject's attribute into `A`
///
/// Only lossless conversions are offered: `A` must implement `From` the
/// subject's attribute, e.g. a `u8` unit into an `i32` slot.
pub struct AsAttribute<P, A> {
    parser: P,
    _attribute: PhantomData<fn() -> A>,
}

impl<P, A> AsAttribute<P, A> {
    pub fn new(parser: P) -> Self {
        AsAttribute {
            parser,
            _attribute: PhantomData,
        }
    }
}

impl<P: Clone, A> Clone for AsAttribute<P, A> {
    fn clone(&self) -> Self {
        AsAttribute::new(self.parser.clone())
    }
}

impl<P: Copy, A> Copy for AsAttribute<P, A> {}

impl<P: std::fmt::Debug, A> std::fmt::Debug for AsAttribute<P, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AsAttribute")
            .field("parser", &self.parser)
            .field("attribute", &std::any::type_name::<A>())
            .finish()
    }
}

impl<'code, P, A> Parser<'code> for AsAttribute<P, A>
where
    P: Parser<'code>,
    A: From<P::Output>,
{
    type Cursor = P::Cursor;
    type Output = A;
    type Error = P::Error;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok((A::from(value), cursor))
    }
}

/// Extension trait to add attribute adapters to parsers
pub trait AttributeExt<'code>: Parser<'code> + Sized {
    fn omit(self) -> Omit<Self> {
        Omit::new(self)
    }

    fn into_attribute<A>(self) -> AsAttribute<Self, A>
    where
        A: From<Self::Output>,
    {
        AsAttribute::new(self)
    }
}

impl<'code, P> AttributeExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::Cursor;
    use crate::cursors::AtomicCursor;
    use crate::encoding::{iso8859_1, unicode};
    use crate::negated::negate;

    #[test]
    fn test_attribute_is_matched_unit() {
        let data = [0xE9u8];
        let cursor = AtomicCursor::new(&data[..]);

        let (unit, _) = iso8859_1::alpha().parse(cursor).unwrap();
        let _: AttributeOf<'_, crate::class::Class<crate::encoding::Iso8859_1>> = unit;
        assert_eq!(unit, 0xE9);

        let (unit, _) = negate(iso8859_1::digit()).parse(cursor).unwrap();
        assert_eq!(unit, 0xE9);
    }

    #[test]
    fn test_omit() {
        let data = b"ab";
        let cursor = AtomicCursor::new(&data[..]);

        let ((), cursor) = iso8859_1::alpha().omit().parse(cursor).unwrap();
        assert_eq!(cursor.position(), 1);

        let data = b"1";
        let cursor = AtomicCursor::new(&data[..]);
        assert!(omit(iso8859_1::alpha()).parse(cursor).is_err());
    }

    #[test]
    fn test_into_wider_attribute() {
        let data = b"a";
        let cursor = AtomicCursor::new(&data[..]);

        let (value, cursor) = iso8859_1::alpha()
            .into_attribute::<i32>()
            .parse(cursor)
            .unwrap();
        assert_eq!(value, 97);
        assert!(cursor.eos());

        let data = [0x2800u32];
        let cursor = AtomicCursor::new(&data[..]);
        let (value, _) = unicode::braille()
            .into_attribute::<u64>()
            .parse(cursor)
            .unwrap();
        assert_eq!(value, 0x2800);
    }
}
