use crate::char::{CharParser, parse_unit};
use crate::cursors::AtomicCursor;
use crate::encoding::Encoding;
use crate::error::ParsicharError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser for one unit belonging to a classification of encoding `E`
pub struct Class<E: Encoding> {
    encoding: E,
    class: E::Class,
}

impl<E: Encoding> Class<E> {
    pub fn new(encoding: E, class: E::Class) -> Self {
        Class { encoding, class }
    }

    pub fn class(&self) -> E::Class {
        self.class
    }
}

impl<E: Encoding> Clone for Class<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for Class<E> {}

impl<E: Encoding> std::fmt::Debug for Class<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Class")
            .field("encoding", &self.encoding)
            .field("class", &self.class)
            .finish()
    }
}

impl<E: Encoding> CharParser for Class<E> {
    type Encoding = E;

    fn test(&self, unit: E::Unit) -> bool {
        self.encoding.is(self.class, unit)
    }

    fn what(&self) -> Cow<'static, str> {
        self.class.to_string().into()
    }
}

impl<'code, E: Encoding> Parser<'code> for Class<E> {
    type Cursor = AtomicCursor<'code, E::Unit>;
    type Output = E::Unit;
    type Error = ParsicharError<'code, E::Unit>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        parse_unit(self, cursor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Locale;
    use crate::cursor::Cursor;
    use crate::encoding::{Ascii, CharClass, Standard};

    #[test]
    fn test_class_success() {
        let data = b"a1";
        let cursor = AtomicCursor::new(&data[..]);
        let parser = Class::new(Ascii, CharClass::Alpha);

        let (unit, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(unit, b'a');
        assert_eq!(cursor.value().unwrap(), b'1');

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_class_failure_message() {
        let data = b"1";
        let cursor = AtomicCursor::new(&data[..]);
        let parser = Class::new(Ascii, CharClass::Alpha);

        let error = parser.parse(cursor).unwrap_err();
        assert!(error.to_string().contains("expected alpha, found '1'"));
    }

    #[test]
    fn test_class_carries_encoding_state() {
        let latin1 = Class::new(Standard::new(Locale::Latin1), CharClass::Upper);
        let c = Class::new(Standard::new(Locale::C), CharClass::Upper);

        assert!(latin1.test(0xC9));
        assert!(!c.test(0xC9));
        assert_eq!(latin1.class(), CharClass::Upper);
    }
}
