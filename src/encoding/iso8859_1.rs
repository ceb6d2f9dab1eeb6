use super::table::LATIN1;
use super::{CharClass, Encoding};

/// ISO-8859-1 (Latin-1) over `u8` units, classified by a fixed table
///
/// The table is locale-independent: 0xE9 (`é`) is a lowercase letter in
/// every process.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Iso8859_1;

impl Encoding for Iso8859_1 {
    type Unit = u8;
    type Class = CharClass;

    const NAME: &'static str = "iso8859_1";

    fn is(&self, class: CharClass, unit: u8) -> bool {
        LATIN1.is(class, unit)
    }
}

char_parsers!(Iso8859_1, Iso8859_1);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::{AttributeExt, AttributeOf};
    use crate::class::Class;
    use crate::parse::{parse_complete, phrase_parse_complete, PostSkip};

    const E_ACUTE: &[u8] = b"\xE9";

    #[test]
    fn test_classes() {
        assert!(parse_complete(&alnum(), b"1").is_ok());
        assert!(parse_complete(&alnum(), b" ").is_err());
        assert!(parse_complete(&alpha(), b"1").is_err());
        assert!(parse_complete(&alpha(), b"x").is_ok());
        assert!(parse_complete(&blank(), b" ").is_ok());
        assert!(parse_complete(&blank(), b"x").is_err());
        assert!(parse_complete(&digit(), b"1").is_ok());
        assert!(parse_complete(&digit(), b"x").is_err());
        assert!(parse_complete(&lower(), b"a").is_ok());
        assert!(parse_complete(&lower(), b"A").is_err());
        assert!(parse_complete(&punct(), b"!").is_ok());
        assert!(parse_complete(&punct(), b"x").is_err());
        assert!(parse_complete(&space(), b" ").is_ok());
        assert!(parse_complete(&space(), b"\n").is_ok());
        assert!(parse_complete(&space(), b"\r").is_ok());
        assert!(parse_complete(&space(), b"\t").is_ok());
        assert!(parse_complete(&upper(), b"A").is_ok());
        assert!(parse_complete(&upper(), b"a").is_err());
        assert!(parse_complete(&xdigit(), b"A").is_ok());
        assert!(parse_complete(&xdigit(), b"0").is_ok());
        assert!(parse_complete(&xdigit(), b"f").is_ok());
        assert!(parse_complete(&xdigit(), b"g").is_err());
    }

    #[test]
    fn test_e_acute() {
        assert!(parse_complete(&alpha(), E_ACUTE).is_ok());
        assert!(parse_complete(&lower(), E_ACUTE).is_ok());
        assert!(parse_complete(&upper(), E_ACUTE).is_err());
    }

    #[test]
    fn test_alpha_attribute_is_the_unit_type() {
        let _: AttributeOf<'static, Class<Iso8859_1>> = 0u8;

        let attr: i32 = parse_complete(&alpha().into_attribute::<i32>(), b"a").unwrap();
        assert_eq!(attr, 'a' as i32);
    }

    #[test]
    fn test_alpha_attribute_after_skipping() {
        let attr = phrase_parse_complete(&alpha(), &space(), PostSkip::Yes, b"     a").unwrap();
        assert_eq!(attr, b'a');
    }
}
