use super::CharClass;

const ALPHA: u16 = 1 << 0;
const DIGIT: u16 = 1 << 1;
const XDIGIT: u16 = 1 << 2;
const LOWER: u16 = 1 << 3;
const UPPER: u16 = 1 << 4;
const SPACE: u16 = 1 << 5;
const BLANK: u16 = 1 << 6;
const PUNCT: u16 = 1 << 7;
const CNTRL: u16 = 1 << 8;
const PRINT: u16 = 1 << 9;

/// Fixed classification table over the 256 narrow unit values
pub(crate) struct CtypeTable([u16; 256]);

pub(crate) static ASCII: CtypeTable = CtypeTable::build(false);
pub(crate) static LATIN1: CtypeTable = CtypeTable::build(true);

impl CtypeTable {
    const fn build(latin1: bool) -> Self {
        let mut table = [0u16; 256];
        let mut i = 0;
        while i < 256 {
            let c = i as u8;
            table[i] = if c.is_ascii() {
                ascii_bits(c)
            } else if latin1 {
                latin1_bits(c)
            } else {
                0
            };
            i += 1;
        }
        CtypeTable(table)
    }

    pub(crate) fn is(&self, class: CharClass, unit: u8) -> bool {
        let bits = self.0[unit as usize];
        match class {
            CharClass::Alnum => bits & (ALPHA | DIGIT) != 0,
            CharClass::Alpha => bits & ALPHA != 0,
            CharClass::Blank => bits & BLANK != 0,
            CharClass::Cntrl => bits & CNTRL != 0,
            CharClass::Digit => bits & DIGIT != 0,
            CharClass::Graph => bits & PRINT != 0 && bits & SPACE == 0,
            CharClass::Lower => bits & LOWER != 0,
            CharClass::Print => bits & PRINT != 0,
            CharClass::Punct => bits & PUNCT != 0,
            CharClass::Space => bits & SPACE != 0,
            CharClass::Upper => bits & UPPER != 0,
            CharClass::Xdigit => bits & XDIGIT != 0,
        }
    }
}

const fn ascii_bits(c: u8) -> u16 {
    let mut bits = 0;
    if c.is_ascii_uppercase() {
        bits |= ALPHA | UPPER;
    }
    if c.is_ascii_lowercase() {
        bits |= ALPHA | LOWER;
    }
    if c.is_ascii_digit() {
        bits |= DIGIT;
    }
    if c.is_ascii_hexdigit() {
        bits |= XDIGIT;
    }
    // C isspace, vertical tab included
    if matches!(c, b'\t'..=b'\r' | b' ') {
        bits |= SPACE;
    }
    if matches!(c, b'\t' | b' ') {
        bits |= BLANK;
    }
    if c.is_ascii_punctuation() {
        bits |= PUNCT;
    }
    if c.is_ascii_control() {
        bits |= CNTRL;
    }
    if matches!(c, 0x20..=0x7E) {
        bits |= PRINT;
    }
    bits
}

// Upper half of ISO-8859-1: C1 controls, then the printable Latin-1 supplement
const fn latin1_bits(c: u8) -> u16 {
    match c {
        0x80..=0x9F => CNTRL,
        0xA0 => SPACE | BLANK | PRINT,
        0xAA | 0xB5 | 0xBA => ALPHA | LOWER | PRINT,
        0xA1..=0xBF | 0xD7 | 0xF7 => PUNCT | PRINT,
        0xC0..=0xDE => ALPHA | UPPER | PRINT,
        0xDF..=0xFF => ALPHA | LOWER | PRINT,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_table_ignores_upper_half() {
        for unit in 0x80..=0xFFu8 {
            for class in CharClass::ALL {
                assert!(!ASCII.is(class, unit), "{} set for 0x{:02X}", class, unit);
            }
        }
    }

    #[test]
    fn test_tables_agree_on_ascii() {
        for unit in 0..0x80u8 {
            for class in CharClass::ALL {
                assert_eq!(ASCII.is(class, unit), LATIN1.is(class, unit));
            }
        }
    }

    #[test]
    fn test_ascii_matches_ctype() {
        for unit in 0..0x80u8 {
            assert_eq!(ASCII.is(CharClass::Alpha, unit), unit.is_ascii_alphabetic());
            assert_eq!(ASCII.is(CharClass::Alnum, unit), unit.is_ascii_alphanumeric());
            assert_eq!(ASCII.is(CharClass::Graph, unit), unit.is_ascii_graphic());
            assert_eq!(ASCII.is(CharClass::Punct, unit), unit.is_ascii_punctuation());
        }
        assert!(ASCII.is(CharClass::Space, 0x0B));
        assert!(!ASCII.is(CharClass::Blank, b'\n'));
        assert!(!ASCII.is(CharClass::Print, 0x7F));
    }

    #[test]
    fn test_latin1_letters() {
        assert!(LATIN1.is(CharClass::Alpha, 0xE9));
        assert!(LATIN1.is(CharClass::Lower, 0xE9));
        assert!(!LATIN1.is(CharClass::Upper, 0xE9));
        assert!(LATIN1.is(CharClass::Upper, 0xC9));
        assert!(LATIN1.is(CharClass::Lower, 0xDF));
        assert!(!LATIN1.is(CharClass::Alpha, 0xD7));
        assert!(LATIN1.is(CharClass::Punct, 0xD7));
        assert!(LATIN1.is(CharClass::Punct, 0xF7));
    }

    #[test]
    fn test_latin1_matches_unicode_letters() {
        for unit in 0xA0..=0xFFu8 {
            let c = unit as char;
            assert_eq!(LATIN1.is(CharClass::Alpha, unit), c.is_alphabetic(), "0x{:02X}", unit);
            assert_eq!(LATIN1.is(CharClass::Upper, unit), c.is_uppercase(), "0x{:02X}", unit);
            assert_eq!(LATIN1.is(CharClass::Lower, unit), c.is_lowercase(), "0x{:02X}", unit);
        }
    }

    #[test]
    fn test_latin1_controls_and_nbsp() {
        for unit in 0x80..=0x9Fu8 {
            assert!(LATIN1.is(CharClass::Cntrl, unit));
            assert!(!LATIN1.is(CharClass::Print, unit));
        }
        assert!(LATIN1.is(CharClass::Space, 0xA0));
        assert!(LATIN1.is(CharClass::Blank, 0xA0));
        assert!(!LATIN1.is(CharClass::Graph, 0xA0));
    }
}
