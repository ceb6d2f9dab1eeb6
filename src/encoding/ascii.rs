use super::table::ASCII;
use super::{CharClass, Encoding};

/// 7-bit ASCII over `u8` units; units above 0x7F belong to no class
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Ascii;

impl Encoding for Ascii {
    type Unit = u8;
    type Class = CharClass;

    const NAME: &'static str = "ascii";

    fn is(&self, class: CharClass, unit: u8) -> bool {
        ASCII.is(class, unit)
    }
}

char_parsers!(Ascii, Ascii);
