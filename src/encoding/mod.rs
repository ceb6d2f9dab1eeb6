//! Encoding descriptors
//!
//! An encoding fixes the character unit type of every parser built from it
//! and supplies the classification predicates those parsers test against.
//! Parsers are generic over the encoding, so the choice is resolved at
//! compile time and input of another unit type does not type-check:
//!
//! ```compile_fail
//! use parsichar::{ascii, parse};
//!
//! // `ascii` parsers read `u8` units; UTF-32 input is rejected by the compiler
//! let input: Vec<u32> = vec![0x78];
//! let _ = parse(&ascii::is_char(b'x'), &input);
//! ```

use crate::atomic::Atomic;
use crate::char::Char;
use crate::char_set::CharSet;
use crate::class::Class;
use std::fmt;

/// Generates the free parser constructors of an encoding whose descriptor
/// is a unit value
macro_rules! char_parsers {
    (@classes $encoding:expr, $ty:ty, $($name:ident => $variant:ident,)*) => {
        $(
            #[doc = concat!("Parser matching one `", stringify!($name), "` unit")]
            pub fn $name() -> $crate::class::Class<$ty> {
                $crate::class::Class::new($encoding, $crate::encoding::CharClass::$variant.into())
            }
        )*
    };
    ($encoding:expr, $ty:ty) => {
        /// Parser matching any single unit
        pub fn any_char() -> $crate::char::Char<$ty> {
            $crate::char::Char::any()
        }

        /// Parser matching exactly `unit`
        pub fn is_char(unit: <$ty as $crate::encoding::Encoding>::Unit) -> $crate::char::Char<$ty> {
            $crate::char::Char::literal(unit)
        }

        /// Parser matching any unit in `first..=last`
        pub fn char_range(
            first: <$ty as $crate::encoding::Encoding>::Unit,
            last: <$ty as $crate::encoding::Encoding>::Unit,
        ) -> $crate::char::Char<$ty> {
            $crate::char::Char::range(first, last)
        }

        /// Parser matching any unit of a set definition such as `a-z0-9`
        pub fn char_set(
            definition: impl AsRef<[<$ty as $crate::encoding::Encoding>::Unit]>,
        ) -> $crate::char_set::CharSet<$ty> {
            $crate::char_set::CharSet::new(definition)
        }

        char_parsers!(@classes $encoding, $ty,
            alnum => Alnum,
            alpha => Alpha,
            blank => Blank,
            cntrl => Cntrl,
            digit => Digit,
            graph => Graph,
            lower => Lower,
            print => Print,
            punct => Punct,
            space => Space,
            upper => Upper,
            xdigit => Xdigit,
        );
    };
}

pub mod ascii;
pub mod iso8859_1;
pub mod standard;
pub mod standard_wide;
mod table;
pub mod unicode;

pub use ascii::Ascii;
pub use iso8859_1::Iso8859_1;
pub use standard::Standard;
pub use standard_wide::StandardWide;
pub use unicode::{Category, Property, Unicode, UnicodeClass};

/// The unit type of encoding `E`
pub type Unit<E> = <E as Encoding>::Unit;

/// Classification names shared by every encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    Alnum,
    Alpha,
    /// Space or tab; never a line break
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    /// Any whitespace, line breaks included
    Space,
    Upper,
    Xdigit,
}

impl CharClass {
    pub const ALL: [CharClass; 12] = [
        CharClass::Alnum,
        CharClass::Alpha,
        CharClass::Blank,
        CharClass::Cntrl,
        CharClass::Digit,
        CharClass::Graph,
        CharClass::Lower,
        CharClass::Print,
        CharClass::Punct,
        CharClass::Space,
        CharClass::Upper,
        CharClass::Xdigit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CharClass::Alnum => "alnum",
            CharClass::Alpha => "alpha",
            CharClass::Blank => "blank",
            CharClass::Cntrl => "cntrl",
            CharClass::Digit => "digit",
            CharClass::Graph => "graph",
            CharClass::Lower => "lower",
            CharClass::Print => "print",
            CharClass::Punct => "punct",
            CharClass::Space => "space",
            CharClass::Upper => "upper",
            CharClass::Xdigit => "xdigit",
        }
    }
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A text encoding: a unit type plus classification predicates over it
///
/// Predicates are total: every representable unit yields a boolean.
/// Descriptors are immutable values and may be shared freely across threads.
pub trait Encoding: Copy + fmt::Debug + Send + Sync + 'static {
    type Unit: Atomic;

    /// Classes this encoding can test; always includes the shared [`CharClass`] set
    type Class: Copy + fmt::Debug + fmt::Display + From<CharClass> + Send + Sync + 'static;

    const NAME: &'static str;

    /// Whether `unit` belongs to `class`
    fn is(&self, class: Self::Class, unit: Self::Unit) -> bool;

    fn is_alnum(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Alnum.into(), unit)
    }

    fn is_alpha(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Alpha.into(), unit)
    }

    fn is_blank(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Blank.into(), unit)
    }

    fn is_cntrl(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Cntrl.into(), unit)
    }

    fn is_digit(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Digit.into(), unit)
    }

    fn is_graph(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Graph.into(), unit)
    }

    fn is_lower(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Lower.into(), unit)
    }

    fn is_print(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Print.into(), unit)
    }

    fn is_punct(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Punct.into(), unit)
    }

    fn is_space(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Space.into(), unit)
    }

    fn is_upper(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Upper.into(), unit)
    }

    fn is_xdigit(&self, unit: Self::Unit) -> bool {
        self.is(CharClass::Xdigit.into(), unit)
    }
}

/// Extension trait building character parsers from an encoding value
///
/// This is the way to reach parsers of the locale-dependent encodings:
///
/// ```
/// use parsichar::config::Locale;
/// use parsichar::encoding::{EncodingExt, Standard};
/// use parsichar::parse_complete;
///
/// let standard = Standard::new(Locale::Latin1);
/// assert!(parse_complete(&standard.alpha(), b"\xE9").is_ok());
/// ```
pub trait EncodingExt: Encoding {
    fn any_char(self) -> Char<Self> {
        Char::any()
    }

    fn is_char(self, unit: Self::Unit) -> Char<Self> {
        Char::literal(unit)
    }

    fn char_range(self, first: Self::Unit, last: Self::Unit) -> Char<Self> {
        Char::range(first, last)
    }

    fn char_set(self, definition: impl AsRef<[Self::Unit]>) -> CharSet<Self> {
        CharSet::new(definition)
    }

    fn class(self, class: impl Into<Self::Class>) -> Class<Self> {
        Class::new(self, class.into())
    }

    fn alnum(self) -> Class<Self> {
        self.class(CharClass::Alnum)
    }

    fn alpha(self) -> Class<Self> {
        self.class(CharClass::Alpha)
    }

    fn blank(self) -> Class<Self> {
        self.class(CharClass::Blank)
    }

    fn cntrl(self) -> Class<Self> {
        self.class(CharClass::Cntrl)
    }

    fn digit(self) -> Class<Self> {
        self.class(CharClass::Digit)
    }

    fn graph(self) -> Class<Self> {
        self.class(CharClass::Graph)
    }

    fn lower(self) -> Class<Self> {
        self.class(CharClass::Lower)
    }

    fn print(self) -> Class<Self> {
        self.class(CharClass::Print)
    }

    fn punct(self) -> Class<Self> {
        self.class(CharClass::Punct)
    }

    fn space(self) -> Class<Self> {
        self.class(CharClass::Space)
    }

    fn upper(self) -> Class<Self> {
        self.class(CharClass::Upper)
    }

    fn xdigit(self) -> Class<Self> {
        self.class(CharClass::Xdigit)
    }
}

impl<E: Encoding> EncodingExt for E {}
