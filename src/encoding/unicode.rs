//! Full Unicode over UTF-32 `u32` units
//!
//! Besides the shared [`CharClass`] set this encoding tests general
//! categories, a handful of derived properties and scripts. Every `u32` is a
//! valid unit: surrogates only belong to the surrogate category, and values
//! above U+10FFFF belong to no class at all.

use super::{CharClass, Encoding};
use crate::class::Class;
use std::fmt;
use unicode_general_category::get_general_category;
use unicode_script::UnicodeScript;

pub use unicode_general_category::GeneralCategory;
pub use unicode_script::Script;

/// Full Unicode over `u32` code point units
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Unicode;

impl Unicode {
    /// General category of a code point, `None` above U+10FFFF
    pub fn general_category(unit: u32) -> Option<GeneralCategory> {
        match char::from_u32(unit) {
            Some(c) => Some(get_general_category(c)),
            None if is_surrogate(unit) => Some(GeneralCategory::Surrogate),
            None => None,
        }
    }

    /// Script of a code point, `None` for surrogates and above U+10FFFF
    pub fn script(unit: u32) -> Option<Script> {
        char::from_u32(unit).map(|c| c.script())
    }
}

impl Encoding for Unicode {
    type Unit = u32;
    type Class = UnicodeClass;

    const NAME: &'static str = "unicode";

    fn is(&self, class: UnicodeClass, unit: u32) -> bool {
        match char::from_u32(unit) {
            Some(c) => class.holds(c),
            None if is_surrogate(unit) => matches!(
                class,
                UnicodeClass::Category(Category::Surrogate | Category::Other)
            ),
            None => false,
        }
    }
}

fn is_surrogate(unit: u32) -> bool {
    (0xD800..=0xDFFF).contains(&unit)
}

/// Convert text into UTF-32 input for this encoding
pub fn to_units(text: &str) -> Vec<u32> {
    text.chars().map(u32::from).collect()
}

/// A class the Unicode encoding can test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnicodeClass {
    Basic(CharClass),
    Category(Category),
    Property(Property),
    Script(Script),
}

impl UnicodeClass {
    fn holds(self, c: char) -> bool {
        match self {
            UnicodeClass::Basic(class) => is_basic(class, c),
            UnicodeClass::Category(category) => category.contains(get_general_category(c)),
            UnicodeClass::Property(property) => property.holds(c),
            UnicodeClass::Script(script) => c.script() == script,
        }
    }
}

impl From<CharClass> for UnicodeClass {
    fn from(class: CharClass) -> Self {
        UnicodeClass::Basic(class)
    }
}

impl From<Category> for UnicodeClass {
    fn from(category: Category) -> Self {
        UnicodeClass::Category(category)
    }
}

impl From<Property> for UnicodeClass {
    fn from(property: Property) -> Self {
        UnicodeClass::Property(property)
    }
}

impl From<Script> for UnicodeClass {
    fn from(script: Script) -> Self {
        UnicodeClass::Script(script)
    }
}

impl fmt::Display for UnicodeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnicodeClass::Basic(class) => write!(f, "{}", class),
            UnicodeClass::Category(category) => write!(f, "{}", category.name()),
            UnicodeClass::Property(property) => write!(f, "{}", property.name()),
            UnicodeClass::Script(script) => {
                write!(f, "{}", format!("{:?}", script).to_lowercase())
            }
        }
    }
}

/// The shared classes, as understood by Unicode
pub(crate) fn is_basic(class: CharClass, c: char) -> bool {
    let category = get_general_category(c);
    match class {
        CharClass::Alnum => c.is_alphabetic() || category == GeneralCategory::DecimalNumber,
        CharClass::Alpha => c.is_alphabetic(),
        CharClass::Blank => {
            c.is_whitespace()
                && !matches!(c, '\n' | '\u{0B}' | '\u{0C}' | '\r')
                && !matches!(
                    category,
                    GeneralCategory::LineSeparator | GeneralCategory::ParagraphSeparator
                )
        }
        CharClass::Cntrl => category == GeneralCategory::Control,
        CharClass::Digit => category == GeneralCategory::DecimalNumber,
        CharClass::Graph => is_graph(c, category),
        CharClass::Lower => c.is_lowercase(),
        CharClass::Print => {
            (is_graph(c, category) || category == GeneralCategory::SpaceSeparator)
                && category != GeneralCategory::Control
        }
        CharClass::Punct => Category::Punctuation.contains(category),
        CharClass::Space => c.is_whitespace(),
        CharClass::Upper => c.is_uppercase(),
        CharClass::Xdigit => is_hex_digit(c),
    }
}

fn is_graph(c: char, category: GeneralCategory) -> bool {
    !c.is_whitespace()
        && !matches!(
            category,
            GeneralCategory::Control | GeneralCategory::Surrogate | GeneralCategory::Unassigned
        )
}

// Hex_Digit: ASCII plus the fullwidth forms
fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
        || matches!(c, '\u{FF10}'..='\u{FF19}' | '\u{FF21}'..='\u{FF26}' | '\u{FF41}'..='\u{FF46}')
}

/// General categories and their major groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Letter,
    Mark,
    Number,
    Separator,
    Other,
    Punctuation,
    Symbol,

    UppercaseLetter,
    LowercaseLetter,
    TitlecaseLetter,
    ModifierLetter,
    OtherLetter,

    NonspacingMark,
    EnclosingMark,
    SpacingMark,

    DecimalNumber,
    LetterNumber,
    OtherNumber,

    SpaceSeparator,
    LineSeparator,
    ParagraphSeparator,

    Control,
    Format,
    PrivateUse,
    Surrogate,
    Unassigned,

    DashPunctuation,
    OpenPunctuation,
    ClosePunctuation,
    ConnectorPunctuation,
    OtherPunctuation,
    InitialPunctuation,
    FinalPunctuation,

    MathSymbol,
    CurrencySymbol,
    ModifierSymbol,
    OtherSymbol,
}

impl Category {
    /// Whether a code point of general category `gc` falls in this category
    pub fn contains(self, gc: GeneralCategory) -> bool {
        use GeneralCategory as Gc;

        match self {
            Category::Letter => matches!(
                gc,
                Gc::UppercaseLetter
                    | Gc::LowercaseLetter
                    | Gc::TitlecaseLetter
                    | Gc::ModifierLetter
                    | Gc::OtherLetter
            ),
            Category::Mark => matches!(
                gc,
                Gc::NonspacingMark | Gc::EnclosingMark | Gc::SpacingMark
            ),
            Category::Number => matches!(
                gc,
                Gc::DecimalNumber | Gc::LetterNumber | Gc::OtherNumber
            ),
            Category::Separator => matches!(
                gc,
                Gc::SpaceSeparator | Gc::LineSeparator | Gc::ParagraphSeparator
            ),
            Category::Other => matches!(
                gc,
                Gc::Control | Gc::Format | Gc::PrivateUse | Gc::Surrogate | Gc::Unassigned
            ),
            Category::Punctuation => matches!(
                gc,
                Gc::DashPunctuation
                    | Gc::OpenPunctuation
                    | Gc::ClosePunctuation
                    | Gc::ConnectorPunctuation
                    | Gc::OtherPunctuation
                    | Gc::InitialPunctuation
                    | Gc::FinalPunctuation
            ),
            Category::Symbol => matches!(
                gc,
                Gc::MathSymbol | Gc::CurrencySymbol | Gc::ModifierSymbol | Gc::OtherSymbol
            ),
            Category::UppercaseLetter => gc == Gc::UppercaseLetter,
            Category::LowercaseLetter => gc == Gc::LowercaseLetter,
            Category::TitlecaseLetter => gc == Gc::TitlecaseLetter,
            Category::ModifierLetter => gc == Gc::ModifierLetter,
            Category::OtherLetter => gc == Gc::OtherLetter,
            Category::NonspacingMark => gc == Gc::NonspacingMark,
            Category::EnclosingMark => gc == Gc::EnclosingMark,
            Category::SpacingMark => gc == Gc::SpacingMark,
            Category::DecimalNumber => gc == Gc::DecimalNumber,
            Category::LetterNumber => gc == Gc::LetterNumber,
            Category::OtherNumber => gc == Gc::OtherNumber,
            Category::SpaceSeparator => gc == Gc::SpaceSeparator,
            Category::LineSeparator => gc == Gc::LineSeparator,
            Category::ParagraphSeparator => gc == Gc::ParagraphSeparator,
            Category::Control => gc == Gc::Control,
            Category::Format => gc == Gc::Format,
            Category::PrivateUse => gc == Gc::PrivateUse,
            Category::Surrogate => gc == Gc::Surrogate,
            Category::Unassigned => gc == Gc::Unassigned,
            Category::DashPunctuation => gc == Gc::DashPunctuation,
            Category::OpenPunctuation => gc == Gc::OpenPunctuation,
            Category::ClosePunctuation => gc == Gc::ClosePunctuation,
            Category::ConnectorPunctuation => gc == Gc::ConnectorPunctuation,
            Category::OtherPunctuation => gc == Gc::OtherPunctuation,
            Category::InitialPunctuation => gc == Gc::InitialPunctuation,
            Category::FinalPunctuation => gc == Gc::FinalPunctuation,
            Category::MathSymbol => gc == Gc::MathSymbol,
            Category::CurrencySymbol => gc == Gc::CurrencySymbol,
            Category::ModifierSymbol => gc == Gc::ModifierSymbol,
            Category::OtherSymbol => gc == Gc::OtherSymbol,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Letter => "letter",
            Category::Mark => "mark",
            Category::Number => "number",
            Category::Separator => "separator",
            Category::Other => "other",
            Category::Punctuation => "punctuation",
            Category::Symbol => "symbol",
            Category::UppercaseLetter => "uppercase_letter",
            Category::LowercaseLetter => "lowercase_letter",
            Category::TitlecaseLetter => "titlecase_letter",
            Category::ModifierLetter => "modifier_letter",
            Category::OtherLetter => "other_letter",
            Category::NonspacingMark => "nonspacing_mark",
            Category::EnclosingMark => "enclosing_mark",
            Category::SpacingMark => "spacing_mark",
            Category::DecimalNumber => "decimal_number",
            Category::LetterNumber => "letter_number",
            Category::OtherNumber => "other_number",
            Category::SpaceSeparator => "space_separator",
            Category::LineSeparator => "line_separator",
            Category::ParagraphSeparator => "paragraph_separator",
            Category::Control => "control",
            Category::Format => "format",
            Category::PrivateUse => "private_use",
            Category::Surrogate => "surrogate",
            Category::Unassigned => "unassigned",
            Category::DashPunctuation => "dash_punctuation",
            Category::OpenPunctuation => "open_punctuation",
            Category::ClosePunctuation => "close_punctuation",
            Category::ConnectorPunctuation => "connector_punctuation",
            Category::OtherPunctuation => "other_punctuation",
            Category::InitialPunctuation => "initial_punctuation",
            Category::FinalPunctuation => "final_punctuation",
            Category::MathSymbol => "math_symbol",
            Category::CurrencySymbol => "currency_symbol",
            Category::ModifierSymbol => "modifier_symbol",
            Category::OtherSymbol => "other_symbol",
        }
    }
}

/// Derived binary properties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    Alphabetic,
    Uppercase,
    Lowercase,
    WhiteSpace,
    HexDigit,
    NoncharacterCodePoint,
}

impl Property {
    fn holds(self, c: char) -> bool {
        match self {
            Property::Alphabetic => c.is_alphabetic(),
            Property::Uppercase => c.is_uppercase(),
            Property::Lowercase => c.is_lowercase(),
            Property::WhiteSpace => c.is_whitespace(),
            Property::HexDigit => is_hex_digit(c),
            Property::NoncharacterCodePoint => {
                let cp = c as u32;
                (0xFDD0..=0xFDEF).contains(&cp) || cp & 0xFFFE == 0xFFFE
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Property::Alphabetic => "alphabetic",
            Property::Uppercase => "uppercase",
            Property::Lowercase => "lowercase",
            Property::WhiteSpace => "white_space",
            Property::HexDigit => "hex_digit",
            Property::NoncharacterCodePoint => "noncharacter_code_point",
        }
    }
}

char_parsers!(Unicode, Unicode);

macro_rules! unicode_classes {
    ($($name:ident => $class:expr,)*) => {
        $(
            #[doc = concat!("Parser matching one `", stringify!($name), "` code point")]
            pub fn $name() -> Class<Unicode> {
                Class::new(Unicode, $class.into())
            }
        )*
    };
}

unicode_classes! {
    letter => Category::Letter,
    mark => Category::Mark,
    number => Category::Number,
    separator => Category::Separator,
    other => Category::Other,
    punctuation => Category::Punctuation,
    symbol => Category::Symbol,

    uppercase_letter => Category::UppercaseLetter,
    lowercase_letter => Category::LowercaseLetter,
    titlecase_letter => Category::TitlecaseLetter,
    modifier_letter => Category::ModifierLetter,
    other_letter => Category::OtherLetter,

    nonspacing_mark => Category::NonspacingMark,
    enclosing_mark => Category::EnclosingMark,
    spacing_mark => Category::SpacingMark,

    decimal_number => Category::DecimalNumber,
    letter_number => Category::LetterNumber,
    other_number => Category::OtherNumber,

    space_separator => Category::SpaceSeparator,
    line_separator => Category::LineSeparator,
    paragraph_separator => Category::ParagraphSeparator,

    control => Category::Control,
    format => Category::Format,
    private_use => Category::PrivateUse,
    surrogate => Category::Surrogate,
    unassigned => Category::Unassigned,

    dash_punctuation => Category::DashPunctuation,
    open_punctuation => Category::OpenPunctuation,
    close_punctuation => Category::ClosePunctuation,
    connector_punctuation => Category::ConnectorPunctuation,
    other_punctuation => Category::OtherPunctuation,
    initial_punctuation => Category::InitialPunctuation,
    final_punctuation => Category::FinalPunctuation,

    math_symbol => Category::MathSymbol,
    currency_symbol => Category::CurrencySymbol,
    modifier_symbol => Category::ModifierSymbol,
    other_symbol => Category::OtherSymbol,

    alphabetic => Property::Alphabetic,
    uppercase => Property::Uppercase,
    lowercase => Property::Lowercase,
    white_space => Property::WhiteSpace,
    hex_digit => Property::HexDigit,
    noncharacter_code_point => Property::NoncharacterCodePoint,

    arabic => Script::Arabic,
    armenian => Script::Armenian,
    bengali => Script::Bengali,
    bopomofo => Script::Bopomofo,
    braille => Script::Braille,
    cherokee => Script::Cherokee,
    common => Script::Common,
    cyrillic => Script::Cyrillic,
    devanagari => Script::Devanagari,
    ethiopic => Script::Ethiopic,
    georgian => Script::Georgian,
    greek => Script::Greek,
    gujarati => Script::Gujarati,
    gurmukhi => Script::Gurmukhi,
    han => Script::Han,
    hangul => Script::Hangul,
    hebrew => Script::Hebrew,
    hiragana => Script::Hiragana,
    inherited => Script::Inherited,
    kannada => Script::Kannada,
    katakana => Script::Katakana,
    khmer => Script::Khmer,
    lao => Script::Lao,
    latin => Script::Latin,
    malayalam => Script::Malayalam,
    mongolian => Script::Mongolian,
    myanmar => Script::Myanmar,
    ogham => Script::Ogham,
    oriya => Script::Oriya,
    runic => Script::Runic,
    sinhala => Script::Sinhala,
    syriac => Script::Syriac,
    tamil => Script::Tamil,
    telugu => Script::Telugu,
    thaana => Script::Thaana,
    thai => Script::Thai,
    tibetan => Script::Tibetan,
    unknown => Script::Unknown,
    yi => Script::Yi,
}
