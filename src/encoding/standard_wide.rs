use super::table::{ASCII, LATIN1};
use super::unicode;
use super::{CharClass, Encoding};
use crate::config::{Locale, LocaleError};

/// Wide `char` encoding classified the way a process locale does
///
/// Under a UTF-8 locale every character is classified by its Unicode
/// properties; the C and Latin-1 locales only know their own repertoire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StandardWide {
    locale: Locale,
}

impl StandardWide {
    pub fn new(locale: Locale) -> Self {
        StandardWide { locale }
    }

    /// Build from the process locale environment
    pub fn from_env() -> Result<Self, LocaleError> {
        Locale::from_env().map(StandardWide::new)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Encoding for StandardWide {
    type Unit = char;
    type Class = CharClass;

    const NAME: &'static str = "standard_wide";

    fn is(&self, class: CharClass, unit: char) -> bool {
        match self.locale {
            Locale::C => u8::try_from(unit).is_ok_and(|b| ASCII.is(class, b)),
            Locale::Latin1 => u8::try_from(unit).is_ok_and(|b| LATIN1.is(class, b)),
            Locale::Utf8 => unicode::is_basic(class, unit),
        }
    }
}
