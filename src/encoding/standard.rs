use super::table::{ASCII, LATIN1};
use super::{CharClass, Encoding};
use crate::config::{Locale, LocaleError};

/// Narrow `u8` encoding classified the way a process locale does
///
/// The locale is an explicit value. Bytes above 0x7F only classify under a
/// Latin-1 locale; under UTF-8 they are fragments of multi-byte sequences
/// and belong to no class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Standard {
    locale: Locale,
}

impl Standard {
    pub fn new(locale: Locale) -> Self {
        Standard { locale }
    }

    /// Build from the process locale environment
    pub fn from_env() -> Result<Self, LocaleError> {
        Locale::from_env().map(Standard::new)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }
}

impl Encoding for Standard {
    type Unit = u8;
    type Class = CharClass;

    const NAME: &'static str = "standard";

    fn is(&self, class: CharClass, unit: u8) -> bool {
        match self.locale {
            Locale::Latin1 => LATIN1.is(class, unit),
            Locale::C | Locale::Utf8 => ASCII.is(class, unit),
        }
    }
}
