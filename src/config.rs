//! Process-level configuration for the locale-dependent encodings
//!
//! The `standard` and `standard_wide` encodings classify characters the way
//! the process locale does. The locale is resolved once, here, and handed to
//! those encodings as a value; classification never reads the environment.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variables consulted for the character-type locale, in priority order
pub const LOCALE_VARIABLES: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Character classification behaviour of a process locale
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    /// The "C"/"POSIX" locale: only ASCII characters are classified
    #[default]
    C,
    /// A single-byte ISO-8859-1 locale such as `de_DE.ISO-8859-1`
    Latin1,
    /// A UTF-8 locale; wide characters are classified by Unicode properties
    Utf8,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocaleError {
    #[error("locale `{locale}` uses unsupported codeset `{codeset}`")]
    UnsupportedCodeset { locale: String, codeset: String },
    #[error("environment variable {variable} is not valid unicode")]
    NotUnicode { variable: &'static str },
}

impl Locale {
    /// Resolve the locale from `LC_ALL`, `LC_CTYPE` and `LANG`
    ///
    /// The first variable that is set and non-empty wins. With none set the
    /// process runs in the C locale.
    pub fn from_env() -> Result<Self, LocaleError> {
        Self::from_lookup(|variable| std::env::var_os(variable))
    }

    /// Resolve the locale through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, LocaleError>
    where
        F: Fn(&'static str) -> Option<std::ffi::OsString>,
    {
        for variable in LOCALE_VARIABLES {
            let Some(value) = lookup(variable) else {
                continue;
            };
            let value = value
                .into_string()
                .map_err(|_| LocaleError::NotUnicode { variable })?;
            if value.is_empty() {
                continue;
            }

            let locale = value.parse::<Locale>().inspect_err(|err| {
                warn!(variable, value = %value, error = %err, "unrecognized locale");
            })?;
            debug!(variable, value = %value, ?locale, "resolved character classification locale");
            return Ok(locale);
        }

        debug!("no locale variable set, using the C locale");
        Ok(Locale::C)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    /// Parse a POSIX locale name: `language[_territory][.codeset][@modifier]`
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        if name == "C" || name == "POSIX" {
            return Ok(Locale::C);
        }

        let without_modifier = name.split('@').next().unwrap_or(name);
        let Some((_, codeset)) = without_modifier.split_once('.') else {
            // glibc defaults a bare language_territory to its Latin-1 variant
            return Ok(Locale::Latin1);
        };

        let normalized: String = codeset
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        match normalized.as_str() {
            "utf8" => Ok(Locale::Utf8),
            "iso88591" | "latin1" => Ok(Locale::Latin1),
            "ascii" | "ansix341968" | "usascii" => Ok(Locale::C),
            _ => Err(LocaleError::UnsupportedCodeset {
                locale: name.to_string(),
                codeset: codeset.to_string(),
            }),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::C => f.write_str("C"),
            Locale::Latin1 => f.write_str("ISO-8859-1"),
            Locale::Utf8 => f.write_str("UTF-8"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::ffi::OsString;

    fn lookup_in(
        vars: &[(&'static str, &str)],
    ) -> impl Fn(&'static str) -> Option<OsString> + use<> {
        let vars: HashMap<&'static str, OsString> = vars
            .iter()
            .map(|&(name, value)| (name, OsString::from(value)))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_parse_posix_names() {
        assert_eq!("C".parse::<Locale>(), Ok(Locale::C));
        assert_eq!("POSIX".parse::<Locale>(), Ok(Locale::C));
        assert_eq!("en_US.UTF-8".parse::<Locale>(), Ok(Locale::Utf8));
        assert_eq!("C.utf8".parse::<Locale>(), Ok(Locale::Utf8));
        assert_eq!("de_DE.ISO-8859-1".parse::<Locale>(), Ok(Locale::Latin1));
        assert_eq!("de_DE.iso88591@euro".parse::<Locale>(), Ok(Locale::Latin1));
        assert_eq!("de_DE".parse::<Locale>(), Ok(Locale::Latin1));
        assert_eq!("en_US.US-ASCII".parse::<Locale>(), Ok(Locale::C));
    }

    #[test]
    fn test_parse_unsupported_codeset() {
        let err = "ja_JP.EUC-JP".parse::<Locale>().unwrap_err();
        assert_eq!(
            err,
            LocaleError::UnsupportedCodeset {
                locale: "ja_JP.EUC-JP".to_string(),
                codeset: "EUC-JP".to_string(),
            }
        );
        assert!(err.to_string().contains("EUC-JP"));
    }

    #[test]
    fn test_lookup_priority() {
        let lookup = lookup_in(&[("LANG", "C"), ("LC_CTYPE", "en_US.UTF-8")]);
        assert_eq!(Locale::from_lookup(lookup), Ok(Locale::Utf8));

        let lookup = lookup_in(&[
            ("LANG", "C"),
            ("LC_CTYPE", "en_US.UTF-8"),
            ("LC_ALL", "de_DE.ISO-8859-1"),
        ]);
        assert_eq!(Locale::from_lookup(lookup), Ok(Locale::Latin1));
    }

    #[test]
    fn test_lookup_skips_empty_values() {
        let lookup = lookup_in(&[("LC_ALL", ""), ("LANG", "en_GB.utf8")]);
        assert_eq!(Locale::from_lookup(lookup), Ok(Locale::Utf8));
    }

    #[test]
    fn test_lookup_defaults_to_c() {
        assert_eq!(Locale::from_lookup(lookup_in(&[])), Ok(Locale::C));
    }

    #[test]
    fn test_lookup_propagates_parse_errors() {
        let lookup = lookup_in(&[("LANG", "zh_CN.GB18030")]);
        assert!(matches!(
            Locale::from_lookup(lookup),
            Err(LocaleError::UnsupportedCodeset { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Locale::C.to_string(), "C");
        assert_eq!(Locale::Latin1.to_string(), "ISO-8859-1");
        assert_eq!(Locale::Utf8.to_string(), "UTF-8");
    }
}
