//! # ParsiChar - Character Parsers for Parser Combinators
//!
//! The character-level core of a parser combinator library: parsers that
//! match exactly one character unit of a chosen encoding, their negation,
//! and the whitespace skipping that composed grammars run in front of them.
//!
//! - **Encodings as types**: `ascii`, `iso8859_1`, `standard`,
//!   `standard_wide` and `unicode` each fix a unit type, so feeding one
//!   encoding's input to another's parser is a compile error
//! - **Static attributes**: a parser's attribute type is its `Output`
//! - **Backtracking friendly**: a failed parse never moves the caller's cursor
//! - **Zero panics**: all no-match outcomes are `Result` errors with context
//!
//! ```
//! use parsichar::{PostSkip, ascii, negate, parse_complete, phrase_parse_complete};
//!
//! assert_eq!(parse_complete(&ascii::any_char(), b"x").unwrap(), b'x');
//! assert!(parse_complete(&ascii::is_char(b'x'), b"y").is_err());
//! assert_eq!(parse_complete(&negate(ascii::is_char(b'x')), b" ").unwrap(), b' ');
//! assert_eq!(
//!     phrase_parse_complete(&ascii::is_char(b'x'), &ascii::space(), PostSkip::Yes, b"   x").unwrap(),
//!     b'x'
//! );
//! ```

pub mod atomic;
pub mod attribute;
pub mod char;
pub mod char_set;
pub mod class;
pub mod config;
pub mod cursor;
pub mod cursors;
pub mod encoding;
pub mod error;
pub mod negated;
pub mod parse;
pub mod parser;
pub mod skip;

pub use atomic::Atomic;
pub use attribute::{AttributeExt, AttributeOf, omit};
pub use char::{Char, CharParser};
pub use char_set::CharSet;
pub use class::Class;
pub use config::{Locale, LocaleError};
pub use cursor::Cursor;
pub use cursors::AtomicCursor;
pub use encoding::{
    Encoding, EncodingExt, ascii, iso8859_1, standard, standard_wide, unicode,
};
pub use error::{CodeLoc, ParsicharError};
pub use negated::{Negate, Negated, negate};
pub use parse::{PostSkip, parse, parse_complete, phrase_parse, phrase_parse_complete};
pub use parser::Parser;
pub use skip::{SkipExt, Skipped, skip_over};
