use crate::atomic::Atomic;
use crate::char::{CharParser, parse_unit};
use crate::cursors::AtomicCursor;
use crate::encoding::Encoding;
use crate::error::ParsicharError;
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser for one unit out of a set such as `a-z0-9`
///
/// `x-y` in the definition is an inclusive range; a `-` that cannot be a
/// range (first or last unit) is taken literally. Ranges chain: `a-c-e`
/// is `a-c` followed by `c-e`.
#[derive(Debug, Clone)]
pub struct CharSet<E: Encoding> {
    ranges: Vec<(E::Unit, E::Unit)>,
    definition: String,
}

impl<E: Encoding> CharSet<E> {
    pub fn new(definition: impl AsRef<[E::Unit]>) -> Self {
        let definition = definition.as_ref();
        let hyphen = <E::Unit as Atomic>::from_ascii(b'-');
        let mut ranges = Vec::new();

        let mut i = 0;
        while i < definition.len() {
            let first = definition[i];
            if i + 2 < definition.len() && definition[i + 1] == hyphen {
                ranges.push((first, definition[i + 2]));
                // `a-c-e` continues the next range from `c`
                let chained = i + 4 < definition.len() && definition[i + 3] == hyphen;
                i += if chained { 2 } else { 3 };
            } else {
                ranges.push((first, first));
                i += 1;
            }
        }

        CharSet {
            ranges,
            definition: E::Unit::format_slice(definition),
        }
    }
}

impl<E: Encoding> CharParser for CharSet<E> {
    type Encoding = E;

    fn test(&self, unit: E::Unit) -> bool {
        self.ranges
            .iter()
            .any(|&(first, last)| first <= unit && unit <= last)
    }

    fn what(&self) -> Cow<'static, str> {
        format!("one of [{}]", self.definition).into()
    }
}

impl<'code, E: Encoding> Parser<'code> for CharSet<E> {
    type Cursor = AtomicCursor<'code, E::Unit>;
    type Output = E::Unit;
    type Error = ParsicharError<'code, E::Unit>;

    fn parse(&self, cursor: Self::Cursor) -> Result<(Self::Output, Self::Cursor), Self::Error> {
        parse_unit(self, cursor)
    }
}
