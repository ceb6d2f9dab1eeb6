//! Entry points driving a parser over a whole input slice

use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::cursors::AtomicCursor;
use crate::error::{CodeLoc, ParsicharError};
use crate::parser::Parser;
use crate::skip::skip_over;
use tracing::trace;

/// Whether a phrase parse also runs the skipper after the parser succeeded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PostSkip {
    /// Skip trailing skippable input, so `"a  "` parses completely
    #[default]
    Yes,
    No,
}

/// Run `parser` at the start of `input`
///
/// Returns the attribute and the cursor after the match. Input left over is
/// not an error.
pub fn parse<'code, T, P>(
    parser: &P,
    input: &'code [T],
) -> Result<(P::Output, AtomicCursor<'code, T>), P::Error>
where
    T: Atomic,
    P: Parser<'code, Cursor = AtomicCursor<'code, T>>,
{
    let (output, cursor) = parser.parse(AtomicCursor::new(input))?;
    trace!(consumed = cursor.position(), "parse matched");
    Ok((output, cursor))
}

/// Run `parser` over `input` and require that it consumes all of it
pub fn parse_complete<'code, T, P>(
    parser: &P,
    input: &'code [T],
) -> Result<P::Output, ParsicharError<'code, T>>
where
    T: Atomic,
    P: Parser<'code, Cursor = AtomicCursor<'code, T>>,
    P::Error: Into<ParsicharError<'code, T>>,
{
    let (output, cursor) = parse(parser, input).map_err(Into::into)?;
    ensure_consumed(cursor)?;
    Ok(output)
}

/// Run `parser` over `input` with `skipper` discarding ignorable units in
/// front of it and, under [`PostSkip::Yes`], behind it
pub fn phrase_parse<'code, T, P, S>(
    parser: &P,
    skipper: &S,
    post_skip: PostSkip,
    input: &'code [T],
) -> Result<(P::Output, AtomicCursor<'code, T>), P::Error>
where
    T: Atomic,
    P: Parser<'code, Cursor = AtomicCursor<'code, T>>,
    S: Parser<'code, Cursor = AtomicCursor<'code, T>>,
{
    let start = skip_over(skipper, AtomicCursor::new(input));
    trace!(skipped = start.position(), "skipped leading input");

    let (output, mut cursor) = parser.parse(start)?;
    trace!(
        consumed = cursor.position() - start.position(),
        "phrase parse matched"
    );

    if post_skip == PostSkip::Yes {
        let end = skip_over(skipper, cursor);
        trace!(
            skipped = end.position() - cursor.position(),
            "skipped trailing input"
        );
        cursor = end;
    }

    Ok((output, cursor))
}

/// [`phrase_parse`] that requires all of `input` to be consumed
pub fn phrase_parse_complete<'code, T, P, S>(
    parser: &P,
    skipper: &S,
    post_skip: PostSkip,
    input: &'code [T],
) -> Result<P::Output, ParsicharError<'code, T>>
where
    T: Atomic,
    P: Parser<'code, Cursor = AtomicCursor<'code, T>>,
    S: Parser<'code, Cursor = AtomicCursor<'code, T>>,
    P::Error: Into<ParsicharError<'code, T>>,
{
    let (output, cursor) = phrase_parse(parser, skipper, post_skip, input).map_err(Into::into)?;
    ensure_consumed(cursor)?;
    Ok(output)
}

fn ensure_consumed<T: Atomic>(cursor: AtomicCursor<'_, T>) -> Result<(), ParsicharError<'_, T>> {
    if cursor.eos() {
        return Ok(());
    }

    let (data, position) = cursor.inner();
    trace!(
        remaining = data.len() - position,
        "complete parse left trailing input"
    );
    Err(ParsicharError::TrailingInput(CodeLoc::new(data, position)))
}
