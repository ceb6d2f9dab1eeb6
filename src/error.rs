use crate::atomic::Atomic;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct ReadablePosition {
    pub line: usize,
    pub offset: usize,
}

#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'code, T: Atomic = u8> {
    code: &'code [T],
    /// The position in `code` where the cursor encountered an error
    loc: usize,
}

impl<'code, T: Atomic> CodeLoc<'code, T> {
    pub fn new(code: &'code [T], loc: usize) -> Self {
        Self { code, loc }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Calculate line number and unit offset within that line
    ///
    /// Note: the offset counts character units, not columns. Units are
    /// fixed-width in every supported encoding, but tabs and wide glyphs
    /// still make column numbers a rendering question.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, &element) in self.code.iter().enumerate() {
            if i >= self.loc {
                break;
            }
            if element.is_newline() {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            offset: self.loc - line_start,
        }
    }

    /// Get lines of context around the error position
    /// Returns up to 2 lines before and after the error line
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let text = T::format_slice(self.code);
        let mut lines = Vec::new();

        for (index, content) in text.split('\n').enumerate() {
            let current_line = index + 1;
            if current_line < pos.line.saturating_sub(2) || current_line > pos.line + 2 {
                continue;
            }
            // A trailing newline leaves an empty last piece; only keep it when it holds the error
            if content.is_empty() && current_line != pos.line && index > 0 {
                continue;
            }

            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

/// Why a parser did not match
///
/// Every variant is a plain no-match: character parsers never see malformed
/// input, only units they accept or reject.
#[derive(Debug)]
pub enum ParsicharError<'code, T: Atomic = u8> {
    UnexpectedEndOfFile(CodeLoc<'code, T>),
    AlreadyAtEndOfFile(CodeLoc<'code, T>),
    CannotReadValueAtEof(CodeLoc<'code, T>),
    SyntaxError {
        message: Cow<'static, str>,
        loc: CodeLoc<'code, T>,
    },
    /// A complete parse stopped before the end of the input
    TrailingInput(CodeLoc<'code, T>),
}

impl<'code, T: Atomic> ParsicharError<'code, T> {
    /// Returns the location where this error occurred
    pub fn loc(&self) -> CodeLoc<'code, T> {
        match self {
            ParsicharError::UnexpectedEndOfFile(code_loc)
            | ParsicharError::AlreadyAtEndOfFile(code_loc)
            | ParsicharError::CannotReadValueAtEof(code_loc)
            | ParsicharError::TrailingInput(code_loc) => *code_loc,
            ParsicharError::SyntaxError { loc, .. } => *loc,
        }
    }

    /// Returns the position where this error occurred
    pub fn position(&self) -> usize {
        self.loc().position()
    }

    fn headline(&self) -> Cow<'static, str> {
        match self {
            ParsicharError::UnexpectedEndOfFile(_) => "Unexpected end of file".into(),
            ParsicharError::AlreadyAtEndOfFile(_) => "Already at end of file".into(),
            ParsicharError::CannotReadValueAtEof(_) => "Cannot read value at EOF".into(),
            ParsicharError::SyntaxError { message, .. } => {
                format!("Syntax error: {}", message).into()
            }
            ParsicharError::TrailingInput(_) => "Unconsumed trailing input".into(),
        }
    }
}

impl<'code, T: Atomic> fmt::Display for ParsicharError<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let loc = self.loc();
        let pos = loc.readable_position();
        writeln!(
            f,
            "{} at line {}, offset {} (absolute position: {})",
            self.headline(),
            pos.line,
            pos.offset,
            loc.position()
        )?;
        writeln!(f)?;
        for line in loc.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl<'code, T: Atomic> Error for ParsicharError<'code, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codeloc_eos_empty_data() {
        let empty_data: &[u8] = b"";
        let loc = CodeLoc::new(empty_data, 0);
        let error = ParsicharError::AlreadyAtEndOfFile(loc);

        let display_str = format!("{}", error);
        assert!(display_str.contains("Already at end of file"));
        assert_eq!(error.position(), 0);
    }

    #[test]
    fn test_codeloc_readable_position_eos() {
        let data: &[u8] = b"line1\nline2";
        let loc = CodeLoc::new(data, 11);
        let pos = loc.readable_position();

        assert_eq!(pos.line, 2);
        assert_eq!(pos.offset, 5);
    }

    #[test]
    fn test_context_lines_point_at_error() {
        let data: &[u8] = b"ab\ncd\nef";
        let loc = CodeLoc::new(data, 4);
        let context = loc.context_lines();

        assert_eq!(
            context,
            vec![
                "    1 | ab".to_string(),
                "  > 2 | cd".to_string(),
                "         ^--- here".to_string(),
                "    3 | ef".to_string(),
            ]
        );
    }

    #[test]
    fn test_eos_after_newline_display() {
        let data: &[u8] = b"hello\n";
        let loc = CodeLoc::new(data, 6);
        let error = ParsicharError::CannotReadValueAtEof(loc);

        let display_str = format!("{}", error);
        assert!(display_str.contains("line 2"));
        assert!(display_str.contains("offset 0"));
    }

    #[test]
    fn test_syntax_error_display_wide_units() {
        let data = ['a', '\n', 'β'];
        let error = ParsicharError::SyntaxError {
            message: "expected alpha, found 'β'".into(),
            loc: CodeLoc::new(&data[..], 2),
        };

        let display_str = error.to_string();
        assert!(display_str.contains("Syntax error: expected alpha"));
        assert!(display_str.contains("  > 2 | β"));
        assert_eq!(error.position(), 2);
    }

    #[test]
    fn test_trailing_input_display() {
        let data = [0x78u32, 0x79];
        let error = ParsicharError::TrailingInput(CodeLoc::new(&data[..], 1));

        assert!(error.to_string().contains("Unconsumed trailing input"));
        assert_eq!(error.loc().position(), 1);
    }
}
