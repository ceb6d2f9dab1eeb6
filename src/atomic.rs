/// Trait for the character units parsers consume
///
/// One unit is one logical character of an encoding: `u8` for the narrow
/// encodings, `char` for standard wide and `u32` for full Unicode.
/// This enables generic error formatting and position calculation.
pub trait Atomic:
    Copy + Clone + PartialEq + PartialOrd + std::fmt::Debug + std::fmt::Display + 'static
{
    /// The newline character/element for this atomic type
    const NEWLINE: Self;

    /// Lift an ASCII byte into this unit type
    fn from_ascii(byte: u8) -> Self;

    /// Human readable form of a single unit for error messages
    fn describe(self) -> String;

    /// Convert a slice of elements to a displayable string for error reporting
    fn format_slice(slice: &[Self]) -> String;

    fn is_newline(self) -> bool {
        self == Self::NEWLINE
    }
}

impl Atomic for u8 {
    const NEWLINE: Self = b'\n';

    fn from_ascii(byte: u8) -> Self {
        byte
    }

    fn describe(self) -> String {
        if self.is_ascii_graphic() || self == b' ' {
            format!("'{}'", self as char)
        } else {
            format!("0x{:02X}", self)
        }
    }

    // Narrow units render as Latin-1 so no byte is lost in diagnostics
    fn format_slice(slice: &[Self]) -> String {
        slice.iter().map(|&b| b as char).collect()
    }
}

impl Atomic for char {
    const NEWLINE: Self = '\n';

    fn from_ascii(byte: u8) -> Self {
        byte as char
    }

    fn describe(self) -> String {
        if self.is_control() {
            format!("U+{:04X}", self as u32)
        } else {
            format!("'{}'", self)
        }
    }

    fn format_slice(slice: &[Self]) -> String {
        slice.iter().collect()
    }
}

impl Atomic for u32 {
    const NEWLINE: Self = 0x0A;

    fn from_ascii(byte: u8) -> Self {
        byte as u32
    }

    fn describe(self) -> String {
        match char::from_u32(self) {
            Some(c) if !c.is_control() => format!("'{}' (U+{:04X})", c, self),
            _ => format!("U+{:04X}", self),
        }
    }

    fn format_slice(slice: &[Self]) -> String {
        slice
            .iter()
            .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect()
    }
}
