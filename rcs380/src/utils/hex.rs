//! Hexadecimal helpers used for frame logging and identifier display.

use std::fmt;

/// Convert a byte slice to a lowercase hex string without separators.
///
/// Example: `&[0xde, 0xad]` -> `"dead"`
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    format!("{}", HexDump::compact(bytes))
}

/// Lazily formatted hex view of a byte slice. Formatting only happens when
/// the value is actually displayed, so it is cheap to pass to `log` macros
/// whose level is disabled.
#[derive(Debug, Clone, Copy)]
pub struct HexDump<'a>(pub &'a [u8]);

impl<'a> HexDump<'a> {
    /// A view that renders without separators.
    pub fn compact(bytes: &'a [u8]) -> Compact<'a> {
        Compact(bytes)
    }
}

impl fmt::Display for HexDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// See [`HexDump::compact`].
#[derive(Debug, Clone, Copy)]
pub struct Compact<'a>(&'a [u8]);

impl fmt::Display for Compact<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{:02x}", b))
    }
}
