use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque CSS color value.
///
/// Anything a stylesheet accepts as a `<color>` is stored verbatim: named
/// colors, `#rrggbb`, `rgb(...)`, `rgba(...)`, `hsl(...)`. Nothing here
/// parses or validates the text; that belongs to whichever picker produced it.
///
/// Serializes as a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CssColor(String);

impl CssColor {
    #[inline]
    pub fn new(css: impl Into<String>) -> Self {
        Self(css.into())
    }

    #[inline]
    pub fn black() -> Self {
        Self::new("black")
    }

    #[inline]
    pub fn white() -> Self {
        Self::new("white")
    }

    /// `#rrggbb`, the form `<input type="color">` reports.
    pub fn hex(r: u8, g: u8, b: u8) -> Self {
        Self(format!("#{r:02x}{g:02x}{b:02x}"))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_string(self) -> String {
        self.0
    }
}

/// `#000000`: what a color picker reports before the user touches it.
impl Default for CssColor {
    fn default() -> Self {
        Self::hex(0, 0, 0)
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CssColor {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CssColor {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl AsRef<str> for CssColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_text_through_verbatim() {
        assert_eq!(CssColor::new("not even a color").as_str(), "not even a color");
        assert_eq!(CssColor::from("rgb(0,0,0)").to_string(), "rgb(0,0,0)");
    }

    #[test]
    fn default_is_black_hex() {
        assert_eq!(CssColor::default().as_str(), "#000000");
    }

    #[test]
    fn hex_is_lowercase_two_digit() {
        assert_eq!(CssColor::hex(255, 10, 0).as_str(), "#ff0a00");
    }
}
