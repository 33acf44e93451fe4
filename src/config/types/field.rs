//! Config field path.

use owo_colors::{OwoColorize, Stream};
use std::fmt;

/// A dotted config field path, e.g. `theme.navbar.title`.
///
/// Displayed in backticks, highlighted when the terminal supports color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath<'a>(pub &'a str);

impl<'a> FieldPath<'a> {
    #[inline]
    pub const fn new(path: &'a str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'a str {
        self.0
    }
}

impl fmt::Display for FieldPath<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let quoted = format!("`{}`", self.0);
        write!(
            f,
            "{}",
            quoted.if_supports_color(Stream::Stderr, |t| t.bright_blue())
        )
    }
}

impl AsRef<str> for FieldPath<'_> {
    fn as_ref(&self) -> &str {
        self.0
    }
}
