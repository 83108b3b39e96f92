//! ANSI color codes for terminal dumps of tokens and trees.
//!
//! - Blue: token types, rule ids
//! - Green: token text
//! - Red: invalid nodes
//! - Dim: positions and other metadata

/// ANSI palette for the CLI dumps.
///
/// Standard 16-color codes only, readable on light and dark terminals.
/// [`Colors::OFF`] turns every field into an empty string, so callers
/// interpolate the fields unconditionally.
#[derive(Clone, Copy, Debug)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub red: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        red: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        blue: "",
        green: "",
        red: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
