//! Runtime configuration.

/// Knobs a host can set before running generated code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeOptions {
    /// Enumerate every Unicode scalar value in [`all_chars`](crate::ranges::all_chars)
    /// instead of the 16-bit code-unit range.
    pub unicode_chars: bool,
    /// Default value of the character type.
    pub default_char: char,
}

/// Environment variable enabling `unicode_chars`.
pub const UNICODE_CHARS_VAR: &str = "DFY_UNICODE_CHARS";

/// Environment variable overriding `default_char`.
pub const DEFAULT_CHAR_VAR: &str = "DFY_DEFAULT_CHAR";

impl Default for RuntimeOptions {
    fn default() -> Self {
        RuntimeOptions {
            unicode_chars: false,
            default_char: 'D',
        }
    }
}

impl RuntimeOptions {
    /// Defaults overridden by `DFY_UNICODE_CHARS` and `DFY_DEFAULT_CHAR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// A non-empty `DFY_UNICODE_CHARS` enables unicode chars; the first
    /// character of `DFY_DEFAULT_CHAR` becomes the default char. Empty
    /// values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = RuntimeOptions::default();
        if let Some(flag) = lookup(UNICODE_CHARS_VAR) {
            options.unicode_chars = !flag.is_empty();
        }
        if let Some(c) = lookup(DEFAULT_CHAR_VAR).and_then(|v| v.chars().next()) {
            options.default_char = c;
        }
        options
    }
}
