//! Format strategies and the option sets for formatting and parsing.

use std::{fmt, sync::Arc};

use strum::AsRefStr;

use crate::descriptor::{FlagMember, UnderlyingType};

/// Delimiter used when none is configured
pub const DEFAULT_DELIMITER: &str = ", ";

/// Strategies used when no format list is configured
pub static DEFAULT_FORMATS: [EnumFormat; 2] = [EnumFormat::Name, EnumFormat::DecimalValue];

/// How a single member is rendered to, and recognised in, text.
///
/// Format lists are tried in order; the first format that yields text for a member wins.
#[derive(Clone, Debug, AsRefStr)]
pub enum EnumFormat {
    /// The declared member name
    Name,
    /// The member value as a decimal number, honouring signedness (`-1` for `0xFF` on `i8`)
    DecimalValue,
    /// The member value as zero padded upper case hex digits (`0003` on `u16`)
    HexadecimalValue,
    /// The display text supplied by the descriptor provider, if the member has one
    Description,
    /// A caller supplied rendering
    Custom(CustomFormat),
}

impl EnumFormat {
    /// Create a custom format from a closure
    ///
    /// ```rust
    /// use flagscope::engine::EnumFormat;
    ///
    /// let lower = EnumFormat::custom(|member| Some(member.name.to_lowercase()));
    /// assert_eq!(lower.as_ref(), "Custom");
    /// ```
    pub fn custom<F>(render: F) -> Self
    where
        F: Fn(&FlagMember) -> Option<String> + Send + Sync + 'static,
    {
        EnumFormat::Custom(CustomFormat(Arc::new(render)))
    }

    /// Render `member`, or `None` if this format has no text for it
    #[must_use]
    pub fn render(&self, member: &FlagMember, underlying: UnderlyingType) -> Option<String> {
        match self {
            EnumFormat::Name => Some(member.name.clone()),
            EnumFormat::DecimalValue => Some(underlying.format_decimal(member.value)),
            EnumFormat::HexadecimalValue => Some(underlying.format_hex(member.value)),
            EnumFormat::Description => member.description.clone(),
            EnumFormat::Custom(custom) => custom.render(member),
        }
    }

    /// Returns true if `token` is the text this format renders for `member`.
    ///
    /// Names, descriptions and custom text honour `ignore_case`; hex digits always compare
    /// case-insensitively, decimal text exactly.
    #[must_use]
    pub fn matches(
        &self,
        member: &FlagMember,
        underlying: UnderlyingType,
        token: &str,
        ignore_case: bool,
    ) -> bool {
        match self {
            EnumFormat::Name => text_eq(&member.name, token, ignore_case),
            EnumFormat::DecimalValue => underlying.format_decimal(member.value) == token,
            EnumFormat::HexadecimalValue => underlying
                .format_hex(member.value)
                .eq_ignore_ascii_case(token),
            EnumFormat::Description => member
                .description
                .as_deref()
                .is_some_and(|text| text_eq(text, token, ignore_case)),
            EnumFormat::Custom(custom) => custom
                .render(member)
                .is_some_and(|text| text_eq(&text, token, ignore_case)),
        }
    }
}

fn text_eq(expected: &str, token: &str, ignore_case: bool) -> bool {
    if ignore_case {
        expected.to_lowercase() == token.to_lowercase()
    } else {
        expected == token
    }
}

/// A caller supplied member rendering, see [`EnumFormat::custom`]
#[derive(Clone)]
pub struct CustomFormat(Arc<dyn Fn(&FlagMember) -> Option<String> + Send + Sync>);

impl CustomFormat {
    /// Run the rendering closure
    #[must_use]
    pub fn render(&self, member: &FlagMember) -> Option<String> {
        (self.0)(member)
    }
}

impl fmt::Debug for CustomFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CustomFormat")
    }
}

/// Configuration for rendering flag combinations as text
///
/// An empty `formats` list means [`DEFAULT_FORMATS`]; an empty `delimiter` means
/// [`DEFAULT_DELIMITER`]. The delimiter is joined verbatim, surrounding whitespace included.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Text placed between rendered members
    pub delimiter: String,
    /// Member formats, tried in order
    pub formats: Vec<EnumFormat>,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER.to_string(),
            formats: Vec::new(),
        }
    }
}

impl FormatOptions {
    /// Creates the default configuration (`", "` delimiter, name then decimal value)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration joining members with a bare `,`
    #[must_use]
    pub fn compact() -> Self {
        Self::default().delimiter(",")
    }

    /// Replace the delimiter
    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Replace the format list
    #[must_use]
    pub fn formats(mut self, formats: impl IntoIterator<Item = EnumFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// The delimiter that is actually joined
    #[must_use]
    pub fn effective_delimiter(&self) -> &str {
        if self.delimiter.is_empty() {
            DEFAULT_DELIMITER
        } else {
            &self.delimiter
        }
    }

    /// The format list that is actually used
    #[must_use]
    pub fn effective_formats(&self) -> &[EnumFormat] {
        effective_formats(&self.formats)
    }
}

/// Configuration for parsing text into flag combinations
///
/// The delimiter is trimmed before splitting, so the default `", "` splits on `,` and
/// accepts both `"A, B"` and `"A,B"`. A delimiter that is empty or only whitespace splits on
/// runs of whitespace instead.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Compare names, descriptions and custom text without regard to case
    pub ignore_case: bool,
    /// Text separating members
    pub delimiter: String,
    /// Member formats, tried in order before the numeric fallback
    pub formats: Vec<EnumFormat>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            ignore_case: false,
            delimiter: DEFAULT_DELIMITER.to_string(),
            formats: Vec::new(),
        }
    }
}

impl ParseOptions {
    /// Creates the default configuration (case-sensitive, `,` delimiter, name then decimal)
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a case-insensitive configuration
    #[must_use]
    pub fn case_insensitive() -> Self {
        Self::default().ignore_case(true)
    }

    /// Set case sensitivity
    #[must_use]
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.ignore_case = ignore_case;
        self
    }

    /// Replace the delimiter
    #[must_use]
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    /// Replace the format list
    #[must_use]
    pub fn formats(mut self, formats: impl IntoIterator<Item = EnumFormat>) -> Self {
        self.formats = formats.into_iter().collect();
        self
    }

    /// The trimmed delimiter, or `None` when tokens are split on whitespace
    #[must_use]
    pub fn effective_delimiter(&self) -> Option<&str> {
        match self.delimiter.trim() {
            "" => None,
            trimmed => Some(trimmed),
        }
    }

    /// The format list that is actually used
    #[must_use]
    pub fn effective_formats(&self) -> &[EnumFormat] {
        effective_formats(&self.formats)
    }
}

fn effective_formats(formats: &[EnumFormat]) -> &[EnumFormat] {
    if formats.is_empty() {
        &DEFAULT_FORMATS
    } else {
        formats
    }
}
