use tracing::trace;

use crate::{
    descriptor::FlagDescriptor,
    engine::{EnumFormat, ParseOptions},
    Error, Result,
};

impl FlagDescriptor {
    /// Parse a delimited list of member names or numbers into a raw value.
    ///
    /// Tokens are split on the trimmed delimiter (or on whitespace runs if the delimiter is
    /// blank), trimmed, and empty tokens are skipped. Each token is resolved by the formats in
    /// `options`, in order, then as a numeric literal of the underlying type. The resolved
    /// values are OR-ed together; the result is not checked against the declared flags, so
    /// numeric tokens outside them survive a round trip.
    ///
    /// # Errors
    /// - [`Error::EmptyOrWhitespace`] if `text` is empty or blank
    /// - [`Error::UnresolvedFlagName`] if a token matches nothing, or no token remains
    /// - [`Error::Overflow`] if a numeric token does not fit the underlying type
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flagscope::{descriptor::FlagDescriptor, engine::ParseOptions};
    ///
    /// let descriptor = FlagDescriptor::builder::<u8>("Access")
    ///     .member("Read", 1)
    ///     .member("Write", 2)
    ///     .build()?;
    ///
    /// assert_eq!(descriptor.parse("Read, Write", &ParseOptions::default())?, 3);
    /// assert_eq!(descriptor.parse("write", &ParseOptions::case_insensitive())?, 2);
    /// assert_eq!(descriptor.parse("Read 8", &ParseOptions::new().delimiter(" "))?, 9);
    /// # Ok::<(), flagscope::Error>(())
    /// ```
    pub fn parse(&self, text: &str, options: &ParseOptions) -> Result<u64> {
        if text.trim().is_empty() {
            return Err(Error::EmptyOrWhitespace("text"));
        }

        let tokens: Vec<&str> = match options.effective_delimiter() {
            Some(delimiter) => text
                .split(delimiter)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .collect(),
            None => text.split_whitespace().collect(),
        };

        if tokens.is_empty() {
            return Err(Error::UnresolvedFlagName(text.trim().to_string()));
        }

        tokens.into_iter().try_fold(0u64, |combined, token| {
            Ok(combined | self.resolve_token(token, options)?)
        })
    }

    /// Like [`Self::parse`], returning `None` on any failure
    #[must_use]
    pub fn try_parse(&self, text: &str, options: &ParseOptions) -> Option<u64> {
        self.parse(text, options).ok()
    }

    /// Like [`Self::parse`], returning `default` on any failure
    #[must_use]
    pub fn parse_or_default(&self, text: &str, default: u64, options: &ParseOptions) -> u64 {
        self.try_parse(text, options).unwrap_or(default)
    }

    fn resolve_token(&self, token: &str, options: &ParseOptions) -> Result<u64> {
        for format in options.effective_formats() {
            let member = match format {
                EnumFormat::Name => self.member_by_name(token, options.ignore_case),
                _ => self.members().iter().find(|member| {
                    format.matches(member, self.underlying(), token, options.ignore_case)
                }),
            };

            if let Some(member) = member {
                return Ok(member.value);
            }
        }

        match self.underlying().parse_literal(token)? {
            Some(value) => Ok(value),
            None => {
                trace!(
                    type_name = self.type_name(),
                    token,
                    "token matched no member and is not numeric"
                );
                Err(Error::UnresolvedFlagName(token.to_string()))
            }
        }
    }
}
