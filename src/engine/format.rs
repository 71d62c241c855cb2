use crate::{
    descriptor::{FlagDescriptor, FlagMember},
    engine::{EnumFormat, FormatOptions},
};

impl FlagDescriptor {
    /// Render `value` as a delimited list of its members.
    ///
    /// Returns `None` if `value` is not a valid combination; this is a "no representation"
    /// signal, not an error. Zero renders as the zero member, or `"0"` if none is declared.
    /// Each member uses the first format in `options` that has text for it, falling back to
    /// its decimal value. Bits no member could claim are appended as one decimal number,
    /// which [`Self::parse`] reads back through its numeric fallback.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use flagscope::{descriptor::FlagDescriptor, engine::FormatOptions};
    ///
    /// let descriptor = FlagDescriptor::builder::<u8>("Access")
    ///     .member("Read", 1)
    ///     .member("Write", 2)
    ///     .build()?;
    ///
    /// let options = FormatOptions::default();
    /// assert_eq!(descriptor.format_as_flags(3, &options).as_deref(), Some("Read, Write"));
    /// assert_eq!(descriptor.format_as_flags(0, &options).as_deref(), Some("0"));
    /// assert_eq!(descriptor.format_as_flags(4, &options), None);
    /// # Ok::<(), flagscope::Error>(())
    /// ```
    #[must_use]
    pub fn format_as_flags(&self, value: u64, options: &FormatOptions) -> Option<String> {
        let decomposition = self.decompose(value)?;
        if decomposition.is_empty() {
            return Some(
                self.zero_member()
                    .map_or_else(|| "0".to_string(), |member| member.name.clone()),
            );
        }

        let formats = options.effective_formats();
        let mut rendered: Vec<String> = decomposition
            .members
            .iter()
            .map(|member| self.format_member(member, formats))
            .collect();
        if decomposition.remainder != 0 {
            rendered.push(self.underlying().format_decimal(decomposition.remainder));
        }

        Some(rendered.join(options.effective_delimiter()))
    }

    /// Render a single member with the first applicable format
    #[must_use]
    pub fn format_member(&self, member: &FlagMember, formats: &[EnumFormat]) -> String {
        formats
            .iter()
            .find_map(|format| format.render(member, self.underlying()))
            .unwrap_or_else(|| self.underlying().format_decimal(member.value))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        descriptor::FlagDescriptor,
        engine::{EnumFormat, FormatOptions, ParseOptions},
        test::access_descriptor,
    };

    #[test]
    fn test_format_names() {
        let descriptor = access_descriptor();
        let options = FormatOptions::default();

        assert_eq!(descriptor.format_as_flags(3, &options).unwrap(), "ReadWrite");
        assert_eq!(
            descriptor.format_as_flags(7, &options).unwrap(),
            "ReadWrite, Execute"
        );
        assert_eq!(descriptor.format_as_flags(0, &options).unwrap(), "None");
        assert_eq!(
            descriptor
                .format_as_flags(5, &FormatOptions::compact())
                .unwrap(),
            "Read,Execute"
        );
        assert!(descriptor.format_as_flags(8, &options).is_none());
    }

    #[test]
    fn test_format_strategies() {
        let descriptor = FlagDescriptor::builder::<i16>("Styled")
            .member_with_description("Low", 1, "low bit")
            .member("High", i16::MIN)
            .build()
            .unwrap();

        let decimal = FormatOptions::new().formats([EnumFormat::DecimalValue]);
        assert_eq!(
            descriptor.format_as_flags(0x8001, &decimal).unwrap(),
            "1, -32768"
        );

        let hex = FormatOptions::new()
            .delimiter(" | ")
            .formats([EnumFormat::HexadecimalValue]);
        assert_eq!(descriptor.format_as_flags(0x8001, &hex).unwrap(), "0001 | 8000");

        let described = FormatOptions::new().formats([EnumFormat::Description, EnumFormat::Name]);
        assert_eq!(
            descriptor.format_as_flags(0x8001, &described).unwrap(),
            "low bit, High"
        );

        let only_description = FormatOptions::new().formats([EnumFormat::Description]);
        assert_eq!(
            descriptor.format_as_flags(0x8000, &only_description).unwrap(),
            "-32768"
        );

        let custom = FormatOptions::new().formats([EnumFormat::custom(|member| {
            Some(format!("[{}]", member.name))
        })]);
        assert_eq!(descriptor.format_as_flags(1, &custom).unwrap(), "[Low]");
    }

    #[test]
    fn test_format_zero_without_member() {
        let descriptor = FlagDescriptor::builder::<u32>("NoZero")
            .member("A", 1)
            .build()
            .unwrap();
        assert_eq!(
            descriptor
                .format_as_flags(0, &FormatOptions::default())
                .unwrap(),
            "0"
        );
    }

    #[test]
    fn test_format_unclaimed_bits() {
        let descriptor = FlagDescriptor::builder::<u8>("Overlap")
            .member("A", 0b011)
            .member("B", 0b110)
            .build()
            .unwrap();
        let format = FormatOptions::default();
        let parse = ParseOptions::default();

        assert_eq!(descriptor.format_as_flags(0b101, &format).unwrap(), "5");
        assert_eq!(descriptor.format_as_flags(0b111, &format).unwrap(), "A, 4");
        for value in 0..=7u64 {
            let text = descriptor.format_as_flags(value, &format).unwrap();
            assert_eq!(descriptor.parse(&text, &parse).unwrap(), value);
        }
    }
}
