//! Integration tests for the typed flag operations.
//!
//! The flag types here implement `FlagEnum` by hand, the way a type without `bitflags!`
//! would, and exercise the public surface end to end: descriptor build, decomposition,
//! bit algebra, formatting and parsing.

use flagscope::{
    descriptor::{descriptor, FlagDescriptor, FlagEnum},
    flagenums, EnumFormat, Error, FormatOptions, ParseOptions, Result,
};

/// Combination declared before its components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Access(u8);

impl Access {
    const NONE: Access = Access(0);
    const READ_WRITE: Access = Access(3);
    const READ: Access = Access(1);
    const WRITE: Access = Access(2);
    const EXECUTE: Access = Access(4);
}

impl FlagEnum for Access {
    type Underlying = u8;

    fn describe() -> Result<FlagDescriptor> {
        FlagDescriptor::builder::<u8>("Access")
            .flags(true)
            .member("None", 0)
            .member("ReadWrite", 3)
            .member("Read", 1)
            .member("Write", 2)
            .member("Execute", 4)
            .build()
    }

    fn to_underlying(self) -> u8 {
        self.0
    }

    fn from_underlying(value: u8) -> Self {
        Access(value)
    }
}

/// Same members, combination declared last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Share(u16);

impl FlagEnum for Share {
    type Underlying = u16;

    fn describe() -> Result<FlagDescriptor> {
        FlagDescriptor::builder::<u16>("Share")
            .flags(true)
            .member_with_description("Read", 1, "Shared read")
            .member_with_description("Write", 2, "Shared write")
            .member_with_description("Delete", 4, "Shared delete")
            .member("ReadWrite", 3)
            .build()
    }

    fn to_underlying(self) -> u16 {
        self.0
    }

    fn from_underlying(value: u16) -> Self {
        Share(value)
    }
}

/// Provider that always fails to describe its type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Broken(u32);

impl FlagEnum for Broken {
    type Underlying = u32;

    fn describe() -> Result<FlagDescriptor> {
        FlagDescriptor::builder::<u32>("Broken")
            .member("Twice", 1)
            .member("Twice", 2)
            .build()
    }

    fn to_underlying(self) -> u32 {
        self.0
    }

    fn from_underlying(value: u32) -> Self {
        Broken(value)
    }
}

#[test]
fn test_declared_combination_decomposes_whole() -> Result<()> {
    assert_eq!(flagenums::get_flags(Access(3))?, Some(vec![Access::READ_WRITE]));
    assert_eq!(
        flagenums::format_as_flags(Access(3))?.as_deref(),
        Some("ReadWrite")
    );
    assert_eq!(flagenums::parse::<Access>("Read, Write")?, Access(3));
    assert_eq!(flagenums::parse::<Access>("Read,Write")?, Access(3));
    assert!(!flagenums::is_valid_combination(Access(8))?);

    Ok(())
}

#[test]
fn test_components_declared_first() -> Result<()> {
    assert_eq!(
        flagenums::get_flags(Share(3))?,
        Some(vec![Share(1), Share(2)])
    );
    assert_eq!(
        flagenums::format_as_flags(Share(7))?.as_deref(),
        Some("Read, Write, Delete")
    );
    assert_eq!(flagenums::get_flag_count(Share(7))?, Some(3));

    // No zero member declared
    assert_eq!(flagenums::get_flags(Share(0))?, Some(vec![]));
    assert_eq!(flagenums::format_as_flags(Share(0))?.as_deref(), Some("0"));
    assert_eq!(flagenums::format_as_flags(Access::NONE)?.as_deref(), Some("None"));

    Ok(())
}

#[test]
fn test_parse_does_not_enforce_validity() -> Result<()> {
    assert_eq!(flagenums::parse::<Access>("5")?, Access(5));
    assert_eq!(flagenums::parse::<Access>("Read, 8")?, Access(9));
    assert!(!flagenums::is_valid_combination(flagenums::parse::<Access>("8")?)?);

    assert_eq!(flagenums::try_parse::<Access>("Unknown")?, None);
    assert_eq!(
        flagenums::parse_or_default("Unknown", Access::EXECUTE)?,
        Access::EXECUTE
    );
    assert_eq!(
        flagenums::parse::<Access>("Read, Unknown"),
        Err(Error::UnresolvedFlagName("Unknown".to_string()))
    );
    assert_eq!(
        flagenums::parse::<Access>("   "),
        Err(Error::EmptyOrWhitespace("text"))
    );
    assert!(matches!(
        flagenums::parse::<Access>("1000"),
        Err(Error::Overflow { .. })
    ));

    Ok(())
}

#[test]
fn test_round_trip_of_valid_values() -> Result<()> {
    let format = FormatOptions::new().delimiter(" | ");
    let parse = ParseOptions::new().delimiter("|");

    for bits in 0..=7u8 {
        let text = flagenums::format_as_flags_with(Access(bits), &format)?
            .expect("valid combinations always format");
        assert_eq!(flagenums::parse_with::<Access>(&text, &parse)?, Access(bits));

        let text = flagenums::format_as_flags(Share(u16::from(bits)))?
            .expect("valid combinations always format");
        assert_eq!(flagenums::parse::<Share>(&text)?, Share(u16::from(bits)));
    }

    Ok(())
}

/// Two overlapping combinations and no single bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Overlap(u8);

impl FlagEnum for Overlap {
    type Underlying = u8;

    fn describe() -> Result<FlagDescriptor> {
        FlagDescriptor::builder::<u8>("Overlap")
            .flags(true)
            .member("A", 0b011)
            .member("B", 0b110)
            .build()
    }

    fn to_underlying(self) -> u8 {
        self.0
    }

    fn from_underlying(value: u8) -> Self {
        Overlap(value)
    }
}

#[test]
fn test_overlapping_combinations_round_trip() -> Result<()> {
    assert!(flagenums::is_valid_combination(Overlap(0b101))?);
    assert_eq!(flagenums::get_flags(Overlap(0b101))?, Some(vec![Overlap(0b101)]));

    let text = flagenums::format_as_flags(Overlap(0b101))?.expect("valid value formats");
    assert_eq!(text, "5");
    assert_eq!(flagenums::parse::<Overlap>(&text)?, Overlap(0b101));

    for bits in 0..=7u8 {
        let text = flagenums::format_as_flags(Overlap(bits))?.expect("valid value formats");
        assert_eq!(flagenums::parse::<Overlap>(&text)?, Overlap(bits));
    }
    assert_eq!(flagenums::format_as_flags(Overlap(0b1000))?, None);

    Ok(())
}

#[test]
fn test_formats_and_case() -> Result<()> {
    let described = FormatOptions::new().formats([EnumFormat::Description]);
    assert_eq!(
        flagenums::format_as_flags_with(Share(5), &described)?.as_deref(),
        Some("Shared read, Shared delete")
    );

    let hex = FormatOptions::compact().formats([EnumFormat::HexadecimalValue]);
    assert_eq!(
        flagenums::format_as_flags_with(Share(6), &hex)?.as_deref(),
        Some("0002,0004")
    );

    let options = ParseOptions::case_insensitive().formats([EnumFormat::Name, EnumFormat::Description]);
    assert_eq!(
        flagenums::parse_with::<Share>("shared DELETE, write", &options)?,
        Share(6)
    );
    assert_eq!(flagenums::try_parse::<Share>("write")?, None);

    Ok(())
}

#[test]
fn test_algebra() -> Result<()> {
    let value = flagenums::set_flags([Access::READ, Access::EXECUTE])?;
    assert_eq!(value, Access(5));
    assert!(flagenums::has_any_flags(value)?);
    assert!(!flagenums::has_any_flags(Access::NONE)?);
    assert!(!flagenums::has_all_flags(value)?);
    assert!(flagenums::has_all_flags(flagenums::all_flags::<Access>()?)?);
    assert!(flagenums::has_all_flags_in(value, Access::EXECUTE)?);
    assert!(flagenums::has_any_flags_in(value, Access::READ_WRITE)?);
    assert!(!flagenums::has_all_flags_in(value, Access::READ_WRITE)?);
    assert_eq!(flagenums::toggle_all_flags(value)?, Access::WRITE);
    assert_eq!(flagenums::toggle_flags(value, Access::READ_WRITE)?, Access(6));
    assert_eq!(flagenums::common_flags(value, Access::READ_WRITE)?, Access::READ);
    assert_eq!(flagenums::clear_flags(value, Access::READ)?, Access::EXECUTE);

    assert_eq!(
        flagenums::set_flags([Access::READ, Access(0x20)]),
        Err(Error::InvalidFlagCombination {
            argument: "values[1]".to_string(),
            value: 0x20
        })
    );
    assert!(matches!(
        flagenums::clear_flags(Access(8), Access::READ),
        Err(Error::InvalidFlagCombination { .. })
    ));
    // Formatting an invalid value is not an error
    assert_eq!(flagenums::format_as_flags(Access(8))?, None);

    Ok(())
}

#[test]
fn test_failed_descriptor() {
    assert!(matches!(
        flagenums::is_flag_enum::<Broken>(),
        Err(Error::NotAnEnumeration { .. })
    ));
    assert!(matches!(
        flagenums::parse::<Broken>("Twice"),
        Err(Error::NotAnEnumeration { .. })
    ));
    // A type that cannot be described is not the same as text that does not resolve
    assert!(matches!(
        flagenums::try_parse::<Broken>("Twice"),
        Err(Error::NotAnEnumeration { .. })
    ));
    assert!(matches!(
        flagenums::parse_or_default("1", Broken(9)),
        Err(Error::NotAnEnumeration { .. })
    ));
    assert!(matches!(
        flagenums::try_parse_with::<Broken>("", &ParseOptions::case_insensitive()),
        Err(Error::NotAnEnumeration { .. })
    ));
}

#[test]
fn test_descriptor_metadata() -> Result<()> {
    let access = descriptor::<Access>()?;
    assert_eq!(access.type_name(), "Access");
    assert_eq!(access.all_flags(), 7);
    assert!(access.is_flag_enum());
    assert!(flagenums::is_flag_enum::<Access>()?);

    let share = descriptor::<Share>()?;
    assert_eq!(share.members().len(), 4);
    assert!(share.member_by_name("readwrite", true).is_some());
    assert!(share.member_by_name("readwrite", false).is_none());

    Ok(())
}
