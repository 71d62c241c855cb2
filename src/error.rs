use thiserror::Error;

use crate::descriptor::UnderlyingType;

macro_rules! not_an_enumeration {
    // Single string version
    ($type_name:expr, $msg:expr) => {
        crate::Error::NotAnEnumeration {
            type_name: $type_name.to_string(),
            reason: $msg.to_string(),
        }
    };

    // Format string with arguments version
    ($type_name:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::NotAnEnumeration {
            type_name: $type_name.to_string(),
            reason: format!($fmt, $($arg)*),
        }
    };
}

macro_rules! invalid_combination {
    ($argument:expr, $value:expr) => {
        crate::Error::InvalidFlagCombination {
            argument: $argument.to_string(),
            value: $value,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// # Error Categories
///
/// ## Type Errors
/// - [`Error::NotAnEnumeration`] - The descriptor provider could not describe a type
///
/// ## Value Errors
/// - [`Error::InvalidFlagCombination`] - An operand has bits outside the declared flags
///
/// ## Parse Errors
/// - [`Error::EmptyOrWhitespace`] - Input text was empty or blank
/// - [`Error::UnresolvedFlagName`] - A token matched no member and was not a number
/// - [`Error::Overflow`] - A numeric literal does not fit the underlying type
///
/// Formatting an invalid combination is not an error; it yields `None`.
///
/// # Examples
///
/// ```rust
/// use flagscope::{descriptor::FlagDescriptor, engine::ParseOptions, Error};
///
/// let descriptor = FlagDescriptor::builder::<u8>("Access")
///     .member("Read", 1)
///     .member("Write", 2)
///     .build()?;
///
/// match descriptor.parse("Read, Delete", &ParseOptions::default()) {
///     Ok(value) => println!("parsed {value}"),
///     Err(Error::UnresolvedFlagName(token)) => println!("unknown flag '{token}'"),
///     Err(e) => println!("other error: {e}"),
/// }
/// # Ok::<(), flagscope::Error>(())
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The type could not be described as a valid enumeration.
    ///
    /// Raised by descriptor providers, e.g. when two members share a name or a member value
    /// does not fit the underlying integer. Fatal to the call that triggered the build.
    #[error("{type_name} is not a valid enumeration: {reason}")]
    NotAnEnumeration {
        /// Name of the type that failed to describe
        type_name: String,
        /// What made the description invalid
        reason: String,
    },

    /// A value required to be a valid flag combination has bits outside the declared flags.
    #[error("Argument '{argument}' is not a valid flag combination - 0x{value:X}")]
    InvalidFlagCombination {
        /// Name of the offending operand (`value`, `mask`, `values[2]`, ...)
        argument: String,
        /// Raw bit pattern of the operand
        value: u64,
    },

    /// Text input was empty or consisted only of whitespace.
    ///
    /// The associated value names the argument.
    #[error("Argument '{0}' must not be empty or whitespace")]
    EmptyOrWhitespace(&'static str),

    /// A parse token matched no member and was not a numeric literal.
    ///
    /// The associated value is the trimmed token.
    #[error("'{0}' is not a declared flag name or numeric value")]
    UnresolvedFlagName(String),

    /// A numeric literal does not fit the underlying integer type.
    #[error("'{literal}' is outside the range of {underlying}")]
    Overflow {
        /// The literal as it appeared in the input
        literal: String,
        /// The type it had to fit
        underlying: UnderlyingType,
    },
}
