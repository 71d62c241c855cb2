//! Generic flag operations for any [`FlagEnum`] type.
//!
//! Each function fetches the cached descriptor of `T` (building it on first use), converts the
//! typed operands to raw bit patterns, runs the matching [`FlagDescriptor`](crate::descriptor::FlagDescriptor) operation and
//! converts the result back. A descriptor that fails to build surfaces as
//! [`Error::NotAnEnumeration`](crate::Error::NotAnEnumeration) before anything else happens.
//!
//! # Examples
//!
//! ```rust
//! use flagscope::{flagenums, impl_flag_enum};
//!
//! flagscope::bitflags::bitflags! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub struct FileShare: u32 {
//!         const NONE = 0;
//!         const READ = 1;
//!         const WRITE = 2;
//!         const DELETE = 4;
//!     }
//! }
//! impl_flag_enum!(FileShare);
//!
//! let share = flagenums::set_flags([FileShare::READ, FileShare::DELETE])?;
//! assert!(flagenums::has_all_flags_in(share, FileShare::READ)?);
//! assert_eq!(flagenums::format_as_flags(share)?.as_deref(), Some("READ, DELETE"));
//! assert_eq!(flagenums::parse::<FileShare>("READ, DELETE")?, share);
//! assert_eq!(flagenums::try_parse::<FileShare>("APPEND")?, None);
//! # Ok::<(), flagscope::Error>(())
//! ```

use crate::{
    descriptor::{descriptor, FlagEnum},
    engine::{FormatOptions, ParseOptions},
    Result,
};

/// Returns true if the provider of `T` marked it as a flag set
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn is_flag_enum<T: FlagEnum>() -> Result<bool> {
    Ok(descriptor::<T>()?.is_flag_enum())
}

/// The union of every declared flag of `T`
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn all_flags<T: FlagEnum>() -> Result<T> {
    Ok(T::from_raw(descriptor::<T>()?.all_flags()))
}

/// Returns true if every bit of `value` belongs to a declared flag
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn is_valid_combination<T: FlagEnum>(value: T) -> Result<bool> {
    Ok(descriptor::<T>()?.is_valid_combination(value.to_raw()))
}

/// Decompose `value` into declared flags, `None` if it is not a valid combination
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn get_flags<T: FlagEnum>(value: T) -> Result<Option<Vec<T>>> {
    Ok(descriptor::<T>()?
        .get_flags(value.to_raw())
        .map(|flags| flags.into_iter().map(T::from_raw).collect()))
}

/// Number of declared flags `value` decomposes into, `None` if it is not a valid combination
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn get_flag_count<T: FlagEnum>(value: T) -> Result<Option<usize>> {
    Ok(descriptor::<T>()?.get_flag_count(value.to_raw()))
}

/// Returns true if `value` has any flag set
///
/// # Errors
/// Returns [`crate::Error::InvalidFlagCombination`] if `value` is not a valid combination.
pub fn has_any_flags<T: FlagEnum>(value: T) -> Result<bool> {
    descriptor::<T>()?.has_any_flags(value.to_raw())
}

/// Returns true if `value` has any flag of `mask` set
///
/// # Errors
/// Returns [`crate::Error::InvalidFlagCombination`] if an operand is not a valid combination.
pub fn has_any_flags_in<T: FlagEnum>(value: T, mask: T) -> Result<bool> {
    descriptor::<T>()?.has_any_flags_in(value.to_raw(), mask.to_raw())
}

/// Returns true if `value` has every declared flag set
///
/// # Errors
/// Returns [`crate::Error::InvalidFlagCombination`] if `value` is not a valid combination.
pub fn has_all_flags<T: FlagEnum>(value: T) -> Result<bool> {
    descriptor::<T>()?.has_all_flags(value.to_raw())
}

/// Returns true if `value` has every flag of `mask` set
///
/// # Errors
/// Returns [`crate::Error::InvalidFlagCombination`] if an operand is not a valid combination.
pub fn has_all_flags_in<T: FlagEnum>(value: T, mask: T) -> Result<bool> {
    descriptor::<T>()?.has_all_flags_in(value.to_raw(), mask.to_raw())
}

/// Flip every declared flag of `value`
///
/// # Errors
/// Returns [`crate::Error::InvalidFlagCombination`] if `value` is not a valid combination.
pub fn toggle_all_flags<T: FlagEnum>(value: T) -> Result<T> {
    descriptor::<T>()?
        .toggle_all_flags(value.to_raw())
        .map(T::from_raw)
}

/// Flip the flags of `mask` in `value`
///
/// # Errors
/// Returns [`crate::Error::InvalidFlagCombination`] if an operand is not a valid combination.
pub fn toggle_flags<T: FlagEnum>(value: T, mask: T) -> Result<T> {
    descriptor::<T>()?
        .toggle_flags(value.to_raw(), mask.to_raw())
        .map(T::from_raw)
}

/// Flags present in both `value` and `mask`
///
/// # Errors
/// Returns [`crate::Error::InvalidFlagCombination`] if an operand is not a valid combination.
pub fn common_flags<T: FlagEnum>(value: T, mask: T) -> Result<T> {
    descriptor::<T>()?
        .common_flags(value.to_raw(), mask.to_raw())
        .map(T::from_raw)
}

/// Union of all `values`
///
/// # Errors
/// Returns [`crate::Error::InvalidFlagCombination`] naming the first invalid operand.
pub fn set_flags<T, I>(values: I) -> Result<T>
where
    T: FlagEnum,
    I: IntoIterator<Item = T>,
{
    descriptor::<T>()?
        .set_flags(values.into_iter().map(T::to_raw))
        .map(T::from_raw)
}

/// `value` with the flags of `mask` removed
///
/// # Errors
/// Returns [`crate::Error::InvalidFlagCombination`] if an operand is not a valid combination.
pub fn clear_flags<T: FlagEnum>(value: T, mask: T) -> Result<T> {
    descriptor::<T>()?
        .clear_flags(value.to_raw(), mask.to_raw())
        .map(T::from_raw)
}

/// Render `value` with the default [`FormatOptions`], `None` if it is not a valid combination
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn format_as_flags<T: FlagEnum>(value: T) -> Result<Option<String>> {
    format_as_flags_with(value, &FormatOptions::default())
}

/// Render `value`, `None` if it is not a valid combination
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn format_as_flags_with<T: FlagEnum>(value: T, options: &FormatOptions) -> Result<Option<String>> {
    Ok(descriptor::<T>()?.format_as_flags(value.to_raw(), options))
}

/// Parse `text` with the default [`ParseOptions`]
///
/// # Errors
/// See [`FlagDescriptor::parse`](crate::descriptor::FlagDescriptor::parse).
pub fn parse<T: FlagEnum>(text: &str) -> Result<T> {
    parse_with(text, &ParseOptions::default())
}

/// Parse `text` into a value of `T`
///
/// # Errors
/// See [`FlagDescriptor::parse`](crate::descriptor::FlagDescriptor::parse); additionally [`crate::Error::NotAnEnumeration`].
pub fn parse_with<T: FlagEnum>(text: &str, options: &ParseOptions) -> Result<T> {
    descriptor::<T>()?.parse(text, options).map(T::from_raw)
}

/// Parse `text` with the default [`ParseOptions`], `None` if it does not resolve
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn try_parse<T: FlagEnum>(text: &str) -> Result<Option<T>> {
    try_parse_with(text, &ParseOptions::default())
}

/// Parse `text`, `None` if it does not resolve.
///
/// Only resolution failures (blank text, unknown tokens, overflowing numbers) become `None`.
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn try_parse_with<T: FlagEnum>(text: &str, options: &ParseOptions) -> Result<Option<T>> {
    Ok(descriptor::<T>()?.try_parse(text, options).map(T::from_raw))
}

/// Parse `text` with the default [`ParseOptions`], `default` if it does not resolve
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn parse_or_default<T: FlagEnum>(text: &str, default: T) -> Result<T> {
    parse_or_default_with(text, default, &ParseOptions::default())
}

/// Parse `text`, `default` if it does not resolve
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if the descriptor of `T` cannot be built.
pub fn parse_or_default_with<T: FlagEnum>(
    text: &str,
    default: T,
    options: &ParseOptions,
) -> Result<T> {
    Ok(try_parse_with(text, options)?.unwrap_or(default))
}
