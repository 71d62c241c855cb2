//! The flag engine: validation, decomposition, bit algebra and text conversion.
//!
//! All operations are methods on [`FlagDescriptor`](crate::descriptor::FlagDescriptor) and work
//! on raw `u64` bit patterns. They are pure functions of the descriptor and their arguments; no
//! state is kept between calls and no lock is taken.
//!
//! # Operations
//!
//! ## Validity & Decomposition
//! - `is_valid_combination`, `decompose`, `get_flags`, `get_flag_count`
//!
//! ## Bit Algebra
//! - `has_any_flags(_in)`, `has_all_flags(_in)`, `toggle_all_flags`, `toggle_flags`,
//!   `common_flags`, `set_flags`, `clear_flags`
//!
//! Every operand must be a valid combination, otherwise the call fails with
//! [`Error::InvalidFlagCombination`](crate::Error::InvalidFlagCombination).
//!
//! ## Text
//! - `format_as_flags` with [`FormatOptions`]
//! - `parse`, `try_parse`, `parse_or_default` with [`ParseOptions`]
//!
//! # Examples
//!
//! ```rust
//! use flagscope::{descriptor::FlagDescriptor, engine::{FormatOptions, ParseOptions}};
//!
//! let descriptor = FlagDescriptor::builder::<u8>("Access")
//!     .flags(true)
//!     .member("None", 0)
//!     .member("ReadWrite", 3)
//!     .member("Read", 1)
//!     .member("Write", 2)
//!     .member("Execute", 4)
//!     .build()?;
//!
//! let value = descriptor.parse("Read, Write", &ParseOptions::default())?;
//! assert_eq!(value, 3);
//! assert_eq!(descriptor.format_as_flags(value, &FormatOptions::default()).as_deref(), Some("ReadWrite"));
//! assert_eq!(descriptor.clear_flags(7, value)?, 4);
//! # Ok::<(), flagscope::Error>(())
//! ```

mod algebra;
mod decompose;
mod format;
mod options;
mod parse;

pub use decompose::Decomposition;
pub use options::{
    CustomFormat, EnumFormat, FormatOptions, ParseOptions, DEFAULT_DELIMITER, DEFAULT_FORMATS,
};
