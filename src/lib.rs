// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # flagscope
//!
//! Generic operations over flag enumerations: types whose integer values are combinations of
//! named bits. `flagscope` answers "is this a valid combination of the declared bits?",
//! "which named bits are set?", combines, clears and toggles bits, and converts between values
//! and delimited text such as `"Read, Write"`, for any type that implements
//! [`FlagEnum`](descriptor::FlagEnum).
//!
//! ## Features
//!
//! - **Declaration-order decomposition** - Declared combination constants are matched as a
//!   whole when they are declared before their components
//! - **Checked bit algebra** - Every operand is validated against the declared bits
//! - **Configurable text conversion** - Names, decimal and hex values, descriptions or custom
//!   renderings, with any delimiter
//! - **`bitflags` integration** - [`impl_flag_enum!`] turns any `bitflags!` type into a flag enum
//! - **Thread safe** - Descriptors are built once per type and shared through a concurrent cache
//!
//! ## Quick Start
//!
//! ```rust
//! use flagscope::prelude::*;
//!
//! flagscope::bitflags::bitflags! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub struct Access: u8 {
//!         const NONE = 0;
//!         const READ_WRITE = 0b011;
//!         const READ = 0b001;
//!         const WRITE = 0b010;
//!         const EXECUTE = 0b100;
//!     }
//! }
//! flagscope::impl_flag_enum!(Access);
//!
//! let value = flagenums::parse::<Access>("READ, WRITE")?;
//! assert_eq!(value, Access::READ_WRITE);
//! assert_eq!(flagenums::format_as_flags(value)?.as_deref(), Some("READ_WRITE"));
//! assert!(!flagenums::is_valid_combination(Access::from_bits_retain(8))?);
//! # Ok::<(), flagscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`descriptor`] - Per-type metadata ([`FlagDescriptor`]), providers and the descriptor cache
//! - [`engine`] - Validation, decomposition, bit algebra, formatting and parsing on raw values
//! - [`flagenums`] - Typed front-end generic over [`FlagEnum`](descriptor::FlagEnum)
//! - [`Error`] and [`Result`] - Error handling
//!
//! ## Error Handling
//!
//! Strict operations return [`Result<T, Error>`](Result). Formatting an invalid combination is
//! not an error and yields `None`; `try_parse` and `parse_or_default` turn text that does not
//! resolve into `None` or the default, but still report a type that cannot be described.
//!
//! ```rust
//! use flagscope::{descriptor::FlagDescriptor, engine::ParseOptions, Error};
//!
//! let descriptor = FlagDescriptor::builder::<u8>("Access").member("Read", 1).build()?;
//!
//! match descriptor.parse("Read, Delete", &ParseOptions::default()) {
//!     Err(Error::UnresolvedFlagName(token)) => assert_eq!(token, "Delete"),
//!     other => panic!("unexpected {other:?}"),
//! }
//! # Ok::<(), flagscope::Error>(())
//! ```
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//!
//! # Fuzz the parser
//! cargo +nightly fuzz run parse --release
//! ```
#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit-tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use flagscope::prelude::*;
///
/// let descriptor = FlagDescriptor::builder::<u16>("Mode").member("Fast", 1).build()?;
/// assert_eq!(descriptor.parse("Fast", &ParseOptions::default())?, 1);
/// # Ok::<(), flagscope::Error>(())
/// ```
pub mod prelude;

/// Per-type flag descriptors, descriptor providers and the process-wide descriptor cache
pub mod descriptor;

/// Validation, decomposition, bit algebra and text conversion over raw values
pub mod engine;

/// Typed flag operations for any [`FlagEnum`](descriptor::FlagEnum)
pub mod flagenums;

/// `flagscope` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `flagscope` Error type
pub use error::Error;

/// Descriptor types, re-exported at the crate root
pub use descriptor::{FlagDescriptor, FlagEnum, FlagMember, UnderlyingType};

/// Text conversion options, re-exported at the crate root
pub use engine::{EnumFormat, FormatOptions, ParseOptions};

/// The `bitflags` crate, for use with [`impl_flag_enum!`] without a direct dependency
pub use bitflags;
