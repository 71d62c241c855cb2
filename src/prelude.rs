//! # flagscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the flagscope library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all flagscope operations
pub use crate::Error;

/// The result type used throughout flagscope
pub use crate::Result;

// ================================================================================================
// Descriptors
// ================================================================================================

/// Per-type metadata, its members and builder
pub use crate::descriptor::{DescriptorBuilder, FlagDescriptor, FlagMember};

/// Provider trait and backing integer tags
pub use crate::descriptor::{FlagEnum, Underlying, UnderlyingType};

// ================================================================================================
// Engine Configuration
// ================================================================================================

/// Format strategies and text conversion options
pub use crate::engine::{EnumFormat, FormatOptions, ParseOptions};

// ================================================================================================
// Typed Operations
// ================================================================================================

/// Generic flag operations, used as `flagenums::parse::<T>(..)`
pub use crate::flagenums;
