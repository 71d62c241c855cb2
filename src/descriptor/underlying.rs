//! Underlying integer storage of flag enumerations.
//!
//! Every flag enumeration is backed by one of eight fixed-width integers. The engine never
//! works on those integers directly: values are carried as raw `u64` bit patterns, truncated
//! to the width of the backing type. Signed types are stored in two's complement, so
//! `-1i8` becomes `0xFF` and `i64::MIN` becomes `0x8000_0000_0000_0000`.
//!
//! # Key Types
//! - [`UnderlyingType`]: Runtime tag for the backing integer (width and signedness)
//! - [`Underlying`]: Sealed compile-time counterpart, implemented for `i8` through `u64`

use std::{fmt, num::IntErrorKind};

use strum::{Display, EnumCount, EnumIter};

use crate::{Error, Result};

/// The backing integer type of a flag enumeration.
///
/// Variant names give signedness and width in bytes (`I1` is a signed byte, `U8` an unsigned
/// 64-bit integer); the `Display` form is the Rust primitive name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum UnderlyingType {
    /// Signed 8-bit integer
    #[strum(to_string = "i8")]
    I1,
    /// Unsigned 8-bit integer
    #[strum(to_string = "u8")]
    U1,
    /// Signed 16-bit integer
    #[strum(to_string = "i16")]
    I2,
    /// Unsigned 16-bit integer
    #[strum(to_string = "u16")]
    U2,
    /// Signed 32-bit integer
    #[strum(to_string = "i32")]
    I4,
    /// Unsigned 32-bit integer
    #[strum(to_string = "u32")]
    U4,
    /// Signed 64-bit integer
    #[strum(to_string = "i64")]
    I8,
    /// Unsigned 64-bit integer
    #[strum(to_string = "u64")]
    U8,
}

impl UnderlyingType {
    /// Width of the type in bits
    #[must_use]
    pub fn bits(self) -> u32 {
        match self {
            UnderlyingType::I1 | UnderlyingType::U1 => 8,
            UnderlyingType::I2 | UnderlyingType::U2 => 16,
            UnderlyingType::I4 | UnderlyingType::U4 => 32,
            UnderlyingType::I8 | UnderlyingType::U8 => 64,
        }
    }

    /// Returns true for the two's complement variants
    #[must_use]
    pub fn is_signed(self) -> bool {
        matches!(
            self,
            UnderlyingType::I1 | UnderlyingType::I2 | UnderlyingType::I4 | UnderlyingType::I8
        )
    }

    /// Mask covering every bit a value of this type can hold
    #[must_use]
    pub fn mask(self) -> u64 {
        match self.bits() {
            64 => u64::MAX,
            bits => (1u64 << bits) - 1,
        }
    }

    /// Smallest representable numeric value
    #[must_use]
    pub fn min_value(self) -> i128 {
        match self {
            UnderlyingType::I1 => i128::from(i8::MIN),
            UnderlyingType::I2 => i128::from(i16::MIN),
            UnderlyingType::I4 => i128::from(i32::MIN),
            UnderlyingType::I8 => i128::from(i64::MIN),
            UnderlyingType::U1 | UnderlyingType::U2 | UnderlyingType::U4 | UnderlyingType::U8 => 0,
        }
    }

    /// Largest representable numeric value
    #[must_use]
    pub fn max_value(self) -> i128 {
        match self {
            UnderlyingType::I1 => i128::from(i8::MAX),
            UnderlyingType::U1 => i128::from(u8::MAX),
            UnderlyingType::I2 => i128::from(i16::MAX),
            UnderlyingType::U2 => i128::from(u16::MAX),
            UnderlyingType::I4 => i128::from(i32::MAX),
            UnderlyingType::U4 => i128::from(u32::MAX),
            UnderlyingType::I8 => i128::from(i64::MAX),
            UnderlyingType::U8 => i128::from(u64::MAX),
        }
    }

    /// Interprets a raw bit pattern as a number of this type.
    ///
    /// Bits above the type width are ignored.
    #[must_use]
    pub fn to_integer(self, raw: u64) -> i128 {
        let raw = raw & self.mask();
        if self.is_signed() {
            let shift = 128 - self.bits();
            (i128::from(raw) << shift) >> shift
        } else {
            i128::from(raw)
        }
    }

    /// Converts a number into the raw bit pattern of this type.
    ///
    /// Returns `None` if `value` lies outside [`Self::min_value`]..=[`Self::max_value`].
    #[must_use]
    pub fn from_integer(self, value: i128) -> Option<u64> {
        if value < self.min_value() || value > self.max_value() {
            return None;
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Some((value as u64) & self.mask())
    }

    /// Renders a raw value as a decimal number, honouring signedness
    #[must_use]
    pub fn format_decimal(self, raw: u64) -> String {
        self.to_integer(raw).to_string()
    }

    /// Renders a raw value as zero padded, upper case hexadecimal digits without prefix.
    ///
    /// The output always has two digits per byte of the type (`0003` for a `u16` of 3).
    #[must_use]
    pub fn format_hex(self, raw: u64) -> String {
        let width = (self.bits() / 4) as usize;
        format!("{:0width$X}", raw & self.mask(), width = width)
    }

    /// Parses a numeric literal into a raw value of this type.
    ///
    /// Accepts decimal numbers with an optional sign and `0x` prefixed hexadecimal bit
    /// patterns. Returns `Ok(None)` when `literal` is not a number at all, so callers can
    /// tell "not numeric" apart from "numeric but does not fit".
    ///
    /// # Errors
    /// Returns [`Error::Overflow`] if `literal` is a number outside the range of this type.
    pub fn parse_literal(self, literal: &str) -> Result<Option<u64>> {
        let overflow = || Error::Overflow {
            literal: literal.to_string(),
            underlying: self,
        };

        if let Some(hex) = literal
            .strip_prefix("0x")
            .or_else(|| literal.strip_prefix("0X"))
        {
            return match u64::from_str_radix(hex, 16) {
                Ok(raw) if raw & !self.mask() == 0 => Ok(Some(raw)),
                Ok(_) => Err(overflow()),
                Err(error) if *error.kind() == IntErrorKind::PosOverflow => Err(overflow()),
                Err(_) => Ok(None),
            };
        }

        match literal.parse::<i128>() {
            Ok(value) => self.from_integer(value).map(Some).ok_or_else(overflow),
            Err(error) => match error.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Err(overflow()),
                _ => Ok(None),
            },
        }
    }
}

mod private {
    pub trait Sealed {}
}

/// Compile-time tag for the integers a flag enumeration may be backed by.
///
/// This trait is sealed; it is implemented for `i8`, `u8`, `i16`, `u16`, `i32`, `u32`,
/// `i64` and `u64`.
pub trait Underlying: Copy + fmt::Debug + Send + Sync + 'static + private::Sealed {
    /// Runtime tag of this integer type
    const KIND: UnderlyingType;

    /// Bit pattern of `self`, truncated to the width of the type
    fn to_raw(self) -> u64;

    /// Reconstructs a value from its raw bit pattern, ignoring bits above the type width
    fn from_raw(raw: u64) -> Self;
}

macro_rules! impl_underlying {
    ($($ty:ty => $kind:ident as $unsigned:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Underlying for $ty {
                const KIND: UnderlyingType = UnderlyingType::$kind;

                #[allow(clippy::cast_sign_loss)]
                fn to_raw(self) -> u64 {
                    u64::from(self as $unsigned)
                }

                #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
                fn from_raw(raw: u64) -> Self {
                    raw as $unsigned as $ty
                }
            }
        )*
    };
}

impl_underlying! {
    i8 => I1 as u8,
    u8 => U1 as u8,
    i16 => I2 as u16,
    u16 => U2 as u16,
    i32 => I4 as u32,
    u32 => U4 as u32,
    i64 => I8 as u64,
    u64 => U8 as u64,
}
