use bitflags::{Flag, Flags};

use crate::{
    descriptor::{FlagDescriptor, FlagMember, Underlying},
    Result,
};

/// A type whose values are combinations of named flags.
///
/// Implementors connect a Rust type to its [`FlagDescriptor`] and to the raw integer it is
/// stored in. The bound replaces any runtime "is this an enumeration" check: only types that
/// implement this trait can be handed to the generic functions in [`crate::flagenums`].
///
/// Values must be able to hold *any* bit pattern of the backing integer, including bits that
/// no member declares, which is why flag types are usually newtypes over an integer (as
/// generated by `bitflags!`) rather than fieldless Rust enums.
///
/// Types generated by `bitflags!` get an implementation through [`crate::impl_flag_enum`].
///
/// # Examples
///
/// ```rust
/// use flagscope::{descriptor::{FlagDescriptor, FlagEnum}, Result};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Access(u8);
///
/// impl FlagEnum for Access {
///     type Underlying = u8;
///
///     fn describe() -> Result<FlagDescriptor> {
///         FlagDescriptor::builder::<u8>("Access")
///             .flags(true)
///             .member("Read", 1)
///             .member("Write", 2)
///             .build()
///     }
///
///     fn to_underlying(self) -> u8 {
///         self.0
///     }
///
///     fn from_underlying(value: u8) -> Self {
///         Access(value)
///     }
/// }
///
/// assert_eq!(flagscope::flagenums::all_flags::<Access>()?, Access(3));
/// # Ok::<(), flagscope::Error>(())
/// ```
pub trait FlagEnum: Copy + Send + Sync + 'static {
    /// The backing integer
    type Underlying: Underlying;

    /// Produce the descriptor of this type.
    ///
    /// Called at most once per successful cache fill, while the cache shard is locked;
    /// implementations must not call back into [`crate::descriptor::descriptor`].
    ///
    /// # Errors
    /// Returns [`crate::Error::NotAnEnumeration`] if the type cannot be described.
    fn describe() -> Result<FlagDescriptor>;

    /// The backing integer of this value
    fn to_underlying(self) -> Self::Underlying;

    /// Reconstruct a value from its backing integer; must accept every bit pattern
    fn from_underlying(value: Self::Underlying) -> Self;

    /// Raw bit pattern of this value
    fn to_raw(self) -> u64 {
        self.to_underlying().to_raw()
    }

    /// Reconstruct a value from a raw bit pattern
    fn from_raw(raw: u64) -> Self {
        Self::from_underlying(<Self::Underlying as Underlying>::from_raw(raw))
    }
}

impl FlagDescriptor {
    /// Describe a `bitflags` generated type.
    ///
    /// Members are the named entries of [`Flags::FLAGS`] in declaration order, unnamed
    /// entries (`const _ = ...`) are skipped. The type is always marked as a flag set.
    ///
    /// ## Arguments
    /// * `type_name` - Name of the described type
    ///
    /// # Errors
    /// Returns [`crate::Error::NotAnEnumeration`] if two flags share a name.
    pub fn from_bitflags<F>(type_name: impl Into<String>) -> Result<Self>
    where
        F: Flags,
        F::Bits: Underlying,
    {
        let members = F::FLAGS
            .iter()
            .filter(|flag| flag.is_named())
            .map(|flag: &Flag<F>| FlagMember::new(flag.name(), flag.value().bits().to_raw()))
            .collect();

        FlagDescriptor::new(
            type_name.into(),
            <F::Bits as Underlying>::KIND,
            members,
            true,
        )
    }
}
