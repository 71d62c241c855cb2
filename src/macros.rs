/// Implement [`FlagEnum`](crate::descriptor::FlagEnum) for types generated by `bitflags!`.
///
/// The descriptor is produced by [`FlagDescriptor::from_bitflags`](crate::descriptor::FlagDescriptor::from_bitflags)
/// and named after the type as written at the macro call site.
///
/// ```rust
/// use flagscope::{flagenums, impl_flag_enum};
///
/// flagscope::bitflags::bitflags! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub struct Permissions: u8 {
///         const READ = 0b001;
///         const WRITE = 0b010;
///         const EXECUTE = 0b100;
///     }
/// }
/// impl_flag_enum!(Permissions);
///
/// let value = flagenums::parse::<Permissions>("READ, EXECUTE")?;
/// assert_eq!(value, Permissions::READ | Permissions::EXECUTE);
/// # Ok::<(), flagscope::Error>(())
/// ```
#[macro_export]
macro_rules! impl_flag_enum {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::descriptor::FlagEnum for $ty {
                type Underlying = <$ty as $crate::bitflags::Flags>::Bits;

                fn describe() -> $crate::Result<$crate::descriptor::FlagDescriptor> {
                    $crate::descriptor::FlagDescriptor::from_bitflags::<$ty>(stringify!($ty))
                }

                fn to_underlying(self) -> Self::Underlying {
                    <$ty as $crate::bitflags::Flags>::bits(&self)
                }

                fn from_underlying(value: Self::Underlying) -> Self {
                    <$ty as $crate::bitflags::Flags>::from_bits_retain(value)
                }
            }
        )+
    };
}
