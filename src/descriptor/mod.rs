//! Per-type flag descriptors and the process-wide descriptor cache.
//!
//! A [`FlagDescriptor`] is the immutable summary of one flag enumeration: its backing integer
//! type, its members in declaration order, the `all flags` mask and whether the type is marked
//! as a flag set. Descriptors are produced by a [`FlagEnum`] implementation (the provider),
//! validated once, and then shared through [`descriptor`] for the rest of the process.
//!
//! # Key Types
//! - [`FlagDescriptor`]: Immutable per-type metadata
//! - [`FlagMember`]: One declared (name, value) pair
//! - [`DescriptorBuilder`]: Typed construction of descriptors
//! - [`FlagEnum`]: Provider trait tying a Rust type to its descriptor
//! - [`UnderlyingType`], [`Underlying`]: Backing integer tags
//!
//! # Examples
//!
//! ```rust
//! use flagscope::descriptor::FlagDescriptor;
//!
//! let descriptor = FlagDescriptor::builder::<u8>("Access")
//!     .flags(true)
//!     .member("None", 0)
//!     .member("Read", 1)
//!     .member("Write", 2)
//!     .build()?;
//!
//! assert_eq!(descriptor.all_flags(), 0b11);
//! assert!(descriptor.is_valid_combination(3));
//! assert!(!descriptor.is_valid_combination(4));
//! # Ok::<(), flagscope::Error>(())
//! ```

mod builder;
mod cache;
mod member;
mod provider;
mod underlying;

pub use builder::DescriptorBuilder;
pub use cache::descriptor;
pub use member::FlagMember;
pub use provider::FlagEnum;
pub use underlying::{Underlying, UnderlyingType};

use std::collections::HashMap;

use crate::Result;

/// Immutable metadata describing one flag enumeration.
///
/// Besides the declared members, the descriptor keeps lookup tables for name, case-folded
/// name and value so per-call operations never scan more than the member list itself.
/// When several members share a value, value lookups resolve to the first declared one.
#[derive(Debug, Clone)]
pub struct FlagDescriptor {
    type_name: String,
    underlying: UnderlyingType,
    members: Vec<FlagMember>,
    all_flags: u64,
    is_flag_enum: bool,
    zero_member: Option<usize>,
    by_name: HashMap<String, usize>,
    by_folded_name: HashMap<String, usize>,
    by_value: HashMap<u64, usize>,
}

impl FlagDescriptor {
    /// Start building a descriptor for a type backed by `U`
    ///
    /// ## Arguments
    /// * `type_name` - Name of the described type, used in error messages
    #[must_use]
    pub fn builder<U: Underlying>(type_name: impl Into<String>) -> DescriptorBuilder<U> {
        DescriptorBuilder::new(type_name)
    }

    /// Validates the members and computes the derived lookup tables.
    ///
    /// # Errors
    /// Returns [`crate::Error::NotAnEnumeration`] if a name is empty or declared twice, or
    /// if a value does not fit the underlying type.
    pub(crate) fn new(
        type_name: String,
        underlying: UnderlyingType,
        members: Vec<FlagMember>,
        is_flag_enum: bool,
    ) -> Result<Self> {
        let mut all_flags = 0u64;
        let mut zero_member = None;
        let mut by_name = HashMap::with_capacity(members.len());
        let mut by_folded_name = HashMap::with_capacity(members.len());
        let mut by_value = HashMap::with_capacity(members.len());

        for (index, member) in members.iter().enumerate() {
            if member.name.trim().is_empty() {
                return Err(not_an_enumeration!(
                    type_name,
                    "member #{} has an empty name",
                    index
                ));
            }

            if member.value & !underlying.mask() != 0 {
                return Err(not_an_enumeration!(
                    type_name,
                    "member {} does not fit {}",
                    member,
                    underlying
                ));
            }

            if by_name.insert(member.name.clone(), index).is_some() {
                return Err(not_an_enumeration!(
                    type_name,
                    "member '{}' is declared more than once",
                    member.name
                ));
            }

            by_folded_name
                .entry(member.name.to_lowercase())
                .or_insert(index);
            by_value.entry(member.value).or_insert(index);

            if member.value == 0 && zero_member.is_none() {
                zero_member = Some(index);
            }
            all_flags |= member.value;
        }

        Ok(FlagDescriptor {
            type_name,
            underlying,
            members,
            all_flags,
            is_flag_enum,
            zero_member,
            by_name,
            by_folded_name,
            by_value,
        })
    }

    /// Name of the described type
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Backing integer type
    #[must_use]
    pub fn underlying(&self) -> UnderlyingType {
        self.underlying
    }

    /// Members in declaration order
    #[must_use]
    pub fn members(&self) -> &[FlagMember] {
        &self.members
    }

    /// Bitwise OR of every member value
    #[must_use]
    pub fn all_flags(&self) -> u64 {
        self.all_flags
    }

    /// Returns true if the provider marked the type as a flag set
    #[must_use]
    pub fn is_flag_enum(&self) -> bool {
        self.is_flag_enum
    }

    /// The first declared member with the value zero, if any
    #[must_use]
    pub fn zero_member(&self) -> Option<&FlagMember> {
        self.zero_member.map(|index| &self.members[index])
    }

    /// Look up a member by name.
    ///
    /// An exact match always wins. With `ignore_case`, a name without an exact match is
    /// compared after lower-casing; if several members only differ in case, the first declared
    /// one wins.
    #[must_use]
    pub fn member_by_name(&self, name: &str, ignore_case: bool) -> Option<&FlagMember> {
        let index = match self.by_name.get(name) {
            Some(index) => Some(index),
            None if ignore_case => self.by_folded_name.get(&name.to_lowercase()),
            None => None,
        };

        index.map(|index| &self.members[*index])
    }

    /// Look up the first declared member with exactly this value
    #[must_use]
    pub fn member_by_value(&self, value: u64) -> Option<&FlagMember> {
        self.by_value.get(&value).map(|index| &self.members[*index])
    }
}
