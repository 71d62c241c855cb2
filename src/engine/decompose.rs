//! Validity checks and decomposition of values into declared members.
//!
//! Decomposition walks the members in declaration order and greedily claims every member whose
//! bits are all still unclaimed. Declaring a combination constant before its components makes
//! it win over them; declaring it after makes the components win. The engine never reorders.
//!
//! When combination constants overlap without one containing the other, the walk can leave
//! valid bits unclaimed (`A = 0b011`, `B = 0b110`, value `0b101`: neither member lies inside
//! the value). Those bits are kept as a [`Decomposition::remainder`] and reported as one extra
//! raw value, so every valid combination has a decomposition that ORs back to it.

use crate::descriptor::{FlagDescriptor, FlagMember};

/// Split of a valid value into declared members plus any bits no member could claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition<'a> {
    /// Claimed members, in declaration order
    pub members: Vec<&'a FlagMember>,
    /// Valid bits left unclaimed by the walk, zero when the members cover the value
    pub remainder: u64,
}

impl Decomposition<'_> {
    /// Number of parts, counting a non-zero remainder as one
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len() + usize::from(self.remainder != 0)
    }

    /// Returns true if the value decomposed into nothing (zero without a zero member)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Raw values of the parts, the remainder last
    #[must_use]
    pub fn values(&self) -> Vec<u64> {
        self.members
            .iter()
            .map(|member| member.value)
            .chain((self.remainder != 0).then_some(self.remainder))
            .collect()
    }
}

impl FlagDescriptor {
    /// Returns true if every bit of `value` belongs to a declared member
    ///
    /// Values with bits above the underlying width are never valid.
    #[must_use]
    pub fn is_valid_combination(&self, value: u64) -> bool {
        value & !self.all_flags() == 0
    }

    /// Decompose `value` into declared members.
    ///
    /// Returns `None` only if `value` is not a valid combination. Zero decomposes to the zero
    /// member if one is declared, otherwise to nothing.
    #[must_use]
    pub fn decompose(&self, value: u64) -> Option<Decomposition<'_>> {
        if !self.is_valid_combination(value) {
            return None;
        }

        if value == 0 {
            return Some(Decomposition {
                members: self.zero_member().into_iter().collect(),
                remainder: 0,
            });
        }

        let mut members = Vec::new();
        let mut remaining = value;

        for member in self.members() {
            if member.value != 0 && member.value & !remaining == 0 {
                members.push(member);
                remaining &= !member.value;
                if remaining == 0 {
                    break;
                }
            }
        }

        Some(Decomposition {
            members,
            remainder: remaining,
        })
    }

    /// Decompose `value` into raw values, see [`Self::decompose`]
    ///
    /// Bits no declared member could claim appear as one trailing value.
    #[must_use]
    pub fn get_flags(&self, value: u64) -> Option<Vec<u64>> {
        self.decompose(value)
            .map(|decomposition| decomposition.values())
    }

    /// Number of values [`Self::get_flags`] returns
    #[must_use]
    pub fn get_flag_count(&self, value: u64) -> Option<usize> {
        self.decompose(value).map(|decomposition| decomposition.len())
    }
}
