//! Bit algebra over valid flag combinations.
//!
//! Every operand is checked with [`FlagDescriptor::is_valid_combination`] before any bits are
//! combined; the first offending operand is reported by name. Results of these operations on
//! valid operands are themselves valid, so no post-check is needed.

use crate::{descriptor::FlagDescriptor, Result};

impl FlagDescriptor {
    fn require_valid(&self, argument: &str, value: u64) -> Result<u64> {
        if self.is_valid_combination(value) {
            Ok(value)
        } else {
            Err(invalid_combination!(argument, value))
        }
    }

    /// Returns true if `value` has any bit set
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlagCombination`] if `value` is not a valid combination.
    pub fn has_any_flags(&self, value: u64) -> Result<bool> {
        Ok(self.require_valid("value", value)? != 0)
    }

    /// Returns true if `value` shares any bit with `mask`
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlagCombination`] if an operand is not a valid combination.
    pub fn has_any_flags_in(&self, value: u64, mask: u64) -> Result<bool> {
        let value = self.require_valid("value", value)?;
        let mask = self.require_valid("mask", mask)?;
        Ok(value & mask != 0)
    }

    /// Returns true if `value` has every declared bit set
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlagCombination`] if `value` is not a valid combination.
    pub fn has_all_flags(&self, value: u64) -> Result<bool> {
        Ok(self.require_valid("value", value)? == self.all_flags())
    }

    /// Returns true if `value` has every bit of `mask` set
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlagCombination`] if an operand is not a valid combination.
    pub fn has_all_flags_in(&self, value: u64, mask: u64) -> Result<bool> {
        let value = self.require_valid("value", value)?;
        let mask = self.require_valid("mask", mask)?;
        Ok(value & mask == mask)
    }

    /// Flip every declared bit of `value`
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlagCombination`] if `value` is not a valid combination.
    pub fn toggle_all_flags(&self, value: u64) -> Result<u64> {
        Ok(self.require_valid("value", value)? ^ self.all_flags())
    }

    /// Flip the bits of `mask` in `value`
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlagCombination`] if an operand is not a valid combination.
    pub fn toggle_flags(&self, value: u64, mask: u64) -> Result<u64> {
        let value = self.require_valid("value", value)?;
        let mask = self.require_valid("mask", mask)?;
        Ok(value ^ mask)
    }

    /// Bits present in both `value` and `mask`
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlagCombination`] if an operand is not a valid combination.
    pub fn common_flags(&self, value: u64, mask: u64) -> Result<u64> {
        let value = self.require_valid("value", value)?;
        let mask = self.require_valid("mask", mask)?;
        Ok(value & mask)
    }

    /// Union of all `values`; an empty input yields zero
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlagCombination`] naming the first invalid operand as
    /// `values[index]`.
    pub fn set_flags<I>(&self, values: I) -> Result<u64>
    where
        I: IntoIterator<Item = u64>,
    {
        values
            .into_iter()
            .enumerate()
            .try_fold(0u64, |combined, (index, value)| {
                if self.is_valid_combination(value) {
                    Ok(combined | value)
                } else {
                    Err(invalid_combination!(format!("values[{index}]"), value))
                }
            })
    }

    /// `value` with the bits of `mask` removed
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidFlagCombination`] if an operand is not a valid combination.
    pub fn clear_flags(&self, value: u64, mask: u64) -> Result<u64> {
        let value = self.require_valid("value", value)?;
        let mask = self.require_valid("mask", mask)?;
        Ok(value & !mask)
    }
}
