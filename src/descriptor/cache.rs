//! Process-wide cache of flag descriptors.
//!
//! Descriptors are built lazily on first use and never evicted; the set of keys is bounded by
//! the flag types linked into the program. The cache is a [`DashMap`] keyed by [`TypeId`]:
//!
//! - Hits take a shard read lock just long enough to clone the `Arc`
//! - Misses go through the entry API, which holds the shard write lock while the provider
//!   runs, so racing first callers block until one build completes and all observe the same
//!   descriptor
//! - A failed build leaves no entry behind; the next call retries
//!
//! No lock is held while a descriptor is being used.

use std::{
    any::{type_name, TypeId},
    sync::{Arc, LazyLock},
};

use dashmap::DashMap;
use tracing::debug;

use crate::{
    descriptor::{FlagDescriptor, FlagEnum},
    Result,
};

static DESCRIPTORS: LazyLock<DashMap<TypeId, Arc<FlagDescriptor>>> = LazyLock::new(DashMap::new);

/// Fetch the descriptor of `T`, building and caching it on first access.
///
/// # Errors
/// Returns [`crate::Error::NotAnEnumeration`] if [`FlagEnum::describe`] fails for `T`.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use flagscope::{descriptor::descriptor, impl_flag_enum};
///
/// flagscope::bitflags::bitflags! {
///     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
///     pub struct Mode: u32 {
///         const READ = 1;
///         const WRITE = 2;
///     }
/// }
/// impl_flag_enum!(Mode);
///
/// let first = descriptor::<Mode>()?;
/// let second = descriptor::<Mode>()?;
/// assert!(Arc::ptr_eq(&first, &second));
/// # Ok::<(), flagscope::Error>(())
/// ```
pub fn descriptor<T: FlagEnum>() -> Result<Arc<FlagDescriptor>> {
    let key = TypeId::of::<T>();
    if let Some(cached) = DESCRIPTORS.get(&key) {
        return Ok(Arc::clone(cached.value()));
    }

    let entry = DESCRIPTORS.entry(key).or_try_insert_with(|| {
        let descriptor = T::describe()?;
        debug!(
            rust_type = type_name::<T>(),
            type_name = descriptor.type_name(),
            underlying = %descriptor.underlying(),
            members = descriptor.members().len(),
            all_flags = descriptor.all_flags(),
            "cached flag descriptor"
        );
        Ok::<_, crate::Error>(Arc::new(descriptor))
    })?;

    Ok(Arc::clone(entry.value()))
}
