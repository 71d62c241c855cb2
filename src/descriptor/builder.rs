use std::marker::PhantomData;

use crate::{
    descriptor::{FlagDescriptor, FlagMember, Underlying},
    Result,
};

/// Typed builder for [`FlagDescriptor`].
///
/// The builder is generic over the backing integer, so member values are checked against the
/// width of the type at compile time. Members keep the order in which they are added; that
/// order drives decomposition (see [`FlagDescriptor::get_flags`]).
///
/// # Examples
///
/// ```rust
/// use flagscope::descriptor::FlagDescriptor;
///
/// let descriptor = FlagDescriptor::builder::<u16>("FileShare")
///     .flags(true)
///     .member("None", 0)
///     .member_with_description("Read", 1, "Shared read")
///     .member("Write", 2)
///     .member("Delete", 4)
///     .build()?;
///
/// assert_eq!(descriptor.all_flags(), 7);
/// # Ok::<(), flagscope::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DescriptorBuilder<U: Underlying> {
    type_name: String,
    members: Vec<FlagMember>,
    is_flag_enum: bool,
    _underlying: PhantomData<U>,
}

impl<U: Underlying> DescriptorBuilder<U> {
    /// Create an empty builder
    ///
    /// ## Arguments
    /// * `type_name` - Name of the described type
    #[must_use]
    pub fn new(type_name: impl Into<String>) -> Self {
        DescriptorBuilder {
            type_name: type_name.into(),
            members: Vec::new(),
            is_flag_enum: false,
            _underlying: PhantomData,
        }
    }

    /// Mark the type as a flag set (defaults to `false`)
    #[must_use]
    pub fn flags(mut self, is_flag_enum: bool) -> Self {
        self.is_flag_enum = is_flag_enum;
        self
    }

    /// Append a member
    #[must_use]
    pub fn member(mut self, name: impl Into<String>, value: U) -> Self {
        self.members.push(FlagMember::new(name, value.to_raw()));
        self
    }

    /// Append a member carrying custom display text
    #[must_use]
    pub fn member_with_description(
        mut self,
        name: impl Into<String>,
        value: U,
        description: impl Into<String>,
    ) -> Self {
        let mut member = FlagMember::new(name, value.to_raw());
        member.description = Some(description.into());
        self.members.push(member);
        self
    }

    /// Validate the members and produce the descriptor
    ///
    /// # Errors
    /// Returns [`crate::Error::NotAnEnumeration`] if a member name is empty or declared twice.
    pub fn build(self) -> Result<FlagDescriptor> {
        FlagDescriptor::new(self.type_name, U::KIND, self.members, self.is_flag_enum)
    }
}

#[cfg(test)]
mod tests {
    use crate::descriptor::{FlagDescriptor, UnderlyingType};

    #[test]
    fn test_builder_keeps_order() {
        let descriptor = FlagDescriptor::builder::<u64>("Ordered")
            .member("C", 4)
            .member("A", 1)
            .member_with_description("B", 2, "Bee")
            .build()
            .unwrap();

        let names: Vec<&str> = descriptor
            .members()
            .iter()
            .map(|member| member.name.as_str())
            .collect();
        assert_eq!(names, ["C", "A", "B"]);
        assert_eq!(descriptor.members()[2].description.as_deref(), Some("Bee"));
        assert_eq!(descriptor.underlying(), UnderlyingType::U8);
        assert!(!descriptor.is_flag_enum());
    }

    #[test]
    fn test_empty_builder() {
        let descriptor = FlagDescriptor::builder::<i16>("Empty").build().unwrap();
        assert!(descriptor.members().is_empty());
        assert_eq!(descriptor.all_flags(), 0);
    }
}
