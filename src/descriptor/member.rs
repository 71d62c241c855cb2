use std::fmt;

/// A single named member of a flag enumeration.
///
/// The `value` is the raw bit pattern of the member (see [`crate::descriptor::UnderlyingType`]);
/// it may have any number of bits set. A member with several bits is a declared combination
/// constant, a member with no bits is the zero member.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlagMember {
    /// Declared name, unique within its enumeration
    pub name: String,
    /// Raw bit pattern, truncated to the underlying width
    pub value: u64,
    /// Optional display text supplied by the descriptor provider
    pub description: Option<String>,
}

impl FlagMember {
    /// Create a new member without a description
    ///
    /// ## Arguments
    /// * `name` - The declared name of the member
    /// * `value` - The raw bit pattern of the member
    #[must_use]
    pub fn new(name: impl Into<String>, value: u64) -> Self {
        FlagMember {
            name: name.into(),
            value,
            description: None,
        }
    }
}

impl fmt::Display for FlagMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:X})", self.name, self.value)
    }
}
