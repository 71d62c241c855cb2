use crate::{
    descriptor::{FlagDescriptor, FlagEnum},
    Result,
};

// The declared combination comes before its components, so it wins decomposition
pub fn access_descriptor() -> FlagDescriptor {
    FlagDescriptor::builder::<u8>("Access")
        .flags(true)
        .member("None", 0)
        .member("ReadWrite", 3)
        .member("Read", 1)
        .member("Write", 2)
        .member("Execute", 4)
        .build()
        .expect("Access descriptor is well formed")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access(pub u8);

impl Access {
    pub const NONE: Access = Access(0);
    pub const READ_WRITE: Access = Access(3);
    pub const READ: Access = Access(1);
    pub const WRITE: Access = Access(2);
    pub const EXECUTE: Access = Access(4);
}

impl FlagEnum for Access {
    type Underlying = u8;

    fn describe() -> Result<FlagDescriptor> {
        Ok(access_descriptor())
    }

    fn to_underlying(self) -> u8 {
        self.0
    }

    fn from_underlying(value: u8) -> Self {
        Access(value)
    }
}
