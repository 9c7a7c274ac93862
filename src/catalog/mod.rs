//! Catalog descriptor model

mod descriptor;

pub use descriptor::{DatabaseDescriptor, Descriptor, DescriptorId, DescriptorKind, TableDescriptor};
