pub mod entity;

pub use entity::{Capability, PermissionSnapshot, PermissionState};
