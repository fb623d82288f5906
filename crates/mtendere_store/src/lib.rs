pub mod base;
pub mod memory;

pub use base::{CollectionStore, RoleStore, UserStore};
pub use memory::{MemoryCollection, MemoryRoles, MemoryStore, MemoryUsers};
