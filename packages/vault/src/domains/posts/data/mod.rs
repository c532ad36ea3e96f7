//! Post stores standing in for a real datastore.

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryPostStore;
