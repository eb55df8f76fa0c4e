//! Database layer (in-memory mock store).

pub mod memory;

pub use memory::{MemoryDb, NewUserRecord};
