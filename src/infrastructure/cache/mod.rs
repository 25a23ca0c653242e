//! Cache infrastructure - Page cache implementations

mod in_memory;

pub use in_memory::InMemoryPageCache;
