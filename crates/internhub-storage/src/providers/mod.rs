//! Local-storage provider implementations.

#[cfg(feature = "local")]
pub mod local;
#[cfg(feature = "memory")]
pub mod memory;

#[cfg(feature = "local")]
pub use local::LocalFileStore;
#[cfg(feature = "memory")]
pub use memory::MemoryStore;
