// Service exports
pub mod store;

pub use store::{ListingStore, MemoryStore, ProfileStore, SeedData, StoreError};
