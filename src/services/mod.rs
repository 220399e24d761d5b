// Service exports
pub mod seed;
pub mod store;

pub use seed::{demo_partners, load_partners, parse_partners, SeedError};
pub use store::{InMemoryPartnerStore, PartnerStore, StoreError};
