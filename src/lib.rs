//! Partner Match - matches customers with flooring partners
//!
//! Partners experienced in the requested material are kept when the customer
//! lives inside their operating radius, then ranked by rating and distance.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchingService, distance::distance_km, ranking::{filter_and_rank, rank_matches, Match}};
pub use models::{Coordinate, Partner, Material, SearchQuery};
pub use services::{InMemoryPartnerStore, PartnerStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let munich = Coordinate::new(48.1360, 11.6875);
        assert_eq!(distance_km(munich, munich), 0.0);
    }
}
