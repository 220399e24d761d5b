use std::sync::Arc;
use crate::core::ranking::filter_and_rank;
use crate::models::{Partner, SearchQuery};
use crate::services::{PartnerStore, StoreError};

/// Matching orchestrator - combines partner lookups with ranking
///
/// # Use cases
/// 1. Ranked search by material and customer location
/// 2. Lookup of a single partner by id
#[derive(Clone)]
pub struct MatchingService {
    store: Arc<dyn PartnerStore>,
}

impl MatchingService {
    pub fn new(store: Arc<dyn PartnerStore>) -> Self {
        Self { store }
    }

    /// Find partners for a customer, best match first
    ///
    /// Candidates are the partners experienced in the requested material;
    /// only those operating around the customer location are returned,
    /// ordered by rating and then by distance.
    pub fn search(&self, query: &SearchQuery) -> Vec<Partner> {
        let candidates = self.store.by_material(query.material.as_str());
        let ranked = filter_and_rank(&candidates, query.customer_location);

        tracing::debug!(
            "Search for {} returned {} of {} candidates",
            query.material,
            ranked.len(),
            candidates.len()
        );

        ranked
    }

    /// Find a partner by its id
    ///
    /// Returns `StoreError::NotFound` when no partner has that id; any other
    /// store failure is passed through unchanged.
    pub fn get_by_id(&self, id: &str) -> Result<Partner, StoreError> {
        self.store.by_id(id)
    }
}

impl std::fmt::Debug for MatchingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchingService").finish_non_exhaustive()
    }
}
