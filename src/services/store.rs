use std::sync::{PoisonError, RwLock, RwLockReadGuard};
use thiserror::Error;
use crate::models::Partner;

/// Errors that can occur when looking up partners
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Partner not found: {0}")]
    NotFound(String),

    #[error("Partner store unavailable: {0}")]
    Unavailable(String),
}

/// Read access to the partners known to the system
pub trait PartnerStore: Send + Sync {
    /// All partners experienced in `material`, in storage order
    fn by_material(&self, material: &str) -> Vec<Partner>;

    /// The partner with the given id, or `StoreError::NotFound`
    fn by_id(&self, id: &str) -> Result<Partner, StoreError>;
}

/// In-memory partner store
///
/// Partners are kept in insertion order behind a reader/writer lock, so
/// concurrent searches never block each other.
#[derive(Debug, Default)]
pub struct InMemoryPartnerStore {
    partners: RwLock<Vec<Partner>>,
}

impl InMemoryPartnerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `partners`; later duplicates of an id replace earlier ones
    pub fn with_partners(partners: impl IntoIterator<Item = Partner>) -> Self {
        let store = Self::new();
        for partner in partners {
            store.upsert(partner);
        }
        store
    }

    /// Insert a partner, replacing any existing partner with the same id
    pub fn upsert(&self, partner: Partner) {
        let mut partners = self.partners.write().unwrap_or_else(PoisonError::into_inner);
        match partners.iter_mut().find(|p| p.id == partner.id) {
            Some(existing) => {
                tracing::debug!("Replacing partner {}", partner.id);
                *existing = partner;
            }
            None => partners.push(partner),
        }
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Writers only ever push or swap whole values, so a poisoned lock still holds consistent data
    fn read(&self) -> RwLockReadGuard<'_, Vec<Partner>> {
        self.partners.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PartnerStore for InMemoryPartnerStore {
    fn by_material(&self, material: &str) -> Vec<Partner> {
        self.read()
            .iter()
            .filter(|p| p.handles(material))
            .cloned()
            .collect()
    }

    fn by_id(&self, id: &str) -> Result<Partner, StoreError> {
        self.read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}
