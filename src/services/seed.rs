use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;
use crate::models::{Coordinate, Partner};

/// Errors that can occur while loading seed partners
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid partner {id}: {reason}")]
    InvalidPartner { id: String, reason: String },
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    #[serde(default)]
    partners: Vec<Partner>,
}

/// Load partners from a TOML seed file
///
/// ```toml
/// [[partners]]
/// id = "1"
/// name = "John and Johnson"
/// experienced_material = ["wood", "carpet"]
/// address = { latitude = 48.1360, longitude = 11.6875 }
/// operating_radius = 100
/// rating = 3
/// ```
pub fn load_partners<P: AsRef<Path>>(path: P) -> Result<Vec<Partner>, SeedError> {
    let contents = std::fs::read_to_string(path.as_ref())?;
    let partners = parse_partners(&contents)?;
    tracing::info!("Loaded {} partners from {}", partners.len(), path.as_ref().display());
    Ok(partners)
}

/// Parse and validate partners from TOML text
pub fn parse_partners(contents: &str) -> Result<Vec<Partner>, SeedError> {
    let file: SeedFile = toml::from_str(contents)?;
    for partner in &file.partners {
        validate_partner(partner)?;
    }
    Ok(file.partners)
}

fn validate_partner(partner: &Partner) -> Result<(), SeedError> {
    let invalid = |reason: &str| SeedError::InvalidPartner {
        id: partner.id.clone(),
        reason: reason.to_string(),
    };

    if partner.id.is_empty() {
        return Err(invalid("empty id"));
    }
    if !partner.operating_radius_km.is_finite() || partner.operating_radius_km < 0.0 {
        return Err(invalid("operating radius must be a non-negative number"));
    }
    if !partner.location.is_valid() {
        return Err(invalid("address out of range"));
    }
    Ok(())
}

fn materials(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|m| m.to_string()).collect()
}

/// Demo partners served when no seed file is configured
pub fn demo_partners() -> Vec<Partner> {
    let munich = Coordinate::new(48.1360, 11.6875);

    vec![
        Partner {
            id: "1".to_string(),
            name: "John and Johnson".to_string(),
            materials: materials(&["wood", "carpet", "tiles"]),
            location: munich,
            operating_radius_km: 100.0,
            rating: 3,
        },
        Partner {
            id: "2".to_string(),
            name: "Peter Skywalker".to_string(),
            materials: materials(&["carpet", "tiles"]),
            location: munich,
            operating_radius_km: 50.0,
            rating: 4,
        },
        Partner {
            id: "3".to_string(),
            name: "Wood-hugger Gmbh".to_string(),
            materials: materials(&["wood"]),
            location: munich,
            operating_radius_km: 50.0,
            rating: 5,
        },
    ]
}
