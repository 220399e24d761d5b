use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// True when latitude is in [-90, 90] and longitude in [-180, 180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Service partner with its capabilities and operating area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: String,
    pub name: String,
    #[serde(rename = "experienced_material", default)]
    pub materials: BTreeSet<String>,
    #[serde(rename = "address")]
    pub location: Coordinate,
    #[serde(rename = "operating_radius")]
    pub operating_radius_km: f64,
    pub rating: i32,
}

impl Partner {
    /// Helper to check whether the partner is experienced in a material
    pub fn handles(&self, material: &str) -> bool {
        self.materials.contains(material)
    }
}

/// Materials a customer can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Wood,
    Carpet,
    Tiles,
}

impl Material {
    pub const ALL: [Material; 3] = [Material::Wood, Material::Carpet, Material::Tiles];

    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Wood => "wood",
            Material::Carpet => "carpet",
            Material::Tiles => "tiles",
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no recognized material
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown material: {0}")]
pub struct UnknownMaterial(pub String);

impl FromStr for Material {
    type Err = UnknownMaterial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Material::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownMaterial(s.to_string()))
    }
}

/// A validated customer search
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchQuery {
    pub material: Material,
    pub customer_location: Coordinate,
}
