use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::Validate;
use crate::models::domain::{Coordinate, Material, SearchQuery};

/// Rejections of malformed search parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("parameter {0} missing")]
    MissingArgument(&'static str),

    #[error("invalid input for parameter {0}")]
    InvalidInput(&'static str),
}

/// Raw query string of `GET /partners`
///
/// Fields are kept as strings so that missing and malformed values can be
/// reported per parameter instead of as a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchPartnersParams {
    pub material: Option<String>,
    pub lat: Option<String>,
    pub long: Option<String>,
}

/// Parsed longitude awaiting range validation
#[derive(Debug, Clone, Copy, Validate)]
struct Longitude {
    #[validate(range(min = -180.0, max = 180.0))]
    long: f64,
}

/// Parsed latitude awaiting range validation
#[derive(Debug, Clone, Copy, Validate)]
struct Latitude {
    #[validate(range(min = -90.0, max = 90.0))]
    lat: f64,
}

impl SearchPartnersParams {
    /// Validate the parameters and build a search query
    ///
    /// Each parameter is checked completely (presence, parse, range) before
    /// the next one, in the order material, long, lat; the first failure wins.
    pub fn into_search_query(self) -> Result<SearchQuery, RequestError> {
        let material = self
            .material
            .ok_or(RequestError::MissingArgument("material"))?
            .parse::<Material>()
            .map_err(|_| RequestError::InvalidInput("material"))?;

        let longitude = Longitude { long: parse_float(self.long, "long")? };
        longitude
            .validate()
            .map_err(|_| RequestError::InvalidInput("long"))?;

        let latitude = Latitude { lat: parse_float(self.lat, "lat")? };
        latitude
            .validate()
            .map_err(|_| RequestError::InvalidInput("lat"))?;

        Ok(SearchQuery {
            material,
            customer_location: Coordinate::new(latitude.lat, longitude.long),
        })
    }
}

fn parse_float(value: Option<String>, name: &'static str) -> Result<f64, RequestError> {
    let value = value.ok_or(RequestError::MissingArgument(name))?;
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(RequestError::InvalidInput(name))
}
