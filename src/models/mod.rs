// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Coordinate, Partner, Material, SearchQuery, UnknownMaterial};
pub use requests::{SearchPartnersParams, RequestError};
pub use responses::{HealthResponse, ErrorResponse};
