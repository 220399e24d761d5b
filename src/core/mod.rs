// Core algorithm exports
pub mod distance;
pub mod matcher;
pub mod ranking;

pub use distance::distance_km;
pub use matcher::MatchingService;
pub use ranking::{filter_and_rank, rank_matches, Match};
