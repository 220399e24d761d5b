// Route exports
pub mod partners;

use actix_web::web;

pub use partners::AppState;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(partners::configure);
}
