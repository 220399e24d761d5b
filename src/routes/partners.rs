use actix_web::{web, HttpResponse, Responder};
use crate::core::MatchingService;
use crate::models::{ErrorResponse, HealthResponse, SearchPartnersParams};
use crate::services::StoreError;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub service: MatchingService,
}

/// Configure all partner-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .service(web::resource("/partners").route(web::get().to(search_partners)))
        .service(web::resource("/partners/{id}").route(web::get().to(get_partner)));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Ranked partner search
///
/// GET /partners?material=wood&lat=48.3535&long=11.7812
async fn search_partners(
    state: web::Data<AppState>,
    query: web::Query<SearchPartnersParams>,
) -> impl Responder {
    let search = match query.into_inner().into_search_query() {
        Ok(search) => search,
        Err(e) => {
            tracing::info!("Rejected partner search: {}", e);
            return HttpResponse::BadRequest().json(ErrorResponse::bad_request(e.to_string()));
        }
    };

    let partners = state.service.search(&search);

    tracing::info!(
        "Returning {} partners for {} at ({}, {})",
        partners.len(),
        search.material,
        search.customer_location.latitude,
        search.customer_location.longitude
    );

    HttpResponse::Ok().json(partners)
}

/// Partner lookup
///
/// GET /partners/{id}
async fn get_partner(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> impl Responder {
    let id = path.into_inner();

    match state.service.get_by_id(&id) {
        Ok(partner) => HttpResponse::Ok().json(partner),
        Err(e @ StoreError::NotFound(_)) => {
            tracing::debug!("{}", e);
            HttpResponse::NotFound().json(ErrorResponse::not_found(e.to_string()))
        }
        Err(e) => {
            tracing::error!("Failed to fetch partner {}: {}", id, e);
            HttpResponse::InternalServerError().json(ErrorResponse::internal(e.to_string()))
        }
    }
}
