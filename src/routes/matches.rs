use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::models::{FindMatchesRequest, FindMatchesResponse, HealthResponse};
use crate::routes::error::ApiError;

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

impl AppState {
    pub fn new(matching: MatchingSettings) -> Self {
        Self {
            matcher: Matcher::new(matching.default_limit),
            matching,
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "request": { "id": "...", "brandId": "...", "category": "beauty", ... },
///   "hosts": [ { "id": "...", "tier": "pro", ... } ],
///   "limit": 5
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!(
            "Validation failed for find_matches request {}: {}",
            req.request.id,
            errors
        );
        return Err(errors.into());
    }

    let FindMatchesRequest { request, hosts, limit } = req.into_inner();
    let limit = state.matching.effective_limit(limit);

    tracing::info!(
        "Matching request {} ({}) against {} hosts, limit: {}",
        request.id,
        request.category,
        hosts.len(),
        limit
    );

    let result = state.matcher.find_matches(&request, &hosts, Some(limit));

    tracing::info!(
        "Returning {} matches for request {} (busy: {}, over budget: {})",
        result.matches.len(),
        request.id,
        result.excluded_busy,
        result.excluded_over_budget
    );

    Ok(HttpResponse::Ok().json(FindMatchesResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
        excluded_busy: result.excluded_busy,
        excluded_over_budget: result.excluded_over_budget,
    }))
}
