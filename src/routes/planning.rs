use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::scheduler::MAX_SEARCH_DAYS;
use crate::core::{calculate_estimated_revenue, check_availability, find_optimal_show_time};
use crate::models::{
    AvailabilityResponse, CheckAvailabilityRequest, HostRequestPair, OptimalSlotsRequest,
    OptimalSlotsResponse,
};
use crate::routes::error::ApiError;

/// Configure availability, revenue and scheduling routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/availability/check", web::post().to(check_host_availability))
        .route("/revenue/estimate", web::post().to(estimate_revenue))
        .route("/schedule/optimal", web::post().to(optimal_slots));
}

/// POST /api/v1/availability/check
async fn check_host_availability(
    req: web::Json<CheckAvailabilityRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let availability = check_availability(&req.host, &req.schedule);
    tracing::debug!(
        "Host {} is {:?} on {} {}",
        req.host.id,
        availability,
        req.schedule.date,
        req.schedule.start_time
    );

    Ok(HttpResponse::Ok().json(AvailabilityResponse {
        host_id: req.host.id.clone(),
        availability,
    }))
}

/// POST /api/v1/revenue/estimate
async fn estimate_revenue(req: web::Json<HostRequestPair>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let revenue = calculate_estimated_revenue(&req.host, &req.request);
    tracing::info!(
        "Estimated gross {} for host {} on request {}",
        revenue.gross_sales,
        req.host.id,
        req.request.id
    );

    Ok(HttpResponse::Ok().json(revenue))
}

/// POST /api/v1/schedule/optimal
async fn optimal_slots(req: web::Json<OptimalSlotsRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let constraints = &req.constraints;
    let span_days = (constraints.end_date - constraints.start_date).num_days() + 1;
    if span_days < 1 || span_days > MAX_SEARCH_DAYS as i64 {
        return Err(ApiError::InvalidWindow {
            start: constraints.start_date,
            end: constraints.end_date,
        });
    }

    let slots = find_optimal_show_time(&req.host, constraints);
    tracing::info!(
        "Found {} slots for host {} between {} and {}",
        slots.len(),
        req.host.id,
        constraints.start_date,
        constraints.end_date
    );

    Ok(HttpResponse::Ok().json(OptimalSlotsResponse {
        host_id: req.host.id.clone(),
        slots,
    }))
}
