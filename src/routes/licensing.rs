use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::core::{
    calculate_licensing_value, get_tier_benefits, suggest_licensing_deal,
    tier::tier_for_score, tier_score,
};
use crate::models::{
    EvaluateTierRequest, HostRequestPair, LicensingValueRequest, ShowHostTier,
    TierEvaluationResponse,
};
use crate::routes::error::ApiError;

/// Configure tier and licensing routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/tiers/evaluate", web::post().to(evaluate_tier))
        .route("/tiers/{tier}/benefits", web::get().to(tier_benefits))
        .route("/licensing/suggest", web::post().to(suggest_deal))
        .route("/licensing/value", web::post().to(licensing_value));
}

/// POST /api/v1/tiers/evaluate
async fn evaluate_tier(req: web::Json<EvaluateTierRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let score = tier_score(&req.performance);
    let tier = tier_for_score(score);
    tracing::info!("Performance scored {:.1}, evaluated as {} tier", score, tier);

    Ok(HttpResponse::Ok().json(TierEvaluationResponse {
        tier,
        score,
        benefits: *get_tier_benefits(tier),
    }))
}

/// GET /api/v1/tiers/{tier}/benefits
async fn tier_benefits(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let tier: ShowHostTier = path.parse()?;
    Ok(HttpResponse::Ok().json(get_tier_benefits(tier)))
}

/// POST /api/v1/licensing/suggest
async fn suggest_deal(req: web::Json<HostRequestPair>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let deal = suggest_licensing_deal(&req.host, &req.request);
    tracing::info!(
        "Suggested {:?} deal {} for host {} and brand {}",
        deal.deal_type,
        deal.id,
        deal.host_id,
        deal.brand_id
    );

    Ok(HttpResponse::Ok().json(deal))
}

/// POST /api/v1/licensing/value
async fn licensing_value(req: web::Json<LicensingValueRequest>) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let value = calculate_licensing_value(&req.deal, &req.performance);
    tracing::info!(
        "Deal {} settled at {} over {} shows",
        req.deal.id,
        value.total_value,
        req.performance.shows_completed
    );

    Ok(HttpResponse::Ok().json(value))
}
