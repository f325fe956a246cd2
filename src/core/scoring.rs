use crate::core::tier::MAX_TIER_MULTIPLIER;
use crate::models::{ScoreBreakdown, ShowHost, Trend};

/// Composite weights, fixed by design
pub const SALES_WEIGHT: f64 = 0.35;
pub const ENGAGEMENT_WEIGHT: f64 = 0.25;
pub const EXPERTISE_WEIGHT: f64 = 0.20;
pub const RELIABILITY_WEIGHT: f64 = 0.20;

/// Conversion rate treated as excellent
const EXCELLENT_CONVERSION: f64 = 0.05;
/// Sales per show treated as excellent
const EXCELLENT_SALES_PER_SHOW: f64 = 10_000_000.0;

/// Categories where product knowledge outweighs presentation
const COMPLEX_CATEGORIES: [&str; 3] = ["fashion", "beauty", "tech"];

/// Calculate the composite match score (0-1) and its sub-scores
///
/// Scoring formula:
/// score = (
///     sales_score * 0.35 +         # Conversion and sales volume, trend adjusted
///     engagement_score * 0.25 +    # Viewers, watch time, return viewers, interaction
///     expertise_score * 0.20 +     # Category fit and skills
///     reliability_score * 0.20     # Cancellations, rating, experience, tier
/// )
pub fn calculate_match_score(host: &ShowHost, category: &str) -> (f64, ScoreBreakdown) {
    let breakdown = ScoreBreakdown {
        sales: calculate_sales_score(host),
        engagement: calculate_engagement_score(host),
        expertise: calculate_expertise_score(host, category),
        reliability: calculate_reliability_score(host),
    };

    let total = breakdown.sales * SALES_WEIGHT
        + breakdown.engagement * ENGAGEMENT_WEIGHT
        + breakdown.expertise * EXPERTISE_WEIGHT
        + breakdown.reliability * RELIABILITY_WEIGHT;

    (clamp_unit(total), breakdown)
}

/// Sales performance score (0-1)
pub fn calculate_sales_score(host: &ShowHost) -> f64 {
    let perf = &host.performance;
    debug_assert!((0.0..=1.0).contains(&perf.conversion_rate));

    let conversion = ratio(perf.conversion_rate, EXCELLENT_CONVERSION);
    let sales = ratio(perf.avg_sales_per_show, EXCELLENT_SALES_PER_SHOW);

    let trend_factor = match perf.trend {
        Trend::Up => 1.1,
        Trend::Flat => 1.0,
        Trend::Down => 0.85,
    };

    clamp_unit((conversion * 0.5 + sales * 0.5) * trend_factor)
}

/// Audience engagement score (0-1)
pub fn calculate_engagement_score(host: &ShowHost) -> f64 {
    let perf = &host.performance;
    debug_assert!((0.0..=1.0).contains(&perf.return_viewer_rate));

    // log10(10,000 viewers) = 4
    let viewers = ratio(finite_or_zero(perf.avg_viewers + 1.0).max(1.0).log10(), 4.0);
    let watch_time = ratio(perf.avg_watch_time_minutes, 30.0);
    let returning = ratio(perf.return_viewer_rate, 0.5);
    let interaction = skill(host.skills.audience_interaction());

    clamp_unit(viewers * 0.25 + watch_time * 0.25 + returning * 0.25 + interaction * 0.25)
}

/// Category expertise score (0-1)
pub fn calculate_expertise_score(host: &ShowHost, category: &str) -> f64 {
    let skills = &host.skills;

    let category_fit = if host.has_category(category) { 1.0 } else { 0.4 };
    let skill_average = skills.average() / 100.0;

    let knowledge_weight = if is_complex_category(category) { 0.8 } else { 0.6 };
    let knowledge = skill(skills.product_knowledge) * knowledge_weight
        + skill(skills.presentation) * (1.0 - knowledge_weight);

    clamp_unit(category_fit * 0.4 + skill_average * 0.3 + knowledge * 0.3)
}

/// Reliability score (0-1)
pub fn calculate_reliability_score(host: &ShowHost) -> f64 {
    let perf = &host.performance;
    debug_assert!((0.0..=5.0).contains(&perf.avg_rating));

    // 10% cancellations wipes out this component
    let attendance = 1.0 - (finite_or_zero(perf.cancellation_rate) * 10.0).clamp(0.0, 1.0);
    let rating = ratio(perf.avg_rating, 5.0);
    let experience = ratio(perf.total_shows as f64, 100.0);
    let tier = host.tier.multiplier() / MAX_TIER_MULTIPLIER;

    clamp_unit(attendance * 0.35 + rating * 0.35 + experience * 0.2 + tier * 0.1)
}

#[inline]
pub fn is_complex_category(category: &str) -> bool {
    COMPLEX_CATEGORIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(category))
}

/// value / anchor, capped at 1
#[inline]
fn ratio(value: f64, anchor: f64) -> f64 {
    (finite_or_zero(value) / anchor).clamp(0.0, 1.0)
}

#[inline]
fn skill(rating: u8) -> f64 {
    debug_assert!(rating <= 100);
    (rating as f64 / 100.0).min(1.0)
}

#[inline]
fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[inline]
fn clamp_unit(value: f64) -> f64 {
    finite_or_zero(value).clamp(0.0, 1.0)
}
