use chrono::Days;
use uuid::Uuid;

use crate::core::revenue::{round_currency, PLATFORM_FEE_RATE};
use crate::models::{
    ActualPerformance, DealDuration, DealType, ExclusivityTerms, LicensingDeal, LicensingValue,
    LiveShowRequest, PerformanceBonus, RequestPriority, ShowHost,
};

/// Licensing premium over the host's tiered base fee
pub const LICENSE_FEE_MARKUP: f64 = 1.5;

/// Share of sales above threshold paid as a bonus
pub const PERFORMANCE_BONUS_RATE: f64 = 0.05;

/// Bonus per 1000 average viewers per show, premium deals only
pub const VIEWER_BONUS_PER_THOUSAND: i64 = 10_000;

/// Radius of the exclusivity zone
pub const EXCLUSIVITY_RADIUS_KM: f64 = 5.0;

const SERIES_DAYS: u64 = 28;
const EXCLUSIVE_DAYS: u64 = 90;

/// Propose licensing terms for a host and a show request
///
/// The deal id is derived from brand, host and request ids, so the same
/// inputs always produce the same deal.
pub fn suggest_licensing_deal(host: &ShowHost, request: &LiveShowRequest) -> LicensingDeal {
    let deal_type = match request.priority {
        RequestPriority::Exclusive => DealType::Exclusive,
        RequestPriority::Premium => DealType::Series,
        RequestPriority::Normal => DealType::OneTime,
    };

    let base_license_fee = round_currency(
        host.pricing.base_fee as f64 * host.tier.multiplier() * LICENSE_FEE_MARKUP,
    );

    let viewer_bonus =
        (request.priority == RequestPriority::Premium).then_some(VIEWER_BONUS_PER_THOUSAND);

    let exclusivity = (deal_type == DealType::Exclusive).then(|| ExclusivityTerms {
        category_lock: request.category.clone(),
        competitor_restriction: Vec::new(),
        radius_km: EXCLUSIVITY_RADIUS_KM,
    });

    let deal_key = format!("{}:{}:{}", request.brand_id, host.id, request.id);

    LicensingDeal {
        id: Uuid::new_v5(&Uuid::NAMESPACE_OID, deal_key.as_bytes()),
        brand_id: request.brand_id.clone(),
        host_id: host.id.clone(),
        deal_type,
        base_license_fee,
        performance_bonus: PerformanceBonus {
            sales_threshold: sales_threshold(host, request),
            bonus_rate: PERFORMANCE_BONUS_RATE,
            viewer_bonus,
        },
        duration: deal_duration(request, deal_type),
        exclusivity,
    }
}

/// Settle a licensing deal against what actually happened
pub fn calculate_licensing_value(deal: &LicensingDeal, actual: &ActualPerformance) -> LicensingValue {
    let shows = actual.shows_completed as i64;
    let bonus = &deal.performance_bonus;

    let base_fee = deal.base_license_fee.saturating_mul(shows);

    let performance_bonus = if actual.total_sales > bonus.sales_threshold {
        let excess = actual.total_sales.saturating_sub(bonus.sales_threshold);
        round_currency(excess as f64 * bonus.bonus_rate)
    } else {
        0
    };

    let viewer_bonus = match bonus.viewer_bonus {
        Some(rate) if actual.avg_viewers.is_finite() && actual.avg_viewers > 0.0 => {
            // f64 -> i64 casts saturate
            let thousands = (actual.avg_viewers / 1000.0).floor() as i64;
            thousands.saturating_mul(rate).saturating_mul(shows)
        }
        _ => 0,
    };

    let total_value = base_fee
        .saturating_add(performance_bonus)
        .saturating_add(viewer_bonus);

    LicensingValue {
        base_fee,
        performance_bonus,
        viewer_bonus,
        total_value,
        platform_revenue: round_currency(total_value as f64 * PLATFORM_FEE_RATE),
    }
}

/// Host's historical sales per show, falling back to the brand's expectation
/// when the history is degenerate
fn sales_threshold(host: &ShowHost, request: &LiveShowRequest) -> i64 {
    let historical = host.performance.avg_sales_per_show;
    if historical.is_finite() && historical >= 0.0 {
        historical.round() as i64
    } else {
        request.budget.expected_sales.max(0)
    }
}

fn deal_duration(request: &LiveShowRequest, deal_type: DealType) -> DealDuration {
    let start_date = request.schedule.date;
    let days = match deal_type {
        DealType::OneTime => 0,
        DealType::Series => SERIES_DAYS,
        DealType::Exclusive => EXCLUSIVE_DAYS,
    };

    DealDuration {
        start_date,
        end_date: start_date
            .checked_add_days(Days::new(days))
            .unwrap_or(start_date),
    }
}
