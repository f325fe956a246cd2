use crate::models::{EstimatedRevenue, LiveShowRequest, Product, ShowHost};

/// Platform take on gross sales. Shared with licensing settlement.
///
/// Policy knob: product owners may need to tune this.
pub const PLATFORM_FEE_RATE: f64 = 0.15;

/// Fraction of theoretical maximum sales a show realistically achieves.
///
/// Policy knob: product owners may need to tune this.
pub const ACHIEVED_SALES_FRACTION: f64 = 0.7;

/// Per-product unit cap when valuing a catalog
pub const INVENTORY_CAP: u32 = 100;

/// Value of the sellable catalog, inventory capped per product
///
/// Saturates at `i64::MAX` instead of wrapping on oversized catalogs.
pub fn total_product_value(products: &[Product]) -> i64 {
    products.iter().fold(0i64, |total, p| {
        let line = p.price.saturating_mul(p.inventory.min(INVENTORY_CAP) as i64);
        total.saturating_add(line)
    })
}

/// Project gross sales and the fee split for a host running a show
///
/// Each fee is rounded on its own before brand net is derived, so
/// `brand_net + host_fee + host_commission + platform_fee == gross_sales`.
pub fn calculate_estimated_revenue(host: &ShowHost, request: &LiveShowRequest) -> EstimatedRevenue {
    let product_value = total_product_value(&request.products);

    let gross_sales = round_currency(
        product_value as f64
            * host.performance.conversion_rate
            * host.tier.multiplier()
            * ACHIEVED_SALES_FRACTION,
    );

    let host_fee = host.pricing.base_fee;
    let host_commission = round_currency(gross_sales as f64 * host.pricing.commission_rate);
    let platform_fee = round_currency(gross_sales as f64 * PLATFORM_FEE_RATE);

    EstimatedRevenue {
        gross_sales,
        host_fee,
        host_commission,
        platform_fee,
        brand_net: gross_sales
            .saturating_sub(host_fee)
            .saturating_sub(host_commission)
            .saturating_sub(platform_fee),
        host_total: host_fee.saturating_add(host_commission),
    }
}

/// Round to whole currency units, mapping non-finite values to zero
///
/// Out-of-range values clamp to the `i64` bounds.
#[inline]
pub(crate) fn round_currency(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}
