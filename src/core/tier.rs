use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

use crate::models::{HostPerformance, ShowHostTier};

/// Tier multiplier of the top tier, used to normalise multipliers to 0..1
pub const MAX_TIER_MULTIPLIER: f64 = 1.5;

/// Static perks and pricing attached to a tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBenefits {
    pub tier: ShowHostTier,
    pub fee_multiplier: f64,
    pub priority_matching: bool,
    pub badge_color: &'static str,
    pub perks: &'static [&'static str],
}

static BENEFITS: [TierBenefits; 5] = [
    TierBenefits {
        tier: ShowHostTier::Rookie,
        fee_multiplier: 0.7,
        priority_matching: false,
        badge_color: "#9CA3AF",
        perks: &["Standard matching", "Onboarding coaching"],
    },
    TierBenefits {
        tier: ShowHostTier::Rising,
        fee_multiplier: 0.9,
        priority_matching: false,
        badge_color: "#10B981",
        perks: &["Standard matching", "Monthly performance report"],
    },
    TierBenefits {
        tier: ShowHostTier::Pro,
        fee_multiplier: 1.0,
        priority_matching: false,
        badge_color: "#3B82F6",
        perks: &[
            "Featured in category listings",
            "Monthly performance report",
            "Scheduling support",
        ],
    },
    TierBenefits {
        tier: ShowHostTier::Star,
        fee_multiplier: 1.2,
        priority_matching: true,
        badge_color: "#8B5CF6",
        perks: &[
            "Priority matching",
            "Homepage placement",
            "Dedicated account manager",
        ],
    },
    TierBenefits {
        tier: ShowHostTier::Legend,
        fee_multiplier: 1.5,
        priority_matching: true,
        badge_color: "#F59E0B",
        perks: &[
            "Priority matching",
            "Exclusive brand deals",
            "Homepage placement",
            "Dedicated production crew",
        ],
    },
];

impl ShowHostTier {
    pub const ALL: [ShowHostTier; 5] = [
        ShowHostTier::Rookie,
        ShowHostTier::Rising,
        ShowHostTier::Pro,
        ShowHostTier::Star,
        ShowHostTier::Legend,
    ];

    /// Fee and revenue multiplier for this tier
    #[inline]
    pub fn multiplier(self) -> f64 {
        self.benefits().fee_multiplier
    }

    #[inline]
    pub fn benefits(self) -> &'static TierBenefits {
        &BENEFITS[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ShowHostTier::Rookie => "rookie",
            ShowHostTier::Rising => "rising",
            ShowHostTier::Pro => "pro",
            ShowHostTier::Star => "star",
            ShowHostTier::Legend => "legend",
        }
    }
}

impl fmt::Display for ShowHostTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown host tier: {0}")]
pub struct UnknownTier(pub String);

impl FromStr for ShowHostTier {
    type Err = UnknownTier;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShowHostTier::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTier(s.to_string()))
    }
}

/// Compute the 0-100 tier score from historical performance
///
/// Four capped components of 25 points each:
/// - total shows / 4
/// - average sales per show / 400,000
/// - average rating × 5
/// - conversion rate × 500
pub fn tier_score(performance: &HostPerformance) -> f64 {
    let shows = (performance.total_shows as f64 / 4.0).min(25.0);
    let sales = (non_negative(performance.avg_sales_per_show) / 400_000.0).min(25.0);
    let rating = (non_negative(performance.avg_rating) * 5.0).min(25.0);
    let conversion = (non_negative(performance.conversion_rate) * 500.0).min(25.0);

    shows + sales + rating + conversion
}

/// Derive a host's tier from historical performance
pub fn get_host_tier(performance: &HostPerformance) -> ShowHostTier {
    tier_for_score(tier_score(performance))
}

/// Map a 0-100 tier score onto the tier thresholds
pub fn tier_for_score(score: f64) -> ShowHostTier {
    match score {
        s if s >= 90.0 => ShowHostTier::Legend,
        s if s >= 75.0 => ShowHostTier::Star,
        s if s >= 55.0 => ShowHostTier::Pro,
        s if s >= 35.0 => ShowHostTier::Rising,
        _ => ShowHostTier::Rookie,
    }
}

/// Static benefits lookup
#[inline]
pub fn get_tier_benefits(tier: ShowHostTier) -> &'static TierBenefits {
    tier.benefits()
}

// NaN would otherwise win every `min(25.0)` cap
#[inline]
fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}
