//! Live Match - host matching engine for live-commerce shows
//!
//! This library pairs show hosts with brand show requests. It scores fit,
//! checks availability, projects revenue and structures licensing deals.
//! Every engine operation is a pure function over caller-supplied snapshots.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    calculate_estimated_revenue, calculate_licensing_value, check_availability,
    find_optimal_show_time, get_host_tier, get_tier_benefits, match_hosts_to_request,
    suggest_licensing_deal, Matcher,
};
pub use models::{
    Availability, EstimatedRevenue, HostMatchResult, LicensingDeal, LiveShowRequest, ShowHost,
    ShowHostTier,
};
