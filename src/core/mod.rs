// Core algorithm exports
pub mod availability;
pub mod licensing;
pub mod matcher;
pub mod revenue;
pub mod scheduler;
pub mod scoring;
pub mod tier;

pub use availability::check_availability;
pub use licensing::{calculate_licensing_value, suggest_licensing_deal};
pub use matcher::{match_hosts_to_request, MatchResult, Matcher};
pub use revenue::calculate_estimated_revenue;
pub use scheduler::find_optimal_show_time;
pub use scoring::calculate_match_score;
pub use tier::{get_host_tier, get_tier_benefits, tier_score, TierBenefits};
