use std::cmp::Ordering;

use tracing::debug;

use crate::core::{
    availability::check_availability,
    revenue::calculate_estimated_revenue,
    scoring::calculate_match_score,
};
use crate::models::{Availability, HostMatchResult, LiveShowRequest, ShowHost, ShowHostTier, Trend};

/// Number of matches returned when the caller does not say otherwise
pub const DEFAULT_MATCH_LIMIT: usize = 5;

/// Hosts may cost up to this multiple of the brand's budget before exclusion.
///
/// Policy knob: product owners may need to tune this.
pub const BUDGET_TOLERANCE: f64 = 1.2;

const MAX_REASONS: usize = 6;

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<HostMatchResult>,
    pub total_candidates: usize,
    pub excluded_busy: usize,
    pub excluded_over_budget: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Availability filter (busy hosts dropped)
/// 2. Revenue estimate and budget filter
/// 3. Scoring and justification
/// 4. Ranking by availability, then score
#[derive(Debug, Clone)]
pub struct Matcher {
    default_limit: usize,
}

impl Matcher {
    pub fn new(default_limit: usize) -> Self {
        Self { default_limit }
    }

    pub fn with_default_limit() -> Self {
        Self::new(DEFAULT_MATCH_LIMIT)
    }

    pub fn default_limit(&self) -> usize {
        self.default_limit
    }

    /// Rank a host pool against a show request
    ///
    /// # Arguments
    /// * `request` - The brand's show request
    /// * `hosts` - Candidate hosts, in the caller's preferred order
    /// * `limit` - Maximum number of matches, or the default limit when `None`
    ///
    /// # Returns
    /// MatchResult with ranked matches and exclusion counts. Hosts with equal
    /// availability and score keep their pool order.
    pub fn find_matches(
        &self,
        request: &LiveShowRequest,
        hosts: &[ShowHost],
        limit: Option<usize>,
    ) -> MatchResult {
        let limit = limit.unwrap_or(self.default_limit);
        let budget_ceiling = request.budget.host_budget_max as f64 * BUDGET_TOLERANCE;

        let mut excluded_busy = 0;
        let mut excluded_over_budget = 0;

        let mut matches: Vec<HostMatchResult> = hosts
            .iter()
            .filter_map(|host| {
                // Stage 1: availability
                let availability = check_availability(host, &request.schedule);
                if availability == Availability::Busy {
                    debug!("Excluding host {}: busy on {}", host.id, request.schedule.date);
                    excluded_busy += 1;
                    return None;
                }

                // Stage 2: budget
                let revenue = calculate_estimated_revenue(host, request);
                if revenue.host_total as f64 > budget_ceiling {
                    debug!(
                        "Excluding host {}: cost {} exceeds budget ceiling {:.0}",
                        host.id, revenue.host_total, budget_ceiling
                    );
                    excluded_over_budget += 1;
                    return None;
                }

                // Stage 3: scoring
                let (score, scores) = calculate_match_score(host, &request.category);

                Some(HostMatchResult {
                    host_id: host.id.clone(),
                    host_name: host.name.clone(),
                    match_score: round_score(score),
                    scores,
                    estimated_sales: revenue.gross_sales,
                    estimated_revenue: revenue,
                    reasons: build_reasons(host, &request.category),
                    availability,
                })
            })
            .collect();

        // Stage 4: stable sort, available first, then by score (descending)
        matches.sort_by(|a, b| {
            a.availability
                .rank()
                .cmp(&b.availability.rank())
                .then_with(|| {
                    b.match_score
                        .partial_cmp(&a.match_score)
                        .unwrap_or(Ordering::Equal)
                })
        });

        matches.truncate(limit);

        MatchResult {
            matches,
            total_candidates: hosts.len(),
            excluded_busy,
            excluded_over_budget,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_limit()
    }
}

/// Rank hosts for a request and return at most `limit` matches
pub fn match_hosts_to_request(
    request: &LiveShowRequest,
    hosts: &[ShowHost],
    limit: usize,
) -> Vec<HostMatchResult> {
    Matcher::default()
        .find_matches(request, hosts, Some(limit))
        .matches
}

/// Short human-readable justifications, each behind a threshold
fn build_reasons(host: &ShowHost, category: &str) -> Vec<String> {
    let perf = &host.performance;
    let mut reasons = Vec::with_capacity(MAX_REASONS);

    if perf.avg_sales_per_show >= 1_000_000.0 {
        reasons.push(format!(
            "Average sales {} per show",
            format_won(perf.avg_sales_per_show.round() as i64)
        ));
    }

    if perf.avg_viewers >= 1_000.0 {
        reasons.push(format!(
            "{} average viewers",
            format_thousands(perf.avg_viewers.round() as i64)
        ));
    }

    if host.has_category(category) {
        reasons.push(format!("Specializes in {}", category));
    }

    if perf.avg_rating >= 4.5 {
        reasons.push(format!("Rated {:.1}/5 by brands", perf.avg_rating));
    }

    if host.tier >= ShowHostTier::Star {
        reasons.push(format!("{} tier host", capitalize(host.tier.as_str())));
    }

    if perf.trend == Trend::Up {
        reasons.push("Sales trending up".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

/// Round to four decimals so near-identical scores tie deterministically
#[inline]
fn round_score(score: f64) -> f64 {
    (score * 10_000.0).round() / 10_000.0
}

fn format_won(amount: i64) -> String {
    format!("₩{}", format_thousands(amount))
}

fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        HostAvailability, HostPerformance, HostPricing, HostSkills, Product, RequestPriority,
        ShowBudget, ShowSchedule,
    };

    fn create_host(id: &str, base_fee: i64, preferred_days: Vec<u8>) -> ShowHost {
        ShowHost {
            id: id.to_string(),
            name: format!("Host {}", id),
            tier: ShowHostTier::Pro,
            categories: vec!["beauty".to_string()],
            skills: HostSkills {
                presentation: 80,
                product_knowledge: 80,
                sales_closing: 80,
                crisis_management: 80,
                audience_interaction: None,
            },
            performance: HostPerformance {
                conversion_rate: 0.03,
                avg_sales_per_show: 4_000_000.0,
                avg_viewers: 1_500.0,
                avg_watch_time_minutes: 15.0,
                return_viewer_rate: 0.3,
                avg_rating: 4.6,
                total_shows: 60,
                cancellation_rate: 0.01,
                trend: Trend::Flat,
            },
            availability: HostAvailability {
                preferred_days,
                preferred_hours: vec![20],
                blocked_dates: vec![],
                current_bookings: 0,
                max_shows_per_week: 4,
            },
            pricing: HostPricing {
                base_fee,
                commission_rate: 0.1,
            },
        }
    }

    fn create_request() -> LiveShowRequest {
        LiveShowRequest {
            id: "req_1".to_string(),
            brand_id: "brand_1".to_string(),
            category: "beauty".to_string(),
            schedule: ShowSchedule {
                // Friday
                date: "2026-11-06".parse().unwrap(),
                start_time: "20:00".to_string(),
            },
            budget: ShowBudget {
                host_budget_max: 200_000,
                expected_sales: 3_000_000,
            },
            products: vec![Product {
                name: "Cushion".to_string(),
                price: 30_000,
                inventory: 100,
            }],
            priority: RequestPriority::Normal,
        }
    }

    #[test]
    fn test_find_matches_basic() {
        let matcher = Matcher::default();
        let request = create_request();

        let mut blocked = create_host("2", 100_000, vec![5]);
        blocked.availability.blocked_dates = vec![request.schedule.date];

        let hosts = vec![
            create_host("1", 100_000, vec![5]),
            blocked,
            create_host("3", 1_000_000, vec![5]), // Too expensive
        ];

        let result = matcher.find_matches(&request, &hosts, None);

        assert_eq!(result.matches.len(), 1);
        assert_eq!(result.matches[0].host_id, "1");
        assert_eq!(result.total_candidates, 3);
        assert_eq!(result.excluded_busy, 1);
        assert_eq!(result.excluded_over_budget, 1);
    }

    #[test]
    fn test_budget_tolerance_boundary() {
        let request = create_request();
        // gross = 3,000,000 * 0.03 * 0.7 = 63,000, commission 6,300
        // ceiling = 240,000, so base fee 233,700 sits exactly on it
        let hosts = vec![
            create_host("at", 233_700, vec![5]),
            create_host("over", 233_701, vec![5]),
        ];

        let matches = match_hosts_to_request(&request, &hosts, 5);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].host_id, "at");
        assert_eq!(matches[0].estimated_revenue.host_total, 240_000);
    }

    #[test]
    fn test_available_sorts_before_limited() {
        let request = create_request();

        let mut strong_but_limited = create_host("limited", 100_000, vec![1]);
        strong_but_limited.tier = ShowHostTier::Legend;
        strong_but_limited.performance.trend = Trend::Up;

        let hosts = vec![strong_but_limited, create_host("available", 100_000, vec![5])];
        let matches = match_hosts_to_request(&request, &hosts, 5);

        assert_eq!(matches[0].host_id, "available");
        assert_eq!(matches[0].availability, Availability::Available);
        assert_eq!(matches[1].availability, Availability::Limited);
        assert!(matches[1].match_score > matches[0].match_score);
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let request = create_request();
        let hosts: Vec<ShowHost> = ["c", "a", "b"]
            .iter()
            .map(|id| create_host(id, 100_000, vec![5]))
            .collect();

        let matches = match_hosts_to_request(&request, &hosts, 5);
        let ids: Vec<&str> = matches.iter().map(|m| m.host_id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_respects_limit() {
        let request = create_request();
        let hosts: Vec<ShowHost> = (0..20)
            .map(|i| create_host(&i.to_string(), 100_000, vec![5]))
            .collect();

        assert_eq!(Matcher::default().find_matches(&request, &hosts, None).matches.len(), 5);
        assert_eq!(match_hosts_to_request(&request, &hosts, 3).len(), 3);
    }

    #[test]
    fn test_reasons() {
        let mut host = create_host("1", 100_000, vec![5]);
        host.tier = ShowHostTier::Star;
        host.performance.trend = Trend::Up;

        let reasons = build_reasons(&host, "beauty");
        assert_eq!(
            reasons,
            vec![
                "Average sales ₩4,000,000 per show".to_string(),
                "1,500 average viewers".to_string(),
                "Specializes in beauty".to_string(),
                "Rated 4.6/5 by brands".to_string(),
                "Star tier host".to_string(),
                "Sales trending up".to_string(),
            ]
        );

        host.performance.avg_viewers = 200.0;
        host.performance.avg_rating = 4.0;
        assert_eq!(build_reasons(&host, "food").len(), 3);
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(12_345_678), "12,345,678");
        assert_eq!(format_thousands(-4_500), "-4,500");
    }

    #[test]
    fn test_empty_pool() {
        let result = Matcher::default().find_matches(&create_request(), &[], Some(5));
        assert!(result.matches.is_empty());
        assert_eq!(result.total_candidates, 0);
    }
}
