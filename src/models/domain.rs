use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Capability level of a host, ordered from rookie to legend
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowHostTier {
    Rookie,
    Rising,
    Pro,
    Star,
    Legend,
}

/// Coarse direction of a host's recent sales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    #[default]
    Flat,
    Down,
}

/// Host skill ratings, each 0-100
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HostSkills {
    #[validate(range(max = 100))]
    pub presentation: u8,
    #[validate(range(max = 100))]
    pub product_knowledge: u8,
    #[validate(range(max = 100))]
    pub sales_closing: u8,
    #[validate(range(max = 100))]
    pub crisis_management: u8,
    #[serde(default)]
    #[validate(range(max = 100))]
    pub audience_interaction: Option<u8>,
}

impl HostSkills {
    /// Audience interaction rating, falling back to presentation when not rated
    pub fn audience_interaction(&self) -> u8 {
        self.audience_interaction.unwrap_or(self.presentation)
    }

    /// Mean of the four core skill ratings (0-100)
    pub fn average(&self) -> f64 {
        (self.presentation as f64
            + self.product_knowledge as f64
            + self.sales_closing as f64
            + self.crisis_management as f64)
            / 4.0
    }
}

/// Aggregated historical show metrics
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HostPerformance {
    #[validate(range(min = 0.0, max = 1.0))]
    pub conversion_rate: f64,
    #[validate(range(min = 0.0))]
    pub avg_sales_per_show: f64,
    #[validate(range(min = 0.0))]
    pub avg_viewers: f64,
    #[validate(range(min = 0.0))]
    pub avg_watch_time_minutes: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub return_viewer_rate: f64,
    #[validate(range(min = 0.0, max = 5.0))]
    pub avg_rating: f64,
    pub total_shows: u32,
    #[validate(range(min = 0.0, max = 1.0))]
    pub cancellation_rate: f64,
    #[serde(default)]
    pub trend: Trend,
}

/// Stated scheduling preferences and current load
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HostAvailability {
    /// ISO weekday numbers, 1 = Monday .. 7 = Sunday
    #[validate(custom(function = "validate_weekdays"))]
    pub preferred_days: Vec<u8>,
    #[validate(custom(function = "validate_hours"))]
    pub preferred_hours: Vec<u8>,
    #[serde(default)]
    pub blocked_dates: Vec<NaiveDate>,
    #[serde(default)]
    pub current_bookings: u32,
    pub max_shows_per_week: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HostPricing {
    #[validate(range(min = 0i64, max = 1000000000000i64))]
    pub base_fee: i64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub commission_rate: f64,
}

/// Live-commerce show host as loaded by the caller
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShowHost {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    pub tier: ShowHostTier,
    #[serde(default)]
    pub categories: Vec<String>,
    #[validate(nested)]
    pub skills: HostSkills,
    #[validate(nested)]
    pub performance: HostPerformance,
    #[validate(nested)]
    pub availability: HostAvailability,
    #[validate(nested)]
    pub pricing: HostPricing,
}

impl ShowHost {
    /// Whether the host is qualified for a category (case-insensitive)
    pub fn has_category(&self, category: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category))
    }
}

/// Requested show slot
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShowSchedule {
    pub date: NaiveDate,
    /// Local start time, "HH:MM"
    #[validate(custom(function = "validate_start_time"))]
    pub start_time: String,
}

impl ShowSchedule {
    /// Hour of day from the start time, if it parses
    pub fn hour(&self) -> Option<u8> {
        parse_hour(&self.start_time)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShowBudget {
    #[validate(range(min = 0))]
    pub host_budget_max: i64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub expected_sales: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub name: String,
    #[validate(range(min = 0i64, max = 1000000000000i64))]
    pub price: i64,
    pub inventory: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestPriority {
    #[default]
    Normal,
    Premium,
    Exclusive,
}

/// Brand-submitted request for a live show
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LiveShowRequest {
    #[validate(length(min = 1))]
    pub id: String,
    #[validate(length(min = 1))]
    pub brand_id: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(nested)]
    pub schedule: ShowSchedule,
    #[validate(nested)]
    pub budget: ShowBudget,
    #[serde(default)]
    #[validate(nested)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub priority: RequestPriority,
}

/// Three-state fit of a host against a requested slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    Available,
    Limited,
    Busy,
}

/// Projected money flow for one show, in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedRevenue {
    pub gross_sales: i64,
    pub host_fee: i64,
    pub host_commission: i64,
    pub platform_fee: i64,
    pub brand_net: i64,
    pub host_total: i64,
}

/// Individual 0-1 sub-scores behind a match score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub sales: f64,
    pub engagement: f64,
    pub expertise: f64,
    pub reliability: f64,
}

/// Ranked candidate returned by the matcher
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostMatchResult {
    pub host_id: String,
    pub host_name: String,
    pub match_score: f64,
    pub scores: ScoreBreakdown,
    pub estimated_sales: i64,
    pub estimated_revenue: EstimatedRevenue,
    pub reasons: Vec<String>,
    pub availability: Availability,
}

/// Search window for slot recommendations
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConstraints {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default = "default_duration_minutes")]
    pub duration_minutes: u32,
    #[serde(default)]
    pub prefer_peak_hours: bool,
}

fn default_duration_minutes() -> u32 {
    60
}

/// Candidate show slot with its desirability score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowSlot {
    pub date: NaiveDate,
    pub start_time: String,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DealType {
    OneTime,
    Series,
    Exclusive,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceBonus {
    #[validate(range(min = 0))]
    pub sales_threshold: i64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub bonus_rate: f64,
    /// Bonus paid per 1000 average viewers, per show
    #[serde(default)]
    #[validate(range(min = 0))]
    pub viewer_bonus: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealDuration {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExclusivityTerms {
    pub category_lock: String,
    #[serde(default)]
    pub competitor_restriction: Vec<String>,
    pub radius_km: f64,
}

/// Brand-to-host licensing structure for one or more shows
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LicensingDeal {
    pub id: Uuid,
    pub brand_id: String,
    pub host_id: String,
    pub deal_type: DealType,
    #[validate(range(min = 0i64, max = 1000000000000i64))]
    pub base_license_fee: i64,
    #[validate(nested)]
    pub performance_bonus: PerformanceBonus,
    pub duration: DealDuration,
    #[serde(default)]
    pub exclusivity: Option<ExclusivityTerms>,
}

/// Observed results of a licensing deal
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ActualPerformance {
    pub shows_completed: u32,
    #[validate(range(min = 0i64, max = 1000000000000000i64))]
    pub total_sales: i64,
    #[validate(range(min = 0.0, max = 1000000000.0))]
    pub avg_viewers: f64,
}

/// Settlement of a licensing deal against actual performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicensingValue {
    pub base_fee: i64,
    pub performance_bonus: i64,
    pub viewer_bonus: i64,
    pub total_value: i64,
    pub platform_revenue: i64,
}

/// Parse the hour out of an "HH:MM" string
pub fn parse_hour(start_time: &str) -> Option<u8> {
    let (hour, minute) = start_time.trim().split_once(':')?;
    let hour: u8 = hour.parse().ok()?;
    let minute: u8 = minute.parse().ok()?;

    (hour < 24 && minute < 60).then_some(hour)
}

fn validate_start_time(start_time: &str) -> Result<(), ValidationError> {
    match parse_hour(start_time) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("start_time_format")),
    }
}

fn validate_weekdays(days: &[u8]) -> Result<(), ValidationError> {
    if days.iter().all(|d| (1..=7).contains(d)) {
        Ok(())
    } else {
        Err(ValidationError::new("iso_weekday"))
    }
}

fn validate_hours(hours: &[u8]) -> Result<(), ValidationError> {
    if hours.iter().all(|h| *h < 24) {
        Ok(())
    } else {
        Err(ValidationError::new("hour_of_day"))
    }
}
