// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    ActualPerformance, Availability, DealDuration, DealType, EstimatedRevenue, ExclusivityTerms,
    HostAvailability, HostMatchResult, HostPerformance, HostPricing, HostSkills, LicensingDeal,
    LicensingValue, LiveShowRequest, PerformanceBonus, Product, RequestPriority, ScheduleConstraints,
    ScoreBreakdown, ShowBudget, ShowHost, ShowHostTier, ShowSchedule, ShowSlot, Trend,
};
pub use requests::{
    CheckAvailabilityRequest, EvaluateTierRequest, FindMatchesRequest, HostRequestPair,
    LicensingValueRequest, OptimalSlotsRequest,
};
pub use responses::{
    AvailabilityResponse, ErrorResponse, FindMatchesResponse, HealthResponse, OptimalSlotsResponse,
    TierEvaluationResponse,
};
