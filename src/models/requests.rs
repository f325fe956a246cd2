use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{
    ActualPerformance, HostPerformance, LicensingDeal, LiveShowRequest, ScheduleConstraints,
    ShowHost, ShowSchedule,
};

/// Request to rank a host pool against a show request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FindMatchesRequest {
    #[validate(nested)]
    pub request: LiveShowRequest,
    #[validate(nested)]
    pub hosts: Vec<ShowHost>,
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to classify one host against a slot
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CheckAvailabilityRequest {
    #[validate(nested)]
    pub host: ShowHost,
    #[validate(nested)]
    pub schedule: ShowSchedule,
}

/// Host plus show request, shared by revenue estimation and deal suggestion
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct HostRequestPair {
    #[validate(nested)]
    pub host: ShowHost,
    #[validate(nested)]
    pub request: LiveShowRequest,
}

/// Request for slot recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OptimalSlotsRequest {
    #[validate(nested)]
    pub host: ShowHost,
    pub constraints: ScheduleConstraints,
}

/// Request to derive a tier from historical performance
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EvaluateTierRequest {
    #[validate(nested)]
    pub performance: HostPerformance,
}

/// Request to settle a licensing deal
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LicensingValueRequest {
    #[validate(nested)]
    pub deal: LicensingDeal,
    #[validate(nested)]
    pub performance: ActualPerformance,
}
