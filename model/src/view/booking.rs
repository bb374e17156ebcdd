use serde::{Deserialize, Serialize};

use crate::domain::booking::AllocationResult;

/// Booking request as received on the wire, before validation.
///
/// Room counts are signed and guests are nullable so that malformed values
/// reach the validator instead of failing deserialization.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PutBookingRequest {
    #[serde(default)]
    pub economy_rooms:    i64,
    #[serde(default)]
    pub premium_rooms:    i64,
    #[serde(default)]
    pub potential_guests: Option<Vec<Option<f64>>>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub usage_premium:   usize,
    pub revenue_premium: f64,
    pub usage_economy:   usize,
    pub revenue_economy: f64,
}

impl From<AllocationResult> for BookingResponse {
    fn from(result: AllocationResult) -> Self {
        BookingResponse {
            usage_premium:   result.premium_served,
            revenue_premium: result.premium_revenue,
            usage_economy:   result.economy_served,
            revenue_economy: result.economy_revenue,
        }
    }
}
