use nutype::nutype;

/// Bids at or above this amount belong to the premium tier.
pub const PREMIUM_THRESHOLD: f64 = 100.0;

/// Amount a prospective guest is willing to pay for one night.
#[nutype(
    validate(finite, greater_or_equal = 0.0),
    derive(Debug, Clone, Copy, PartialEq, PartialOrd)
)]
pub struct Bid(f64);

impl Bid {
    pub fn tier(&self) -> Tier {
        if self.into_inner() >= PREMIUM_THRESHOLD {
            Tier::Premium
        } else {
            Tier::Economy
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    Economy,
    Premium,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Economy => "economy",
            Tier::Premium => "premium",
        }
    }
}

/// A booking request whose room counts and bids have been validated.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingRequest {
    pub economy_rooms: usize,
    pub premium_rooms: usize,
    pub bids:          Vec<Bid>,
}

/// How many guests each tier ended up hosting and what they paid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AllocationResult {
    pub premium_served:  usize,
    pub premium_revenue: f64,
    pub economy_served:  usize,
    pub economy_revenue: f64,
    /// Economy guests counted in `premium_served`.
    pub upgraded:        usize,
}

impl AllocationResult {
    pub fn served(&self, tier: Tier) -> usize {
        match tier {
            Tier::Economy => self.economy_served,
            Tier::Premium => self.premium_served,
        }
    }

    pub fn revenue(&self, tier: Tier) -> f64 {
        match tier {
            Tier::Economy => self.economy_revenue,
            Tier::Premium => self.premium_revenue,
        }
    }
}
