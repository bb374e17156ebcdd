use std::sync::Arc;
use tracing::instrument;

use model::domain::booking::{AllocationResult, Tier};
use model::view::booking::PutBookingRequest;

use crate::prom_metrics::{
    ALLOCATED_REQUESTS_COUNT, REJECTED_REQUESTS_COUNT, REVENUE,
    SERVED_GUESTS_COUNT, UPGRADED_GUESTS_COUNT,
};
use crate::repository::allocation::Allocator;
use crate::service::validator::{self, BookingRequestValidator};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] validator::Error),
    #[error("Total amount paid by the guests is too large to be computed")]
    RevenueOverflow,
}

pub struct Booking {
    validator: Arc<BookingRequestValidator>,
    allocator: Arc<Allocator>,
}

impl Booking {
    pub fn new(
        validator: Arc<BookingRequestValidator>,
        allocator: Arc<Allocator>,
    ) -> Self {
        Self { validator, allocator }
    }

    /// Validate the request then split the rooms between the guests.
    ///
    /// Nothing is allocated when the validation fails. Requests whose
    /// revenue cannot be represented are refused as well.
    #[instrument(level = "debug", skip(self, request))]
    pub fn optimize_occupancy(
        &self,
        request: Option<PutBookingRequest>,
    ) -> Result<AllocationResult, Error> {
        trace!("optimize occupancy: {:?}", request);

        let request = self.validator.validate(request).map_err(|err| {
            warn!("Refused booking request: {}", err);
            REJECTED_REQUESTS_COUNT.with_label_values(&[err.reason()]).inc();
            err
        })?;

        let result = self.allocator.allocate(&request);
        if !result.premium_revenue.is_finite()
            || !result.economy_revenue.is_finite()
        {
            warn!("Refused booking request: revenue overflows");
            REJECTED_REQUESTS_COUNT
                .with_label_values(&["revenue_overflow"])
                .inc();
            return Err(Error::RevenueOverflow);
        }

        info!(
            guests = request.bids.len(),
            economy_rooms = request.economy_rooms,
            premium_rooms = request.premium_rooms,
            premium_served = result.premium_served,
            economy_served = result.economy_served,
            upgraded = result.upgraded,
            "Allocated rooms"
        );

        ALLOCATED_REQUESTS_COUNT.inc();
        UPGRADED_GUESTS_COUNT.inc_by(result.upgraded as f64);
        for tier in [Tier::Economy, Tier::Premium] {
            SERVED_GUESTS_COUNT
                .with_label_values(&[tier.as_str()])
                .inc_by(result.served(tier) as f64);
            REVENUE
                .with_label_values(&[tier.as_str()])
                .inc_by(result.revenue(tier));
        }

        Ok(result)
    }
}
