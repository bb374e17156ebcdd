use model::view::booking::{BookingResponse, PutBookingRequest};

use crate::service::booking::Booking;

#[derive(thiserror::Error, Debug)]
pub enum ControllerError {
    #[error(transparent)]
    Booking(#[from] crate::service::booking::Error),
}

/// Split the rooms of the request between the potential guests.
pub fn optimize_occupancy(
    payload: Option<PutBookingRequest>,
    booking_service: &Booking,
) -> Result<BookingResponse, ControllerError> {
    trace!("optimize occupancy: {:?}", payload);
    Ok(booking_service.optimize_occupancy(payload)?.into())
}
