use model::domain::booking::{Bid, BookingRequest};
use model::view::booking::PutBookingRequest;

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Booking request cannot be null")]
    NullRequest,
    #[error("Economy rooms number cannot be negative")]
    NegativeEconomyRooms,
    #[error("Premium rooms number cannot be negative")]
    NegativePremiumRooms,
    #[error("List of potential guests cannot be null")]
    MissingGuestList,
    #[error("Amount which guest is willing to pay cannot be null or negative")]
    InvalidGuestAmount,
}

impl Error {
    /// Label used when counting the rejected requests.
    pub fn reason(&self) -> &'static str {
        match self {
            Error::NullRequest => "null_request",
            Error::NegativeEconomyRooms => "negative_economy_rooms",
            Error::NegativePremiumRooms => "negative_premium_rooms",
            Error::MissingGuestList => "missing_guest_list",
            Error::InvalidGuestAmount => "invalid_guest_amount",
        }
    }
}

/// Checks a raw booking request and turns it into its domain counterpart.
pub struct BookingRequestValidator;

impl BookingRequestValidator {
    pub fn new() -> Self { Self {} }
}

impl Default for BookingRequestValidator {
    fn default() -> Self { Self::new() }
}

impl BookingRequestValidator {
    /// Checks are run in order and the first failure is returned.
    pub fn validate(
        &self,
        request: Option<PutBookingRequest>,
    ) -> Result<BookingRequest, Error> {
        let Some(PutBookingRequest {
            economy_rooms,
            premium_rooms,
            potential_guests,
        }) = request
        else {
            return Err(Error::NullRequest);
        };

        if economy_rooms < 0 {
            return Err(Error::NegativeEconomyRooms);
        }
        if premium_rooms < 0 {
            return Err(Error::NegativePremiumRooms);
        }
        // More rooms than addressable guests cannot change the allocation.
        let economy_rooms = usize::try_from(economy_rooms).unwrap_or(usize::MAX);
        let premium_rooms = usize::try_from(premium_rooms).unwrap_or(usize::MAX);

        let bids = potential_guests
            .ok_or(Error::MissingGuestList)?
            .into_iter()
            .map(|amount| {
                amount
                    .and_then(|amount| Bid::try_new(amount).ok())
                    .ok_or(Error::InvalidGuestAmount)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(BookingRequest { economy_rooms, premium_rooms, bids })
    }
}
