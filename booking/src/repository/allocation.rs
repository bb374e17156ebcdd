use model::domain::booking::{AllocationResult, Bid, BookingRequest, Tier};

/// Splits the rooms of a booking request between the bidding guests.
///
/// Within a tier the highest bidders are served first. Premium guests are
/// never downgraded; economy guests that do not fit in economy rooms are
/// upgraded into the premium rooms left empty, highest bidders first.
pub struct Allocator;

impl Allocator {
    pub fn new() -> Self { Self {} }
}

impl Default for Allocator {
    fn default() -> Self { Self::new() }
}

impl Allocator {
    pub fn allocate(&self, request: &BookingRequest) -> AllocationResult {
        let (mut premium, mut economy): (Vec<Bid>, Vec<Bid>) = request
            .bids
            .iter()
            .copied()
            .partition(|bid| bid.tier() == Tier::Premium);
        sort_desc(&mut premium);
        sort_desc(&mut economy);

        premium.truncate(request.premium_rooms);
        let spare_premium_rooms = request.premium_rooms - premium.len();

        let overflow = economy.len().saturating_sub(request.economy_rooms);
        let upgraded = overflow.min(spare_premium_rooms);
        premium.extend(economy.drain(..upgraded));
        economy.truncate(request.economy_rooms);

        AllocationResult {
            premium_served: premium.len(),
            premium_revenue: revenue(&premium),
            economy_served: economy.len(),
            economy_revenue: revenue(&economy),
            upgraded,
        }
    }
}

/// Sort desc; the sort is stable so equal bids keep their arrival order.
fn sort_desc(bids: &mut [Bid]) {
    bids.sort_by(|a, b| b.into_inner().total_cmp(&a.into_inner()));
}

fn revenue(bids: &[Bid]) -> f64 {
    bids.iter().fold(0.0, |total, bid| total + bid.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    const GUESTS: [f64; 10] =
        [23.0, 45.0, 155.0, 374.0, 22.0, 99.99, 100.0, 101.0, 115.0, 209.0];

    const MORE_GUESTS: [f64; 12] = [
        23.0, 45.0, 155.0, 374.0, 22.0, 35.0, 99.99, 100.0, 101.0, 115.0, 209.0,
        77.8,
    ];

    fn request(economy: usize, premium: usize, bids: &[f64]) -> BookingRequest {
        BookingRequest {
            economy_rooms: economy,
            premium_rooms: premium,
            bids:          bids
                .iter()
                .map(|amount| Bid::try_new(*amount).unwrap())
                .collect(),
        }
    }

    fn assert_revenue(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "revenue {actual} differs from {expected}"
        );
    }

    #[parameterized(
        enough_rooms = { 5, 7, &GUESTS, 6, 1054.0, 4, 189.99 },
        fewer_rooms_than_guests = { 3, 3, &GUESTS, 3, 738.0, 3, 167.99 },
        fewer_premium_rooms = { 7, 2, &GUESTS, 2, 583.0, 4, 189.99 },
        fewer_economy_rooms = { 4, 9, &MORE_GUESTS, 8, 1231.79, 4, 125.0 }
    )]
    fn test_allocate(
        economy_rooms: usize,
        premium_rooms: usize,
        bids: &[f64],
        premium_served: usize,
        premium_revenue: f64,
        economy_served: usize,
        economy_revenue: f64,
    ) {
        let request = request(economy_rooms, premium_rooms, bids);
        let result = Allocator::new().allocate(&request);
        assert_eq!(result.premium_served, premium_served);
        assert_revenue(result.premium_revenue, premium_revenue);
        assert_eq!(result.economy_served, economy_served);
        assert_revenue(result.economy_revenue, economy_revenue);
    }

    #[test]
    fn test_no_guests() {
        let result = Allocator::new().allocate(&request(3, 3, &[]));
        assert_eq!(result, AllocationResult::default());
    }

    #[test]
    fn test_threshold_is_premium() {
        let result = Allocator::new().allocate(&request(1, 1, &[100.0]));
        assert_eq!(result.premium_served, 1);
        assert_eq!(result.economy_served, 0);
        assert_revenue(result.premium_revenue, 100.0);
    }

    #[test]
    fn test_premium_guests_are_never_downgraded() {
        let result =
            Allocator::new().allocate(&request(5, 1, &[150.0, 120.0, 110.0]));
        assert_eq!(result.premium_served, 1);
        assert_revenue(result.premium_revenue, 150.0);
        assert_eq!(result.economy_served, 0);
        assert_revenue(result.economy_revenue, 0.0);
    }

    #[test]
    fn test_upgrade_highest_bidders() {
        let result =
            Allocator::new().allocate(&request(1, 2, &[10.0, 90.0, 50.0, 70.0]));
        assert_eq!(result.upgraded, 2);
        assert_eq!(result.premium_served, 2);
        assert_revenue(result.premium_revenue, 160.0);
        assert_eq!(result.economy_served, 1);
        assert_revenue(result.economy_revenue, 50.0);
    }

    #[test]
    fn test_upgrade_without_economy_rooms() {
        let result =
            Allocator::new().allocate(&request(0, 2, &[10.0, 90.0, 50.0]));
        assert_eq!(result.upgraded, 2);
        assert_eq!(result.premium_served, 2);
        assert_revenue(result.premium_revenue, 140.0);
        assert_eq!(result.economy_served, 0);
    }

    #[test]
    fn test_overflow_larger_than_spare_premium_rooms() {
        let result = Allocator::new()
            .allocate(&request(2, 2, &[200.0, 90.0, 80.0, 70.0, 60.0, 50.0]));
        assert_eq!(result.upgraded, 1);
        assert_eq!(result.premium_served, 2);
        assert_revenue(result.premium_revenue, 290.0);
        assert_eq!(result.economy_served, 2);
        assert_revenue(result.economy_revenue, 150.0);
    }

    #[test]
    fn test_both_tiers_overbooked() {
        let result = Allocator::new()
            .allocate(&request(1, 1, &[200.0, 300.0, 20.0, 40.0, 30.0]));
        assert_eq!(result.upgraded, 0);
        assert_eq!(result.premium_served, 1);
        assert_revenue(result.premium_revenue, 300.0);
        assert_eq!(result.economy_served, 1);
        assert_revenue(result.economy_revenue, 40.0);
    }

    #[test]
    fn test_no_rooms() {
        let result = Allocator::new().allocate(&request(0, 0, &GUESTS));
        assert_eq!(result, AllocationResult::default());
    }

    #[test]
    fn test_idempotent() {
        let allocator = Allocator::new();
        let request = request(3, 4, &MORE_GUESTS);
        assert_eq!(allocator.allocate(&request), allocator.allocate(&request));
    }

    #[test]
    fn test_capacity_bounds() {
        let allocator = Allocator::new();
        for bids in [&GUESTS[..], &MORE_GUESTS[..], &[99.99; 7][..]] {
            for economy_rooms in 0..=bids.len() + 1 {
                for premium_rooms in 0..=bids.len() + 1 {
                    let result = allocator
                        .allocate(&request(economy_rooms, premium_rooms, bids));
                    assert!(result.premium_served <= premium_rooms);
                    assert!(result.economy_served <= economy_rooms);
                    assert!(
                        result.premium_served + result.economy_served
                            <= bids.len()
                    );
                    assert!(result.upgraded <= result.premium_served);
                    // Only economy bids can land in economy rooms.
                    assert!(
                        result.economy_revenue
                            < 100.0 * result.economy_served as f64 + 1e-9
                    );
                }
            }
        }
    }
}
