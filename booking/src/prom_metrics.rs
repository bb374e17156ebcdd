use lazy_static::lazy_static;
use prometheus::{
    opts, register_counter, register_counter_vec, Counter, CounterVec,
};

macro_rules! PREFIX {
    () => {
        "booking_"
    };
}

lazy_static! {
    pub static ref ALLOCATED_REQUESTS_COUNT: Counter = {
        register_counter!(opts!(
            concat!(PREFIX!(), "allocated_requests"),
            "Number of booking requests that went through the allocation."
        ))
        .unwrap()
    };
    pub static ref REJECTED_REQUESTS_COUNT: CounterVec = {
        register_counter_vec!(
            opts!(
                concat!(PREFIX!(), "rejected_requests"),
                "Number of booking requests refused by the validation."
            ),
            &["reason"],
        )
        .unwrap()
    };
    pub static ref SERVED_GUESTS_COUNT: CounterVec = {
        register_counter_vec!(
            opts!(
                concat!(PREFIX!(), "served_guests"),
                "Number of guests who got a room, by tier of the room."
            ),
            &["tier"],
        )
        .unwrap()
    };
    pub static ref UPGRADED_GUESTS_COUNT: Counter = {
        register_counter!(opts!(
            concat!(PREFIX!(), "upgraded_guests"),
            "Number of economy guests upgraded to a premium room."
        ))
        .unwrap()
    };
    pub static ref REVENUE: CounterVec = {
        register_counter_vec!(
            opts!(
                concat!(PREFIX!(), "revenue"),
                "Revenue collected, by tier of the room."
            ),
            &["tier"],
        )
        .unwrap()
    };
}
