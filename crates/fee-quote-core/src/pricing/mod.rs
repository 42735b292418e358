pub mod factors;
pub mod quote;
pub mod rate_card;
