pub mod payout;
pub use payout::*;

pub mod sidepot;
pub use sidepot::*;
