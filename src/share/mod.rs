pub mod codec;
pub use codec::*;

pub mod payout;
pub use payout::*;

pub mod sidepot;
pub use sidepot::*;

pub mod snapshot;
pub use snapshot::*;

pub mod url;
pub use url::*;
