pub mod banker;
pub use banker::*;

pub mod greedy;
pub use greedy::*;

pub mod mode;
pub use mode::*;

pub mod settlement;
pub use settlement::*;

pub mod transaction;
pub use transaction::*;
