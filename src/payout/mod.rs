pub mod balance;
pub use balance::*;

pub mod ledger;
pub use ledger::*;

pub mod row;
pub use row::*;
