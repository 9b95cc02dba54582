pub mod file;
pub use file::*;

pub mod memory;
pub use memory::*;

pub mod store;
pub use store::*;
