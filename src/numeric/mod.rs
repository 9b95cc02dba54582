pub mod format;
pub use format::*;

pub mod parse;
pub use parse::*;

pub mod round;
pub use round::*;
