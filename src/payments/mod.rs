pub mod link;
pub use link::*;

pub mod plan;
pub use plan::*;

pub mod revtag;
pub use revtag::*;
