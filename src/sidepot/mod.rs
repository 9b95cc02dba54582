pub mod boards;
pub use boards::*;

pub mod entry;
pub use entry::*;

pub mod partition;
pub use partition::*;

pub mod pot;
pub use pot::*;

pub mod selection;
pub use selection::*;

pub mod winnings;
pub use winnings::*;
