pub mod game;
pub use game::*;

pub mod profile;
pub use profile::*;

pub mod settings;
pub use settings::*;
