pub mod command;
pub use command::*;

pub mod edit;
pub use edit::*;

pub mod render;
pub use render::*;

pub mod repl;
pub use repl::*;

pub mod token;
pub use token::*;
