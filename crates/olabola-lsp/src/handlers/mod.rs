mod command;
mod configuration;
mod lifecycle;

pub use command::*;
pub use configuration::*;
pub use lifecycle::*;
