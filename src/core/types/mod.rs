pub mod class;
pub mod config;
mod diagnostic;
mod error;
mod rule;
mod span;
mod target;

pub use diagnostic::*;
pub use error::*;
pub use rule::*;
pub use span::*;
pub use target::*;
