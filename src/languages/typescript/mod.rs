pub mod engine;
pub mod lower;
pub mod syntax;
