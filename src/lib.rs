pub mod core;
pub mod languages;
pub mod rules;

// Re-export key items for easy importing in this crate
pub use core::types;

// Re-export key items for easy importing in other crates
pub use core::engine::scope;
pub use core::engine::traits::{LintRule, RuleContext};
pub use core::engine::utils;
pub use core::main_shared::run_main;
pub use core::registry::RuleRegistry;
pub use core::trace;
pub use languages::typescript::engine::TypeScriptEngine;
