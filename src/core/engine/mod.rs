pub mod scope;
pub mod traits;
pub mod utils;
