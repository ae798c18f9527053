pub mod check;
pub mod init;
pub mod print;

pub use check::{CheckOptions, CheckSummary, execute_check};
pub use init::execute_init;
pub use print::execute_print;
