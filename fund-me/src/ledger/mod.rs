mod config;
pub use config::execute_initialize;

mod fund;
pub use fund::execute_fund;

mod withdraw;
pub use withdraw::{execute_cheaper_withdraw, execute_withdraw};
