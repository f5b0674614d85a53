mod config;
mod format_int;

pub use config::Config;
pub use format_int::NiceInt;
