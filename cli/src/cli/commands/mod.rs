mod build_config;
mod resolve;
mod target;

pub use build_config::run_build_config;
pub use resolve::run_resolve;
pub use target::run_target;
