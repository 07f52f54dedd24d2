pub mod artifacts_config;
pub mod cache_config;
pub mod config;
