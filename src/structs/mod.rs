pub mod build_result;
pub mod cli;
pub mod config;
pub mod upload_response;
