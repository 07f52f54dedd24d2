pub mod action_inputs;
pub mod action_outputs;
pub mod build_executor;
pub mod build_scan_scraper;
pub mod init_script_writer;
pub mod local_artifact_store;
pub mod local_configuration_cache;
pub mod local_dependency_cache;
