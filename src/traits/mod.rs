pub mod artifact_store;
pub mod configuration_cache;
pub mod dependency_cache;
pub mod input_source;
