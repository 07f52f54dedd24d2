pub mod config_helper;
pub mod fs_helper;
