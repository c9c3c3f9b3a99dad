pub mod config_manager;
pub mod file_manager;
