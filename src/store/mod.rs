pub mod config_path;
pub mod settings;
