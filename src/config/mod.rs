#[allow(clippy::module_inception)]
mod config;
mod credentials;

pub use config::{config_path, load_config, load_config_from, save_config, save_config_to, Config};
pub use credentials::Credentials;
