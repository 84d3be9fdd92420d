// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod error;
pub mod formatting;
pub mod interactive;
pub mod logging;
pub mod models;

// Re-export commonly used items
pub use client::{BoardApi, TaskBoardClient};
pub use config::{load_config, save_config, Config, Credentials};
pub use dashboard::{Dashboard, DashboardController};
pub use error::{BoardError, BoardResult};
pub use models::*;
