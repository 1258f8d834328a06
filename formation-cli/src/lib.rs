pub mod app;
pub mod config;
pub mod logging;
pub mod models;
pub mod name_check;
pub mod sidebar;
pub mod state;
pub mod utils;

pub use config::AppConfig;
pub use state::Session;
