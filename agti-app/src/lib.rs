pub mod config;
pub mod handlers;
pub mod i18n;
pub mod render;
pub mod session;
pub mod state;

pub use config::AppConfig;
pub use state::{reduce, Action, AppState, View};
