pub mod app;
pub mod bot;
pub mod catalog;
pub mod community;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod storage;
pub mod store;
pub mod streak;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::{AppData, AppState};
pub use storage::resolve_data_dir;
