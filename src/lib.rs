pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod invite;
pub mod ledger;
pub mod models;
pub mod registry;
pub mod state;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use errors::{AppError, RegistryError};
pub use registry::GroupRegistry;
pub use state::AppState;
