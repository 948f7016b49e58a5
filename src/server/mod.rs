mod config;
mod error;
mod html;
mod routes;
mod state;

pub use config::ServerConfig;
pub use error::{ServerError, ServerResult};
pub use routes::build_router;
pub use state::AppState;
