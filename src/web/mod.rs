//! Web server module
//!
//! Provides the HTTP API for Product-Search-RS.

mod error;
mod handlers;
mod response;
mod routes;
mod state;

pub use error::ApiError;
pub use response::ApiResponse;
pub use routes::create_router;
pub use state::AppState;
