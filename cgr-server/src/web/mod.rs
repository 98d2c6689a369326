//! Web layer for the contact graph router.
//!
//! Provides HTTP endpoints for inspecting the loaded plan and planning routes.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
