//! Service A: JSON prediction endpoint plus an HTML form.

pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;
pub mod types;

pub use routes::create_router;
pub use state::AppState;
