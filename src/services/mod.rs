pub mod health;
pub mod http;

pub use health::{health_routes, ArtifactSummary, HealthResponse, HealthState};
pub use http::serve;
