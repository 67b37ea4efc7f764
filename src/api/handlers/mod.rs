pub mod predict;
pub mod web;

pub use predict::*;
pub use web::*;
