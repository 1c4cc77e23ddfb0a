//! # Menu API
//! 
//! HTTP handlers, DTOs, and the response envelope.

pub mod handlers;
pub mod dto;
pub mod error;
pub mod response;
pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
