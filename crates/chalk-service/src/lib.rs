//! # chalk-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the DTO and service surface at the crate root
pub use dto::*;
pub use services::*;
