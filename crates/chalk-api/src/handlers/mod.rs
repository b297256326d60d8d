//! HTTP request handlers
//!
//! Thin translation layer between HTTP and the service layer.

pub mod admin;
pub mod auth;
pub mod comments;
pub mod documents;
pub mod health;
pub mod notifications;
pub mod reactions;
pub mod stories;
pub mod users;
