//! HTTP layer: routing, middleware, and the method handlers.

pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod store_handler;
