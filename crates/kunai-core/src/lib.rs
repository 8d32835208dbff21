//! Shared configuration, constants, and the core error type.

pub mod config;
pub mod constants;
pub mod error;
