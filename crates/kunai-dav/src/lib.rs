//! `WebDAV` protocol vocabulary and XML document builders.
//!
//! This crate knows nothing about storage or HTTP handling; it models the
//! header values and XML documents the protocol exchanges and serializes
//! them with `quick-xml`.

pub mod build;
pub mod dav;
pub mod error;
