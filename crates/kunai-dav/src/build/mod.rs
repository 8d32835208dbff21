//! `WebDAV` XML serialization for responses.
//!
//! This module provides serialization of multistatus responses
//! and the synthesized lock-discovery document.

pub mod lock;
pub mod multistatus;

pub use lock::serialize_lock_discovery;
pub use multistatus::serialize_multistatus;
