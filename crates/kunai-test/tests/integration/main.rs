//! Integration tests for the Kunai WebDAV server.

mod helpers;

mod lock;
mod put;
