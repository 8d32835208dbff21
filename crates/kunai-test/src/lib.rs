//! Kunai WebDAV server - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `kunai::` paths.

pub mod component {
    // Re-export core modules at the component level
    pub use kunai_core::*;

    // Re-export the store crate with the app's depot handler
    pub mod store {
        pub use kunai_app::store_handler::{StoreHandler, get_store_from_depot};
        pub use kunai_store::*;
    }

    // Re-export app middleware
    pub mod middleware {
        pub use kunai_app::middleware::*;
    }

    // Re-export config from both core and app
    pub mod config {
        pub use kunai_app::config::ConfigHandler;
        pub use kunai_core::config::*;
    }
}

// Re-export top-level modules for convenience
pub mod app {
    pub use kunai_app::*;

    pub mod api {
        pub use kunai_app::app::api::*;
    }
}

pub use kunai_dav as dav;
