pub mod auth;
pub mod dav_headers;
pub mod dav_path_middleware;
pub mod path_parser;
