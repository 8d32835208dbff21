// WebDAV method handlers live here.

pub mod delete;
pub mod get_head;
pub mod lock;
pub mod mkcol;
pub mod r#move;
pub mod options;
pub mod propfind;
pub mod put;
