// Shared response builders for the method handlers.

pub mod fault;
pub mod propstat;
