//! `WebDAV` XML types.
//!
//! Core vocabulary for the documents this server exchanges: the `Depth`
//! header, hrefs, qualified names, properties, and the multistatus envelope.

mod depth;
mod href;
mod multistatus;
mod namespace;
mod property;

pub use depth::Depth;
pub use href::{Href, percent_decode, percent_encode};
pub use multistatus::{Multistatus, Propstat, PropstatResponse, Status};
pub use namespace::{DAV_NS, Namespace, QName, dav_props};
pub use property::{DavProperty, PropertyValue};
