//! DAV property types.

use super::namespace::{QName, dav_props};

/// A DAV property with name and optional value.
#[derive(Debug, Clone)]
pub struct DavProperty {
    /// The property name.
    pub name: QName,
    /// The property value (if known).
    pub value: Option<PropertyValue>,
}

impl DavProperty {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: QName, value: impl Into<String>) -> Self {
        Self {
            name,
            value: Some(PropertyValue::Text(value.into())),
        }
    }

    /// Creates a property with an integer value.
    #[must_use]
    pub fn integer(name: QName, value: i64) -> Self {
        Self {
            name,
            value: Some(PropertyValue::Integer(value)),
        }
    }

    /// Creates a property with a datetime value.
    #[must_use]
    pub fn datetime(name: QName, value: chrono::DateTime<chrono::Utc>) -> Self {
        Self {
            name,
            value: Some(PropertyValue::DateTime(value)),
        }
    }

    /// Creates a resourcetype property carrying the collection marker.
    #[must_use]
    pub fn collection_resourcetype() -> Self {
        Self {
            name: dav_props::resourcetype(),
            value: Some(PropertyValue::ResourceType(vec![dav_props::collection()])),
        }
    }

    /// Creates a resourcetype property for a non-collection.
    #[must_use]
    pub fn resource_resourcetype() -> Self {
        Self {
            name: dav_props::resourcetype(),
            value: Some(PropertyValue::ResourceType(Vec::new())),
        }
    }
}

/// A property value.
#[derive(Debug, Clone)]
pub enum PropertyValue {
    /// Empty element.
    Empty,
    /// Text content.
    Text(String),
    /// Integer value.
    Integer(i64),
    /// Datetime, rendered as `%Y-%m-%dT%H:%M:%SZ`.
    DateTime(chrono::DateTime<chrono::Utc>),
    /// Resource type markers (empty for plain resources).
    ResourceType(Vec<QName>),
}
