//! Propstat construction for stored resources.

use kunai_dav::dav::{DavProperty, Href, PropstatResponse, dav_props};
use kunai_store::Resource;

/// ## Summary
/// Builds the propstat response advertised for one resource.
///
/// Property order and presence match what interoperating clients expect:
/// creation date, display name, content language when known, content length
/// (zero when unknown), guessed content type, last modification time, and
/// the resource type marker.
#[must_use]
pub fn export_propstat_response(resource: &Resource, href: Href) -> PropstatResponse {
    let mut properties = vec![
        DavProperty::datetime(dav_props::creationdate(), resource.created),
        DavProperty::text(dav_props::displayname(), resource.display_name()),
    ];

    if let Some(language) = &resource.content_language {
        properties.push(DavProperty::text(dav_props::getcontentlanguage(), language));
    }

    properties.push(DavProperty::integer(
        dav_props::getcontentlength(),
        resource.content_length.unwrap_or(0),
    ));
    properties.push(DavProperty::text(
        dav_props::getcontenttype(),
        resource.content_type_or_default(),
    ));
    properties.push(DavProperty::datetime(
        dav_props::getlastmodified(),
        resource.modified,
    ));
    properties.push(if resource.is_collection {
        DavProperty::collection_resourcetype()
    } else {
        DavProperty::resource_resourcetype()
    });

    PropstatResponse::ok(href, properties)
}
