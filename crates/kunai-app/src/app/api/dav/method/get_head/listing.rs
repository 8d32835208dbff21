//! HTML index page for collection GETs.

use kunai_dav::dav::percent_encode;
use kunai_store::Resource;

use crate::app::api::dav::util::escape_html;

/// ## Summary
/// Renders the index page served when a browser GETs a collection.
///
/// Children whose names start with a dot are hidden. Hrefs are built from
/// the mount prefix plus the child's encoded path, so links work wherever
/// the tree is mounted. Collections get a trailing slash on both link and
/// label.
#[must_use]
pub(super) fn render_collection_listing(
    prefix: &str,
    collection: &Resource,
    children: &[Resource],
) -> String {
    let title = if collection.path.is_root() {
        prefix.to_string()
    } else {
        format!("{prefix}{}", collection.path)
    };
    let title = escape_html(&title);

    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str(&format!("<title>Index of {title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>Index of {title}</h1>\n<ul>\n"));

    if !collection.path.is_root() {
        let parent_href = match collection.path.parent() {
            Some(parent) if !parent.is_root() => {
                format!("{prefix}{}/", percent_encode(parent.as_str()))
            }
            _ => prefix.to_string(),
        };
        html.push_str(&format!("<li><a href=\"{parent_href}\">..</a></li>\n"));
    }

    for child in children {
        // Dotfiles stay out of the index.
        if child.display_name().starts_with('.') {
            continue;
        }

        let href = format!("{prefix}{}", percent_encode(child.path.as_str()));
        let name = escape_html(child.display_name());
        let slash = if child.is_collection { "/" } else { "" };
        html.push_str(&format!(
            "<li><a href=\"{href}{slash}\">{name}{slash}</a></li>\n"
        ));
    }

    html.push_str("</ul>\n</body>\n</html>\n");
    html
}
