/// ## Summary
/// Escapes the characters that would break out of HTML text content.
///
/// Used for the collection index page and the debug fault body, both of
/// which interpolate request-derived strings into markup.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
