//! Lock discovery XML serialization.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::error::DavResult;

use super::multistatus::{finish, write_text_element};

/// Serializes a lock discovery response body.
///
/// ## Summary
/// Builds the `DAV:` prop document returned for a LOCK request. The server
/// does not track lock state, so the activelock merely echoes the request's
/// Depth and Timeout values and hands back a bare `opaquelocktoken:` href.
///
/// ## Errors
/// Returns an error if XML writing fails or if the generated XML is not valid UTF-8.
pub fn serialize_lock_discovery(depth: &str, timeout: Option<&str>) -> DavResult<String> {
    let mut writer = Writer::new(Vec::new());
    write_document(&mut writer, depth, timeout)?;
    finish(writer)
}

/// Writes the full lock discovery document.
fn write_document(
    writer: &mut Writer<Vec<u8>>,
    depth: &str,
    timeout: Option<&str>,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    let mut prop = BytesStart::new("D:prop");
    prop.push_attribute(("xmlns:D", "DAV:"));
    writer.write_event(Event::Start(prop))?;

    writer.write_event(Event::Start(BytesStart::new("D:lockdiscovery")))?;
    writer.write_event(Event::Start(BytesStart::new("D:activelock")))?;

    // No lock semantics are enforced, so scope, type, and owner stay empty.
    writer.write_event(Event::Empty(BytesStart::new("D:lockscope")))?;
    writer.write_event(Event::Empty(BytesStart::new("D:locktype")))?;

    write_text_element(writer, "D:depth", depth)?;

    writer.write_event(Event::Empty(BytesStart::new("D:owner")))?;

    match timeout {
        Some(value) if !value.is_empty() => {
            write_text_element(writer, "D:timeout", value)?;
        }
        _ => {
            writer.write_event(Event::Empty(BytesStart::new("D:timeout")))?;
        }
    }

    writer.write_event(Event::Start(BytesStart::new("D:locktoken")))?;
    write_text_element(writer, "D:href", "opaquelocktoken:")?;
    writer.write_event(Event::End(BytesEnd::new("D:locktoken")))?;

    writer.write_event(Event::End(BytesEnd::new("D:activelock")))?;
    writer.write_event(Event::End(BytesEnd::new("D:lockdiscovery")))?;
    writer.write_event(Event::End(BytesEnd::new("D:prop")))?;

    Ok(())
}
