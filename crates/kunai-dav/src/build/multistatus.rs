//! Multistatus XML serialization.

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::dav::{DavProperty, Multistatus, PropertyValue, PropstatResponse};
use crate::error::DavResult;

/// Serializes a multistatus response to XML.
///
/// ## Summary
/// Converts a `Multistatus` response structure into properly formatted
/// `WebDAV` XML for the response body.
///
/// ## Errors
/// Returns an error if XML writing fails or if the generated XML is not valid UTF-8
/// (which should never happen with well-formed input).
pub fn serialize_multistatus(multistatus: &Multistatus) -> DavResult<String> {
    let mut writer = Writer::new(Vec::new());
    write_document(&mut writer, multistatus)?;
    finish(writer)
}

/// Writes the full multistatus document.
fn write_document(
    writer: &mut Writer<Vec<u8>>,
    multistatus: &Multistatus,
) -> Result<(), quick_xml::Error> {
    // XML declaration
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

    // Start multistatus element with namespace
    let mut elem = BytesStart::new("D:multistatus");
    elem.push_attribute(("xmlns:D", "DAV:"));
    writer.write_event(Event::Start(elem))?;

    // Write each response
    for response in &multistatus.responses {
        write_response(writer, response)?;
    }

    // End multistatus
    writer.write_event(Event::End(BytesEnd::new("D:multistatus")))?;

    Ok(())
}

/// Writes a single response element.
fn write_response<W: std::io::Write>(
    writer: &mut Writer<W>,
    response: &PropstatResponse,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new("D:response")))?;

    // Write href
    write_text_element(writer, "D:href", response.href.as_str())?;

    // Write each propstat
    for propstat in &response.propstats {
        writer.write_event(Event::Start(BytesStart::new("D:propstat")))?;

        // Write prop container
        writer.write_event(Event::Start(BytesStart::new("D:prop")))?;

        for prop in &propstat.properties {
            write_property(writer, prop)?;
        }

        writer.write_event(Event::End(BytesEnd::new("D:prop")))?;

        // Write status using the existing status_line method
        write_text_element(writer, "D:status", &propstat.status.status_line())?;

        writer.write_event(Event::End(BytesEnd::new("D:propstat")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("D:response")))?;

    Ok(())
}

/// Writes a property element.
fn write_property<W: std::io::Write>(
    writer: &mut Writer<W>,
    prop: &DavProperty,
) -> Result<(), quick_xml::Error> {
    let prefix = namespace_prefix(prop.name.namespace_uri());
    let elem_name = format!("{prefix}:{}", prop.name.local_name());

    match &prop.value {
        Some(PropertyValue::Text(text)) => {
            write_text_element(writer, &elem_name, text)?;
        }
        Some(PropertyValue::Integer(n)) => {
            write_text_element(writer, &elem_name, &n.to_string())?;
        }
        Some(PropertyValue::DateTime(dt)) => {
            let formatted = dt.format("%Y-%m-%dT%H:%M:%SZ").to_string();
            write_text_element(writer, &elem_name, &formatted)?;
        }
        Some(PropertyValue::ResourceType(types)) => {
            if types.is_empty() {
                writer.write_event(Event::Empty(BytesStart::new(&elem_name)))?;
            } else {
                writer.write_event(Event::Start(BytesStart::new(&elem_name)))?;
                for rt in types {
                    let rt_prefix = namespace_prefix(rt.namespace_uri());
                    let rt_name = format!("{rt_prefix}:{}", rt.local_name());
                    writer.write_event(Event::Empty(BytesStart::new(&rt_name)))?;
                }
                writer.write_event(Event::End(BytesEnd::new(&elem_name)))?;
            }
        }
        Some(PropertyValue::Empty) | None => {
            // Empty element
            writer.write_event(Event::Empty(BytesStart::new(&elem_name)))?;
        }
    }

    Ok(())
}

/// Writes a simple text element.
pub(crate) fn write_text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Consumes the writer and returns its buffer as a UTF-8 string.
pub(crate) fn finish(writer: Writer<Vec<u8>>) -> DavResult<String> {
    let result = writer.into_inner();
    String::from_utf8(result).map_err(|e| {
        tracing::error!("Generated invalid UTF-8 in XML output: {}", e);
        crate::error::DavError::InvalidUtf8
    })
}

/// Gets the namespace prefix for a given namespace URI.
fn namespace_prefix(ns: &str) -> &'static str {
    match ns {
        "DAV:" => "D",
        _ => "X",
    }
}
