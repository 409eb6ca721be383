//! WMI RAWXML class document parser.
//!
//! `wmic class <name> get /format:RAWXML` answers with a `COMMAND` document
//! whose class record sits at `RESULTS > CIM > CLASS` below the root element.
//! Only the class `NAME` and the `NAME`/`TYPE` of its property children are
//! extracted; qualifiers, methods and any other attributes are skipped.

use crate::error::ParseError;
use crate::types::{ClassSchema, Property};
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use std::borrow::Cow;

const RESULTS: &str = "RESULTS";
const CIM: &str = "CIM";
const CLASS: &str = "CLASS";
const PROPERTY: &str = "PROPERTY";
const PROPERTY_ARRAY: &str = "PROPERTY.ARRAY";
const PROPERTY_REFERENCE: &str = "PROPERTY.REFERENCE";

/// Source type given to `PROPERTY.REFERENCE` entries, which carry no `TYPE`.
pub const REFERENCE_TYPE: &str = "reference";

/// Parses a class schema from raw command output.
///
/// # Errors
/// Returns `ParseError` if the payload cannot be decoded or parsed.
pub fn parse_class_bytes(payload: &[u8]) -> Result<ClassSchema, ParseError> {
    let document = decode_document(payload)?;
    parse_class(&document)
}

/// Decodes a command output payload into text.
///
/// UTF-16 output (as written by `wmic` when redirected on some hosts) is
/// recognised by its byte order mark. Anything else is read as UTF-8, with
/// invalid sequences replaced.
///
/// # Errors
/// Returns `ParseError::Encoding` for malformed UTF-16.
pub fn decode_document(payload: &[u8]) -> Result<Cow<'_, str>, ParseError> {
    match payload {
        [0xFF, 0xFE, rest @ ..] => decode_utf16(rest, u16::from_le_bytes).map(Cow::Owned),
        [0xFE, 0xFF, rest @ ..] => decode_utf16(rest, u16::from_be_bytes).map(Cow::Owned),
        [0xEF, 0xBB, 0xBF, rest @ ..] => Ok(String::from_utf8_lossy(rest)),
        _ => Ok(String::from_utf8_lossy(payload)),
    }
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> Result<String, ParseError> {
    if bytes.len() % 2 != 0 {
        return Err(ParseError::Encoding {
            message: "odd number of bytes in UTF-16 payload".to_string(),
        });
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| ParseError::Encoding {
        message: e.to_string(),
    })
}

/// Parses the class record out of a RAWXML document.
///
/// # Arguments
/// * `xml` - RAWXML document text
///
/// # Returns
/// The first class record found at `RESULTS > CIM > CLASS`.
///
/// # Errors
/// Returns `ParseError` if the XML is malformed, the class record is absent,
/// or a required attribute is missing.
pub fn parse_class(xml: &str) -> Result<ClassSchema, ParseError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut path: Vec<String> = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == CLASS && at_class_record(&path) {
                    return parse_class_record(&mut reader, e);
                }
                path.push(name.to_string());
            }
            Ok(Event::Empty(ref e)) => {
                let name_bytes = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_bytes)?;
                if name == CLASS && at_class_record(&path) {
                    let class_name = required_attr(e, CLASS, "NAME")?;
                    return Ok(ClassSchema::new(class_name, Vec::new()));
                }
            }
            Ok(Event::End(_)) => {
                path.pop();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Err(ParseError::structure(
        "no CLASS record found at RESULTS > CIM > CLASS",
    ))
}

/// Returns true if `path` is `<root> > RESULTS > CIM`.
fn at_class_record(path: &[String]) -> bool {
    matches!(path, [_, results, cim] if results == RESULTS && cim == CIM)
}

/// Parses the children of a CLASS element up to its end tag.
fn parse_class_record(
    reader: &mut Reader<&[u8]>,
    e: &BytesStart<'_>,
) -> Result<ClassSchema, ParseError> {
    let class_name = required_attr(e, CLASS, "NAME")?;
    let mut properties = Vec::new();
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if let Some(property) = parse_property(e)? {
                    properties.push(property);
                }
                // qualifiers, method parameters and the like
                skip_to_end(reader)?;
            }
            Ok(Event::Empty(ref e)) => {
                if let Some(property) = parse_property(e)? {
                    properties.push(property);
                }
            }
            Ok(Event::End(_)) => break,
            Ok(Event::Eof) => {
                return Err(ParseError::structure(format!(
                    "document ended inside CLASS record '{class_name}'"
                )));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    tracing::trace!(class = %class_name, properties = properties.len(), "parsed class record");
    Ok(ClassSchema::new(class_name, properties))
}

/// Parses a property element, or returns `None` for any other child.
fn parse_property(e: &BytesStart<'_>) -> Result<Option<Property>, ParseError> {
    let name_bytes = e.name().as_ref().to_vec();
    let tag_name = std::str::from_utf8(&name_bytes)?;

    let property = match tag_name {
        PROPERTY => Property::new(
            required_attr(e, tag_name, "NAME")?,
            required_attr(e, tag_name, "TYPE")?,
        ),
        PROPERTY_ARRAY => Property::array(
            required_attr(e, tag_name, "NAME")?,
            required_attr(e, tag_name, "TYPE")?,
        ),
        PROPERTY_REFERENCE => Property::new(required_attr(e, tag_name, "NAME")?, REFERENCE_TYPE),
        _ => return Ok(None),
    };

    Ok(Some(property))
}

/// Reads the value of a required attribute.
fn required_attr(
    e: &BytesStart<'_>,
    element: &str,
    attribute: &str,
) -> Result<String, ParseError> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == attribute.as_bytes() {
            return Ok(std::str::from_utf8(&attr.value)?.to_string());
        }
    }
    Err(ParseError::missing_attr(element, attribute))
}

/// Skips to the end of the current element.
fn skip_to_end(reader: &mut Reader<&[u8]>) -> Result<(), ParseError> {
    let mut buf = Vec::new();
    let mut depth = 1;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(_)) => depth += 1,
            Ok(Event::End(_)) => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            Ok(Event::Eof) => {
                return Err(ParseError::structure("document ended inside an element"));
            }
            Err(e) => return Err(ParseError::Xml(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(())
}
