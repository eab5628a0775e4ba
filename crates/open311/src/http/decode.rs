/*
[INPUT]:  Raw response bodies and the configured response format
[OUTPUT]: Nested serde_json::Value trees with shape extraction
[POS]:    HTTP layer - wire format translation
[UPDATE]: When changing format handling or the XML folding rules
*/

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde_json::{Map, Value};

use super::{Open311Error, Result};

/// Decode a response body according to the configured format string.
///
/// `"json"` parses the body directly; any other format string falls through
/// to the XML branch. No auto-detection or fallback between formats.
pub fn decode_body(format: &str, body: &str) -> Result<Value> {
    if format == "json" {
        Ok(serde_json::from_str(body)?)
    } else {
        xml_to_value(body)
    }
}

/// Fold an XML document into a nested [`Value`] tree.
///
/// An element with child elements (or attributes) becomes an object; repeated
/// sibling tags collect into an array at that key; a leaf element becomes its
/// text content (empty element becomes `""`). The root element name becomes
/// the single top-level key.
///
/// Note the shape ambiguity this inherits from the wire format: a tag that
/// happens to occur once decodes to an object, while two or more occurrences
/// decode to an array. Callers that expect a list must handle both shapes
/// when a server may return a single entry.
pub fn xml_to_value(body: &str) -> Result<Value> {
    let mut reader = Reader::from_str(body);
    reader.config_mut().trim_text(true);

    loop {
        match reader.read_event()? {
            Event::Start(start) => {
                let name = tag_name(&start);
                let value = parse_element(&mut reader, &start)?;
                let mut root = Map::new();
                root.insert(name, value);
                return Ok(Value::Object(root));
            }
            Event::Empty(empty) => {
                let name = tag_name(&empty);
                let value = empty_element(&empty)?;
                let mut root = Map::new();
                root.insert(name, value);
                return Ok(Value::Object(root));
            }
            Event::Eof => {
                return Err(Open311Error::InvalidResponse(
                    "no root element in XML body".to_string(),
                ));
            }
            _ => {}
        }
    }
}

/// Extract the sub-structure at `path`, consuming the decoded tree.
///
/// A key missing along the way is a shape mismatch, reported as
/// [`Open311Error::MissingKey`] rather than an empty result.
pub(crate) fn extract(value: Value, path: &[&str]) -> Result<Value> {
    let mut current = value;
    for key in path {
        match current {
            Value::Object(mut map) => match map.remove(*key) {
                Some(next) => current = next,
                None => return Err(Open311Error::MissingKey((*key).to_string())),
            },
            _ => return Err(Open311Error::MissingKey((*key).to_string())),
        }
    }
    Ok(current)
}

fn parse_element(reader: &mut Reader<&[u8]>, start: &BytesStart) -> Result<Value> {
    let mut children = attribute_map(start)?;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(child) => {
                let name = tag_name(&child);
                let value = parse_element(reader, &child)?;
                insert_child(&mut children, name, value);
            }
            Event::Empty(child) => {
                let name = tag_name(&child);
                let value = empty_element(&child)?;
                insert_child(&mut children, name, value);
            }
            Event::Text(t) => text.push_str(&t.unescape()?),
            Event::CData(t) => text.push_str(&String::from_utf8_lossy(&t.into_inner())),
            Event::End(_) => break,
            Event::Eof => {
                return Err(Open311Error::InvalidResponse(format!(
                    "unexpected end of XML inside <{}>",
                    tag_name(start)
                )));
            }
            _ => {}
        }
    }

    if children.is_empty() {
        Ok(Value::String(text))
    } else {
        if !text.is_empty() {
            children.insert("value".to_string(), Value::String(text));
        }
        Ok(Value::Object(children))
    }
}

/// Repeated sibling tags collapse into an array at the shared key.
fn insert_child(map: &mut Map<String, Value>, key: String, value: Value) {
    match map.remove(&key) {
        Some(Value::Array(mut items)) => {
            items.push(value);
            map.insert(key, Value::Array(items));
        }
        Some(first) => {
            map.insert(key, Value::Array(vec![first, value]));
        }
        None => {
            map.insert(key, value);
        }
    }
}

fn empty_element(start: &BytesStart) -> Result<Value> {
    let attributes = attribute_map(start)?;
    if attributes.is_empty() {
        Ok(Value::String(String::new()))
    } else {
        Ok(Value::Object(attributes))
    }
}

fn attribute_map(start: &BytesStart) -> Result<Map<String, Value>> {
    let mut map = Map::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(quick_xml::Error::InvalidAttr)?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute.unescape_value()?.into_owned();
        map.insert(key, Value::String(value));
    }
    Ok(map)
}

fn tag_name(start: &BytesStart) -> String {
    String::from_utf8_lossy(start.name().as_ref()).into_owned()
}
