//! Generic XML element tree.
//!
//! Converts an XML document into a `serde_json::Value` the way loosely typed
//! XML decoders do: an element with children becomes an object keyed by
//! child name, repeated siblings collapse into an array, and a leaf element
//! becomes its text (or `null` when empty). Attributes are ignored.
//!
//! The result is the value of the root element, so for a table C response
//! the rates live under `/Rates/Rate`. Note that a lone `Rate` stays an
//! object rather than a one-element array.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use serde_json::{Map, Value};

use crate::errors::RatesError;

struct Node {
    name: String,
    children: Map<String, Value>,
    text: String,
}

impl Node {
    fn new(name: String) -> Self {
        Self {
            name,
            children: Map::new(),
            text: String::new(),
        }
    }

    fn into_value(self) -> (String, Value) {
        let value = if !self.children.is_empty() {
            Value::Object(self.children)
        } else if self.text.is_empty() {
            Value::Null
        } else {
            Value::String(self.text)
        };
        (self.name, value)
    }
}

fn malformed(message: impl std::fmt::Display) -> RatesError {
    RatesError::MalformedPayload(message.to_string())
}

fn insert_child(children: &mut Map<String, Value>, name: String, value: Value) {
    match children.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            children.insert(name, value);
        }
    }
}

fn attach(
    stack: &mut [Node],
    root: &mut Option<Value>,
    name: String,
    value: Value,
) -> Result<(), RatesError> {
    match stack.last_mut() {
        Some(parent) => insert_child(&mut parent.children, name, value),
        None if root.is_some() => return Err(malformed("multiple root elements")),
        None => *root = Some(value),
    }
    Ok(())
}

fn element_name(raw: &[u8]) -> String {
    String::from_utf8_lossy(raw).into_owned()
}

/// Parse `payload` and return the value of its root element.
pub fn parse(payload: &str) -> Result<Value, RatesError> {
    let mut reader = Reader::from_str(payload);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Node> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => stack.push(Node::new(element_name(e.local_name().as_ref()))),
            Ok(Event::Empty(e)) => {
                let name = element_name(e.local_name().as_ref());
                attach(&mut stack, &mut root, name, Value::Null)?;
            }
            Ok(Event::Text(t)) => {
                let text = t.unescape().map_err(malformed)?;
                match stack.last_mut() {
                    Some(node) => node.text.push_str(&text),
                    None => return Err(malformed("text outside of the root element")),
                }
            }
            Ok(Event::CData(c)) => {
                let text = String::from_utf8_lossy(&c.into_inner()).into_owned();
                if let Some(node) = stack.last_mut() {
                    node.text.push_str(&text);
                }
            }
            Ok(Event::End(_)) => {
                let node = stack.pop().ok_or_else(|| malformed("unexpected closing tag"))?;
                let (name, value) = node.into_value();
                attach(&mut stack, &mut root, name, value)?;
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(malformed(e)),
        }
    }

    if let Some(node) = stack.last() {
        return Err(malformed(format!("unclosed element <{}>", node.name)));
    }

    root.ok_or_else(|| malformed("document has no root element"))
}
