//! Assembles rendered nodes into tags and lines.

use std::fmt::Write;

use crate::config::Config;
use crate::render::resolve;
use crate::value::Attrs;
use crate::{Error, Result, Value};

/// A rendered sibling.
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) enum Node {
    Element(String),
    Comment(String),
    /// Escaped text, a bare key or primitive content.
    Text(String),
    /// Verbatim text from a sequence, it replaces the separator on both
    /// sides.
    Literal(String),
}

impl Node {
    pub fn comment(text: &str) -> Self {
        Self::Comment(format!("<!-- {text} -->"))
    }

    fn as_str(&self) -> &str {
        match self {
            Self::Element(s) | Self::Comment(s) | Self::Text(s) | Self::Literal(s) => s,
        }
    }

    fn is_literal(&self) -> bool {
        matches!(self, Self::Literal(_))
    }

    fn is_block(&self) -> bool {
        matches!(self, Self::Element(_) | Self::Comment(_))
    }
}

fn newline(buf: &mut String, unit: &str, depth: usize) {
    buf.push('\n');
    for _ in 0..depth {
        buf.push_str(unit);
    }
}

/// Write siblings at the given depth.
///
/// Without indentation the nodes are concatenated. With indentation each
/// node goes on its own line, except next to a literal.
pub(crate) fn join(buf: &mut String, nodes: &[Node], indent: Option<&str>, depth: usize) {
    let mut prev: Option<&Node> = None;
    for node in nodes.iter().filter(|n| !n.as_str().is_empty()) {
        if let (Some(unit), Some(prev)) = (indent, prev) {
            if !prev.is_literal() && !node.is_literal() {
                newline(buf, unit, depth);
            }
        }
        buf.push_str(node.as_str());
        prev = Some(node);
    }
}

/// Format a complete element from its already rendered children.
///
/// An element without content is self-closed if `self_close` is set. When
/// indenting, children containing elements or comments are laid out on
/// their own lines and the closing tag goes on a new line.
pub(crate) fn format_element(
    name: &str,
    attrs: &str,
    children: &[Node],
    self_close: bool,
    indent: Option<&str>,
    depth: usize,
) -> String {
    let mut buf = String::with_capacity(name.len() * 2 + attrs.len() + 5);
    buf.push('<');
    buf.push_str(name);
    buf.push_str(attrs);

    let mut nonempty = children.iter().filter(|n| !n.as_str().is_empty());
    let first = nonempty.next();
    let last = nonempty.last().or(first);

    let Some(first) = first else {
        if self_close {
            buf.push_str("/>");
        } else {
            let _ = write!(buf, "></{name}>");
        }
        return buf;
    };

    buf.push('>');
    match indent {
        Some(unit) if children.iter().any(Node::is_block) => {
            if !first.is_literal() {
                newline(&mut buf, unit, depth + 1);
            }
            join(&mut buf, children, indent, depth + 1);
            if !last.map_or(false, Node::is_literal) {
                newline(&mut buf, unit, depth);
            }
        }
        _ => {
            for child in children {
                buf.push_str(child.as_str());
            }
        }
    }
    let _ = write!(buf, "</{name}>");
    buf
}

/// Write the attributes of an element, each preceded by a space.
pub(crate) fn write_attrs(
    buf: &mut String,
    config: &Config,
    attrs: Attrs<'_>,
    depth: usize,
) -> Result<()> {
    match attrs {
        Attrs::Pairs(pairs) => {
            for (name, value) in pairs {
                write_attr(buf, config, name, value, depth)?;
            }
        }
        Attrs::Value(value) => match &*resolve(config, value, depth)? {
            Value::None | Value::Missing => {}
            Value::Map(map) => {
                for (name, value) in map {
                    write_attr(buf, config, name, value, depth)?;
                }
            }
            Value::List(items) => {
                for item in items {
                    match &*resolve(config, item, depth)? {
                        Value::Map(map) => {
                            for (name, value) in map {
                                write_attr(buf, config, name, value, depth)?;
                            }
                        }
                        v => return Err(Error::value_kind("`_attrs` item", "map", v.human())),
                    }
                }
            }
            v => {
                return Err(Error::value_kind(
                    "`_attrs`",
                    "map or list of maps",
                    v.human(),
                ))
            }
        },
    }
    Ok(())
}

fn write_attr(
    buf: &mut String,
    config: &Config,
    name: &str,
    value: &Value,
    depth: usize,
) -> Result<()> {
    let value = resolve(config, value, depth)?;
    if let Some(filter) = &config.attribute_filter {
        if filter(name, &*value) {
            return Ok(());
        }
    }

    buf.push(' ');
    buf.push_str(name);
    match &*value {
        Value::Bool(true) if !config.attribute_explicit_true => {}
        Value::Bool(b) => {
            let _ = write!(buf, "=\"{b}\"");
        }
        Value::None | Value::Missing => buf.push_str("=\"\""),
        Value::Integer(n) => {
            let _ = write!(buf, "=\"{}\"", config.attribute.escape(&n.to_string()));
        }
        Value::Float(n) => {
            let _ = write!(buf, "=\"{}\"", config.attribute.escape(&n.to_string()));
        }
        Value::String(s) => {
            let _ = write!(buf, "=\"{}\"", config.attribute.escape(s));
        }
        v => {
            return Err(Error::value_kind(
                "attribute value",
                "bool, number or string",
                v.human(),
            ))
        }
    }
    Ok(())
}
