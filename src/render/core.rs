use std::borrow::Cow;

use crate::config::Config;
use crate::render::resolve;
use crate::render::tag::{self, Node};
use crate::value::{Attrs, Part, Spec};
use crate::{Error, Result, Value};

/// The name given to elements that have content but no name.
const ANONYMOUS: &str = "_content";

/// Walks a value, collecting the sibling nodes it renders to.
pub(crate) struct Renderer<'a> {
    config: &'a Config,
    /// How many values deep the walk currently is.
    nesting: usize,
}

/// Everything about an element except its body.
#[derive(Clone, Copy)]
struct Tag<'s> {
    name: &'s str,
    attrs: Option<Attrs<'s>>,
    self_close: Option<bool>,
    /// Rendered as the first child.
    comment: Option<&'s str>,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config, nesting: 0 }
    }

    fn nested<F>(&mut self, f: F) -> Result<()>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let max = self.config.max_depth();
        if self.nesting >= max {
            return Err(Error::DepthExceeded { max });
        }
        self.nesting += 1;
        let result = f(self);
        self.nesting -= 1;
        result
    }

    /// Render a value that is not under a map key.
    pub fn content(&mut self, value: &Value, depth: usize, out: &mut Vec<Node>) -> Result<()> {
        self.nested(|r| {
            let value = resolve(r.config, value, depth)?;
            match &*value {
                Value::None | Value::Missing | Value::Fn(_) => {}
                Value::Bool(_) | Value::Integer(_) | Value::Float(_) | Value::String(_) => {
                    if let Some(text) = r.text(&value) {
                        out.push(Node::Text(text));
                    }
                }
                Value::Map(map) => match Spec::classify(map)? {
                    Some(spec) => r.unkeyed(&spec, depth, out)?,
                    None => {
                        for (key, value) in map {
                            r.entry(key, value, depth, out)?;
                        }
                    }
                },
                Value::List(items) => r.sequence(items, depth, out)?,
                Value::Element(element) => r.unkeyed(&Spec::from_element(element), depth, out)?,
            }
            Ok(())
        })
    }

    /// Render the items of a list.
    ///
    /// Primitive items are emitted verbatim and nested lists are flattened.
    fn sequence(&mut self, items: &[Value], depth: usize, out: &mut Vec<Node>) -> Result<()> {
        for item in items {
            let item = resolve(self.config, item, depth)?;
            match &*item {
                Value::None | Value::Missing | Value::Fn(_) => {}
                Value::String(s) => out.push(Node::Literal(s.clone())),
                Value::Bool(_) | Value::Integer(_) | Value::Float(_) => {
                    out.push(Node::Literal(canonical(&item).into_owned()))
                }
                Value::List(inner) => self.nested(|r| r.sequence(inner, depth, out))?,
                Value::Map(_) | Value::Element(_) => self.content(&item, depth, out)?,
            }
        }
        Ok(())
    }

    /// Render a single map entry as the element named by its key.
    fn entry(&mut self, key: &str, value: &Value, depth: usize, out: &mut Vec<Node>) -> Result<()> {
        let value = resolve(self.config, value, depth + 1)?;
        let spec = match &*value {
            Value::Map(map) => Spec::classify(map)?,
            Value::Element(element) => Some(Spec::from_element(element)),
            _ => None,
        };
        match spec {
            // A nameless element description configures the keyed element.
            Some(spec) if spec.name.is_none() => {
                let tag = Tag {
                    name: key,
                    attrs: spec.attrs,
                    self_close: spec.self_close,
                    comment: spec.comment,
                };
                self.element(tag, &spec.body, depth, out)
            }
            _ => {
                let tag = Tag {
                    name: key,
                    attrs: None,
                    self_close: None,
                    comment: None,
                };
                self.element(tag, &[Part::Content(&*value)], depth, out)
            }
        }
    }

    /// Render an element description that is not under a map key.
    fn unkeyed(&mut self, spec: &Spec<'_>, depth: usize, out: &mut Vec<Node>) -> Result<()> {
        let anonymous = !spec.has_entries()
            && (spec.has_content() || spec.attrs.is_some() || spec.self_close.is_some());
        let name = match spec.name {
            Some(name) => name,
            None if anonymous => ANONYMOUS,
            None => {
                if spec.attrs.is_some() {
                    tracing::warn!(depth, "dropping attributes of an element without a name");
                }
                if let Some(comment) = spec.comment {
                    out.push(Node::comment(comment));
                }
                for part in &spec.body {
                    match *part {
                        Part::Content(value) => self.content(value, depth, out)?,
                        Part::Entry(key, value) => self.entry(key, value, depth, out)?,
                    }
                }
                return Ok(());
            }
        };

        if let Some(comment) = spec.comment {
            out.push(Node::comment(comment));
        }
        let tag = Tag {
            name,
            attrs: spec.attrs,
            self_close: spec.self_close,
            comment: None,
        };
        self.element(tag, &spec.body, depth, out)
    }

    fn element(
        &mut self,
        tag: Tag<'_>,
        body: &[Part<'_>],
        depth: usize,
        out: &mut Vec<Node>,
    ) -> Result<()> {
        tracing::trace!(name = tag.name, depth, "rendering element");

        let content = body.iter().find_map(|part| match *part {
            Part::Content(value) => Some(value),
            Part::Entry(..) => None,
        });
        let content = match content {
            Some(value) => Some(self.leaf_content(value, depth + 1)?),
            None => None,
        };

        let has_entries = body.iter().any(|part| matches!(part, Part::Entry(..)));
        if !has_entries && tag.comment.is_none() {
            match content.as_deref() {
                Some(Value::None) => {
                    out.push(Node::Text(self.config.content.escape(tag.name).into_owned()));
                    return Ok(());
                }
                Some(Value::List(items))
                    if !items.is_empty() && items.iter().all(Value::is_primitive) =>
                {
                    return self.nested(|r| {
                        for item in items {
                            r.element(tag, &[Part::Content(item)], depth, out)?;
                        }
                        Ok(())
                    });
                }
                _ => {}
            }
        }

        let mut children = Vec::new();
        if let Some(comment) = tag.comment {
            children.push(Node::comment(comment));
        }
        for part in body {
            match *part {
                Part::Content(_) => {
                    if let Some(value) = &content {
                        self.content(value, depth + 1, &mut children)?;
                    }
                }
                Part::Entry(key, value) => self.entry(key, value, depth + 1, &mut children)?,
            }
        }

        let mut attrs = String::new();
        if let Some(a) = tag.attrs {
            tag::write_attrs(&mut attrs, self.config, a, depth)?;
        }
        let self_close = tag.self_close.unwrap_or(self.config.self_close_tags());
        out.push(Node::Element(tag::format_element(
            tag.name,
            &attrs,
            &children,
            self_close,
            self.config.indent(),
            depth,
        )));
        Ok(())
    }

    /// Resolve element content, applying the content map to leaf values.
    fn leaf_content<'v>(&self, value: &'v Value, depth: usize) -> Result<Cow<'v, Value>> {
        let value = resolve(self.config, value, depth)?;
        match &self.config.content_map {
            Some(f) if value.is_primitive() || matches!(*value, Value::None | Value::Missing) => {
                Ok(Cow::Owned(f(&*value)))
            }
            _ => Ok(value),
        }
    }

    /// Text for a primitive, escaped unless it is a CDATA section.
    fn text(&self, value: &Value) -> Option<String> {
        let text = canonical(value);
        if text.is_empty() {
            return None;
        }
        if crate::escape::is_cdata(&text) {
            return Some(text.into_owned());
        }
        Some(self.config.content.escape(&text).into_owned())
    }
}

fn canonical(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
        Value::Integer(n) => Cow::Owned(n.to_string()),
        Value::Float(n) => Cow::Owned(n.to_string()),
        Value::String(s) => Cow::Borrowed(s),
        _ => Cow::Borrowed(""),
    }
}
