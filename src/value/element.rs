//! Explicit element descriptions and the reserved-key classification of maps.

use crate::value::{Map, Value};
use crate::{Error, Result};

pub(crate) const NAME: &str = "_name";
pub(crate) const CONTENT: &str = "_content";
pub(crate) const ATTRS: &str = "_attrs";
pub(crate) const SELF_CLOSE_TAG: &str = "_selfCloseTag";
pub(crate) const COMMENT: &str = "_comment";

/// An explicit description of a single element.
///
/// This is the typed equivalent of a map using the reserved keys `_name`,
/// `_content`, `_attrs`, `_selfCloseTag` and `_comment`.
///
/// # Examples
///
/// ```
/// use toxml::{Element, Options, Value};
///
/// let v = Value::from(
///     Element::new("html")
///         .attr("lang", "en")
///         .attr("lang", "klingon")
///         .self_close(false),
/// );
/// let xml = toxml::render(&v, &Options::default())?;
/// assert_eq!(xml, r#"<html lang="en" lang="klingon"></html>"#);
/// # Ok::<(), toxml::Error>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Element {
    pub(crate) name: Option<String>,
    pub(crate) attrs: Vec<(String, Value)>,
    pub(crate) content: Option<Box<Value>>,
    pub(crate) self_close: Option<bool>,
    pub(crate) comment: Option<String>,
    pub(crate) children: Map<String, Value>,
}

impl Element {
    /// Construct a new element with the given tag name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Construct an element without a tag name.
    ///
    /// Placed under a map key, it configures the element named by that key.
    /// Elsewhere it renders as `<_content>` when it has content, or as its
    /// bare children otherwise.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Append an attribute. Duplicate names are kept in insertion order.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Set the content of the element.
    pub fn content(mut self, content: impl Into<Value>) -> Self {
        self.content = Some(Box::new(content.into()));
        self
    }

    /// Override the global self-closing policy for this element.
    pub fn self_close(mut self, yes: bool) -> Self {
        self.self_close = Some(yes);
        self
    }

    /// Emit a `<!-- comment -->` before the element.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Append a child element rendered after the content.
    pub fn child(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.children.insert(key.into(), value.into());
        self
    }
}

impl From<Element> for Value {
    fn from(element: Element) -> Self {
        Self::Element(Box::new(element))
    }
}

/// A borrowed, classified view of an element description.
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Spec<'a> {
    pub name: Option<&'a str>,
    pub attrs: Option<Attrs<'a>>,
    pub self_close: Option<bool>,
    pub comment: Option<&'a str>,
    pub body: Vec<Part<'a>>,
}

#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy)]
pub(crate) enum Attrs<'a> {
    Pairs(&'a [(String, Value)]),
    Value(&'a Value),
}

/// The content and the regular entries, in declared order.
#[cfg_attr(test, derive(Debug))]
#[derive(Clone, Copy)]
pub(crate) enum Part<'a> {
    Content(&'a Value),
    Entry(&'a str, &'a Value),
}

fn is_reserved(key: &str) -> bool {
    matches!(key, NAME | CONTENT | ATTRS | SELF_CLOSE_TAG | COMMENT)
}

impl<'a> Spec<'a> {
    /// Classify a map, returning `None` if it has no reserved keys.
    pub fn classify(map: &'a Map<String, Value>) -> Result<Option<Self>> {
        if !map.keys().any(|k| is_reserved(k)) {
            return Ok(None);
        }

        let mut spec = Spec {
            name: None,
            attrs: None,
            self_close: None,
            comment: None,
            body: Vec::with_capacity(map.len()),
        };
        for (key, value) in map {
            match (key.as_str(), value) {
                (NAME, Value::String(name)) => spec.name = Some(name),
                (NAME, v) => return Err(Error::value_kind("`_name`", "string", v.human())),
                (CONTENT, v) => spec.body.push(Part::Content(v)),
                (ATTRS, v) => spec.attrs = Some(Attrs::Value(v)),
                (SELF_CLOSE_TAG, Value::Bool(b)) => spec.self_close = Some(*b),
                (SELF_CLOSE_TAG, v) => {
                    return Err(Error::value_kind("`_selfCloseTag`", "bool", v.human()))
                }
                (COMMENT, Value::String(c)) => spec.comment = Some(c),
                (COMMENT, v) => {
                    return Err(Error::value_kind("`_comment`", "string", v.human()))
                }
                (key, v) => spec.body.push(Part::Entry(key, v)),
            }
        }
        Ok(Some(spec))
    }

    pub fn from_element(element: &'a Element) -> Self {
        let mut body = Vec::with_capacity(element.children.len() + 1);
        if let Some(content) = &element.content {
            body.push(Part::Content(content));
        }
        body.extend(
            element
                .children
                .iter()
                .map(|(k, v)| Part::Entry(k.as_str(), v)),
        );
        Spec {
            name: element.name.as_deref(),
            attrs: (!element.attrs.is_empty()).then_some(Attrs::Pairs(&element.attrs)),
            self_close: element.self_close,
            comment: element.comment.as_deref(),
            body,
        }
    }

    pub fn has_entries(&self) -> bool {
        self.body.iter().any(|p| matches!(p, Part::Entry(..)))
    }

    pub fn has_content(&self) -> bool {
        self.body.iter().any(|p| matches!(p, Part::Content(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn classify_plain_map() {
        let v = value! { foo: "bar", baz: None };
        let Value::Map(map) = &v else { unreachable!() };
        assert!(Spec::classify(map).unwrap().is_none());
    }

    #[test]
    fn classify_keeps_declared_order() {
        let v = value! { bar: "baz", _content: { bar2: "baz2" }, _name: "foo" };
        let Value::Map(map) = &v else { unreachable!() };
        let spec = Spec::classify(map).unwrap().unwrap();
        assert_eq!(spec.name, Some("foo"));
        assert!(matches!(spec.body[0], Part::Entry("bar", _)));
        assert!(matches!(spec.body[1], Part::Content(_)));
        assert!(spec.has_entries());
        assert!(spec.has_content());
    }

    #[test]
    fn classify_err_name_not_string() {
        let v = value! { _name: 123 };
        let Value::Map(map) = &v else { unreachable!() };
        let err = Spec::classify(map).unwrap_err();
        assert_eq!(err.to_string(), "`_name`: expected string, found integer");
    }

    #[test]
    fn classify_err_self_close_not_bool() {
        let v = value! { _selfCloseTag: "yes" };
        let Value::Map(map) = &v else { unreachable!() };
        let err = Spec::classify(map).unwrap_err();
        assert_eq!(
            err.to_string(),
            "`_selfCloseTag`: expected bool, found string"
        );
    }

    #[test]
    fn element_builder_content_first() {
        let el = Element::new("foo").child("b", 1).content("a");
        let spec = Spec::from_element(&el);
        assert!(matches!(spec.body[0], Part::Content(_)));
        assert!(matches!(spec.body[1], Part::Entry("b", _)));
        assert!(spec.attrs.is_none());
    }
}
