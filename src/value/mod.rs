//! Defines the [`Value`] enum, representing any renderable data.

mod element;
mod from;
#[cfg(feature = "serde")]
mod ser;

use std::fmt;
use std::mem;
use std::sync::Arc;

pub use indexmap::IndexMap as Map;
pub use std::vec::Vec as List;

pub use crate::value::element::Element;
pub(crate) use crate::value::element::{Attrs, Part, Spec};
#[cfg(feature = "serde")]
pub use crate::value::ser::to_value;
use crate::Context;

/// A deferred value producer.
///
/// The function receives the render [`Context`] of the position it is
/// rendered at, so it may inspect the current depth or the resolved options.
pub type ValueFn = dyn Fn(&Context<'_>) -> Value + Send + Sync + 'static;

/// Data to be rendered represented as a recursive enum.
///
/// A [`Value::Map`] containing any of the reserved keys `_name`, `_content`,
/// `_attrs`, `_selfCloseTag` or `_comment` is rendered as an element
/// description, just like a [`Value::Element`].
#[derive(Debug, Clone)]
pub enum Value {
    /// An explicit null. Under a map key it renders as the bare key text.
    None,
    /// An absent value. Under a map key it renders as an empty element.
    Missing,
    Bool(bool),
    Integer(i64),
    Float(f64),
    /// A string. The empty string behaves like [`Value::Missing`].
    String(String),
    List(List<Value>),
    Map(Map<String, Value>),
    /// A thunk invoked at render time.
    Fn(Thunk),
    Element(Box<Element>),
}

/// A shareable zero-argument value producer, see [`ValueFn`].
#[derive(Clone)]
pub struct Thunk(Arc<ValueFn>);

impl Value {
    /// Construct a thunk value from a function.
    ///
    /// # Examples
    ///
    /// ```
    /// use toxml::{value, Options, Value};
    ///
    /// let v = value! {
    ///     foo: { depth: Value::from_fn(|ctx| Value::from(ctx.depth() as i64)) },
    /// };
    /// let xml = toxml::render(&v, &Options::default())?;
    /// assert_eq!(xml, "<foo><depth>2</depth></foo>");
    /// # Ok::<(), toxml::Error>(())
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Context<'_>) -> Value + Send + Sync + 'static,
    {
        Self::Fn(Thunk(Arc::new(f)))
    }

    /// Whether the value renders as an empty element under a map key.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Missing => true,
            Self::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Whether the value is a bool, number or string.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Bool(_) | Self::Integer(_) | Self::Float(_) | Self::String(_)
        )
    }

    pub(crate) fn human(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Missing => "missing",
            Self::Bool(_) => "bool",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Fn(_) => "function",
            Self::Element(_) => "element",
        }
    }
}

impl Thunk {
    pub(crate) fn call(&self, ctx: &Context<'_>) -> Value {
        (self.0)(ctx)
    }
}

impl fmt::Debug for Thunk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Thunk(..)")
    }
}

impl PartialEq for Thunk {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Bool(s), Self::Bool(o)) => s == o,
            (Self::Integer(s), Self::Integer(o)) => s == o,
            (Self::Float(s), Self::Float(o)) => s == o,
            (Self::String(s), Self::String(o)) => s == o,
            (Self::List(s), Self::List(o)) => s == o,
            (Self::Map(s), Self::Map(o)) => s == o,
            (Self::Fn(s), Self::Fn(o)) => s == o,
            (Self::Element(s), Self::Element(o)) => s == o,
            _ => mem::discriminant(self) == mem::discriminant(other),
        }
    }
}
