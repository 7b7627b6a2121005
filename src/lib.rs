//! Render dynamically shaped values into XML text.
//!
//! # Features
//!
//! - Elements named by map keys: `{ foo: "bar" }` ⇒ `<foo>bar</foo>`
//! - Explicit element descriptions with attributes, comments and
//!   self-closing control, either as the [`Element`] builder or as maps
//!   using the reserved keys `_name`, `_content`, `_attrs`, `_selfCloseTag`
//!   and `_comment`
//! - Entity escaping that never double encodes existing entities
//! - Optional indentation, XML header and custom escaping tables
//! - Thunks that are evaluated at render time with access to the current
//!   depth and options
//! - Render any [`serde`] serializable value
//! - Convenient macro for building values: `toxml::value!{ foo: "bar" }`
//!
//! # Getting started
//!
//! Build a [`Value`], usually with the [`value!`] macro, and pass it to
//! [`render`] together with the [`Options`].
//!
//! ```
//! use toxml::{value, Options};
//!
//! let v = value! { foo: "bar", foo2: "bar2" };
//! let xml = toxml::render(&v, &Options::default())?;
//! assert_eq!(xml, "<foo>bar</foo><foo2>bar2</foo2>");
//! # Ok::<(), toxml::Error>(())
//! ```
//!
//! A map entry with a `None` value renders as the bare key, which allows
//! mixing text and elements. Missing values and empty strings render as
//! empty elements.
//!
//! ```
//! # use toxml::{value, Options};
//! let v = value! { text1: None, foo: "bar", empty: "", text2: None };
//! let xml = toxml::render(&v, &Options::default())?;
//! assert_eq!(xml, "text1<foo>bar</foo><empty/>text2");
//! # Ok::<(), toxml::Error>(())
//! ```
//!
//! # Examples
//!
//! ### Attributes and indentation
//!
//! ```
//! use toxml::{value, Options};
//!
//! let v = value! {
//!     _name: "rss",
//!     _attrs: { version: "2.0" },
//!     _content: {
//!         channel: [
//!             { title: "RSS Example" },
//!             { link: "example.com" },
//!         ],
//!     },
//! };
//!
//! let options = Options::builder().header(true).indent("  ").build();
//! let xml = toxml::render(&v, &options)?;
//!
//! assert_eq!(
//!     xml,
//!     r#"<?xml version="1.0" encoding="UTF-8"?>
//! <rss version="2.0">
//!   <channel>
//!     <title>RSS Example</title>
//!     <link>example.com</link>
//!   </channel>
//! </rss>"#
//! );
//! # Ok::<(), toxml::Error>(())
//! ```
//!
//! ### Render using structured data
//!
//! ```
//! #[derive(serde::Serialize)]
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! let person = Person { name: "John Smith".into(), age: 42 };
//! let xml = toxml::to_xml(&person, &toxml::Options::default())?;
//!
//! assert_eq!(xml, "<name>John Smith</name><age>42</age>");
//! # Ok::<(), toxml::Error>(())
//! ```
//!
//! ### Options from data
//!
//! Options can also be read from a [`Value`] using camelCase option names.
//!
//! ```
//! use toxml::{value, Options};
//!
//! let options = Options::from_value(&value! { selfCloseTags: false })?;
//! let xml = toxml::render(&value! { foo: "" }, &options)?;
//! assert_eq!(xml, "<foo></foo>");
//! # Ok::<(), toxml::Error>(())
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod macros;

pub mod config;
mod error;
mod escape;
mod render;
mod value;

pub use crate::config::{Config, Header, Options, OptionsBuilder};
pub use crate::error::{Error, Result};
pub use crate::render::Context;
#[cfg(feature = "serde")]
pub use crate::value::to_value;
pub use crate::value::{Element, List, Map, Thunk, Value, ValueFn};

/// Render a value to an XML string.
///
/// The options are resolved once before rendering starts. Rendering never
/// returns partial output, any error aborts the whole call.
///
/// # Errors
///
/// If the options are invalid, a value has a shape that cannot be rendered
/// at its position or the value is nested deeper than the maximum depth.
#[inline]
pub fn render(value: &Value, options: &Options) -> Result<String> {
    render::to_string(value, options)
}

/// Serialize a value using [`serde`] and render it to an XML string.
///
/// Struct fields render in declaration order. `Option::None` renders as an
/// empty element and `()` as the bare field name.
#[cfg(feature = "serde")]
#[inline]
pub fn to_xml<S>(value: &S, options: &Options) -> Result<String>
where
    S: serde::Serialize + ?Sized,
{
    render(&to_value(value)?, options)
}
