//! Render options and their resolution.
//!
//! [`Options`] holds what the caller asked for, every field is optional. It
//! is resolved into a [`Config`] once at the start of each render, applying
//! defaults and validating the escaping tables. The resolved [`Config`] is
//! what [`Context::config`][crate::Context::config] hands to thunks.

use std::fmt;
use std::sync::Arc;

use crate::escape::Escaper;
use crate::{Error, Result, Value};

/// The default maximum nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// The XML declaration emitted for `header(true)`.
pub const DEFAULT_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A predicate excluding attributes. Returning `true` drops the attribute.
pub type AttributeFilterFn = dyn Fn(&str, &Value) -> bool + Send + Sync + 'static;

/// A function mapping leaf element content before it is rendered.
pub type ContentMapFn = dyn Fn(&Value) -> Value + Send + Sync + 'static;

/// The caller supplied render options.
///
/// Use [`Options::default()`] for the defaults, [`Options::builder()`] to
/// customize them or [`Options::from_value()`] to read them from a dynamic
/// [`Value`].
#[derive(Clone, Default)]
pub struct Options {
    indent: Option<String>,
    header: Header,
    self_close_tags: Option<bool>,
    content_replacements: Replacements,
    attribute_replacements: Replacements,
    attribute_explicit_true: bool,
    attribute_filter: Option<Arc<AttributeFilterFn>>,
    content_map: Option<Arc<ContentMapFn>>,
    max_depth: Option<usize>,
}

/// A builder for the render options.
///
/// This struct is typically created using [`Options::builder()`].
#[derive(Clone, Debug, Default)]
pub struct OptionsBuilder {
    options: Options,
}

/// The XML declaration to prefix the output with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Header {
    #[default]
    None,
    /// Emit [`DEFAULT_HEADER`].
    Default,
    /// Emit the string verbatim.
    Custom(String),
}

/// An entity replacement table for one escaping channel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Replacements {
    #[default]
    Default,
    /// No escaping at all, text is emitted raw.
    Disabled,
    /// Replaces the default table entirely.
    Custom(Vec<(String, String)>),
}

/// The resolved render configuration.
pub struct Config {
    pub(crate) indent: Option<String>,
    pub(crate) header: Option<String>,
    pub(crate) self_close_tags: bool,
    pub(crate) content: Escaper,
    pub(crate) attribute: Escaper,
    pub(crate) attribute_explicit_true: bool,
    pub(crate) attribute_filter: Option<Arc<AttributeFilterFn>>,
    pub(crate) content_map: Option<Arc<ContentMapFn>>,
    pub(crate) max_depth: usize,
}

impl Options {
    /// Create a new options builder.
    ///
    /// # Examples
    ///
    /// ```
    /// let options = toxml::Options::builder()
    ///     .indent("  ")
    ///     .header(true)
    ///     .self_close_tags(false)
    ///     .build();
    /// ```
    #[inline]
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::new()
    }

    /// Read options from a dynamic map.
    ///
    /// Recognized keys are `indent`, `header`, `selfCloseTags`,
    /// `contentReplacements`, `attributeReplacements`,
    /// `attributeExplicitTrue` and `maxDepth`. The function options
    /// `contentMap` and `attributeFilter` can only be set with the builder.
    ///
    /// # Errors
    ///
    /// If the value is not a map, a key is unknown or an option has the
    /// wrong type.
    ///
    /// # Examples
    ///
    /// ```
    /// use toxml::{value, Options};
    ///
    /// let options = Options::from_value(&value! {
    ///     indent: "  ",
    ///     header: true,
    ///     contentReplacements: false,
    /// })?;
    /// # Ok::<(), toxml::Error>(())
    /// ```
    pub fn from_value(value: &Value) -> Result<Self> {
        let map = match value {
            Value::Map(map) => map,
            v => {
                return Err(Error::config(
                    "options",
                    format!("expected map, found {}", v.human()),
                ))
            }
        };

        let mut options = Options::default();
        for (key, value) in map {
            if matches!(value, Value::Missing) {
                continue;
            }
            match key.as_str() {
                "indent" => options.indent = Some(expect_string(key, value)?),
                "header" => {
                    options.header = match value {
                        Value::Bool(b) => Header::from(*b),
                        Value::String(s) => Header::Custom(s.clone()),
                        v => return Err(wrong_type(key, "bool or string", v)),
                    }
                }
                "selfCloseTags" => options.self_close_tags = Some(expect_bool(key, value)?),
                "contentReplacements" => {
                    options.content_replacements = replacements_from_value(key, value)?
                }
                "attributeReplacements" => {
                    options.attribute_replacements = replacements_from_value(key, value)?
                }
                "attributeExplicitTrue" => {
                    options.attribute_explicit_true = expect_bool(key, value)?
                }
                "maxDepth" => match value {
                    Value::Integer(n) if *n > 0 => {
                        options.max_depth = Some(usize::try_from(*n).unwrap_or(usize::MAX))
                    }
                    v => return Err(wrong_type(key, "positive integer", v)),
                },
                "contentMap" | "attributeFilter" => {
                    return Err(Error::config(
                        key.as_str(),
                        "function options must be set with the options builder",
                    ))
                }
                _ => return Err(Error::config(key.as_str(), "unknown option")),
            }
        }
        Ok(options)
    }

    /// Apply defaults and validate the options.
    pub(crate) fn resolve(&self) -> Result<Config> {
        let max_depth = self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH);
        if max_depth == 0 {
            return Err(Error::config("maxDepth", "must be at least 1"));
        }

        let config = Config {
            indent: self.indent.clone(),
            header: match &self.header {
                Header::None => None,
                Header::Default => Some(DEFAULT_HEADER.to_owned()),
                Header::Custom(s) => Some(s.clone()),
            },
            self_close_tags: self.self_close_tags.unwrap_or(true),
            content: Escaper::resolve(
                "contentReplacements",
                Escaper::content(),
                &self.content_replacements,
            )?,
            attribute: Escaper::resolve(
                "attributeReplacements",
                Escaper::attribute(),
                &self.attribute_replacements,
            )?,
            attribute_explicit_true: self.attribute_explicit_true,
            attribute_filter: self.attribute_filter.clone(),
            content_map: self.content_map.clone(),
            max_depth,
        };
        tracing::debug!(?config, "resolved render options");
        Ok(config)
    }
}

impl OptionsBuilder {
    /// Creates a new options builder with all options unset.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable multi-line output, indenting each level with the given string.
    ///
    /// The empty string is allowed: siblings are still put on separate
    /// lines, just without indentation.
    #[inline]
    pub fn indent(&mut self, indent: &str) -> &mut Self {
        self.options.indent = Some(indent.to_owned());
        self
    }

    /// Prefix the output with an XML declaration.
    ///
    /// `true` emits [`DEFAULT_HEADER`], a string is emitted verbatim.
    #[inline]
    pub fn header(&mut self, header: impl Into<Header>) -> &mut Self {
        self.options.header = header.into();
        self
    }

    /// Set the global self-closing policy for empty elements.
    ///
    /// Defaults to `true`. Elements can override this with
    /// [`Element::self_close`][crate::Element::self_close] or the
    /// `_selfCloseTag` key.
    #[inline]
    pub fn self_close_tags(&mut self, yes: bool) -> &mut Self {
        self.options.self_close_tags = Some(yes);
        self
    }

    /// Set entity replacements for text content.
    ///
    /// The table replaces the default one (`&`, `<`, `>`), so characters not
    /// listed are emitted raw.
    #[inline]
    pub fn content_replacements<I, K, V>(&mut self, table: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.options.content_replacements = Replacements::custom(table);
        self
    }

    /// Set entity replacements for attribute values.
    ///
    /// The table replaces the default one (`&`, `<`, `>`, `"`, `'`), so
    /// characters not listed are emitted raw.
    #[inline]
    pub fn attribute_replacements<I, K, V>(&mut self, table: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.options.attribute_replacements = Replacements::custom(table);
        self
    }

    /// Enable or disable escaping of text content.
    #[inline]
    pub fn escape_content(&mut self, yes: bool) -> &mut Self {
        self.options.content_replacements = Replacements::toggle(yes);
        self
    }

    /// Enable or disable escaping of attribute values.
    #[inline]
    pub fn escape_attributes(&mut self, yes: bool) -> &mut Self {
        self.options.attribute_replacements = Replacements::toggle(yes);
        self
    }

    /// Render boolean attributes as `name="true"` and `name="false"` instead
    /// of a bare `name` flag.
    #[inline]
    pub fn attribute_explicit_true(&mut self, yes: bool) -> &mut Self {
        self.options.attribute_explicit_true = yes;
        self
    }

    /// Exclude every attribute for which the predicate returns `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use toxml::Value;
    ///
    /// let options = toxml::Options::builder()
    ///     .attribute_filter(|_, value| *value == Value::None)
    ///     .build();
    /// ```
    #[inline]
    pub fn attribute_filter<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&str, &Value) -> bool + Send + Sync + 'static,
    {
        self.options.attribute_filter = Some(Arc::new(f));
        self
    }

    /// Map leaf element content before it is rendered.
    ///
    /// The function sees primitives, [`Value::None`] and
    /// [`Value::Missing`]. Mapping [`Value::None`] to an empty string turns
    /// bare key text into empty elements.
    #[inline]
    pub fn content_map<F>(&mut self, f: F) -> &mut Self
    where
        F: Fn(&Value) -> Value + Send + Sync + 'static,
    {
        self.options.content_map = Some(Arc::new(f));
        self
    }

    /// Set the maximum nesting depth.
    ///
    /// Defaults to [`DEFAULT_MAX_DEPTH`]. Rendering a value nested deeper
    /// fails with [`Error::DepthExceeded`].
    #[inline]
    pub fn max_depth(&mut self, depth: usize) -> &mut Self {
        self.options.max_depth = Some(depth);
        self
    }

    /// Build the options.
    #[inline]
    pub fn build(&self) -> Options {
        self.options.clone()
    }
}

impl Config {
    /// The indentation unit, if multi-line output is enabled.
    #[inline]
    pub fn indent(&self) -> Option<&str> {
        self.indent.as_deref()
    }

    /// The XML declaration prefixed to the output, if any.
    #[inline]
    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    /// The global self-closing policy.
    #[inline]
    pub fn self_close_tags(&self) -> bool {
        self.self_close_tags
    }

    /// Whether boolean attributes render with an explicit value.
    #[inline]
    pub fn attribute_explicit_true(&self) -> bool {
        self.attribute_explicit_true
    }

    /// The maximum nesting depth.
    #[inline]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Replacements {
    fn custom<I, K, V>(table: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::Custom(
            table
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    fn toggle(yes: bool) -> Self {
        if yes {
            Self::Default
        } else {
            Self::Disabled
        }
    }
}

impl From<bool> for Header {
    fn from(yes: bool) -> Self {
        if yes {
            Self::Default
        } else {
            Self::None
        }
    }
}

impl From<&str> for Header {
    fn from(s: &str) -> Self {
        Self::Custom(s.to_owned())
    }
}

impl From<String> for Header {
    fn from(s: String) -> Self {
        Self::Custom(s)
    }
}

fn wrong_type(option: &str, expected: &str, found: &Value) -> Error {
    Error::config(option, format!("expected {expected}, found {}", found.human()))
}

fn expect_string(option: &str, value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        v => Err(wrong_type(option, "string", v)),
    }
}

fn expect_bool(option: &str, value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        v => Err(wrong_type(option, "bool", v)),
    }
}

fn replacements_from_value(option: &str, value: &Value) -> Result<Replacements> {
    match value {
        Value::Bool(yes) => Ok(Replacements::toggle(*yes)),
        Value::Map(map) => map
            .iter()
            .map(|(k, v)| -> Result<(String, String)> {
                Ok((k.clone(), expect_string(option, v)?))
            })
            .collect::<Result<_>>()
            .map(Replacements::Custom),
        v => Err(wrong_type(option, "map or bool", v)),
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("indent", &self.indent)
            .field("header", &self.header)
            .field("self_close_tags", &self.self_close_tags)
            .field("content_replacements", &self.content_replacements)
            .field("attribute_replacements", &self.attribute_replacements)
            .field("attribute_explicit_true", &self.attribute_explicit_true)
            .field("attribute_filter", &self.attribute_filter.is_some())
            .field("content_map", &self.content_map.is_some())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("indent", &self.indent)
            .field("header", &self.header)
            .field("self_close_tags", &self.self_close_tags)
            .field("content", &self.content)
            .field("attribute", &self.attribute)
            .field("attribute_explicit_true", &self.attribute_explicit_true)
            .field("attribute_filter", &self.attribute_filter.is_some())
            .field("content_map", &self.content_map.is_some())
            .field("max_depth", &self.max_depth)
            .finish()
    }
}
