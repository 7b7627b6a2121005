mod core;
mod tag;

use std::borrow::Cow;

use crate::config::Config;
use crate::render::core::Renderer;
use crate::{Error, Options, Result, Value};

/// The state handed to thunks when they are invoked.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    config: &'a Config,
    depth: usize,
}

impl<'a> Context<'a> {
    pub(crate) fn new(config: &'a Config, depth: usize) -> Self {
        Self { config, depth }
    }

    /// The nesting depth the thunk's result is rendered at.
    ///
    /// The root value is at depth 0 and the content of an element is one
    /// level deeper than the element itself.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// The resolved options of the current render.
    #[inline]
    pub fn config(&self) -> &'a Config {
        self.config
    }
}

pub(crate) fn to_string(value: &Value, options: &Options) -> Result<String> {
    let config = options.resolve()?;
    tracing::debug!(kind = value.human(), "rendering value");

    let mut nodes = Vec::new();
    Renderer::new(&config).content(value, 0, &mut nodes)?;

    let mut buf = String::new();
    if let Some(header) = config.header() {
        buf.push_str(header);
        if config.indent().is_some() {
            buf.push('\n');
        }
    }
    tag::join(&mut buf, &nodes, config.indent(), 0);
    Ok(buf)
}

/// Invoke thunks until a concrete value is produced.
fn resolve<'v>(config: &Config, value: &'v Value, depth: usize) -> Result<Cow<'v, Value>> {
    let Value::Fn(thunk) = value else {
        return Ok(Cow::Borrowed(value));
    };
    let ctx = Context::new(config, depth);
    let mut value = thunk.call(&ctx);
    let mut calls = 1;
    while let Value::Fn(thunk) = &value {
        if calls >= config.max_depth() {
            return Err(Error::DepthExceeded {
                max: config.max_depth(),
            });
        }
        let thunk = thunk.clone();
        value = thunk.call(&ctx);
        calls += 1;
    }
    Ok(Cow::Owned(value))
}
