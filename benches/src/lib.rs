pub mod context;
#[cfg(test)]
mod tests;

use toxml::{Element, Options, Value};

use crate::context::Feed;

/// Abstraction for a way of producing a document.
pub trait Document: Sized {
    fn name() -> &'static str;
    fn prepare(feed: &Feed) -> Self;
    fn render(&self, options: &Options) -> String;
}

////////////////////////////////////////////////////////////////////////////////
/// value
////////////////////////////////////////////////////////////////////////////////

/// Renders an already converted value.
pub struct Prebuilt(pub Value);

impl Document for Prebuilt {
    #[inline]
    fn name() -> &'static str {
        "value"
    }

    #[inline]
    fn prepare(feed: &Feed) -> Self {
        Self(toxml::to_value(feed).unwrap())
    }

    #[inline]
    fn render(&self, options: &Options) -> String {
        toxml::render(&self.0, options).unwrap()
    }
}

////////////////////////////////////////////////////////////////////////////////
/// element
////////////////////////////////////////////////////////////////////////////////

/// Renders an RSS style tree made with the element builder.
pub struct Elements(pub Value);

impl Document for Elements {
    #[inline]
    fn name() -> &'static str {
        "element"
    }

    fn prepare(feed: &Feed) -> Self {
        let items: Value = feed
            .items
            .iter()
            .map(|item| {
                let mut el = Element::new("item")
                    .attr("rank", item.rank)
                    .attr("draft", item.is_draft)
                    .child("title", item.title.as_str())
                    .child("description", item.description.as_str());
                if !item.tags.is_empty() {
                    let tags: Value = item.tags.iter().map(String::as_str).collect();
                    el = el.child("tag", tags);
                }
                Value::from(el)
            })
            .collect();
        let channel = Element::anonymous()
            .child("title", feed.title.as_str())
            .child("link", feed.link.as_str())
            .child("items", items);
        let rss = Element::new("rss")
            .attr("version", "2.0")
            .comment("generated")
            .child("channel", channel);
        Self(Value::from(rss))
    }

    #[inline]
    fn render(&self, options: &Options) -> String {
        toxml::render(&self.0, options).unwrap()
    }
}

/// A thunk that rebuilds the item list on every render.
pub struct Lazy(pub Value);

impl Document for Lazy {
    #[inline]
    fn name() -> &'static str {
        "thunk"
    }

    fn prepare(feed: &Feed) -> Self {
        let Elements(value) = Elements::prepare(feed);
        Self(Value::from_fn(move |_| value.clone()))
    }

    #[inline]
    fn render(&self, options: &Options) -> String {
        toxml::render(&self.0, options).unwrap()
    }
}
