//! Entity substitution for text content and attribute values.

use std::borrow::Cow;

use crate::config::Replacements;
use crate::{Error, Result};

const CDATA_START: &str = "<![CDATA[";
const CDATA_END: &str = "]]>";

/// A substitution table applied left to right over a string.
///
/// An empty table passes text through unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Escaper {
    table: Vec<(String, String)>,
}

impl Escaper {
    /// The default table for text content.
    pub fn content() -> Self {
        Self::from_pairs(&[("&", "&amp;"), ("<", "&lt;"), (">", "&gt;")])
    }

    /// The default table for attribute values.
    pub fn attribute() -> Self {
        Self::from_pairs(&[
            ("&", "&amp;"),
            ("<", "&lt;"),
            (">", "&gt;"),
            ("\"", "&quot;"),
            ("'", "&apos;"),
        ])
    }

    fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let table = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Self { table }
    }

    /// Resolve the caller's replacements, falling back to the default table
    /// only when none were given.
    pub fn resolve(option: &str, default: Self, replacements: &Replacements) -> Result<Self> {
        match replacements {
            Replacements::Default => Ok(default),
            Replacements::Disabled => Ok(Self { table: Vec::new() }),
            Replacements::Custom(custom) => {
                if custom.iter().any(|(k, _)| k.is_empty()) {
                    return Err(Error::config(option, "replacement keys must not be empty"));
                }
                Ok(Self {
                    table: custom.clone(),
                })
            }
        }
    }

    /// Substitute every table key found in `s`.
    ///
    /// At each position the first key in table order that matches wins. An
    /// `&` that starts an entity reference is never replaced.
    pub fn escape<'a>(&self, s: &'a str) -> Cow<'a, str> {
        if self.table.is_empty() {
            return Cow::Borrowed(s);
        }

        let mut buf = String::new();
        let mut last = 0;
        let mut i = 0;
        while i < s.len() {
            let rest = &s[i..];
            let found = self
                .table
                .iter()
                .find(|(k, _)| rest.starts_with(k.as_str()));
            match found {
                Some((k, v)) if !(k == "&" && is_entity_ref(rest)) => {
                    buf.push_str(&s[last..i]);
                    buf.push_str(v);
                    i += k.len();
                    last = i;
                }
                _ => i += rest.chars().next().map_or(1, char::len_utf8),
            }
        }

        if last == 0 {
            return Cow::Borrowed(s);
        }
        buf.push_str(&s[last..]);
        Cow::Owned(buf)
    }
}

/// Whether the text is a literal CDATA section.
pub(crate) fn is_cdata(s: &str) -> bool {
    s.len() >= CDATA_START.len() + CDATA_END.len()
        && s.starts_with(CDATA_START)
        && s.ends_with(CDATA_END)
}

/// Whether `s` starts with `&#digits;`, `&#xhex;` or `&alnum;`.
fn is_entity_ref(s: &str) -> bool {
    let Some(body) = s.strip_prefix('&') else {
        return false;
    };
    let Some(end) = body.find(';') else {
        return false;
    };
    let name = &body[..end];
    if let Some(num) = name.strip_prefix('#') {
        match num.strip_prefix(|c| c == 'x' || c == 'X') {
            Some(hex) => !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()),
            None => !num.is_empty() && num.bytes().all(|b| b.is_ascii_digit()),
        }
    } else {
        !name.is_empty() && name.bytes().all(|b| b.is_ascii_alphanumeric())
    }
}
