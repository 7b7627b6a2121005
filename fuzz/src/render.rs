#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde::Serialize;

#[derive(Debug, Serialize, Arbitrary)]
#[serde(untagged)]
enum Value {
    Null(()),
    Missing(Option<()>),
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

#[derive(Debug, Arbitrary)]
struct Config {
    indent: Option<String>,
    header: bool,
    self_close_tags: bool,
    escape: bool,
    explicit_true: bool,
    replacements: Vec<(String, String)>,
}

fuzz_target!(|data: (Config, Value)| {
    let (config, value) = data;
    let mut builder = toxml::Options::builder();
    if let Some(indent) = &config.indent {
        builder.indent(indent);
    }
    builder
        .header(config.header)
        .self_close_tags(config.self_close_tags)
        .escape_content(config.escape)
        .attribute_explicit_true(config.explicit_true)
        .attribute_replacements(config.replacements)
        .max_depth(64);
    let options = builder.build();
    let _ = toxml::to_xml(&value, &options);
});
