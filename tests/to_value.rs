#![cfg(feature = "serde")]

use std::collections::BTreeMap;

use serde::Serialize;

use toxml::{to_value, Element, List, Map, Value};

#[test]
fn to_value_bool() {
    assert_eq!(to_value(true).unwrap(), Value::Bool(true));
}

#[test]
fn to_value_numbers() {
    assert_eq!(to_value(42u8).unwrap(), Value::Integer(42));
    assert_eq!(to_value(-7i64).unwrap(), Value::Integer(-7));
    assert_eq!(to_value(4.5f64).unwrap(), Value::Float(4.5));
}

#[test]
fn to_value_char() {
    assert_eq!(to_value('a').unwrap(), Value::String(String::from('a')));
}

#[test]
fn to_value_str() {
    assert_eq!(
        to_value("testing...").unwrap(),
        Value::String(String::from("testing..."))
    );
}

#[test]
fn to_value_none() {
    assert_eq!(to_value(None::<i32>).unwrap(), Value::Missing);
}

#[test]
fn to_value_some() {
    assert_eq!(
        to_value(Some("testing...")).unwrap(),
        Value::String(String::from("testing..."))
    );
}

#[test]
fn to_value_unit() {
    assert_eq!(to_value(()).unwrap(), Value::None);
}

#[test]
fn to_value_unit_struct() {
    #[derive(Serialize)]
    struct Test;
    assert_eq!(to_value(Test).unwrap(), Value::None);
}

#[test]
fn to_value_unit_variant() {
    #[derive(Serialize)]
    enum Test {
        Variant,
    }
    assert_eq!(
        to_value(Test::Variant).unwrap(),
        Value::String(String::from("Variant"))
    );
}

#[test]
fn to_value_newtype_struct() {
    #[derive(Serialize)]
    struct Test(&'static str);

    assert_eq!(
        to_value(Test("testing...")).unwrap(),
        Value::String(String::from("testing..."))
    );
}

#[test]
fn to_value_newtype_variant() {
    #[derive(Serialize)]
    enum Test {
        Variant(&'static str),
    }
    assert_eq!(
        to_value(Test::Variant("testing...")).unwrap(),
        Value::Map(Map::from([(
            String::from("Variant"),
            Value::String(String::from("testing..."))
        )]))
    );
}

#[test]
fn to_value_seq() {
    assert_eq!(
        to_value(vec!["a", "b", "c"]).unwrap(),
        Value::List(List::from([
            Value::String(String::from("a")),
            Value::String(String::from("b")),
            Value::String(String::from("c")),
        ]))
    );
}

#[test]
fn to_value_tuple() {
    assert_eq!(
        to_value(("a", "b", "c")).unwrap(),
        Value::List(List::from([
            Value::String(String::from("a")),
            Value::String(String::from("b")),
            Value::String(String::from("c")),
        ]))
    );
}

#[test]
fn to_value_tuple_struct() {
    #[derive(Serialize)]
    struct Test<'a>(&'a str, &'a str, &'a str);
    assert_eq!(
        to_value(Test("a", "b", "c")).unwrap(),
        Value::List(List::from([
            Value::String(String::from("a")),
            Value::String(String::from("b")),
            Value::String(String::from("c")),
        ]))
    );
}

#[test]
fn to_value_tuple_variant() {
    #[derive(Serialize)]
    enum Test<'a> {
        Variant(&'a str, &'a str, &'a str),
    }
    assert_eq!(
        to_value(Test::Variant("a", "b", "c")).unwrap(),
        Value::Map(Map::from([(
            String::from("Variant"),
            Value::List(List::from([
                Value::String(String::from("a")),
                Value::String(String::from("b")),
                Value::String(String::from("c")),
            ]))
        )]))
    );
}

#[test]
fn to_value_map_key_not_string() {
    assert_eq!(
        to_value(BTreeMap::from([((1, 2), "b"), ((3, 4), "d")]))
            .unwrap_err()
            .to_string(),
        "map key must be a string"
    );
}

#[test]
fn to_value_map_integer_keys() {
    assert_eq!(
        to_value(BTreeMap::from([(1, "a"), (2, "b")])).unwrap(),
        Value::Map(Map::from([
            (String::from("1"), Value::from("a")),
            (String::from("2"), Value::from("b")),
        ]))
    );
}

#[test]
fn to_value_map() {
    assert_eq!(
        to_value(BTreeMap::from([("a", "b"), ("c", "d")])).unwrap(),
        Value::Map(Map::from([
            (String::from("a"), Value::String(String::from("b"))),
            (String::from("c"), Value::String(String::from("d")))
        ]))
    );
}

#[test]
fn to_value_map_keeps_insertion_order() {
    let v = to_value(Map::from([
        (String::from("z"), Value::from(1)),
        (String::from("a"), Value::from(2)),
    ]))
    .unwrap();
    let Value::Map(map) = v else {
        panic!("expected map")
    };
    let keys: Vec<_> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a"]);
}

#[test]
fn to_value_struct_field_order() {
    #[derive(Serialize)]
    struct Test {
        zeta: u32,
        alpha: Option<u32>,
        unit: (),
    }
    let v = to_value(Test {
        zeta: 1,
        alpha: None,
        unit: (),
    })
    .unwrap();
    assert_eq!(
        v,
        Value::Map(Map::from([
            (String::from("zeta"), Value::Integer(1)),
            (String::from("alpha"), Value::Missing),
            (String::from("unit"), Value::None),
        ]))
    );
}

#[test]
fn to_value_element() {
    let el = Element::new("foo")
        .attr("a", 1)
        .attr("a", 2)
        .content("bar")
        .self_close(false)
        .comment("c")
        .child("baz", true);
    assert_eq!(
        to_value(&Value::from(el)).unwrap(),
        Value::Map(Map::from([
            (String::from("_name"), Value::from("foo")),
            (
                String::from("_attrs"),
                Value::from([Value::from([("a", 1)]), Value::from([("a", 2)])])
            ),
            (String::from("_content"), Value::from("bar")),
            (String::from("_selfCloseTag"), Value::from(false)),
            (String::from("_comment"), Value::from("c")),
            (String::from("baz"), Value::from(true)),
        ]))
    );
}

#[test]
fn to_value_fn_err() {
    let v = Value::from_fn(|_| Value::None);
    assert_eq!(
        to_value(&v).unwrap_err().to_string(),
        "cannot serialize a function value"
    );
}

#[test]
fn to_value_renders() {
    #[derive(Serialize)]
    struct Item {
        title: &'static str,
        tags: Vec<&'static str>,
        note: Option<&'static str>,
    }
    let item = Item {
        title: "a < b",
        tags: vec!["x", "y"],
        note: None,
    };
    let xml = toxml::to_xml(&item, &toxml::Options::default()).unwrap();
    assert_eq!(
        xml,
        "<title>a &lt; b</title><tags>x</tags><tags>y</tags><note/>"
    );
}

#[test]
fn to_value_struct() {
    #[derive(Serialize)]
    struct Test {
        a: String,
        c: String,
    }
    assert_eq!(
        to_value(Test {
            a: "b".into(),
            c: "d".into()
        })
        .unwrap(),
        Value::Map(Map::from([
            (String::from("a"), Value::String(String::from("b"))),
            (String::from("c"), Value::String(String::from("d")))
        ]))
    );
}

#[test]
fn to_value_struct_variant() {
    #[derive(Serialize)]
    enum Test {
        Variant { a: String, c: String },
    }
    assert_eq!(
        to_value(Test::Variant {
            a: "b".into(),
            c: "d".into()
        })
        .unwrap(),
        Value::Map(Map::from([(
            String::from("Variant"),
            Value::Map(Map::from([
                (String::from("a"), Value::String(String::from("b"))),
                (String::from("c"), Value::String(String::from("d")))
            ]))
        )]))
    );
}
