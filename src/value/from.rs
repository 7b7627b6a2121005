use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::value::{Map, Thunk};
use crate::Value;

/// Scalar conversions, each written as `Type => |binding| variant`.
macro_rules! impl_from_scalar {
    ($($ty:ty => |$x:pat_param| $e:expr;)+) => {
        $(
            impl From<$ty> for Value {
                fn from($x: $ty) -> Self {
                    $e
                }
            }
        )+
    };
}

impl_from_scalar! {
    () => |_| Self::None;
    bool => |b| Self::Bool(b);
    u8 => |n| Self::Integer(n.into());
    u16 => |n| Self::Integer(n.into());
    u32 => |n| Self::Integer(n.into());
    i8 => |n| Self::Integer(n.into());
    i16 => |n| Self::Integer(n.into());
    i32 => |n| Self::Integer(n.into());
    i64 => |n| Self::Integer(n);
    f32 => |n| Self::Float(n.into());
    f64 => |n| Self::Float(n);
    char => |c| Self::String(c.into());
    String => |s| Self::String(s);
    Thunk => |thunk| Self::Fn(thunk);
}

impl<'a> From<&'a str> for Value {
    fn from(s: &'a str) -> Self {
        Self::String(s.to_owned())
    }
}

impl<'a> From<Cow<'a, str>> for Value {
    fn from(s: Cow<'a, str>) -> Self {
        Self::String(s.into_owned())
    }
}

impl<V> From<Vec<V>> for Value
where
    V: Into<Value>,
{
    fn from(list: Vec<V>) -> Self {
        list.into_iter().collect()
    }
}

impl<V, const N: usize> From<[V; N]> for Value
where
    V: Into<Value>,
{
    fn from(list: [V; N]) -> Self {
        list.into_iter().collect()
    }
}

macro_rules! impl_from_map {
    ($($map:ident)+) => {
        $(
            impl<K, V> From<$map<K, V>> for Value
            where
                K: Into<String>,
                V: Into<Value>,
            {
                fn from(map: $map<K, V>) -> Self {
                    Self::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
                }
            }
        )+
    };
}

impl_from_map! { Map BTreeMap HashMap }

impl<K, V, const N: usize> From<[(K, V); N]> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: [(K, V); N]) -> Self {
        Self::Map(map.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// `None` is an absent value, not the explicit null.
impl<V> From<Option<V>> for Value
where
    V: Into<Value>,
{
    fn from(opt: Option<V>) -> Self {
        match opt {
            None => Self::Missing,
            Some(value) => value.into(),
        }
    }
}

impl<V> FromIterator<V> for Value
where
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Self::List(iter.into_iter().map(Into::into).collect())
    }
}

impl<K, V> FromIterator<(K, V)> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
