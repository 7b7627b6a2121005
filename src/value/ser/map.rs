use serde::ser::Error as _;

use crate::value::Map;
use crate::{to_value, Error, Result, Value};

#[derive(Default)]
pub struct SerializeMap {
    map: Map<String, Value>,
    next_key: Option<String>,
}

impl SerializeMap {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            map: Map::with_capacity(len),
            next_key: None,
        }
    }
}

impl serde::ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: ?Sized>(&mut self, key: &T) -> Result<()>
    where
        T: serde::Serialize,
    {
        self.next_key = Some(key_to_string(key)?);
        Ok(())
    }

    fn serialize_value<T: ?Sized>(&mut self, value: &T) -> Result<()>
    where
        T: serde::Serialize,
    {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::custom("map value serialized before its key"))?;
        self.map.insert(key, to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::Map(self.map))
    }
}

impl serde::ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: serde::Serialize,
    {
        serde::ser::SerializeMap::serialize_entry(self, key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        serde::ser::SerializeMap::end(self)
    }
}

/// Convert a serialized map key into a string.
///
/// Anything that serializes to a string, an integer or a unit variant is
/// accepted.
fn key_to_string<T>(key: &T) -> Result<String>
where
    T: ?Sized + serde::Serialize,
{
    match to_value(key)? {
        Value::String(s) => Ok(s),
        Value::Integer(n) => Ok(n.to_string()),
        _ => Err(Error::custom("map key must be a string")),
    }
}
