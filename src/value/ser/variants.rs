use serde::ser::{Serialize, SerializeMap as _, SerializeSeq as _};

use crate::value::ser::list::SerializeList;
use crate::value::ser::map::SerializeMap;
use crate::value::{Map, Value};
use crate::{Error, Result};

/// Collects the fields of an enum variant, wrapping the result in a single
/// entry map keyed by the variant name.
pub struct SerializeVariant<S> {
    name: &'static str,
    fields: S,
}

impl<S> SerializeVariant<S> {
    pub fn new(name: &'static str, fields: S) -> Self {
        Self { name, fields }
    }

    fn wrap(name: &'static str, value: Value) -> Value {
        let mut map = Map::with_capacity(1);
        map.insert(String::from(name), value);
        Value::Map(map)
    }
}

impl serde::ser::SerializeTupleVariant for SerializeVariant<SerializeList> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.fields.serialize_element(value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Self::wrap(self.name, self.fields.end()?))
    }
}

impl serde::ser::SerializeStructVariant for SerializeVariant<SerializeMap> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.fields.serialize_entry(key, value)
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Self::wrap(self.name, self.fields.end()?))
    }
}
