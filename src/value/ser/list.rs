use serde::ser::Serialize;

use crate::value::List;
use crate::{to_value, Error, Result, Value};

#[derive(Default)]
pub struct SerializeList {
    list: List<Value>,
}

impl SerializeList {
    pub fn with_capacity(len: usize) -> Self {
        Self {
            list: List::with_capacity(len),
        }
    }
}

impl serde::ser::SerializeSeq for SerializeList {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.list.push(to_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Self::Ok> {
        Ok(Value::List(self.list))
    }
}

// Tuples and tuple structs are plain lists.
macro_rules! impl_as_seq {
    ($($trait:ident::$method:ident),*) => {
        $(
            impl serde::ser::$trait for SerializeList {
                type Ok = Value;
                type Error = Error;

                fn $method<T>(&mut self, value: &T) -> Result<()>
                where
                    T: ?Sized + Serialize,
                {
                    serde::ser::SerializeSeq::serialize_element(self, value)
                }

                fn end(self) -> Result<Self::Ok> {
                    serde::ser::SerializeSeq::end(self)
                }
            }
        )*
    };
}

impl_as_seq! { SerializeTuple::serialize_element, SerializeTupleStruct::serialize_field }
