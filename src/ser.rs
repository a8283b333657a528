//! Conversion of `Serialize` values into key text.
//!
//! [`KeySerializer`] turns scalar values into the string a keypath stores:
//!
//! - **Strings and chars**: used as-is
//! - **Integers**: decimal digits, so `0_usize` becomes the index key `0`
//! - **Unit enum variants**: the variant name (after any `#[serde(rename)]`)
//! - **Newtype structs and `Some`**: the wrapped value
//!
//! Floats, booleans, `None`, bytes and every compound type are rejected with
//! [`Error::UnsupportedKey`].
//!
//! ```rust
//! use keypath_fmt::to_key;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! #[serde(rename_all = "kebab-case")]
//! enum Section { UserSettings }
//!
//! assert_eq!(to_key(&3_u32).unwrap(), "3");
//! assert_eq!(to_key(&Section::UserSettings).unwrap(), "user-settings");
//! ```

use crate::{Error, Result};
use log::trace;
use serde::ser::{self, Impossible, Serialize};

/// Serializer producing a single key string.
pub struct KeySerializer;

impl KeySerializer {
    fn reject(kind: &str) -> Error {
        trace!("Rejected {} as keypath key", kind);
        Error::unsupported_key(kind)
    }
}

impl ser::Serializer for KeySerializer {
    type Ok = String;
    type Error = Error;

    type SerializeSeq = Impossible<String, Error>;
    type SerializeTuple = Impossible<String, Error>;
    type SerializeTupleStruct = Impossible<String, Error>;
    type SerializeTupleVariant = Impossible<String, Error>;
    type SerializeMap = Impossible<String, Error>;
    type SerializeStruct = Impossible<String, Error>;
    type SerializeStructVariant = Impossible<String, Error>;

    fn serialize_bool(self, _v: bool) -> Result<String> {
        Err(Self::reject("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i16(self, v: i16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i32(self, v: i32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i64(self, v: i64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_i128(self, v: i128) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u8(self, v: u8) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u16(self, v: u16) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u32(self, v: u32) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u64(self, v: u64) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_u128(self, v: u128) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_f32(self, _v: f32) -> Result<String> {
        Err(Self::reject("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<String> {
        Err(Self::reject("f64"))
    }

    fn serialize_char(self, v: char) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_str(self, v: &str) -> Result<String> {
        Ok(v.to_string())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<String> {
        Err(Self::reject("bytes"))
    }

    fn serialize_none(self) -> Result<String> {
        Err(Self::reject("none"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<String> {
        Err(Self::reject("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<String> {
        Err(Self::reject(name))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<String> {
        Ok(variant.to_string())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _value: &T,
    ) -> Result<String>
    where
        T: ?Sized + Serialize,
    {
        Err(Self::reject(variant))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq> {
        Err(Self::reject("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple> {
        Err(Self::reject("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Err(Self::reject(name))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Self::reject(variant))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Err(Self::reject("map"))
    }

    fn serialize_struct(self, name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Err(Self::reject(name))
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Self::reject(variant))
    }
}
