//! Building blocks shared by the v2 and v3 data transfer objects.
//!
//! Every DTO keeps the keys it does not know about in an [`Extras`] map. The map is
//! declared as the first field of each struct: serde emits flattened entries in
//! declaration order, so a declared field written afterwards overwrites an extra
//! entry carrying the same key.

pub mod maybe;
pub mod timestamp;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

pub use maybe::Maybe;
pub use timestamp::Timestamp;

/// Unrecognized keys of a decoded object, re-emitted verbatim on encode.
pub type Extras = serde_json::Map<String, Value>;

/// Conversion between a DTO and a JSON object.
pub trait Dto: Serialize + DeserializeOwned {
    fn additional_properties(&self) -> &Extras;

    fn additional_properties_mut(&mut self) -> &mut Extras;

    fn to_dict(&self) -> serde_json::Result<Extras> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(serde::ser::Error::custom(format!(
                "expected a JSON object, got {other}"
            ))),
        }
    }

    fn from_dict(dict: Extras) -> serde_json::Result<Self> {
        serde_json::from_value(Value::Object(dict))
    }
}

/// Implements [`Dto`] for structs carrying an `additional_properties` field.
macro_rules! impl_dto {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::airflow::model::Dto for $ty {
                fn additional_properties(&self) -> &$crate::airflow::model::Extras {
                    &self.additional_properties
                }

                fn additional_properties_mut(&mut self) -> &mut $crate::airflow::model::Extras {
                    &mut self.additional_properties
                }
            }
        )*
    };
}

pub(crate) use impl_dto;

/// Decodes `raw`, which carries an unknown `x_extra` key, and checks that encoding
/// gives back the same object and that decoding the encoding gives the same value.
#[cfg(test)]
pub(crate) fn assert_round_trip<T: Dto + PartialEq + std::fmt::Debug>(raw: &str) {
    let dict: Extras = serde_json::from_str(raw).unwrap();
    let decoded = T::from_dict(dict.clone()).unwrap();
    assert_eq!(
        decoded.additional_properties().get("x_extra"),
        Some(&Value::from("kept"))
    );
    let encoded = decoded.to_dict().unwrap();
    assert_eq!(encoded, dict);
    assert_eq!(T::from_dict(encoded).unwrap(), decoded);
}
