//! Serde representation for `f64` fields that keeps IEEE special values
//!
//! JSON has no infinity or NaN, and `serde_json` writes them as `null`,
//! which would read back as an absent accumulator. Finite values stay
//! numbers; non-finite values are written as `"inf"`, `"-inf"` or `"NaN"`.
//!
//! Use with `#[serde(with = "float_repr")]` on `f64` fields and
//! `#[serde(with = "float_repr::option")]` on `Option<f64>` fields.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serializer};

const INFINITY: &str = "inf";
const NEG_INFINITY: &str = "-inf";
const NAN: &str = "NaN";

#[derive(Deserialize)]
#[serde(untagged)]
enum Repr {
    Number(f64),
    Text(String),
}

impl Repr {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            Self::Number(value) => Ok(value),
            Self::Text(text) => match text.as_str() {
                INFINITY => Ok(f64::INFINITY),
                NEG_INFINITY => Ok(f64::NEG_INFINITY),
                NAN => Ok(f64::NAN),
                other => Err(E::invalid_value(
                    de::Unexpected::Str(other),
                    &"a number, \"inf\", \"-inf\" or \"NaN\"",
                )),
            },
        }
    }
}

/// Serializes a float, spelling non-finite values as strings
pub fn serialize<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_str(NAN)
    } else if value.is_infinite() {
        let text = if value.is_sign_positive() {
            INFINITY
        } else {
            NEG_INFINITY
        };
        serializer.serialize_str(text)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Deserializes a number or one of the special-value strings
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Repr::deserialize(deserializer)?.into_f64()
}

/// The same representation for optional floats; `None` stays `null`
pub mod option {
    use super::Repr;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serializes `Some` like a plain float and `None` as a unit
    pub fn serialize<S: Serializer>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes `null` as `None`, anything else like a plain float
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<f64>, D::Error> {
        Option::<Repr>::deserialize(deserializer)?
            .map(Repr::into_f64::<D::Error>)
            .transpose()
    }
}
