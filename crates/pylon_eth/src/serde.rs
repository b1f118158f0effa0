//! Helper utilities for shaping RPC parameter lists with serde.

use serde::{de::DeserializeOwned, ser::SerializeSeq, Deserialize, Deserializer, Serialize,
            Serializer};

/// For use with serde's `serialize_with` on an optional single value that the
/// wire expects as a parameter sequence. `None` serializes as `[]`.
pub fn optional_single_to_sequence<S, T>(val: &Option<T>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    let mut seq = s.serialize_seq(Some(1))?;
    if val.is_some() {
        seq.serialize_element(val)?;
    }
    seq.end()
}

/// For use with serde's `deserialize_with` on a parameter sequence holding at
/// most one value.
pub fn sequence_to_optional_single<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let mut values: Vec<T> = Deserialize::deserialize(deserializer)?;
    if values.is_empty() {
        Ok(None)
    } else {
        Ok(Some(values.swap_remove(0)))
    }
}

/// Helper module for (de)serializing `()` from/to an empty parameter list.
pub mod empty_params {
    use super::{Deserialize, Deserializer, Serialize, SerializeSeq, Serializer};

    /// Deserializes `[]` (or an absent `params`) into `()`.
    pub fn deserialize<'de, D>(d: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        let seq = Option::<Vec<()>>::deserialize(d)?.unwrap_or_default();
        if !seq.is_empty() {
            return Err(serde::de::Error::custom(format!(
                "expected params sequence with length 0 but got {}",
                seq.len()
            )));
        }
        Ok(())
    }

    /// Serializes `()` into `[]`.
    pub fn serialize<S, T>(_val: &T, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        let seq = s.serialize_seq(Some(0))?;
        seq.end()
    }
}

/// Helper module for (de)serializing a single value from/to a one-element
/// parameter list.
pub mod sequence {
    use super::{Deserialize, DeserializeOwned, Deserializer, Serialize, SerializeSeq, Serializer};

    /// Deserializes a single value out of a one-element sequence.
    pub fn deserialize<'de, T, D>(d: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let mut seq = Vec::<T>::deserialize(d)?;
        if seq.len() != 1 {
            return Err(serde::de::Error::custom(format!(
                "expected params sequence with length 1 but got {}",
                seq.len()
            )));
        }
        Ok(seq.remove(0))
    }

    /// Serializes a single value into a one-element sequence.
    pub fn serialize<S, T>(val: &T, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: Serialize,
    {
        let mut seq = s.serialize_seq(Some(1))?;
        seq.serialize_element(val)?;
        seq.end()
    }
}

#[cfg(test)]
mod tests {
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(tag = "method", content = "params")]
    enum Method {
        #[serde(rename = "test_noArgs", with = "super::empty_params")]
        NoArgs(()),
        #[serde(rename = "test_oneArg", with = "super::sequence")]
        OneArg(u64),
        #[serde(
            rename = "test_optionalArg",
            serialize_with = "super::optional_single_to_sequence"
        )]
        OptionalArg(Option<u64>),
    }

    #[test]
    fn params_shaping() -> anyhow::Result<()> {
        assert_eq!(
            serde_json::to_string(&Method::NoArgs(()))?,
            r#"{"method":"test_noArgs","params":[]}"#
        );
        assert_eq!(
            serde_json::to_string(&Method::OneArg(7))?,
            r#"{"method":"test_oneArg","params":[7]}"#
        );
        assert_eq!(
            serde_json::to_string(&Method::OptionalArg(None))?,
            r#"{"method":"test_optionalArg","params":[]}"#
        );
        assert_eq!(
            serde_json::to_string(&Method::OptionalArg(Some(3)))?,
            r#"{"method":"test_optionalArg","params":[3]}"#
        );

        Ok(())
    }
}
