//! Serde support.
//!
//! A [`Delimiter`] is written as a one character string. A [`Name`] is
//! written in its data form together with its delimiter:
//!
//! ```json
//! { "delimiter": "/", "name": "usr/local/bin" }
//! ```
//!
//! Deserialization goes through the same parser as [`Name::parse`], so a
//! deserialized name always satisfies the masking invariants.

use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::delimiter::Delimiter;
use crate::name::Name;

#[derive(Serialize, Deserialize)]
#[serde(rename = "Name")]
struct NameData {
    delimiter: Delimiter,
    name: String,
}

impl Serialize for Delimiter {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_char(self.as_char())
    }
}

impl<'de> Deserialize<'de> for Delimiter {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ch = char::deserialize(deserializer)?;
        Delimiter::new(ch).map_err(D::Error::custom)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        NameData {
            delimiter: self.delimiter(),
            name: self.as_data_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let data = NameData::deserialize(deserializer)?;
        tracing::trace!("deserialized name data `{}`", data.name);
        Ok(Name::parse(&data.name, data.delimiter))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use crate::delimiter::Delimiter;
    use crate::name::Name;

    #[test]
    fn test_serialize_name() -> crate::Result<()> {
        let name = Name::new(["usr", "local", r"b\/in"], Delimiter::new('/')?)?;
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, r#"{"delimiter":"/","name":"usr/local/b\\/in"}"#);
        Ok(())
    }

    #[rstest]
    #[case(r#"{"delimiter":".","name":"oss.cs.fau.de"}"#, 4)]
    #[case(r#"{"delimiter":"/","name":"///"}"#, 4)]
    #[case(r#"{"delimiter":".","name":"Oh\\.\\.\\."}"#, 1)]
    #[case(r#"{"delimiter":".","name":""}"#, 1)]
    fn test_deserialize_name(#[case] json: &str, #[case] no_components: usize) {
        let name: Name = serde_json::from_str(json).unwrap();
        assert_eq!(name.no_components(), no_components);
    }

    #[rstest]
    #[case(r#"{"delimiter":"\\","name":"a"}"#)]
    #[case(r#"{"delimiter":"..","name":"a"}"#)]
    #[case(r#"{"name":"a"}"#)]
    #[case(r#""a.b""#)]
    fn test_deserialize_invalid(#[case] json: &str) {
        let result = serde_json::from_str::<Name>(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_round_trip() -> crate::Result<()> {
        let name = Name::from_unmasked(["a.b", r"c\d", ""], Delimiter::default());
        let json = serde_json::to_string(&name).unwrap();
        let back: Name = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
        let delimiter: Delimiter = serde_json::from_str(r##""#""##).unwrap();
        assert_eq!(delimiter, '#');
        Ok(())
    }
}
