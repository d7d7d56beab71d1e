use serde::de::{value::StringDeserializer, IntoDeserializer};
use serde::{Deserialize, Deserializer};

/// Reads an optional query value where an empty string (an untouched
/// drop-down) means "not supplied".
pub fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => {
            let value: StringDeserializer<D::Error> = value.to_string().into_deserializer();
            T::deserialize(value).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::filter::ExperienceBucket;

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "empty_as_none")]
        experience: Option<ExperienceBucket>,
    }

    fn parse(raw: &str) -> serde_json::Result<Params> {
        serde_json::from_str(raw)
    }

    #[test]
    fn empty_and_missing_values_are_unset() {
        assert_eq!(parse(r#"{"experience": ""}"#).unwrap().experience, None);
        assert_eq!(parse(r#"{"experience": "  "}"#).unwrap().experience, None);
        assert_eq!(parse("{}").unwrap().experience, None);
    }

    #[test]
    fn known_values_still_parse() {
        assert_eq!(
            parse(r#"{"experience": "between1And3"}"#).unwrap().experience,
            Some(ExperienceBucket::Between1And3)
        );
        assert!(parse(r#"{"experience": "forever"}"#).is_err());
    }
}
