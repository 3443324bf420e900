//! Lenient field decoders. The results service is not consistent about
//! quoting numbers, so standings accept either form.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    Text(String),
    Null(()),
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match NumberOrString::deserialize(deserializer)? {
        NumberOrString::Number(n) => Ok(n),
        NumberOrString::Text(s) if s.trim().is_empty() => Ok(0.0),
        NumberOrString::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("expected a number, got '{}'", s))),
        NumberOrString::Null(()) => Ok(0.0),
    }
}

pub fn lenient_u32<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = lenient_f64(deserializer)?;
    if value < 0.0 || value.fract() != 0.0 || value > u32::MAX as f64 {
        return Err(serde::de::Error::custom(format!(
            "expected a non-negative integer, got {}",
            value
        )));
    }
    Ok(value as u32)
}

/// A number that prints exactly as the service sent it.
///
/// `"9.1000"` stays `9.1000` in the report; JSON numbers print in their
/// shortest form (`100`, `91.2`). `value()` is there for arithmetic and
/// fixed-precision tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedNumber {
    value: f64,
    text: String,
}

impl ReportedNumber {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            text: value.to_string(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for ReportedNumber {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Display for ReportedNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl<'de> Deserialize<'de> for ReportedNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match NumberOrString::deserialize(deserializer)? {
            NumberOrString::Number(n) => Ok(Self::new(n)),
            NumberOrString::Text(s) if s.trim().is_empty() => Ok(Self::default()),
            NumberOrString::Text(s) => {
                let text = s.trim().to_string();
                let value = text.parse().map_err(|_| {
                    serde::de::Error::custom(format!("expected a number, got '{}'", s))
                })?;
                Ok(Self { value, text })
            }
            NumberOrString::Null(()) => Ok(Self::default()),
        }
    }
}

/// Reports carry the parsed value; the upstream spelling is a display concern.
impl Serialize for ReportedNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Sample {
        #[serde(deserialize_with = "lenient_f64")]
        value: f64,
        #[serde(deserialize_with = "lenient_u32")]
        place: u32,
    }

    #[test]
    fn accepts_numbers_and_numeric_strings() {
        let p: Sample = serde_json::from_str(r#"{"value": "91.25", "place": 3}"#).unwrap();
        assert_eq!(p.value, 91.25);
        assert_eq!(p.place, 3);

        let p: Sample = serde_json::from_str(r#"{"value": 7.5, "place": "12"}"#).unwrap();
        assert_eq!(p.value, 7.5);
        assert_eq!(p.place, 12);
    }

    #[test]
    fn null_and_blank_are_zero() {
        let p: Sample = serde_json::from_str(r#"{"value": null, "place": ""}"#).unwrap();
        assert_eq!(p.value, 0.0);
        assert_eq!(p.place, 0);
    }

    #[test]
    fn rejects_garbage() {
        assert!(serde_json::from_str::<Sample>(r#"{"value": "fast", "place": 1}"#).is_err());
        assert!(serde_json::from_str::<Sample>(r#"{"value": 1, "place": 1.5}"#).is_err());
    }

    #[test]
    fn reported_number_keeps_upstream_spelling() {
        let n: ReportedNumber = serde_json::from_str(r#""9.1000""#).unwrap();
        assert_eq!(n.to_string(), "9.1000");
        assert_eq!(n.value(), 9.1);

        let n: ReportedNumber = serde_json::from_str("91.2").unwrap();
        assert_eq!(n.as_str(), "91.2");

        let n: ReportedNumber = serde_json::from_str("100").unwrap();
        assert_eq!(n.as_str(), "100");

        let n: ReportedNumber = serde_json::from_str("null").unwrap();
        assert_eq!(n.as_str(), "0");
        assert!(serde_json::from_str::<ReportedNumber>(r#""slow""#).is_err());
    }
}
