use serde::{Deserialize, Deserializer, Serialize};

/// A JSON value that should be a number but may arrive as text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LooseNumber {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl Default for LooseNumber {
    fn default() -> Self {
        LooseNumber::Other(serde_json::Value::Null)
    }
}

impl LooseNumber {
    /// Numeric coercion: numbers pass through, numeric strings parse,
    /// everything else (including NaN and infinities) is rejected.
    pub fn as_finite(&self) -> Option<f64> {
        let value = match self {
            LooseNumber::Number(n) => *n,
            LooseNumber::Text(s) => s.trim().parse().ok()?,
            LooseNumber::Other(_) => return None,
        };
        value.is_finite().then_some(value)
    }

    /// Whole non-negative count, as used for duration components.
    /// Fractions are truncated; anything unusable counts as zero.
    pub fn as_count(&self) -> u32 {
        match self.as_finite() {
            Some(n) if n > 0.0 => n.min(u32::MAX as f64) as u32,
            _ => 0,
        }
    }
}

impl From<f64> for LooseNumber {
    fn from(value: f64) -> Self {
        LooseNumber::Number(value)
    }
}

impl From<&str> for LooseNumber {
    fn from(value: &str) -> Self {
        LooseNumber::Text(value.to_owned())
    }
}

/// One route vertex as sent by a collaborator
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WirePoint {
    #[serde(default)]
    pub latitude: LooseNumber,
    #[serde(default)]
    pub longitude: LooseNumber,
}

impl WirePoint {
    pub fn new(latitude: impl Into<LooseNumber>, longitude: impl Into<LooseNumber>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LooseNumber::deserialize(deserializer)?.as_count())
}

/// Optional measurement; absent, null or unusable values all become `None`
pub(crate) fn finite<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(LooseNumber::deserialize(deserializer)?.as_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coercion() {
        let parse = |json: &str| serde_json::from_str::<LooseNumber>(json).unwrap().as_finite();

        assert_eq!(parse("33.88"), Some(33.88));
        assert_eq!(parse("-117"), Some(-117.0));
        assert_eq!(parse(r#"" 33.88 ""#), Some(33.88));
        assert_eq!(parse(r#""NaN""#), None);
        assert_eq!(parse(r#""inf""#), None);
        assert_eq!(parse(r#""north""#), None);
        assert_eq!(parse(r#""""#), None);
        assert_eq!(parse("null"), None);
        assert_eq!(parse("true"), None);
        assert_eq!(parse("[1]"), None);
    }

    #[test]
    fn test_counts() {
        let count = |json: &str| serde_json::from_str::<LooseNumber>(json).unwrap().as_count();

        assert_eq!(count("12"), 12);
        assert_eq!(count(r#""7""#), 7);
        assert_eq!(count("4.9"), 4);
        assert_eq!(count("-3"), 0);
        assert_eq!(count("null"), 0);
    }

    #[test]
    fn test_wire_point_missing_fields() {
        let point: WirePoint = serde_json::from_str(r#"{"latitude": 1.5}"#).unwrap();
        assert_eq!(point.latitude.as_finite(), Some(1.5));
        assert_eq!(point.longitude.as_finite(), None);
    }
}
