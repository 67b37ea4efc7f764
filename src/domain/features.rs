use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::InputError;

/// Name of the regression target column in the training dataset
pub const TARGET_COLUMN: &str = "Sales";

/// Advertising channel used as a model input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "TV")]
    Tv,
    Radio,
    Newspaper,
}

impl Feature {
    /// Every feature, in model input order
    pub const ALL: [Feature; 3] = [Feature::Tv, Feature::Radio, Feature::Newspaper];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feature::Tv => "TV",
            Feature::Radio => "Radio",
            Feature::Newspaper => "Newspaper",
        }
    }

    /// Column names in model input order
    pub fn names() -> Vec<String> {
        Self::ALL.iter().map(|f| f.as_str().to_string()).collect()
    }
}

impl std::fmt::Display for Feature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Advertising budget for one prediction, in the dataset's spend units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdSpend {
    #[serde(rename = "TV")]
    pub tv: f64,
    #[serde(rename = "Radio")]
    pub radio: f64,
    #[serde(rename = "Newspaper")]
    pub newspaper: f64,
}

impl AdSpend {
    pub fn new(tv: f64, radio: f64, newspaper: f64) -> Self {
        Self {
            tv,
            radio,
            newspaper,
        }
    }

    pub fn get(&self, feature: Feature) -> f64 {
        match feature {
            Feature::Tv => self.tv,
            Feature::Radio => self.radio,
            Feature::Newspaper => self.newspaper,
        }
    }

    /// Feature vector in fixed `[TV, Radio, Newspaper]` order
    pub fn to_features(&self) -> [f64; 3] {
        [self.tv, self.radio, self.newspaper]
    }

    /// Build from raw text fields, as submitted by an HTML form.
    pub fn from_text_fields(
        tv: Option<&str>,
        radio: Option<&str>,
        newspaper: Option<&str>,
    ) -> Result<Self, InputError> {
        Ok(Self {
            tv: parse_number(Feature::Tv, tv)?,
            radio: parse_number(Feature::Radio, radio)?,
            newspaper: parse_number(Feature::Newspaper, newspaper)?,
        })
    }

    /// Build from a JSON object keyed by the case-sensitive feature names.
    ///
    /// Numbers are taken as-is and numeric strings are coerced; anything else
    /// is rejected.
    pub fn from_json(body: &Value) -> Result<Self, InputError> {
        let obj = body.as_object().ok_or(InputError::NotAnObject)?;
        let field = |feature: Feature| coerce_json(feature, obj.get(feature.as_str()));
        Ok(Self {
            tv: field(Feature::Tv)?,
            radio: field(Feature::Radio)?,
            newspaper: field(Feature::Newspaper)?,
        })
    }
}

fn parse_number(feature: Feature, raw: Option<&str>) -> Result<f64, InputError> {
    let raw = raw
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(InputError::Missing(feature.as_str()))?;
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::NotNumeric {
            field: feature.as_str(),
            value: format!("{raw:?}"),
        }),
    }
}

fn coerce_json(feature: Feature, value: Option<&Value>) -> Result<f64, InputError> {
    match value {
        None | Some(Value::Null) => Err(InputError::Missing(feature.as_str())),
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| InputError::NotNumeric {
                field: feature.as_str(),
                value: n.to_string(),
            }),
        Some(Value::String(s)) => parse_number(feature, Some(s)),
        Some(other) => Err(InputError::NotNumeric {
            field: feature.as_str(),
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn feature_order_is_fixed() {
        assert_eq!(Feature::names(), vec!["TV", "Radio", "Newspaper"]);
        let spend = AdSpend::new(1.0, 2.0, 3.0);
        assert_eq!(spend.to_features(), [1.0, 2.0, 3.0]);
        assert_eq!(spend.get(Feature::Newspaper), 3.0);
    }

    #[test]
    fn json_accepts_numbers_and_numeric_strings() {
        let spend =
            AdSpend::from_json(&json!({"TV": 230.1, "Radio": "37.8", "Newspaper": 69})).unwrap();
        assert_eq!(spend, AdSpend::new(230.1, 37.8, 69.0));
    }

    #[test]
    fn json_rejects_non_numeric() {
        let err = AdSpend::from_json(&json!({"TV": "abc", "Radio": 1, "Newspaper": 2})).unwrap_err();
        assert_eq!(
            err,
            InputError::NotNumeric {
                field: "TV",
                value: "\"abc\"".to_string()
            }
        );

        let err = AdSpend::from_json(&json!({"TV": [1], "Radio": 1, "Newspaper": 2})).unwrap_err();
        assert!(matches!(err, InputError::NotNumeric { field: "TV", .. }));
    }

    #[test]
    fn json_field_names_are_case_sensitive() {
        let err = AdSpend::from_json(&json!({"tv": 1, "Radio": 1, "Newspaper": 2})).unwrap_err();
        assert_eq!(err, InputError::Missing("TV"));
    }

    #[test]
    fn json_requires_object() {
        assert_eq!(
            AdSpend::from_json(&json!([1, 2, 3])).unwrap_err(),
            InputError::NotAnObject
        );
    }

    #[test]
    fn text_fields_reject_blank_and_non_finite() {
        assert_eq!(
            AdSpend::from_text_fields(Some("1"), Some("  "), Some("2")).unwrap_err(),
            InputError::Missing("Radio")
        );
        assert!(matches!(
            AdSpend::from_text_fields(Some("NaN"), Some("1"), Some("2")),
            Err(InputError::NotNumeric { field: "TV", .. })
        ));
        assert_eq!(
            AdSpend::from_text_fields(Some(" 10.5 "), Some("0"), Some("0")).unwrap(),
            AdSpend::new(10.5, 0.0, 0.0)
        );
    }
}
