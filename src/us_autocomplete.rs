//! US address autocomplete records.
//!
//! Unlike the verification endpoints, one request yields one ranked list of
//! [`Suggestion`]s rather than one result per input.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Longest accepted `prefix`, in bytes.
pub const MAX_PREFIX_BYTES: usize = 128;

/// Largest accepted value for [`QueryParams::suggestions`].
pub const MAX_SUGGESTIONS: u8 = 10;

string_enum! {
    /// Scope of IP-based geolocation preference.
    pub enum GeolocatePrecision("geolocate precision") {
        /// Prefer results from the sender's city and state.
        City = "city",
        /// Prefer results from the sender's whole state.
        State = "state",
    }
}

/// An autocomplete request.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct QueryParams {
    /// The part of the address typed so far. Required.
    pub prefix: String,
    /// Maximum number of suggestions, 1-10. The service defaults to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<u8>,
    /// Comma-separated city names to limit results to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_filter: Option<String>,
    /// Comma-separated 2-letter state abbreviations to limit results to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_filter: Option<String>,
    /// Cities/states to prefer at the top of the results.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer: Option<String>,
    /// Share of suggestions that should come from preferred places, 0-1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefer_ratio: Option<f64>,
    /// Prefer suggestions near the caller's IP address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolocate: Option<bool>,
    /// Only meaningful when `geolocate` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geolocate_precision: Option<GeolocatePrecision>,
}

// None when every item is blank
fn join_list<I, S>(items: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let joined = items
        .into_iter()
        .map(|s| s.as_ref().trim().to_owned())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(",");
    (!joined.is_empty()).then_some(joined)
}

impl QueryParams {
    /// Creates a request for `prefix` with every option unset.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        QueryParams {
            prefix: prefix.into(),
            suggestions: None,
            city_filter: None,
            state_filter: None,
            prefer: None,
            prefer_ratio: None,
            geolocate: None,
            geolocate_precision: None,
        }
    }

    /// Caps the number of suggestions returned.
    #[must_use]
    pub fn with_suggestions(mut self, suggestions: u8) -> Self {
        self.suggestions = Some(suggestions);
        self
    }

    /// Limits results to the given cities.
    #[must_use]
    pub fn with_city_filter<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.city_filter = join_list(cities);
        self
    }

    /// Limits results to the given states.
    #[must_use]
    pub fn with_state_filter<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.state_filter = join_list(states);
        self
    }

    /// Prefers the given cities/states, taking `ratio` of the suggestions
    /// from them.
    #[must_use]
    pub fn with_prefer<I, S>(mut self, places: I, ratio: f64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.prefer = join_list(places);
        self.prefer_ratio = Some(ratio);
        self
    }

    /// Prefers suggestions near the caller's IP address, at `precision`.
    #[must_use]
    pub fn with_geolocate(mut self, precision: GeolocatePrecision) -> Self {
        self.geolocate = Some(true);
        self.geolocate_precision = Some(precision);
        self
    }

    /// `prefer_ratio` clamped into `[0, 1]`, the way the service adjusts
    /// out-of-range input. `None` for a NaN ratio.
    #[must_use]
    pub fn clamped_prefer_ratio(&self) -> Option<f64> {
        self.prefer_ratio
            .filter(|r| !r.is_nan())
            .map(|r| r.clamp(0.0, 1.0))
    }

    /// Checks the bounds documented by the service.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.prefix.trim().is_empty() {
            return Err(SchemaError::invalid_input("prefix must not be blank"));
        }
        if self.prefix.len() > MAX_PREFIX_BYTES {
            return Err(SchemaError::invalid_input(format!(
                "prefix is {} bytes, maximum is {MAX_PREFIX_BYTES}",
                self.prefix.len()
            )));
        }
        if let Some(n) = self.suggestions {
            if n == 0 || n > MAX_SUGGESTIONS {
                return Err(SchemaError::invalid_input(format!(
                    "suggestions must be between 1 and {MAX_SUGGESTIONS}, got {n}"
                )));
            }
        }
        if let Some(ratio) = self.prefer_ratio {
            if !ratio.is_finite() {
                return Err(SchemaError::invalid_input(format!(
                    "prefer_ratio must be a finite number, got {ratio}"
                )));
            }
            if !(0.0..=1.0).contains(&ratio) {
                // the service adjusts rather than rejects
                debug!("prefer_ratio {} will be clamped upstream", ratio);
            }
        }
        Ok(())
    }
}

/// One autocomplete suggestion.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Suggestion {
    /// The full suggestion text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Response body: suggestions ordered by rank, best first.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryResult {
    /// A `null` suggestion list (returned when nothing matches) decodes as
    /// empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub suggestions: Vec<Suggestion>,
}

impl QueryResult {
    /// The highest-ranked suggestion, if any.
    #[must_use]
    pub fn best(&self) -> Option<&Suggestion> {
        self.suggestions.first()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Suggestion>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Suggestion>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serialization() {
        let params = QueryParams::new("4770 Lincoln")
            .with_suggestions(5)
            .with_city_filter(["Chicago", " Springfield "])
            .with_state_filter(["IL", ""])
            .with_geolocate(GeolocatePrecision::City);
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({
                "prefix": "4770 Lincoln",
                "suggestions": 5,
                "city_filter": "Chicago,Springfield",
                "state_filter": "IL",
                "geolocate": true,
                "geolocate_precision": "city"
            })
        );
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_prefix_is_required_on_decode() {
        assert!(serde_json::from_value::<QueryParams>(json!({"suggestions": 3})).is_err());
    }

    #[test]
    fn test_validate_bounds() {
        assert!(QueryParams::new("  ").validate().is_err());
        assert!(QueryParams::new("a".repeat(MAX_PREFIX_BYTES)).validate().is_ok());
        assert!(QueryParams::new("a".repeat(MAX_PREFIX_BYTES + 1)).validate().is_err());
        assert!(QueryParams::new("1 Main").with_suggestions(0).validate().is_err());
        assert!(QueryParams::new("1 Main").with_suggestions(11).validate().is_err());
    }

    #[test]
    fn test_prefer_ratio_clamped() {
        let params = QueryParams::new("1 Main").with_prefer(["Denver,CO"], 1.7);
        assert!(params.validate().is_ok());
        assert_eq!(params.clamped_prefer_ratio(), Some(1.0));
        assert_eq!(QueryParams::new("x").clamped_prefer_ratio(), None);
    }

    #[test]
    fn test_non_finite_prefer_ratio_rejected() {
        for ratio in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let params = QueryParams::new("1 Main").with_prefer(["Denver"], ratio);
            assert!(
                matches!(params.validate(), Err(SchemaError::InvalidInput { .. })),
                "accepted {ratio}"
            );
        }
        let nan = QueryParams::new("1 Main").with_prefer(["Denver"], f64::NAN);
        assert_eq!(nan.clamped_prefer_ratio(), None);
    }

    #[test]
    fn test_blank_filters_stay_absent() {
        let params = QueryParams::new("1 Main")
            .with_city_filter(["", "  "])
            .with_state_filter(Vec::<String>::new())
            .with_prefer([" "], 0.5);
        assert!(params.city_filter.is_none());
        assert!(params.state_filter.is_none());
        assert!(params.prefer.is_none());
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"prefix": "1 Main", "prefer_ratio": 0.5})
        );
    }

    #[test]
    fn test_result_preserves_rank() {
        let result: QueryResult = serde_json::from_value(json!({
            "suggestions": [
                {"text": "4770 Lincoln Ave Chicago IL", "street_line": "4770 Lincoln Ave", "city": "Chicago", "state": "IL"},
                {"text": "4770 Lincoln Hwy Matteson IL"}
            ]
        }))
        .unwrap();
        assert_eq!(result.suggestions.len(), 2);
        assert_eq!(result.best().unwrap().city.as_deref(), Some("Chicago"));
        assert_eq!(result.suggestions[1].city, None);

        let none: QueryResult = serde_json::from_str(r#"{"suggestions": null}"#).unwrap();
        assert!(none.best().is_none());
    }
}
