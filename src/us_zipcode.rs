//! US ZIP Code lookup records.
//!
//! A lookup resolves a ZIP Code, a city/state pair, or both. The relation
//! is many-to-many: one ZIP may carry several city names and one city may
//! span several ZIPs. A lookup that matches nothing is still a normal
//! response; it decodes to [`LookupOutcome::Failed`].

use serde::{Deserialize, Serialize};

use crate::batch::{Correlate, InputId, QueryParams};
use crate::common::{GeoPrecision, StateCode};
use crate::error::SchemaError;

/// One ZIP Code lookup. Fields are independently optional.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParamsItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State name or abbreviation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
}

impl QueryParamsItem {
    /// Lookup by ZIP Code alone.
    #[must_use]
    pub fn zipcode(zipcode: impl Into<String>) -> Self {
        QueryParamsItem {
            zipcode: Some(zipcode.into()),
            ..Default::default()
        }
    }

    /// Lookup by city and state.
    #[must_use]
    pub fn city_state(city: impl Into<String>, state: impl Into<String>) -> Self {
        QueryParamsItem {
            city: Some(city.into()),
            state: Some(state.into()),
            ..Default::default()
        }
    }

    /// Sets the identifier echoed back in the result.
    #[must_use]
    pub fn with_input_id(mut self, input_id: impl Into<String>) -> Self {
        self.input_id = Some(input_id.into());
        self
    }

    /// Returns true if no field is set. The service answers such a lookup
    /// with [`ResultStatus::Blank`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl InputId for QueryParamsItem {
    fn input_id(&self) -> Option<&str> {
        self.input_id.as_deref()
    }
}

impl From<QueryParamsItem> for QueryParams<QueryParamsItem> {
    fn from(item: QueryParamsItem) -> Self {
        QueryParams::Single(item)
    }
}

/// A city/state pair matching the lookup.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct CityState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_abbreviation: Option<StateCode>,
    /// Full state name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Whether the city name is approved by the USPS for mailing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailable_city: Option<bool>,
}

string_enum! {
    /// Kind of ZIP Code.
    pub enum ZipCodeType("ZIP Code type") {
        /// Regular ZIP Code.
        Standard = "S",
        /// APO/FPO military, including DPO diplomatic addresses.
        Military = "M",
        /// Serves only post-office boxes.
        PoBox = "P",
        /// Belongs primarily to a firm.
        Unique = "U",
    }
}

/// A ZIP Code matching the lookup.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct ZipCode {
    /// 5-digit ZIP Code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode_type: Option<ZipCodeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_fips: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_abbreviation: Option<StateCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Approximate latitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Approximate longitude.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<GeoPrecision>,
}

string_enum! {
    /// Why a lookup matched nothing.
    pub enum ResultStatus("ZIP lookup status") {
        /// Neither a ZIP Code nor a city/state was provided.
        Blank = "blank",
        /// Invalid state name or abbreviation.
        InvalidState = "invalid_state",
        /// Invalid city for the given state.
        InvalidCity = "invalid_city",
        /// Invalid ZIP Code.
        InvalidZipcode = "invalid_zipcode",
        /// Conflicting ZIP Code/city/state information.
        Conflict = "conflict",
    }
}

/// The result of one lookup: either matches or a classified failure.
#[derive(Clone, Debug, PartialEq)]
pub enum LookupOutcome {
    /// The lookup matched. At least one list is non-empty.
    Matched {
        city_states: Vec<CityState>,
        zipcodes: Vec<ZipCode>,
    },
    /// The lookup matched nothing.
    Failed {
        status: ResultStatus,
        /// Human-readable explanation from the service.
        reason: String,
    },
}

/// The result for one lookup.
///
/// On the wire this is the flat upstream object. Decoding requires exactly
/// one of: at least one match, or a `status` with its `reason`.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(try_from = "RawQueryResultItem", into = "RawQueryResultItem")]
pub struct QueryResultItem {
    pub input_index: Option<usize>,
    pub input_id: Option<String>,
    pub outcome: LookupOutcome,
}

impl QueryResultItem {
    /// Matching city/state pairs; empty for a failed lookup.
    #[must_use]
    pub fn city_states(&self) -> &[CityState] {
        match &self.outcome {
            LookupOutcome::Matched { city_states, .. } => city_states,
            LookupOutcome::Failed { .. } => &[],
        }
    }

    /// Matching ZIP Codes; empty for a failed lookup.
    #[must_use]
    pub fn zipcodes(&self) -> &[ZipCode] {
        match &self.outcome {
            LookupOutcome::Matched { zipcodes, .. } => zipcodes,
            LookupOutcome::Failed { .. } => &[],
        }
    }

    /// The failure status, if the lookup failed.
    #[must_use]
    pub fn status(&self) -> Option<ResultStatus> {
        match &self.outcome {
            LookupOutcome::Failed { status, .. } => Some(*status),
            LookupOutcome::Matched { .. } => None,
        }
    }

    /// Returns true if the lookup matched.
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self.outcome, LookupOutcome::Matched { .. })
    }

    /// City names the USPS approves for mail, in response order.
    #[must_use]
    pub fn mailable_cities(&self) -> Vec<&str> {
        self.city_states()
            .iter()
            .filter(|cs| cs.mailable_city == Some(true))
            .filter_map(|cs| cs.city.as_deref())
            .collect()
    }
}

#[derive(Deserialize, Serialize)]
struct RawQueryResultItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_index: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    city_states: Option<Vec<CityState>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    zipcodes: Option<Vec<ZipCode>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    status: Option<ResultStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
}

impl TryFrom<RawQueryResultItem> for QueryResultItem {
    type Error = SchemaError;

    fn try_from(raw: RawQueryResultItem) -> Result<Self, Self::Error> {
        let city_states = raw.city_states.unwrap_or_default();
        let zipcodes = raw.zipcodes.unwrap_or_default();

        let outcome = match (raw.status, raw.reason) {
            (Some(status), Some(reason)) => {
                if !city_states.is_empty() || !zipcodes.is_empty() {
                    return Err(SchemaError::decoding(format!(
                        "ZIP lookup result has status {status} and also carries matches"
                    )));
                }
                LookupOutcome::Failed { status, reason }
            }
            (Some(status), None) => {
                return Err(SchemaError::decoding(format!(
                    "ZIP lookup result has status {status} without a reason"
                )));
            }
            (None, Some(reason)) => {
                return Err(SchemaError::decoding(format!(
                    "ZIP lookup result has reason {reason:?} without a status"
                )));
            }
            (None, None) => {
                if city_states.is_empty() && zipcodes.is_empty() {
                    return Err(SchemaError::decoding(
                        "ZIP lookup result carries neither matches nor a status",
                    ));
                }
                LookupOutcome::Matched {
                    city_states,
                    zipcodes,
                }
            }
        };

        Ok(QueryResultItem {
            input_index: raw.input_index,
            input_id: raw.input_id,
            outcome,
        })
    }
}

impl From<QueryResultItem> for RawQueryResultItem {
    fn from(item: QueryResultItem) -> Self {
        let (city_states, zipcodes, status, reason) = match item.outcome {
            LookupOutcome::Matched {
                city_states,
                zipcodes,
            } => (
                (!city_states.is_empty()).then_some(city_states),
                (!zipcodes.is_empty()).then_some(zipcodes),
                None,
                None,
            ),
            LookupOutcome::Failed { status, reason } => (None, None, Some(status), Some(reason)),
        };
        RawQueryResultItem {
            input_index: item.input_index,
            input_id: item.input_id,
            city_states,
            zipcodes,
            status,
            reason,
        }
    }
}

impl Correlate for QueryResultItem {
    fn input_id(&self) -> Option<&str> {
        self.input_id.as_deref()
    }

    fn input_index(&self) -> Option<usize> {
        self.input_index
    }
}

/// Response body: one item per lookup.
pub type QueryResult = Vec<QueryResultItem>;
