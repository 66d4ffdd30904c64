//! US street address verification records.
//!
//! A lookup is a [`QueryParamsItem`]; the endpoint accepts one or many of
//! them (see [`crate::Batch`]). Each input may produce zero, one or several
//! [`QueryResultItem`] candidates, tied back to the input through
//! `input_index` and `candidate_index`.
//!
//! # Example
//!
//! ```
//! use addrverify::{decode_response, StateCode, us_street};
//!
//! # fn main() -> Result<(), addrverify::SchemaError> {
//! let body = r#"[{
//!     "input_index": 0,
//!     "candidate_index": 0,
//!     "delivery_line_1": "1600 Pennsylvania Ave NW",
//!     "components": {"state_abbreviation": "DC", "zipcode": "20500"},
//!     "metadata": {"zip_type": "Unique", "precision": "Zip9"}
//! }]"#;
//! let result: us_street::QueryResult = decode_response(body)?;
//! let components = result[0].components.as_ref().unwrap();
//! assert_eq!(components.state_abbreviation, Some(StateCode::DC));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::batch::{Correlate, InputId, QueryParams};
use crate::common::{GeoPrecision, StateCode};
use crate::error::SchemaError;

/// Largest value accepted for [`QueryParamsItem::candidates`].
pub const MAX_CANDIDATES: u8 = 10;

string_enum! {
    /// Output strategy for a lookup.
    pub enum MatchStrategy("match strategy") {
        /// Only valid USPS addresses are returned.
        Strict = "strict",
        /// Also returns invalid addresses whose primary number falls in a
        /// valid range for the street.
        Range = "range",
        /// Always returns a single candidate per submitted address, even if
        /// invalid or ambiguous.
        Invalid = "invalid",
    }
}

impl Default for MatchStrategy {
    fn default() -> Self {
        MatchStrategy::Strict
    }
}

/// One US street address lookup.
///
/// Every field is optional. Either give the address as a single `street`
/// line ("freeform") or split it across the structured fields.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParamsItem {
    /// Caller-supplied identifier copied into every result for this input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,
    /// The street line, or the entire address for freeform input. Must not
    /// include country information.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Extra address information (e.g., "Leave it on the front porch.").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    /// Apartment, suite or office number (e.g., "Apt 52" or "52").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// City name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State name or abbreviation. Free text on input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// ZIP Code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    /// City, state and ZIP Code combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastline: Option<String>,
    /// Recipient, firm or company at this address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addressee: Option<String>,
    /// Only used with Puerto Rico.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urbanization: Option<String>,
    /// Maximum number of candidates returned for an ambiguous input (1-10).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidates: Option<u8>,
    /// Output strategy. The service defaults to [`MatchStrategy::Strict`].
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub match_strategy: Option<MatchStrategy>,
}

impl QueryParamsItem {
    /// Creates a lookup with no fields set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identifier echoed back in results.
    #[must_use]
    pub fn with_input_id(mut self, input_id: impl Into<String>) -> Self {
        self.input_id = Some(input_id.into());
        self
    }

    /// Sets the street line (or the freeform address).
    #[must_use]
    pub fn with_street(mut self, street: impl Into<String>) -> Self {
        self.street = Some(street.into());
        self
    }

    /// Sets the secondary (unit) designator.
    #[must_use]
    pub fn with_secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// Sets the state.
    #[must_use]
    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Sets the ZIP Code.
    #[must_use]
    pub fn with_zipcode(mut self, zipcode: impl Into<String>) -> Self {
        self.zipcode = Some(zipcode.into());
        self
    }

    /// Sets the maximum number of candidates.
    #[must_use]
    pub fn with_candidates(mut self, candidates: u8) -> Self {
        self.candidates = Some(candidates);
        self
    }

    /// Sets the match output strategy.
    #[must_use]
    pub fn with_match(mut self, strategy: MatchStrategy) -> Self {
        self.match_strategy = Some(strategy);
        self
    }

    /// Returns true if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Checks the bounds documented by the service.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if let Some(n) = self.candidates {
            if n == 0 || n > MAX_CANDIDATES {
                return Err(SchemaError::invalid_input(format!(
                    "candidates must be between 1 and {MAX_CANDIDATES}, got {n}"
                )));
            }
        }
        Ok(())
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

/// Postal sub-fields of a matched address.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Components {
    /// Area, sector or development; primarily Puerto Rican addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urbanization: Option<String>,
    /// House, PO Box or building number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    /// Directional before the street name (N, SW, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_predirection: Option<String>,
    /// Directional after the street name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_postdirection: Option<String>,
    /// Abbreviated street type (St, Ave, Blvd, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_number: Option<String>,
    /// Location within a complex or building (Ste, Apt, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_designator: Option<String>,
    /// Location of a building within a campus (e.g., "E-5").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_secondary_number: Option<String>,
    /// Location type within a campus (Bldg, Unit, Lot, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_secondary_designator: Option<String>,
    /// Private mailbox unit designator, assigned by a CMRA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmb_designator: Option<String>,
    /// Private mailbox number, assigned by a CMRA.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pmb_number: Option<String>,
    /// USPS-preferred city name for this address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city_name: Option<String>,
    /// Default city name for the 5-digit ZIP Code. Absent when equal to
    /// `city_name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_city_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_abbreviation: Option<StateCode>,
    /// 5-digit ZIP Code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zipcode: Option<String>,
    /// 4-digit add-on code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plus4_code: Option<String>,
    /// Last two digits of the house/box number, or the secondary unit
    /// number when an "H" record is matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_point: Option<String>,
    /// Check digit for the 11-digit barcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_point_check_digit: Option<String>,
}

impl Components {
    /// Returns the ZIP+4 form ("12345-6789") when both parts are present,
    /// or the 5-digit ZIP alone.
    #[must_use]
    pub fn full_zipcode(&self) -> Option<String> {
        match (&self.zipcode, &self.plus4_code) {
            (Some(zip), Some(plus4)) => Some(format!("{zip}-{plus4}")),
            (Some(zip), None) => Some(zip.clone()),
            (None, _) => None,
        }
    }

    /// Returns true if all fields are None.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

string_enum! {
    /// Type of USPS record matched. Only given on a DPV match.
    pub enum RecordType("record type") {
        /// Firm; the finest level of match.
        Firm = "F",
        /// General Delivery, held at a local post office.
        GeneralDelivery = "G",
        /// High-rise; the address has apartment or building sub-units.
        HighRise = "H",
        /// Post Office box.
        PostOfficeBox = "P",
        /// Rural Route or Highway Contract.
        RuralRoute = "R",
        /// Street; valid primary number range.
        Street = "S",
    }
}

string_enum! {
    /// Type of the matched ZIP Code. Only given on a 5-digit match.
    pub enum ZipType("zip type") {
        /// Single delivery point for one large USPS customer.
        Unique = "Unique",
        /// Military units and diplomatic organizations.
        Military = "Military",
        /// A collection of Post Office Boxes.
        PoBox = "POBox",
        /// None of the above.
        Standard = "Standard",
    }
}

string_enum! {
    /// Residential Delivery Indicator.
    pub enum ResidentialDeliveryIndicator("residential delivery indicator") {
        Residential = "Residential",
        Commercial = "Commercial",
    }
}

string_enum! {
    /// eLOT sort direction.
    pub enum ElotSortOrder("eLOT sort order") {
        Ascending = "A",
        Descending = "D",
    }
}

/// Geographic and classification facts about the matched address.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_type: Option<ZipType>,
    /// 5-digit county FIPS code (2-digit state + 3-digit county).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_fips: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub county_name: Option<String>,
    /// Postal carrier route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carrier_route: Option<String>,
    /// Two digits from "01" to "53", or "AL" (at large) when the whole state
    /// is one district.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub congressional_district: Option<String>,
    /// Whether this is the default address for a building.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_default_indicator: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rdi: Option<ResidentialDeliveryIndicator>,
    /// eLOT 4-digit sequence number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elot_sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elot_sort: Option<ElotSortOrder>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Precision of `latitude`/`longitude`. Below Zip9 the coordinate is
    /// interpolated from neighbouring addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precision: Option<GeoPrecision>,
    /// Common time zone name (e.g., "Eastern", "UTC+10").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    /// Hours offset from UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub utc_offset: Option<f64>,
    /// `true` if the time zone observes daylight saving time. Absent
    /// otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst: Option<bool>,
}

impl Metadata {
    /// Returns `(latitude, longitude)` when both are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Whether the time zone observes daylight saving time. The service
    /// omits `dst` for zones that do not.
    #[must_use]
    pub fn observes_dst(&self) -> bool {
        self.dst.unwrap_or(false)
    }

    /// Returns true if all fields are None.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

string_enum! {
    /// A yes/no flag as the service spells it.
    pub enum YesOrNo("yes/no flag") {
        Yes = "Y",
        No = "N",
    }
}

impl YesOrNo {
    #[must_use]
    pub fn as_bool(&self) -> bool {
        matches!(self, YesOrNo::Yes)
    }
}

string_enum! {
    /// Delivery Point Validation status.
    pub enum DpvMatchCode("DPV match code") {
        /// Entire address confirmed deliverable.
        Confirmed = "Y",
        /// Address could not be confirmed deliverable.
        NotConfirmed = "N",
        /// Confirmed by dropping secondary information.
        ConfirmedDroppingSecondary = "S",
        /// Confirmed, but missing secondary information.
        ConfirmedMissingSecondary = "D",
    }
}

string_enum! {
    /// Reason for the LACSLink indication.
    pub enum LacsLinkCode("LACSLink code") {
        /// Match; a converted address was provided.
        Converted = "A",
        /// No match and no converted address.
        NoMatch = "00",
        /// Matched a high-rise default address; no new address.
        HighRiseDefault = "09",
        /// Matched, but could not convert to a deliverable address.
        NoConversion = "14",
        /// Matched after dropping the secondary number.
        DroppedSecondary = "92",
    }
}

string_enum! {
    /// Whether the address matched the LACSLink database.
    pub enum LacsLinkIndicator("LACSLink indicator") {
        /// Record matched; a new address could be furnished.
        Match = "Y",
        /// Matched after dropping the secondary number.
        SecondaryDropped = "S",
        /// No match.
        NoMatch = "N",
        /// False positive detected.
        FalsePositive = "F",
    }
}

/// Match-quality signals for a result.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Analysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpv_match_code: Option<DpvMatchCode>,
    /// Concatenated 2-character DPV footnotes (up to 14), e.g. "AABB".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpv_footnotes: Option<String>,
    /// Associated with a Commercial Mail Receiving Agency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpv_cmra: Option<YesOrNo>,
    /// Delivery point was active in the past but is currently vacant.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dpv_vacant: Option<YesOrNo>,
    /// Address is "in-service" according to the USPS.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<YesOrNo>,
    /// Early Warning System flag: street not yet ready for delivery.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ews_match: Option<bool>,
    /// Changes made to the input, delimited by `#`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footnotes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lacslink_code: Option<LacsLinkCode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lacslink_indicator: Option<LacsLinkIndicator>,
    /// Match against USPS SuiteLink data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suitelink_match: Option<bool>,
}

impl Analysis {
    /// Splits `dpv_footnotes` into its 2-character codes.
    ///
    /// ```
    /// use addrverify::us_street::Analysis;
    ///
    /// let analysis = Analysis {
    ///     dpv_footnotes: Some("AABBR1".to_owned()),
    ///     ..Default::default()
    /// };
    /// assert_eq!(analysis.dpv_footnote_codes(), ["AA", "BB", "R1"]);
    /// ```
    #[must_use]
    pub fn dpv_footnote_codes(&self) -> Vec<&str> {
        let Some(footnotes) = self.dpv_footnotes.as_deref() else {
            return Vec::new();
        };
        let mut codes = Vec::with_capacity(footnotes.len() / 2);
        let mut rest = footnotes;
        while !rest.is_empty() {
            let split = rest
                .char_indices()
                .nth(2)
                .map_or(rest.len(), |(idx, _)| idx);
            let (code, tail) = rest.split_at(split);
            codes.push(code);
            rest = tail;
        }
        codes
    }

    /// Splits the `#`-delimited `footnotes` into individual codes.
    #[must_use]
    pub fn footnote_codes(&self) -> Vec<&str> {
        self.footnotes
            .as_deref()
            .map(|f| f.split('#').filter(|code| !code.is_empty()).collect())
            .unwrap_or_default()
    }

    /// True if DPV confirmed the address as deliverable, with or without
    /// its secondary information.
    #[must_use]
    pub fn is_deliverable(&self) -> bool {
        matches!(
            self.dpv_match_code,
            Some(
                DpvMatchCode::Confirmed
                    | DpvMatchCode::ConfirmedDroppingSecondary
                    | DpvMatchCode::ConfirmedMissingSecondary
            )
        )
    }

    /// Returns true if all fields are None.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// One candidate match for one input address.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct QueryResultItem {
    /// Identical to the `input_id` of the request item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,
    /// Position of the input in the submitted batch (0 if alone).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_index: Option<usize>,
    /// Position of this candidate among the matches for its input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub candidate_index: Option<usize>,
    /// Usually a firm name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub addressee: Option<String>,
    /// First delivery line, usually the street address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_line_1: Option<String>,
    /// Second delivery line; often absent, may hold a private mailbox.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_line_2: Option<String>,
    /// City, state and ZIP Code combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_line: Option<String>,
    /// 12-digit POSTNET barcode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_point_barcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl Correlate for QueryResultItem {
    fn input_id(&self) -> Option<&str> {
        self.input_id.as_deref()
    }

    fn input_index(&self) -> Option<usize> {
        self.input_index
    }

    fn candidate_index(&self) -> Option<usize> {
        self.candidate_index
    }
}

/// Response body: all candidates for all inputs.
pub type QueryResult = Vec<QueryResultItem>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_item_serializes_only_set_fields() {
        let item = QueryParamsItem::new()
            .with_input_id("42")
            .with_street("1600 Pennsylvania Ave")
            .with_city("Washington")
            .with_state("DC")
            .with_match(MatchStrategy::Invalid);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "input_id": "42",
                "street": "1600 Pennsylvania Ave",
                "city": "Washington",
                "state": "DC",
                "match": "invalid"
            })
        );
        assert!(QueryParamsItem::new().is_empty());
        assert!(!item.is_empty());
    }

    #[test]
    fn test_empty_string_is_not_absent() {
        let item: QueryParamsItem = serde_json::from_str(r#"{"street2": ""}"#).unwrap();
        assert_eq!(item.street2.as_deref(), Some(""));
        assert!(!item.is_empty());
        assert_eq!(serde_json::to_string(&item).unwrap(), r#"{"street2":""}"#);
    }

    #[test]
    fn test_validate_candidates() {
        assert!(QueryParamsItem::new().validate().is_ok());
        assert!(QueryParamsItem::new().with_candidates(10).validate().is_ok());
        assert!(QueryParamsItem::new().with_candidates(0).validate().is_err());
        assert!(QueryParamsItem::new().with_candidates(11).validate().is_err());
    }

    #[test]
    fn test_match_strategy_default() {
        assert_eq!(MatchStrategy::default(), MatchStrategy::Strict);
        assert!(serde_json::from_str::<MatchStrategy>("\"enhanced\"").is_err());
    }

    #[test]
    fn test_analysis_helpers() {
        let analysis: Analysis = serde_json::from_value(json!({
            "dpv_match_code": "D",
            "dpv_footnotes": "AAN1",
            "dpv_cmra": "N",
            "footnotes": "N#S#",
            "lacslink_code": "09",
            "lacslink_indicator": "S"
        }))
        .unwrap();
        assert!(analysis.is_deliverable());
        assert_eq!(analysis.dpv_footnote_codes(), ["AA", "N1"]);
        assert_eq!(analysis.footnote_codes(), ["N", "S"]);
        assert_eq!(analysis.dpv_cmra.map(|c| c.as_bool()), Some(false));
        assert_eq!(analysis.lacslink_code, Some(LacsLinkCode::HighRiseDefault));

        let not_submitted = Analysis::default();
        assert!(!not_submitted.is_deliverable());
        assert!(not_submitted.dpv_footnote_codes().is_empty());
        assert!(not_submitted.footnote_codes().is_empty());
    }

    #[test]
    fn test_metadata_helpers() {
        let metadata: Metadata = serde_json::from_value(json!({
            "record_type": "H",
            "zip_type": "POBox",
            "rdi": "Commercial",
            "elot_sort": "A",
            "latitude": 38.8977,
            "longitude": -77.0365,
            "precision": "Zip9",
            "utc_offset": -5
        }))
        .unwrap();
        assert_eq!(metadata.record_type, Some(RecordType::HighRise));
        assert_eq!(metadata.zip_type, Some(ZipType::PoBox));
        assert_eq!(metadata.coordinates(), Some((38.8977, -77.0365)));
        assert!(!metadata.observes_dst());
        assert_eq!(metadata.utc_offset, Some(-5.0));

        let partial = Metadata {
            latitude: Some(1.0),
            ..Default::default()
        };
        assert_eq!(partial.coordinates(), None);
    }

    #[test]
    fn test_full_zipcode() {
        let c = Components {
            zipcode: Some("20500".to_owned()),
            plus4_code: Some("0005".to_owned()),
            ..Default::default()
        };
        assert_eq!(c.full_zipcode().as_deref(), Some("20500-0005"));
        assert_eq!(Components::default().full_zipcode(), None);
        assert!(Components::default().is_empty());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let item: QueryResultItem =
            serde_json::from_value(json!({"input_index": 0, "smarty_key": "123"})).unwrap();
        assert_eq!(item.input_index, Some(0));
    }
}
