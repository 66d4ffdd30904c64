//! International street address verification records.
//!
//! The response numbers its formatted lines `address1` through
//! `address12`; how many are used depends on the country.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Highest numbered address line the service returns.
pub const MAX_ADDRESS_LINES: usize = 12;

string_enum! {
    /// Output language of the result.
    pub enum Language("language") {
        /// Always in the language of the output country.
        Native = "native",
        /// Always in a Latin character set.
        Latin = "latin",
    }
}

/// An international address lookup.
///
/// The endpoint verifies one address per request and has no batch form;
/// every item of the response is a candidate for this lookup.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub struct QueryParams {
    /// Caller-supplied identifier copied into the result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,
    /// Country name or ISO code (ISO-3, ISO-2 or ISO-N). Required.
    pub country: String,
    /// `"true"` enables geocoding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocode: Option<String>,
    /// When unset, output matches the language of the input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
    /// The whole address in one field, without the country. Other address
    /// fields are ignored when this is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub freeform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address4: Option<String>,
    /// Recipient, firm or company.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    /// City name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// State or province name or abbreviation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl QueryParams {
    /// Creates a lookup in `country` with every other field unset.
    #[must_use]
    pub fn new(country: impl Into<String>) -> Self {
        QueryParams {
            input_id: None,
            country: country.into(),
            geocode: None,
            language: None,
            freeform: None,
            address1: None,
            address2: None,
            address3: None,
            address4: None,
            organization: None,
            locality: None,
            administrative_area: None,
            postal_code: None,
        }
    }

    /// Sets the identifier echoed back in every candidate.
    #[must_use]
    pub fn with_input_id(mut self, input_id: impl Into<String>) -> Self {
        self.input_id = Some(input_id.into());
        self
    }

    /// Sends the whole address as one line.
    #[must_use]
    pub fn with_freeform(mut self, freeform: impl Into<String>) -> Self {
        self.freeform = Some(freeform.into());
        self
    }

    /// Asks the service to geocode the address.
    #[must_use]
    pub fn with_geocode(mut self) -> Self {
        self.geocode = Some("true".to_owned());
        self
    }

    /// Sets the output language.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    /// Checks that the request can be verified at all.
    pub fn validate(&self) -> Result<(), SchemaError> {
        if self.country.trim().is_empty() {
            return Err(SchemaError::invalid_input("country must not be blank"));
        }
        Ok(())
    }
}

/// Address components of an international match.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Components {
    /// ISO 3166-1 alpha-3 country code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_iso_3: Option<String>,
    /// Largest administrative division (e.g., region in France).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub super_administrative_area: Option<String>,
    /// Most common administrative division (e.g., province in Canada).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub administrative_area: Option<String>,
    /// Smallest administrative division (e.g., county in Germany).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_administrative_area: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_locality: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_locality_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_dependent_locality: Option<String>,
    /// Most common population center (e.g., city in Chile).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locality: Option<String>,
    /// Complete postal code for the delivery point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    /// Primary postal code information (e.g., 90210).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code_short: Option<String>,
    /// Secondary postal code information (e.g., 3425).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code_extra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premise: Option<String>,
    /// Non-authoritative premise detail (e.g., "bis" in "25 bis rue ...").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premise_extra: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premise_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub premise_type: Option<String>,
    /// All thoroughfare components combined.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoroughfare: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoroughfare_predirection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoroughfare_postdirection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoroughfare_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoroughfare_trailing_type: Option<String>,
    /// Leading thoroughfare type (e.g., "Rue" in "Rue De La Gare").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thoroughfare_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_thoroughfare: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_thoroughfare_predirection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_thoroughfare_postdirection: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_thoroughfare_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_thoroughfare_trailing_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependent_thoroughfare_type: Option<String>,
    /// Descriptive name of an individual location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_leading_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub building_trailing_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_building_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_building_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_building_name: Option<String>,
    /// All sub-building components combined (e.g., "Flat 1").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_building: Option<String>,
    /// All post box components combined (e.g., "PO Box 1234").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_box: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_box_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_box_number: Option<String>,
}

impl Components {
    /// Returns true if all fields are None.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

string_enum! {
    /// Precision of an international geocode. `None` means no coordinate.
    pub enum GeocodePrecision("geocode precision") {
        None = "None",
        /// Typically a state or province.
        AdministrativeArea = "AdministrativeArea",
        /// Typically a city or town.
        Locality = "Locality",
        /// Typically a street.
        Thoroughfare = "Thoroughfare",
        /// Typically an individual property or building.
        Premise = "Premise",
        /// Rooftop level.
        DeliveryPoint = "DeliveryPoint",
    }
}

string_enum! {
    /// Level down to which the address itself was verified. `None` means
    /// the address is not known.
    pub enum AddressPrecision("address precision") {
        None = "None",
        AdministrativeArea = "AdministrativeArea",
        Locality = "Locality",
        Thoroughfare = "Thoroughfare",
        Premise = "Premise",
        DeliveryPoint = "DeliveryPoint",
    }
}

/// Shared ranking for the two precision scales. `None` is unranked.
fn precision_rank(literal: &str) -> Option<u8> {
    match literal {
        "AdministrativeArea" => Some(1),
        "Locality" => Some(2),
        "Thoroughfare" => Some(3),
        "Premise" => Some(4),
        "DeliveryPoint" => Some(5),
        _ => None,
    }
}

fn compare_precision(a: &str, b: &str) -> Option<Ordering> {
    if a == b {
        return Some(Ordering::Equal);
    }
    match (precision_rank(a), precision_rank(b)) {
        (Some(x), Some(y)) => Some(x.cmp(&y)),
        _ => None,
    }
}

impl PartialOrd for GeocodePrecision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_precision(self.as_str(), other.as_str())
    }
}

impl PartialOrd for AddressPrecision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare_precision(self.as_str(), other.as_str())
    }
}

impl GeocodePrecision {
    /// Returns true if a coordinate was produced.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        precision_rank(self.as_str()).is_some()
    }
}

/// Geocoding facts about an international match.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geocode_precision: Option<GeocodePrecision>,
    /// Highest precision attainable for this address.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_geocode_precision: Option<String>,
    /// Template placing components on each numbered line, with `|` as the
    /// line break (e.g., "building | premise thoroughfare | postal_code
    /// locality"). Always blank for US addresses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_format: Option<String>,
}

impl Metadata {
    /// Returns `(latitude, longitude)` when both are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        Some((self.latitude?, self.longitude?))
    }

    /// Splits `address_format` into per-line templates.
    #[must_use]
    pub fn address_format_lines(&self) -> Vec<&str> {
        match self.address_format.as_deref() {
            Some(format) if !format.trim().is_empty() => {
                format.split('|').map(str::trim).collect()
            }
            _ => Vec::new(),
        }
    }
}

string_enum! {
    /// Verification outcome, at the level given by the address precision.
    pub enum VerificationStatus("verification status") {
        /// Not known, possibly because the address is invalid.
        None = "None",
        /// Parts of the address were matched.
        Partial = "Partial",
        /// The input has more than one match.
        Ambiguous = "Ambiguous",
        /// The entire address was verified.
        Verified = "Verified",
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Analysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_status: Option<VerificationStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_precision: Option<AddressPrecision>,
}

/// One international match.
///
/// When `verification_status` is `Verified` the numbered address lines hold
/// the correctly formatted mailing address; otherwise they may hold
/// standardized data or even the original input.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct QueryResultItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_id: Option<String>,
    /// Identical to the input organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address4: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address5: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address6: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address7: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address8: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address9: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address10: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address11: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address12: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Analysis>,
}

impl QueryResultItem {
    /// The numbered address lines, `address1` first. Absent lines are
    /// `None`.
    #[must_use]
    pub fn address_line_slots(&self) -> [Option<&str>; MAX_ADDRESS_LINES] {
        [
            self.address1.as_deref(),
            self.address2.as_deref(),
            self.address3.as_deref(),
            self.address4.as_deref(),
            self.address5.as_deref(),
            self.address6.as_deref(),
            self.address7.as_deref(),
            self.address8.as_deref(),
            self.address9.as_deref(),
            self.address10.as_deref(),
            self.address11.as_deref(),
            self.address12.as_deref(),
        ]
    }

    /// The present address lines in order.
    #[must_use]
    pub fn address_lines(&self) -> Vec<&str> {
        self.address_line_slots().into_iter().flatten().collect()
    }

    /// Returns true if the address was verified in full.
    #[must_use]
    pub fn is_verified(&self) -> bool {
        matches!(
            self.analysis.as_ref().and_then(|a| a.verification_status),
            Some(VerificationStatus::Verified)
        )
    }
}

/// Response body: candidates for the one submitted address.
pub type QueryResult = Vec<QueryResultItem>;
