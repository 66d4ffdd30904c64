#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]
//! # Address Verification Records
//!
//! Strongly-typed request and response records for a US and international
//! address verification and geocoding API.
//!
//! ## Schema Groups
//!
//! - [`us_street`] - US street address verification
//! - [`us_autocomplete`] - US address autocomplete suggestions
//! - [`international`] - international address verification and geocoding
//! - [`us_zipcode`] - US city/state/ZIP Code lookup
//!
//! The groups are independent. They share only [`StateCode`] and
//! [`GeoPrecision`].
//!
//! ## Decoding Rules
//!
//! - Optional fields are `Option`s. A missing field means the service did
//!   not determine it; an empty string is a determined, empty value.
//! - Closed vocabularies (state codes, precisions, match and status codes)
//!   are enums. A value outside the vocabulary fails decoding.
//! - Free text is kept as `String` and accepts anything.
//!
//! No transport is included. [`Endpoint`] describes what a client sends
//! and receives for each endpoint.
//!
//! ## Quick Start
//!
//! ```rust
//! use addrverify::{Batch, Endpoint, UsStreet, StateCode, us_street};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let batch = Batch::new(
//!         us_street::QueryParamsItem::new()
//!             .with_input_id("wh")
//!             .with_street("1600 Pennsylvania Ave")
//!             .with_city("Washington")
//!             .with_state("DC"),
//!     );
//!     let _request_body = serde_json::to_string(&batch)?;
//!
//!     // response body as returned by the service
//!     let body = br#"[{"input_id":"wh","input_index":0,"candidate_index":0,
//!         "components":{"state_abbreviation":"DC"}}]"#;
//!     let results = UsStreet::decode(body)?;
//!
//!     let groups = batch.correlate(&results)?;
//!     let first = groups[&0][0];
//!     assert_eq!(
//!         first.components.as_ref().and_then(|c| c.state_abbreviation),
//!         Some(StateCode::DC)
//!     );
//!     Ok(())
//! }
//! ```

#[macro_use]
mod macros;

mod batch;
mod common;
mod decode;
mod endpoint;
mod error;
pub mod international;
pub mod us_autocomplete;
pub mod us_street;
pub mod us_zipcode;

// Re-export public types
pub use batch::{Batch, Correlate, InputId, QueryParams};
pub use common::{GeoPrecision, StateCode};
pub use decode::{decode_response, decode_slice};
pub use endpoint::{Endpoint, International, UsAutocomplete, UsStreet, UsZipcode};
pub use error::SchemaError;

#[cfg(test)]
mod decode_test;
