//! Binding of each schema group to its upstream endpoint.
//!
//! An HTTP client outside this crate can be written once against
//! [`Endpoint`]: serialize [`Endpoint::Query`] into the request, send it
//! to [`Endpoint::PATH`], and hand the body to [`Endpoint::decode`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::batch::Batch;
use crate::decode::decode_slice;
use crate::error::SchemaError;
use crate::{international, us_autocomplete, us_street, us_zipcode};

/// Request and response types of one upstream endpoint.
pub trait Endpoint {
    /// URL path of the endpoint, relative to the service host.
    const PATH: &'static str;

    /// Request payload.
    type Query: Serialize;

    /// Decoded response body.
    type Response: DeserializeOwned;

    /// Decodes a response body for this endpoint.
    fn decode(body: &[u8]) -> Result<Self::Response, SchemaError> {
        decode_slice(body)
    }
}

/// US street address verification.
#[derive(Clone, Copy, Debug)]
pub struct UsStreet;

impl Endpoint for UsStreet {
    const PATH: &'static str = "/street-address";
    type Query = Batch<us_street::QueryParamsItem>;
    type Response = us_street::QueryResult;
}

/// US address autocomplete.
#[derive(Clone, Copy, Debug)]
pub struct UsAutocomplete;

impl Endpoint for UsAutocomplete {
    const PATH: &'static str = "/suggest";
    type Query = us_autocomplete::QueryParams;
    type Response = us_autocomplete::QueryResult;
}

/// International street address verification.
#[derive(Clone, Copy, Debug)]
pub struct International;

impl Endpoint for International {
    const PATH: &'static str = "/verify";
    type Query = international::QueryParams;
    type Response = international::QueryResult;
}

/// US ZIP Code lookup.
#[derive(Clone, Copy, Debug)]
pub struct UsZipcode;

impl Endpoint for UsZipcode {
    const PATH: &'static str = "/lookup";
    type Query = Batch<us_zipcode::QueryParamsItem>;
    type Response = us_zipcode::QueryResult;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of<E: Endpoint>() -> &'static str {
        E::PATH
    }

    #[test]
    fn test_paths_are_distinct() {
        let paths = [
            path_of::<UsStreet>(),
            path_of::<UsAutocomplete>(),
            path_of::<International>(),
            path_of::<UsZipcode>(),
        ];
        for (i, a) in paths.iter().enumerate() {
            assert!(a.starts_with('/'));
            for b in &paths[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    fn query_json<E: Endpoint>(query: E::Query) -> serde_json::Value {
        serde_json::to_value(query).unwrap()
    }

    #[test]
    fn test_query_shapes() {
        // single-address endpoint sends an object, batch endpoints an array
        assert!(query_json::<International>(international::QueryParams::new("BRA")).is_object());
        assert!(
            query_json::<UsAutocomplete>(us_autocomplete::QueryParams::new("1 Main")).is_object()
        );
        assert!(query_json::<UsStreet>(Batch::new(us_street::QueryParamsItem::new())).is_array());
        let zip = us_zipcode::QueryParamsItem::zipcode("90210");
        assert!(query_json::<UsZipcode>(Batch::new(zip)).is_array());
    }

    #[test]
    fn test_decode_through_endpoint() {
        let body = br#"{"suggestions":[{"text":"1 Main St Springfield IL"}]}"#;
        let result = UsAutocomplete::decode(body).unwrap();
        assert_eq!(result.suggestions.len(), 1);

        let zip = UsZipcode::decode(br#"[{"input_index":0,"zipcodes":[{"zipcode":"90210"}]}]"#)
            .unwrap();
        assert!(zip[0].is_match());
    }
}
