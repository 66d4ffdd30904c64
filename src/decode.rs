//! Decoding of raw response bodies into typed records.

use log::debug;
use serde::de::DeserializeOwned;

use crate::error::SchemaError;

/// Decodes a JSON response body.
///
/// Closed vocabularies are enforced: an out-of-set state code, precision
/// or status fails the whole decode. Unknown object keys are ignored.
///
/// ```
/// use addrverify::{decode_response, us_zipcode};
///
/// let result: us_zipcode::QueryResult = decode_response(
///     r#"[{"input_index":0,"status":"blank","reason":"Blank lookup"}]"#,
/// ).unwrap();
/// assert_eq!(result[0].status(), Some(us_zipcode::ResultStatus::Blank));
/// ```
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, SchemaError> {
    serde_json::from_str(body).map_err(|e| {
        debug!("failed to decode {}: {}", std::any::type_name::<T>(), e);
        SchemaError::from(e)
    })
}

/// Decodes a JSON response body given as bytes.
pub fn decode_slice<T: DeserializeOwned>(body: &[u8]) -> Result<T, SchemaError> {
    serde_json::from_slice(body).map_err(|e| {
        debug!("failed to decode {}: {}", std::any::type_name::<T>(), e);
        SchemaError::from(e)
    })
}
