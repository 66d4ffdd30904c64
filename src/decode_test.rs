use std::fs;

use serde_json::json;

use crate::{
    decode_response, international, us_autocomplete, us_street, us_zipcode, Batch, Endpoint,
    GeoPrecision, International, SchemaError, StateCode, UsAutocomplete, UsStreet, UsZipcode,
};

fn read_fixture(name: &str) -> Vec<u8> {
    fs::read(format!("test-data/{name}")).expect("error reading fixture")
}

#[test]
fn test_us_street_response() {
    let _ = env_logger::try_init();

    let results = UsStreet::decode(&read_fixture("us-street-response.json")).unwrap();
    assert_eq!(results.len(), 3);

    let wh = results
        .iter()
        .find(|r| r.input_id.as_deref() == Some("wh"))
        .unwrap();
    let components = wh.components.as_ref().unwrap();
    assert_eq!(components.state_abbreviation, Some(StateCode::DC));
    assert_eq!(components.full_zipcode().as_deref(), Some("20500-0005"));
    // present but empty is not the same as absent
    assert_eq!(wh.delivery_line_2.as_deref(), Some(""));
    assert!(components.urbanization.is_none());

    let metadata = wh.metadata.as_ref().unwrap();
    assert_eq!(metadata.zip_type, Some(us_street::ZipType::Unique));
    assert_eq!(metadata.precision, Some(GeoPrecision::Zip9));
    assert_eq!(metadata.congressional_district.as_deref(), Some("AL"));
    assert!(metadata.observes_dst());

    let analysis = wh.analysis.as_ref().unwrap();
    assert!(analysis.is_deliverable());
    assert_eq!(analysis.dpv_footnote_codes(), ["AA", "BB"]);
    assert_eq!(analysis.footnote_codes(), ["N"]);
    assert!(analysis.ews_match.is_none());
}

#[test]
fn test_us_street_zip_type_vocabulary() {
    let results = UsStreet::decode(&read_fixture("us-street-response.json")).unwrap();
    for zip_type in results
        .iter()
        .filter_map(|r| r.metadata.as_ref().and_then(|m| m.zip_type))
    {
        assert!(["Unique", "Military", "POBox", "Standard"].contains(&zip_type.as_str()));
    }
}

#[test]
fn test_us_street_correlation() {
    let _ = env_logger::try_init();

    let batch = Batch::new(vec![
        us_street::QueryParamsItem::new()
            .with_input_id("wh")
            .with_street("1600 Pennsylvania Ave")
            .with_city("Washington")
            .with_state("DC"),
        us_street::QueryParamsItem::new()
            .with_input_id("rosedale")
            .with_street("1 Rosedale Street Baltimore Maryland")
            .with_candidates(5),
    ]);
    for item in batch.items() {
        item.validate().unwrap();
    }

    let results = UsStreet::decode(&read_fixture("us-street-response.json")).unwrap();
    let groups = batch.correlate(&results).unwrap();

    assert_eq!(groups[&0].len(), 1);
    assert_eq!(groups[&0][0].input_id.as_deref(), Some("wh"));

    // listed 1 then 0 in the response, returned in candidate order
    let rosedale: Vec<_> = groups[&1]
        .iter()
        .map(|r| r.delivery_line_1.as_deref().unwrap())
        .collect();
    assert_eq!(rosedale, ["1 S Rosedale St", "1 N Rosedale St"]);

    for (index, group) in &groups {
        for result in group {
            assert_eq!(result.input_id, batch.items()[*index].input_id);
        }
    }
}

#[test]
fn test_us_street_request_body() {
    let batch = Batch::new(
        us_street::QueryParamsItem::new()
            .with_street("1600 Pennsylvania Ave")
            .with_city("Washington")
            .with_state("DC"),
    );
    assert_eq!(
        serde_json::to_value(&batch).unwrap(),
        json!([{"street": "1600 Pennsylvania Ave", "city": "Washington", "state": "DC"}])
    );
}

#[test]
fn test_us_zipcode_response() {
    let _ = env_logger::try_init();

    let batch = Batch::new(vec![
        us_zipcode::QueryParamsItem::zipcode("90210").with_input_id("bh"),
        us_zipcode::QueryParamsItem::city_state("Springfield", "IL").with_input_id("springfield"),
        us_zipcode::QueryParamsItem::zipcode("00000").with_input_id("bogus"),
    ]);
    let results = UsZipcode::decode(&read_fixture("us-zipcode-response.json")).unwrap();
    let groups = batch.correlate(&results).unwrap();
    assert_eq!(groups.len(), 3);

    let bh = groups[&0][0];
    assert!(bh.is_match());
    assert_eq!(bh.zipcodes()[0].state_abbreviation, Some(StateCode::CA));

    let springfield = groups[&1][0];
    assert_eq!(springfield.zipcodes().len(), 3);
    assert_eq!(
        springfield.zipcodes()[2].zipcode_type,
        Some(us_zipcode::ZipCodeType::PoBox)
    );

    let bogus = groups[&2][0];
    assert_eq!(bogus.status(), Some(us_zipcode::ResultStatus::InvalidZipcode));
    assert!(bogus.zipcodes().is_empty() && bogus.city_states().is_empty());
}

#[test]
fn test_international_response() {
    let params = international::QueryParams::new("Brazil").with_input_id("123456");
    let results = International::decode(&read_fixture("international-response.json")).unwrap();
    assert_eq!(results.len(), 1);

    let item = &results[0];
    assert_eq!(item.input_id, params.input_id);
    assert!(item.is_verified());
    assert_eq!(item.address_lines().len(), 4);
    assert_eq!(item.address_lines()[3], "02516-040 Sao Paulo - SP");

    let metadata = item.metadata.as_ref().unwrap();
    assert_eq!(
        metadata.geocode_precision,
        Some(international::GeocodePrecision::Premise)
    );
    assert_eq!(metadata.address_format_lines().len(), 4);
    assert_eq!(
        item.components.as_ref().unwrap().country_iso_3.as_deref(),
        Some("BRA")
    );
}

#[test]
fn test_us_autocomplete_response() {
    let result = UsAutocomplete::decode(&read_fixture("us-autocomplete-response.json")).unwrap();
    let cities: Vec<_> = result
        .suggestions
        .iter()
        .filter_map(|s| s.city.as_deref())
        .collect();
    assert_eq!(cities, ["Chicago", "Matteson", "Monument"]);
    assert_eq!(
        result.best().and_then(|s| s.street_line.as_deref()),
        Some("4770 Lincoln Ave")
    );

    let typed: us_autocomplete::QueryResult =
        decode_response(r#"{"suggestions": []}"#).unwrap();
    assert!(typed.suggestions.is_empty());
}

#[test]
fn test_unknown_state_code_fails_decode() {
    let _ = env_logger::try_init();

    let body = r#"[{"input_index":0,"city_states":[{"city":"X","state_abbreviation":"XX"}]}]"#;
    match decode_response::<us_zipcode::QueryResult>(body) {
        Err(SchemaError::Decoding { message, .. }) => {
            assert!(message.contains("XX"), "got: {message}");
        }
        other => panic!("expected Decoding error, got {other:?}"),
    }
}
