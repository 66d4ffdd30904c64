use addrverify::StateCode;
use fake::faker::address::en::{BuildingNumber, CityName, StreetName, ZipCode};
use fake::Fake;
use serde_json::{json, Value};

// Pick a state from a deterministic LCG stream so runs are comparable.
fn state_at(state: &mut u64) -> StateCode {
    *state = state
        .wrapping_mul(6_364_136_223_846_793_005)
        .wrapping_add(1_442_695_040_888_963_407);
    StateCode::ALL[(*state >> 33) as usize % StateCode::ALL.len()]
}

// Generate a US street response body with `count` inputs and up to three
// candidates each.
#[must_use]
pub fn generate_street_response(count: usize) -> String {
    let mut lcg = 0x4D59_5DF4_D0F3_3173_u64;
    let mut items = Vec::with_capacity(count * 2);
    for input_index in 0..count {
        let candidates = 1 + input_index % 3;
        for candidate_index in 0..candidates {
            let number: String = BuildingNumber().fake();
            let street: String = StreetName().fake();
            let city: String = CityName().fake();
            let zip: String = ZipCode().fake();
            items.push(json!({
                "input_id": format!("id-{input_index}"),
                "input_index": input_index,
                "candidate_index": candidate_index,
                "delivery_line_1": format!("{number} {street}"),
                "components": {
                    "primary_number": number,
                    "street_name": street,
                    "city_name": city,
                    "state_abbreviation": state_at(&mut lcg).as_str(),
                    "zipcode": zip,
                },
                "metadata": {
                    "zip_type": "Standard",
                    "precision": "Zip9",
                    "latitude": 39.0,
                    "longitude": -77.0,
                },
                "analysis": {"dpv_match_code": "Y", "dpv_footnotes": "AABB"},
            }));
        }
    }
    Value::Array(items).to_string()
}
