//! Shared fixtures for integration tests

#![allow(dead_code)]

use aerolookup::query::RawQuery;
use serde_json::{json, Value};

/// Number of airport fixtures whose code starts with "L"
pub const L_AIRPORTS: usize = 463;

/// Every three-letter code starting with `first`, in alphabetical order
pub fn codes_starting_with(first: char, count: usize) -> Vec<String> {
    let letters: Vec<char> = ('A'..='Z').collect();
    letters
        .iter()
        .flat_map(|second| letters.iter().map(move |third| format!("{}{}{}", first, second, third)))
        .take(count)
        .collect()
}

fn airport(code: &str, position: usize) -> Value {
    if code == "LHR" {
        return json!({
            "iataCode": "LHR",
            "icaoCode": "EGLL",
            "name": "Heathrow",
            "city": {"name": "London", "countryCode": "GB"},
            "country": "United Kingdom",
            "countryCode": "GB",
            "timeZone": "Europe/London",
            "latitude": 51.47,
            "longitude": -0.4543,
            "elevationFt": 83
        });
    }

    // every fifth airport has no elevation, every seventh no ICAO code
    let elevation = if position % 5 == 0 {
        Value::Null
    } else {
        json!((position * 37) % 3000)
    };
    let icao = if position % 7 == 0 {
        Value::Null
    } else {
        json!(format!("X{}", code))
    };

    let (country, country_code) = if position % 2 == 0 {
        ("Freedonia", "FD")
    } else {
        ("Sylvania", "SY")
    };

    json!({
        "iataCode": code,
        "icaoCode": icao,
        "name": format!("{} Regional", code),
        "city": {"name": format!("City {}", code), "countryCode": "ZZ"},
        "country": country,
        "countryCode": country_code,
        "latitude": (position % 180) as f64 - 90.0,
        "longitude": (position % 360) as f64 - 180.0,
        "elevationFt": elevation
    })
}

/// 463 "L" airports (LHR among them), 60 "A" airports, 40 "M" airports
/// and one record without a code, interleaved so store order is not
/// alphabetical.
pub fn airports() -> Vec<Value> {
    let l_codes = codes_starting_with('L', L_AIRPORTS);
    let a_codes = codes_starting_with('A', 60);
    let m_codes = codes_starting_with('M', 40);

    let mut codes: Vec<String> = Vec::new();
    let mut l_iter = l_codes.into_iter().rev();
    let mut other_iter = a_codes.into_iter().chain(m_codes);
    loop {
        let l = l_iter.next();
        let other = other_iter.next();
        if l.is_none() && other.is_none() {
            break;
        }
        codes.extend(l);
        codes.extend(other);
    }

    let mut records: Vec<Value> = codes
        .iter()
        .enumerate()
        .map(|(position, code)| airport(code, position))
        .collect();
    records.push(json!({"iataCode": null, "name": "Unnamed Strip"}));
    records
}

pub fn airlines() -> Vec<Value> {
    vec![
        json!({"iataCode": "BA", "icaoCode": "BAW", "name": "British Airways", "callsign": "SPEEDBIRD",
               "country": "United Kingdom", "countryCode": "GB", "isLowCost": false, "fleetSize": 254}),
        json!({"iataCode": "B6", "icaoCode": "JBU", "name": "JetBlue", "callsign": "JETBLUE",
               "country": "United States", "countryCode": "US", "isLowCost": true, "fleetSize": 290}),
        json!({"iataCode": "U2", "icaoCode": "EZY", "name": "easyJet", "callsign": "EASY",
               "country": "United Kingdom", "countryCode": "GB", "isLowCost": true, "fleetSize": 330}),
        json!({"iataCode": "LH", "icaoCode": "DLH", "name": "Lufthansa", "callsign": "LUFTHANSA",
               "country": "Germany", "countryCode": "DE", "isLowCost": false, "fleetSize": null}),
    ]
}

pub fn aircraft() -> Vec<Value> {
    vec![
        json!({"iataCode": "388", "icaoCode": "A388", "name": "Airbus A380-800", "manufacturer": "Airbus",
               "bodyType": "wide", "seats": 555, "rangeKm": 15200, "engineCount": 4}),
        json!({"iataCode": "320", "icaoCode": "A320", "name": "Airbus A320", "manufacturer": "Airbus",
               "bodyType": "narrow", "seats": 180, "rangeKm": 6100, "engineCount": 2}),
        json!({"iataCode": "32N", "icaoCode": "A20N", "name": "Airbus A320neo", "manufacturer": "Airbus",
               "bodyType": "narrow", "seats": 186, "rangeKm": 6300, "engineCount": 2}),
        json!({"iataCode": "77W", "icaoCode": "B77W", "name": "Boeing 777-300ER", "manufacturer": "Boeing",
               "bodyType": "wide", "seats": 396, "rangeKm": 13650, "engineCount": 2}),
        json!({"iataCode": "DH4", "icaoCode": "DH8D", "name": "De Havilland Dash 8-400", "manufacturer": "De Havilland",
               "bodyType": "turboprop", "seats": null, "rangeKm": null, "engineCount": 2}),
    ]
}

pub fn params(pairs: &[(&str, &str)]) -> RawQuery {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
