//! Verify query encoding, header selection and request assembly against JSON
//! test vectors stored in `test-vectors/`.

use zalando_core::headers::build_headers;
use zalando_core::{query, Configuration, FilterValue, HttpMethod, Operation, RequestBuilder};

const BASE_URL: &str = "http://localhost:3000/";

/// Parse a `[key, value]` filter list from a vector file.
fn parse_filter(raw: &serde_json::Value) -> Vec<(String, FilterValue)> {
    raw.as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let pair = pair.as_array().unwrap();
            let key = pair[0].as_str().unwrap().to_string();
            let value = match &pair[1] {
                serde_json::Value::String(s) => FilterValue::Text(s.clone()),
                serde_json::Value::Bool(b) => FilterValue::Flag(*b),
                serde_json::Value::Array(items) => FilterValue::List(
                    items.iter().map(|i| i.as_str().unwrap().to_string()).collect(),
                ),
                other => panic!("unsupported filter value: {other}"),
            };
            (key, value)
        })
        .collect()
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

struct VectorOperation {
    endpoint: String,
    filter: Vec<(String, FilterValue)>,
}

impl Operation for VectorOperation {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn filter(&self) -> &[(String, FilterValue)] {
        &self.filter
    }
}

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

#[test]
fn query_test_vectors() {
    let raw = include_str!("../../test-vectors/query.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let filter = parse_filter(&case["filter"]);
        assert_eq!(query::encode(&filter), case["expected"].as_str().unwrap(), "{name}");
    }
}

// ---------------------------------------------------------------------------
// Headers
// ---------------------------------------------------------------------------

#[test]
fn header_test_vectors() {
    let raw = include_str!("../../test-vectors/headers.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let config: Configuration = serde_json::from_value(case["configuration"].clone()).unwrap();

        let expected: Vec<(String, String)> = case["expected"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(build_headers(&config), expected, "{name}");
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[test]
fn request_test_vectors() {
    let raw = include_str!("../../test-vectors/requests.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let builder = RequestBuilder::new(BASE_URL);
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let op = VectorOperation {
            endpoint: case["endpoint"].as_str().unwrap().to_string(),
            filter: parse_filter(&case["filter"]),
        };
        let config: Configuration = serde_json::from_value(case["configuration"].clone()).unwrap();
        let expected_req = &case["expected_request"];

        let req = builder.build(&op, &config);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.url, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: url");
        assert_eq!(
            req.headers.len() as u64,
            expected_req["header_count"].as_u64().unwrap(),
            "{name}: header count"
        );
        assert!(!req.url.ends_with('?'), "{name}: dangling '?'");
    }
}
