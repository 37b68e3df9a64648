//! Request headers derived from configuration.

use crate::types::Configuration;

/// Placeholder for request signing; the API does not verify it.
pub const SIGNATURE: &str = "ZalandoPHP";

/// Build the header list for a request.
///
/// `Signature` and `Accept-Encoding` are always present, in that order.
/// `x-client-name` and `Accept-Language` follow only when the configuration
/// has a non-empty value for them.
pub fn build_headers(configuration: &Configuration) -> Vec<(String, String)> {
    let mut headers = vec![
        ("Signature".to_string(), SIGNATURE.to_string()),
        ("Accept-Encoding".to_string(), "gzip".to_string()),
    ];

    if let Some(name) = non_empty(configuration.client_name()) {
        headers.push(("x-client-name".to_string(), name.to_string()));
    }
    if let Some(locale) = non_empty(configuration.locale()) {
        headers.push(("Accept-Language".to_string(), locale.to_string()));
    }

    headers
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
