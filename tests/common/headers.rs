#![allow(dead_code)]

use ferric_cors::Headers;
use ferric_cors::constants::header;

pub fn header_value(headers: &Headers, name: &str) -> Option<String> {
    headers.get(name)
}

pub fn has_header(headers: &Headers, name: &str) -> bool {
    headers.contains(name)
}

pub fn vary_values(headers: &Headers) -> Vec<String> {
    headers
        .values(header::VARY)
        .map(str::to_string)
        .collect()
}

/// Names of the `Access-Control-*` headers present, in emission order.
pub fn cors_header_names(headers: &Headers) -> Vec<&'static str> {
    headers
        .iter()
        .map(|mutation| mutation.name)
        .filter(|name| *name != header::VARY)
        .collect()
}
