mod common;

use common::asserts::{assert_actual, assert_preflight};
use common::builders::{actual_request, cors, preflight_request};
use common::headers::{has_header, header_value};
use ferric_cors::constants::{header, method};
use ferric_cors::{Cors, HeaderOp, HeaderSink};
use std::collections::HashMap;

fn requested_headers(cors: &Cors, requested: &str) -> Option<String> {
    let (headers, _status, _end) = assert_preflight(
        preflight_request()
            .origin("https://foo.bar")
            .request_method(method::POST)
            .request_headers(requested)
            .check(cors),
    );
    header_value(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS)
}

#[test]
fn default_allowed_headers_cover_common_request_headers() {
    let cors = cors().build();

    assert_eq!(
        requested_headers(&cors, "accept, content-type, x-requested-with, origin").as_deref(),
        Some("Accept, Content-Type, X-Requested-With, Origin"),
    );
    assert_eq!(requested_headers(&cors, "Authorization"), None);
}

#[test]
fn explicit_allowed_headers_replace_defaults_but_keep_origin() {
    let cors = cors().allowed_headers(["X-Custom"]).build();

    assert_eq!(
        requested_headers(&cors, "X-Custom, Origin").as_deref(),
        Some("X-Custom, Origin"),
    );
    assert_eq!(requested_headers(&cors, "Content-Type"), None);
}

#[test]
fn wildcard_allowed_headers_accept_anything_requested() {
    let cors = cors().allowed_headers(["X-Listed", "*"]).build();

    assert_eq!(
        requested_headers(&cors, "x-anything, AUTHORIZATION").as_deref(),
        Some("X-Anything, Authorization"),
    );
}

#[test]
fn requested_header_duplicates_are_echoed_as_sent() {
    let cors = cors().allowed_headers(["X-Dup"]).build();

    assert_eq!(
        requested_headers(&cors, "x-dup, X-DUP").as_deref(),
        Some("X-Dup, X-Dup"),
    );
}

#[test]
fn credentials_and_exposed_headers_are_honored() {
    let cors = cors()
        .credentials(true)
        .exposed_headers(["X-Response-Time", "X-Trace"])
        .build();

    let headers = assert_actual(actual_request().origin("https://foo.bar").check(&cors));

    assert_eq!(
        header_value(&headers, header::ACCESS_CONTROL_ALLOW_CREDENTIALS).as_deref(),
        Some("true")
    );
    assert_eq!(
        header_value(&headers, header::ACCESS_CONTROL_EXPOSE_HEADERS).as_deref(),
        Some("X-Response-Time, X-Trace")
    );
}

#[test]
fn exposed_headers_are_not_sent_on_preflight() {
    let cors = cors().exposed_headers(["X-Trace"]).build();

    let (headers, _, _) = assert_preflight(
        preflight_request()
            .origin("https://foo.bar")
            .request_method(method::GET)
            .check(&cors),
    );

    assert!(!has_header(&headers, header::ACCESS_CONTROL_EXPOSE_HEADERS));
}

#[test]
fn vary_is_appended_and_allow_headers_are_set() {
    let cors = cors().build();

    let (headers, _, _) = assert_preflight(
        preflight_request()
            .origin("https://foo.bar")
            .request_method(method::GET)
            .check(&cors),
    );

    for mutation in &headers {
        let expected = if mutation.name == header::VARY {
            HeaderOp::Append
        } else {
            HeaderOp::Set
        };
        assert_eq!(mutation.op, expected, "{}", mutation.name);
    }
}

#[test]
fn applying_headers_keeps_existing_vary_values() {
    let cors = cors().origins(["https://foo.bar"]).build();
    let mut response: HashMap<String, Vec<String>> = HashMap::new();
    response.append_header(header::VARY, "Accept-Encoding");
    response.set_header(header::ACCESS_CONTROL_ALLOW_ORIGIN, "https://stale.example");

    let headers = assert_actual(actual_request().origin("https://foo.bar").check(&cors));
    headers.apply_to(&mut response);

    assert_eq!(response[header::VARY], ["Accept-Encoding", "Origin"]);
    assert_eq!(
        response[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        ["https://foo.bar"]
    );
}
