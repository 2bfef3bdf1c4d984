mod common;

use common::asserts::{assert_actual, assert_preflight};
use common::builders::{actual_request, cors, preflight_request};
use common::headers::{has_header, header_value};
use ferric_cors::constants::{header, method};
use ferric_cors::{Wildcard, canonicalize_header_name, parse_header_list};
use proptest::prelude::*;

fn staggered_case(input: &str) -> String {
    input
        .chars()
        .enumerate()
        .map(|(idx, ch)| {
            if idx % 2 == 0 {
                ch.to_ascii_lowercase()
            } else {
                ch.to_ascii_uppercase()
            }
        })
        .collect()
}

fn subdomain_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z0-9]{1,16}").unwrap()
}

fn header_name_strategy() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9-]{0,15}").unwrap()
}

proptest! {
    #[test]
    fn literal_origin_is_echoed_for_arbitrary_subdomain(subdomain in subdomain_strategy()) {
        let origin = format!("https://{}.example.com", subdomain);
        let cors = cors().origins([origin.clone()]).build();

        let headers = assert_actual(actual_request().origin(origin.as_str()).check(&cors));

        prop_assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(origin)
        );
    }

    #[test]
    fn wildcard_origin_accepts_any_subdomain(subdomain in subdomain_strategy()) {
        let origin = format!("https://{}.hybrid.dev", staggered_case(&subdomain));
        let cors = cors().origins(["https://*.hybrid.dev"]).build();

        let headers = assert_actual(actual_request().origin(origin.as_str()).check(&cors));

        prop_assert_eq!(
            header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(origin)
        );
    }

    #[test]
    fn allowed_headers_matching_is_case_insensitive(name in header_name_strategy()) {
        let cors = cors().allowed_headers([name.to_uppercase()]).build();

        let (headers, _, _) = assert_preflight(
            preflight_request()
                .origin("https://prop.test")
                .request_method(method::GET)
                .request_headers(staggered_case(&name))
                .check(&cors),
        );

        prop_assert!(has_header(&headers, header::ACCESS_CONTROL_ALLOW_HEADERS));
    }

    #[test]
    fn canonicalization_is_idempotent(name in header_name_strategy()) {
        let once = canonicalize_header_name(&name);

        prop_assert_eq!(canonicalize_header_name(&once), once.clone());
        prop_assert!(once.eq_ignore_ascii_case(&name));
    }

    #[test]
    fn parsed_header_lists_never_contain_blank_entries(raw in "[a-z ,-]{0,40}") {
        let parsed = parse_header_list(&raw);

        prop_assert!(parsed.iter().all(|name| !name.is_empty() && name.trim() == name));
    }

    #[test]
    fn wildcard_matches_every_prefix_middle_suffix_combination(
        prefix in "[a-z:/.]{0,10}",
        middle in "[a-z.]{0,10}",
        suffix in "[a-z.]{0,10}",
    ) {
        let wildcard = Wildcard::new(prefix.clone(), suffix.clone());

        let candidate = format!("{prefix}{middle}{suffix}");
        prop_assert!(wildcard.matches(&candidate));
    }
}
