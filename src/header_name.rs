use crate::util::is_http_token;

/// Returns the canonical form of a header name: every hyphen-separated word
/// starts with an uppercase letter and continues in lowercase
/// (`x-requested-with` becomes `X-Requested-With`).
///
/// Names that are not valid HTTP tokens are returned unchanged.
pub fn canonicalize_header_name(name: &str) -> String {
    if !is_http_token(name) {
        return name.to_owned();
    }

    let mut canonical = String::with_capacity(name.len());
    let mut upper = true;
    for byte in name.bytes() {
        let ch = if upper {
            byte.to_ascii_uppercase()
        } else {
            byte.to_ascii_lowercase()
        };
        canonical.push(char::from(ch));
        upper = byte == b'-';
    }
    canonical
}

/// Parses an `Access-Control-Request-Headers` style value into canonical names.
///
/// Tokens are trimmed, empty tokens are dropped and order is kept as sent.
/// Duplicates are not removed. An empty or blank value yields an empty list.
pub fn parse_header_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(canonicalize_header_name)
        .collect()
}

#[cfg(test)]
#[path = "header_name_test.rs"]
mod header_name_test;
