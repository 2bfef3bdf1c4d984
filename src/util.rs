/// `tchar` punctuation from RFC 9110; letters and digits are checked separately.
const TOKEN_PUNCTUATION: &[u8] = b"!#$%&'*+-.^_`|~";

#[doc(hidden)]
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        value.to_ascii_lowercase()
    } else {
        value.to_lowercase()
    }
}

#[doc(hidden)]
pub fn normalize_upper(value: &str) -> String {
    if value.is_ascii() {
        value.to_ascii_uppercase()
    } else {
        value.to_uppercase()
    }
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value
            .bytes()
            .all(|byte| byte.is_ascii_alphanumeric() || TOKEN_PUNCTUATION.contains(&byte))
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
