use crate::constants::header;
use crate::header_name::canonicalize_header_name;
use indexmap::IndexSet;
use once_cell::sync::Lazy;

static DEFAULT_ALLOWED_HEADERS: Lazy<IndexSet<String>> = Lazy::new(|| {
    [
        header::ORIGIN,
        header::ACCEPT,
        header::CONTENT_TYPE,
        header::X_REQUESTED_WITH,
    ]
    .into_iter()
    .map(String::from)
    .collect()
});

/// Request headers a preflight may ask for.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) enum AllowedHeaders {
    /// Canonical names; `Origin` is always present.
    List(IndexSet<String>),
    Any,
}

impl AllowedHeaders {
    /// No entries selects the default set. A `*` entry allows everything.
    pub(crate) fn from_config(values: &[String]) -> Self {
        if values.is_empty() {
            return Self::List(DEFAULT_ALLOWED_HEADERS.clone());
        }
        if values.iter().any(|value| value == "*") {
            return Self::Any;
        }

        Self::List(
            values
                .iter()
                .map(|value| value.as_str())
                .chain([header::ORIGIN])
                .map(canonicalize_header_name)
                .collect(),
        )
    }

    /// All-or-nothing: one unknown header rejects the whole request.
    pub(crate) fn allows_headers(&self, requested: &[String]) -> bool {
        match self {
            Self::Any => true,
            Self::List(allowed) => requested
                .iter()
                .all(|name| allowed.contains(&canonicalize_header_name(name))),
        }
    }
}

impl Default for AllowedHeaders {
    fn default() -> Self {
        Self::List(DEFAULT_ALLOWED_HEADERS.clone())
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
