use std::collections::{BTreeMap, HashMap};

/// Read access to the full set of request headers, for request-aware origin predicates.
pub trait HeaderSource {
    /// Looks a header up by name, ignoring ASCII case.
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for HashMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str).or_else(|| {
            self.iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, value)| value.as_str())
        })
    }
}

impl HeaderSource for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl<const N: usize> HeaderSource for [(&str, &str); N] {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| *value)
    }
}

impl HeaderSource for Vec<(String, String)> {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// The parts of an inbound request the decision engine reads.
///
/// Header fields are `None` when the header is absent.
#[derive(Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
    pub headers: Option<&'a dyn HeaderSource>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            origin: None,
            access_control_request_method: None,
            access_control_request_headers: None,
            headers: None,
        }
    }

    pub fn origin(mut self, origin: &'a str) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn access_control_request_method(mut self, method: &'a str) -> Self {
        self.access_control_request_method = Some(method);
        self
    }

    pub fn access_control_request_headers(mut self, headers: &'a str) -> Self {
        self.access_control_request_headers = Some(headers);
        self
    }

    pub fn headers(mut self, headers: &'a dyn HeaderSource) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Reads any request header through the attached [`HeaderSource`].
    pub fn header(&self, name: &str) -> Option<&'a str> {
        self.headers.and_then(|source| source.header(name))
    }

    /// `OPTIONS` carrying a non-empty `Access-Control-Request-Method`.
    ///
    /// Method names are case-sensitive, so `options` is an actual request.
    pub fn is_preflight(&self) -> bool {
        self.method == crate::constants::method::OPTIONS
            && self
                .access_control_request_method
                .is_some_and(|value| !value.is_empty())
    }
}

impl std::fmt::Debug for RequestContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestContext")
            .field("method", &self.method)
            .field("origin", &self.origin)
            .field(
                "access_control_request_method",
                &self.access_control_request_method,
            )
            .field(
                "access_control_request_headers",
                &self.access_control_request_headers,
            )
            .field("headers", &self.headers.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
