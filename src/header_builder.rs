use crate::constants::header;
use crate::headers::Headers;
use crate::policy::CorsPolicy;
use crate::util::normalize_upper;

pub(crate) struct HeaderBuilder<'a> {
    policy: &'a CorsPolicy,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(policy: &'a CorsPolicy) -> Self {
        Self { policy }
    }

    /// Added before any check so caches keyed on these request headers stay correct.
    pub(crate) fn build_preflight_vary(&self) -> Headers {
        let mut headers = Headers::with_estimate(3);
        headers.append(header::VARY, header::ORIGIN);
        headers.append(header::VARY, header::ACCESS_CONTROL_REQUEST_METHOD);
        headers.append(header::VARY, header::ACCESS_CONTROL_REQUEST_HEADERS);
        headers
    }

    pub(crate) fn build_actual_vary(&self) -> Headers {
        let mut headers = Headers::with_estimate(1);
        headers.append(header::VARY, header::ORIGIN);
        headers
    }

    /// `*` for an open policy, otherwise the request origin exactly as sent.
    pub(crate) fn build_origin_header(&self, origin: &str) -> Headers {
        let mut headers = Headers::with_estimate(1);
        if self.policy.origins.is_any() {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*");
        } else {
            headers.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        }
        headers
    }

    /// Echoes the requested method rather than the whole allow-list.
    pub(crate) fn build_methods_header(&self, requested_method: &str) -> Headers {
        let mut headers = Headers::with_estimate(1);
        headers.set(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            normalize_upper(requested_method),
        );
        headers
    }

    /// Echoes the requested headers rather than the configured list.
    pub(crate) fn build_allowed_headers(&self, requested: &[String]) -> Headers {
        if requested.is_empty() {
            return Headers::default();
        }

        let mut headers = Headers::with_estimate(1);
        headers.set(header::ACCESS_CONTROL_ALLOW_HEADERS, requested.join(", "));
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> Headers {
        if !self.policy.allow_credentials {
            return Headers::default();
        }

        let mut headers = Headers::with_estimate(1);
        headers.set(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
        headers
    }

    pub(crate) fn build_max_age_header(&self) -> Headers {
        if self.policy.max_age <= 0 {
            return Headers::default();
        }

        let mut headers = Headers::with_estimate(1);
        headers.set(
            header::ACCESS_CONTROL_MAX_AGE,
            self.policy.max_age.to_string(),
        );
        headers
    }

    pub(crate) fn build_exposed_headers(&self) -> Headers {
        match self.policy.exposed_headers.header_value() {
            Some(value) => {
                let mut headers = Headers::with_estimate(1);
                headers.set(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
                headers
            }
            None => Headers::default(),
        }
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
