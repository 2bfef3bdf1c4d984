use crate::constants::PREFLIGHT_STATUS;
use crate::context::RequestContext;
use crate::header_builder::HeaderBuilder;
use crate::header_name::parse_header_list;
use crate::headers::Headers;
use crate::options::{CorsOptions, ValidationError};
use crate::policy::CorsPolicy;
use crate::result::{ActualResult, CorsDecision, PreflightResult};

/// CORS decision engine built from [`CorsOptions`].
///
/// Immutable after construction, so one instance can be shared across threads
/// and evaluated concurrently.
#[derive(Clone)]
pub struct Cors {
    policy: CorsPolicy,
}

impl Cors {
    /// Builds the engine. Malformed configuration is accepted and interpreted leniently;
    /// use [`Cors::try_new`] to reject it instead.
    pub fn new(options: CorsOptions) -> Self {
        Self {
            policy: CorsPolicy::from_options(options),
        }
    }

    pub fn try_new(options: CorsOptions) -> Result<Self, ValidationError> {
        options.validate()?;
        Ok(Self::new(options))
    }

    pub fn allow_all() -> Self {
        Self::new(CorsOptions::allow_all())
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        if request.is_preflight() {
            self.policy.log(format_args!("handler: preflight request"));
            CorsDecision::Preflight(self.process_preflight(request))
        } else {
            self.policy.log(format_args!("handler: actual request"));
            CorsDecision::Actual(self.process_actual(request))
        }
    }

    fn process_preflight(&self, request: &RequestContext<'_>) -> PreflightResult {
        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = Headers::new();
        headers.extend(builder.build_preflight_vary());
        self.evaluate_preflight(request, &builder, &mut headers);

        PreflightResult {
            headers,
            status: PREFLIGHT_STATUS,
            end_response: !self.policy.options_passthrough,
        }
    }

    fn evaluate_preflight(
        &self,
        request: &RequestContext<'_>,
        builder: &HeaderBuilder<'_>,
        headers: &mut Headers,
    ) {
        let Some(origin) = request.origin.filter(|origin| !origin.is_empty()) else {
            self.policy
                .log(format_args!("  preflight aborted: empty origin"));
            return;
        };

        if !self.is_origin_allowed(request, origin) {
            self.policy.log(format_args!(
                "  preflight aborted: origin '{origin}' not allowed"
            ));
            return;
        }

        let requested_method = request.access_control_request_method.unwrap_or_default();
        if !self.is_method_allowed(requested_method) {
            self.policy.log(format_args!(
                "  preflight aborted: method '{requested_method}' not allowed"
            ));
            return;
        }

        let requested_headers =
            parse_header_list(request.access_control_request_headers.unwrap_or_default());
        if !self.are_headers_allowed(&requested_headers) {
            self.policy.log(format_args!(
                "  preflight aborted: headers {requested_headers:?} not allowed"
            ));
            return;
        }

        headers.extend(builder.build_origin_header(origin));
        headers.extend(builder.build_methods_header(requested_method));
        headers.extend(builder.build_allowed_headers(&requested_headers));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_max_age_header());

        self.policy
            .log(format_args!("  preflight response headers: {headers:?}"));
    }

    fn process_actual(&self, request: &RequestContext<'_>) -> ActualResult {
        let builder = HeaderBuilder::new(&self.policy);
        let mut headers = Headers::new();
        headers.extend(builder.build_actual_vary());
        self.evaluate_actual(request, &builder, &mut headers);

        ActualResult { headers }
    }

    fn evaluate_actual(
        &self,
        request: &RequestContext<'_>,
        builder: &HeaderBuilder<'_>,
        headers: &mut Headers,
    ) {
        let Some(origin) = request.origin.filter(|origin| !origin.is_empty()) else {
            self.policy.log(format_args!(
                "  actual request no headers added: missing origin"
            ));
            return;
        };

        if !self.is_origin_allowed(request, origin) {
            self.policy.log(format_args!(
                "  actual request no headers added: origin '{origin}' not allowed"
            ));
            return;
        }

        // Actual requests are held to the method allow-list as well.
        if !self.is_method_allowed(request.method) {
            self.policy.log(format_args!(
                "  actual request no headers added: method '{}' not allowed",
                request.method
            ));
            return;
        }

        headers.extend(builder.build_origin_header(origin));
        headers.extend(builder.build_exposed_headers());
        headers.extend(builder.build_credentials_header());

        self.policy
            .log(format_args!("  actual response added headers: {headers:?}"));
    }

    /// Predicates are consulted first and have the final word.
    pub fn is_origin_allowed(&self, request: &RequestContext<'_>, origin: &str) -> bool {
        self.policy.origins.is_allowed(request, origin)
    }

    pub fn is_method_allowed(&self, method: &str) -> bool {
        self.policy.methods.allows_method(method)
    }

    pub fn are_headers_allowed(&self, requested: &[String]) -> bool {
        self.policy.allowed_headers.allows_headers(requested)
    }
}

impl Default for Cors {
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
