#![allow(dead_code)]

use ferric_cors::constants::method;
use ferric_cors::{Cors, CorsDecision, CorsOptions, RequestContext};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

impl CorsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.allowed_origins(origins);
        self
    }

    pub fn origin_fn<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.options = self.options.allow_origin_fn(predicate);
        self
    }

    pub fn origin_request_fn<F>(mut self, predicate: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>, &str) -> bool + Send + Sync + 'static,
    {
        self.options = self.options.allow_origin_request_fn(predicate);
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.allowed_methods(methods);
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.allowed_headers(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = self.options.exposed_headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options = self.options.allow_credentials(enabled);
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.options = self.options.max_age(seconds);
        self
    }

    pub fn passthrough(mut self, enabled: bool) -> Self {
        self.options = self.options.options_passthrough(enabled);
        self
    }

    pub fn options(self) -> CorsOptions {
        self.options
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options)
    }
}

pub struct ActualRequestBuilder {
    method: String,
    origin: Option<String>,
    headers: Vec<(String, String)>,
}

impl ActualRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
            headers: Vec::new(),
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let mut ctx = RequestContext::new(&self.method).headers(&self.headers);
        if let Some(origin) = self.origin.as_deref() {
            ctx = ctx.origin(origin);
        }
        cors.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    method: Option<String>,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the `OPTIONS` verb, e.g. to check case handling.
    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, cors: &Cors) -> CorsDecision {
        let PreflightRequestBuilder {
            method,
            origin,
            request_method,
            request_headers,
        } = self;

        let ctx = RequestContext {
            method: method.as_deref().unwrap_or(method::OPTIONS),
            origin: origin.as_deref(),
            access_control_request_method: request_method.as_deref(),
            access_control_request_headers: request_headers.as_deref(),
            headers: None,
        };
        cors.check(&ctx)
    }
}

pub fn cors() -> CorsBuilder {
    CorsBuilder::new()
}

pub fn actual_request() -> ActualRequestBuilder {
    ActualRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
