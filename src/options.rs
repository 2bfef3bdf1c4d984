use crate::constants::method;
use crate::context::RequestContext;
use crate::logger::Logger;
use crate::origin::{OriginPredicateFn, OriginRequestPredicateFn};
use crate::util::is_http_token;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Raw CORS configuration. Read once by [`Cors::new`](crate::Cors::new).
///
/// Every field left at its default picks the permissive behaviour: any origin,
/// the simple methods (GET, POST, HEAD) and a small set of common request headers.
#[derive(Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct CorsOptions {
    /// Literal origins, origins with a single `*`, or `*` alone for any origin.
    pub allowed_origins: Vec<String>,
    /// Decides admission instead of `allowed_origins` when set; a listed `*` still
    /// answers with `Access-Control-Allow-Origin: *`.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub allow_origin_fn: Option<Arc<OriginPredicateFn>>,
    /// Overrides both `allowed_origins` and `allow_origin_fn` when set.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub allow_origin_request_fn: Option<Arc<OriginRequestPredicateFn>>,
    pub allowed_methods: Vec<String>,
    /// `*` allows any request header. `Origin` is always added.
    pub allowed_headers: Vec<String>,
    pub exposed_headers: Vec<String>,
    /// Seconds a preflight may be cached. Zero or less omits the header.
    pub max_age: i64,
    pub allow_credentials: bool,
    /// Hand preflights to the next handler instead of answering them.
    pub options_passthrough: bool,
    /// Log decisions through [`TracingLogger`](crate::TracingLogger) when no `logger` is set.
    pub debug: bool,
    /// Receives decision logs whenever set, regardless of `debug`.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub logger: Option<Arc<dyn Logger>>,
}

impl CorsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Any origin, the common methods, any header, no credentials.
    pub fn allow_all() -> Self {
        Self::new()
            .allowed_origins(["*"])
            .allowed_methods([
                method::HEAD,
                method::GET,
                method::POST,
                method::PUT,
                method::PATCH,
                method::DELETE,
            ])
            .allowed_headers(["*"])
    }

    pub fn allowed_origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_origins = origins.into_iter().map(Into::into).collect();
        self
    }

    pub fn allow_origin_fn<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.allow_origin_fn = Some(Arc::new(predicate));
        self
    }

    pub fn allow_origin_request_fn<F>(mut self, predicate: F) -> Self
    where
        F: for<'a> Fn(&RequestContext<'a>, &str) -> bool + Send + Sync + 'static,
    {
        self.allow_origin_request_fn = Some(Arc::new(predicate));
        self
    }

    pub fn allowed_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_methods = methods.into_iter().map(Into::into).collect();
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = seconds;
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = enabled;
        self
    }

    pub fn options_passthrough(mut self, enabled: bool) -> Self {
        self.options_passthrough = enabled;
        self
    }

    pub fn debug(mut self, enabled: bool) -> Self {
        self.debug = enabled;
        self
    }

    pub fn logger<L>(mut self, logger: L) -> Self
    where
        L: Logger + 'static,
    {
        self.logger = Some(Arc::new(logger));
        self
    }

    /// Rejects configuration that [`Cors::new`](crate::Cors::new) would otherwise
    /// accept and interpret leniently.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allowed_origins.iter().any(|origin| origin != "*")
            && (self.allow_origin_fn.is_some() || self.allow_origin_request_fn.is_some())
        {
            return Err(ValidationError::OriginsShadowedByPredicate);
        }

        for origin in &self.allowed_origins {
            if origin.matches('*').count() > 1 {
                return Err(ValidationError::MultipleWildcards(origin.clone()));
            }
        }

        for method in &self.allowed_methods {
            if !is_http_token(method) {
                return Err(ValidationError::InvalidMethod(method.clone()));
            }
        }

        let headers = self
            .allowed_headers
            .iter()
            .filter(|name| name.as_str() != "*")
            .chain(self.exposed_headers.iter());
        for name in headers {
            if !is_http_token(name) {
                return Err(ValidationError::InvalidHeaderName(name.clone()));
            }
        }

        Ok(())
    }
}

impl fmt::Debug for CorsOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorsOptions")
            .field("allowed_origins", &self.allowed_origins)
            .field("allow_origin_fn", &self.allow_origin_fn.is_some())
            .field(
                "allow_origin_request_fn",
                &self.allow_origin_request_fn.is_some(),
            )
            .field("allowed_methods", &self.allowed_methods)
            .field("allowed_headers", &self.allowed_headers)
            .field("exposed_headers", &self.exposed_headers)
            .field("max_age", &self.max_age)
            .field("allow_credentials", &self.allow_credentials)
            .field("options_passthrough", &self.options_passthrough)
            .field("debug", &self.debug)
            .field("logger", &self.logger.is_some())
            .finish()
    }
}

/// Configuration rejected by [`CorsOptions::validate`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("origin '{0}' contains more than one '*'; only one wildcard is supported per origin")]
    MultipleWildcards(String),
    #[error("method '{0}' is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("header name '{0}' is not a valid HTTP token")]
    InvalidHeaderName(String),
    #[error("allowed origins other than '*' are ignored when an origin predicate is configured")]
    OriginsShadowedByPredicate,
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
