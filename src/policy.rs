use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::exposed_headers::ExposedHeaders;
use crate::logger::{Logger, TracingLogger};
use crate::options::CorsOptions;
use crate::origin::OriginPolicy;
use std::fmt;
use std::sync::Arc;

/// Normalized, read-only form of [`CorsOptions`], built once per [`Cors`](crate::Cors).
#[derive(Clone)]
pub(crate) struct CorsPolicy {
    pub(crate) origins: OriginPolicy,
    pub(crate) methods: AllowedMethods,
    pub(crate) allowed_headers: AllowedHeaders,
    pub(crate) exposed_headers: ExposedHeaders,
    pub(crate) allow_credentials: bool,
    pub(crate) max_age: i64,
    pub(crate) options_passthrough: bool,
    pub(crate) logger: Option<Arc<dyn Logger>>,
}

impl CorsPolicy {
    /// Never fails: odd input is interpreted, not rejected.
    pub(crate) fn from_options(options: CorsOptions) -> Self {
        let logger = match options.logger {
            Some(logger) => Some(logger),
            None if options.debug => Some(Arc::new(TracingLogger) as Arc<dyn Logger>),
            None => None,
        };

        Self {
            origins: OriginPolicy::from_config(
                &options.allowed_origins,
                options.allow_origin_fn.as_ref(),
                options.allow_origin_request_fn.as_ref(),
            ),
            methods: AllowedMethods::from_config(&options.allowed_methods),
            allowed_headers: AllowedHeaders::from_config(&options.allowed_headers),
            exposed_headers: ExposedHeaders::from_config(&options.exposed_headers),
            allow_credentials: options.allow_credentials,
            max_age: options.max_age,
            options_passthrough: options.options_passthrough,
            logger,
        }
    }

    pub(crate) fn log(&self, message: fmt::Arguments<'_>) {
        if let Some(logger) = &self.logger {
            logger.log(message);
        }
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
