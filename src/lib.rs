mod allowed_headers;
mod allowed_methods;
pub mod constants;
mod context;
mod cors;
mod exposed_headers;
mod handler;
mod header_builder;
mod header_name;
mod headers;
mod logger;
mod options;
mod origin;
mod policy;
mod result;
mod util;
mod wildcard;

pub use context::{HeaderSource, RequestContext};
pub use cors::Cors;
pub use handler::Handled;
pub use header_name::{canonicalize_header_name, parse_header_list};
pub use headers::{HeaderMutation, HeaderOp, HeaderSink, Headers};
pub use logger::{Logger, TracingLogger};
pub use options::{CorsOptions, ValidationError};
pub use origin::{OriginPredicateFn, OriginRequestPredicateFn};
pub use result::{ActualResult, CorsDecision, Disposition, PreflightResult};
pub use util::{normalize_lower, normalize_upper};
pub use wildcard::Wildcard;
