use crate::context::RequestContext;
use crate::util::normalize_lower;
use crate::wildcard::Wildcard;
use indexmap::IndexSet;
use std::sync::Arc;

/// Decides from the `Origin` value alone.
///
/// Predicates run synchronously on the request path with no deadline; a slow
/// predicate delays every cross-origin request it sees.
pub type OriginPredicateFn = dyn Fn(&str) -> bool + Send + Sync;

/// Decides from the request and the `Origin` value. Same latency caveat as
/// [`OriginPredicateFn`].
pub type OriginRequestPredicateFn = dyn for<'a> Fn(&RequestContext<'a>, &str) -> bool + Send + Sync;

/// Caller-supplied origin check, selected once at construction.
#[derive(Clone)]
pub(crate) enum OriginAuthorizer {
    Origin(Arc<OriginPredicateFn>),
    Request(Arc<OriginRequestPredicateFn>),
}

impl OriginAuthorizer {
    pub(crate) fn authorize(&self, request: &RequestContext<'_>, origin: &str) -> bool {
        match self {
            OriginAuthorizer::Origin(predicate) => predicate(origin),
            OriginAuthorizer::Request(predicate) => predicate(request, origin),
        }
    }
}

/// Normalized origin configuration. Exactly one mode is active.
#[derive(Clone)]
pub(crate) enum OriginPolicy {
    Any,
    List {
        literals: IndexSet<String>,
        wildcards: Vec<Wildcard>,
    },
    /// `any` records a `*` in the configured list; the predicate still decides admission.
    Predicate {
        authorizer: OriginAuthorizer,
        any: bool,
    },
}

impl OriginPolicy {
    /// A request-aware predicate beats a plain one, and either beats the list.
    /// An empty list, or one containing `*`, allows every origin. Under a
    /// predicate a `*` entry only turns the echoed origin into `*`.
    pub(crate) fn from_config(
        allowed_origins: &[String],
        allow_origin_fn: Option<&Arc<OriginPredicateFn>>,
        allow_origin_request_fn: Option<&Arc<OriginRequestPredicateFn>>,
    ) -> Self {
        let authorizer = match (allow_origin_request_fn, allow_origin_fn) {
            (Some(predicate), _) => Some(OriginAuthorizer::Request(Arc::clone(predicate))),
            (None, Some(predicate)) => Some(OriginAuthorizer::Origin(Arc::clone(predicate))),
            (None, None) => None,
        };
        if let Some(authorizer) = authorizer {
            return Self::Predicate {
                authorizer,
                any: allowed_origins.iter().any(|origin| origin == "*"),
            };
        }
        if allowed_origins.is_empty() {
            return Self::Any;
        }

        let mut literals = IndexSet::new();
        let mut wildcards = Vec::new();
        for origin in allowed_origins {
            let origin = normalize_lower(origin);
            if origin == "*" {
                return Self::Any;
            }
            match Wildcard::parse(&origin) {
                Some(wildcard) => wildcards.push(wildcard),
                None => {
                    literals.insert(origin);
                }
            }
        }

        Self::List {
            literals,
            wildcards,
        }
    }

    /// Whether responses carry `*` instead of the request origin.
    pub(crate) fn is_any(&self) -> bool {
        matches!(
            self,
            OriginPolicy::Any | OriginPolicy::Predicate { any: true, .. }
        )
    }

    pub(crate) fn is_allowed(&self, request: &RequestContext<'_>, origin: &str) -> bool {
        match self {
            OriginPolicy::Predicate { authorizer, .. } => authorizer.authorize(request, origin),
            OriginPolicy::Any => true,
            OriginPolicy::List {
                literals,
                wildcards,
            } => {
                let origin = normalize_lower(origin);
                literals.contains(&origin)
                    || wildcards.iter().any(|wildcard| wildcard.matches(&origin))
            }
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
