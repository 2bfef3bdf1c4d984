use crate::headers::Headers;

/// What the host framework does after applying the headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Run the downstream handler.
    Continue,
    /// Answer immediately with this status; the downstream handler never runs.
    Respond(u16),
}

/// Outcome of a preflight request.
#[derive(Debug, Clone)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
    pub end_response: bool,
}

/// Outcome of any non-preflight request.
#[derive(Debug, Clone)]
pub struct ActualResult {
    pub headers: Headers,
}

/// A rejected request is not an error: it simply carries no `Access-Control-Allow-*` headers.
#[derive(Debug, Clone)]
pub enum CorsDecision {
    Preflight(PreflightResult),
    Actual(ActualResult),
}

impl CorsDecision {
    pub fn is_preflight(&self) -> bool {
        matches!(self, CorsDecision::Preflight(_))
    }

    pub fn headers(&self) -> &Headers {
        match self {
            CorsDecision::Preflight(result) => &result.headers,
            CorsDecision::Actual(result) => &result.headers,
        }
    }

    pub fn into_headers(self) -> Headers {
        match self {
            CorsDecision::Preflight(result) => result.headers,
            CorsDecision::Actual(result) => result.headers,
        }
    }

    pub fn disposition(&self) -> Disposition {
        match self {
            CorsDecision::Preflight(result) if result.end_response => {
                Disposition::Respond(result.status)
            }
            _ => Disposition::Continue,
        }
    }
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
