use crate::context::RequestContext;
use crate::cors::Cors;
use crate::headers::Headers;
use crate::result::Disposition;

/// What [`Cors::handle`] did with a request.
#[derive(Debug)]
pub enum Handled<R> {
    /// `next` ran; apply `headers` to its response.
    Forwarded { headers: Headers, response: R },
    /// `next` did not run; answer with `status` and `headers`.
    Responded { headers: Headers, status: u16 },
}

impl<R> Handled<R> {
    pub fn headers(&self) -> &Headers {
        match self {
            Handled::Forwarded { headers, .. } | Handled::Responded { headers, .. } => headers,
        }
    }

    pub fn is_forwarded(&self) -> bool {
        matches!(self, Handled::Forwarded { .. })
    }
}

impl Cors {
    /// Evaluates `request` and calls `next` unless a preflight is answered here.
    ///
    /// `next` may return a future, which lets async frameworks await it afterwards.
    pub fn handle<R, F>(&self, request: &RequestContext<'_>, next: F) -> Handled<R>
    where
        F: FnOnce() -> R,
    {
        let decision = self.check(request);
        match decision.disposition() {
            Disposition::Respond(status) => Handled::Responded {
                headers: decision.into_headers(),
                status,
            },
            Disposition::Continue => Handled::Forwarded {
                headers: decision.into_headers(),
                response: next(),
            },
        }
    }
}

#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;
