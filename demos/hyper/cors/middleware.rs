use std::future::Future;
use std::pin::Pin;

use ferric_cors::constants::header;
use ferric_cors::{Handled, HeaderSink, RequestContext};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedCors;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper middleware that mirrors the pattern described in the
/// official "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct FerricCors<S> {
    inner: S,
    cors: SharedCors,
}

impl<S> FerricCors<S> {
    pub fn new(cors: SharedCors, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for FerricCors<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let owned_ctx = OwnedRequestContext::from_request(&req);
        let handled = self
            .cors
            .handle(&owned_ctx.as_request_context(), || self.inner.call(req));

        match handled {
            Handled::Forwarded { headers, response } => Box::pin(async move {
                let mut response = response.await?;
                headers.apply_to(&mut ResponseHeaders(response.headers_mut()));
                Ok(response)
            }),
            Handled::Responded { headers, status } => {
                let mut response = Response::new(Full::new(Bytes::new()));
                *response.status_mut() =
                    StatusCode::from_u16(status).unwrap_or(StatusCode::NO_CONTENT);
                headers.apply_to(&mut ResponseHeaders(response.headers_mut()));
                Box::pin(async move { Ok(response) })
            }
        }
    }
}

struct ResponseHeaders<'a>(&'a mut HeaderMap);

impl HeaderSink for ResponseHeaders<'_> {
    fn append_header(&mut self, name: &str, value: &str) {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::from_str(value)) {
            self.0.append(name, value);
        }
    }

    fn set_header(&mut self, name: &str, value: &str) {
        if let (Ok(name), Ok(value)) = (HeaderName::try_from(name), HeaderValue::from_str(value)) {
            self.0.insert(name, value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request<Incoming>) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
            headers: None,
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
