use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::header::CONTENT_TYPE;
use hyper::http::{Method, StatusCode};
use hyper::service::Service;
use hyper::{Request, Response};

use crate::cors::SharedAppState;
use crate::cors::middleware::CorsBody;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

const TRACE_HEADER: &str = "x-example-trace";

#[derive(Clone)]
pub struct Router {
    state: SharedAppState,
}

pub fn router(state: SharedAppState) -> Router {
    Router { state }
}

impl Service<Request<Incoming>> for Router {
    type Response = Response<CorsBody>;
    type Error = Infallible;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let response = match (req.method(), req.uri().path()) {
            (&Method::GET, "/greet") => text(StatusCode::OK, self.state.greeting.to_string()),
            (&Method::POST, "/trace") => trace(&req),
            _ => text(StatusCode::NOT_FOUND, "Not Found".to_string()),
        };

        Box::pin(async move { Ok(response) })
    }
}

fn trace(req: &Request<Incoming>) -> Response<CorsBody> {
    let trace_id = req
        .headers()
        .get(TRACE_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("none")
        .to_string();

    let mut response = text(StatusCode::OK, trace_id.clone());
    if let Ok(value) = trace_id.parse() {
        response.headers_mut().insert(TRACE_HEADER, value);
    }
    response
}

fn text(status: StatusCode, body: String) -> Response<CorsBody> {
    Response::builder()
        .status(status)
        .header(CONTENT_TYPE, "text/plain; charset=utf-8")
        .body(Full::new(Bytes::from(body)))
        .expect("valid response")
}
