use std::sync::Arc;

use ferric_cors::{Cors, CorsOptions, ValidationError};

pub type SharedCors = Arc<Cors>;
pub type SharedAppState = Arc<AppState>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<SharedAppState, ValidationError> {
    let options = CorsOptions::new()
        .allow_origin_fn(|origin: &str| {
            origin == "http://api.example.com" || origin.starts_with("http://localhost:")
        })
        .allowed_methods(["GET", "POST"])
        .allowed_headers(["Content-Type", "X-Requested-With", "X-Example-Trace"])
        .exposed_headers(["X-Example-Trace"])
        .allow_credentials(true)
        .max_age(600)
        .debug(true);

    let cors = Arc::new(Cors::try_new(options)?);

    Ok(Arc::new(AppState {
        cors,
        greeting: "Welcome to the Hyper CORS example!",
    }))
}

pub mod middleware;
