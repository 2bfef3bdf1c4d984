use std::sync::Arc;

use ferric_cors::{Cors, CorsOptions, ValidationError};

pub type SharedCors = Arc<Cors>;

#[derive(Clone)]
pub struct AppState {
    pub cors: SharedCors,
    pub greeting: &'static str,
}

pub fn build_state() -> Result<AppState, ValidationError> {
    let options = CorsOptions::new()
        .allowed_origins(["http://api.example.com", "http://localhost:*"])
        .allowed_methods(["GET", "POST"])
        .allowed_headers(["Content-Type", "X-Requested-With", "X-Example-Trace"])
        .exposed_headers(["X-Example-Trace"])
        .allow_credentials(true)
        .max_age(600)
        .debug(true);

    let cors = Arc::new(Cors::try_new(options)?);

    Ok(AppState {
        cors,
        greeting: "Welcome to the Axum CORS example!",
    })
}

pub mod middleware;
