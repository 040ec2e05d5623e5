use axum::{routing::get, Router};

use crate::handler::error::method_not_allowed;
use crate::handler::form::index;

pub fn router() -> Router {
    Router::new()
        .route("/", get(index).fallback(method_not_allowed))
        .route("/healthz", get(healthz))
}

async fn healthz() -> &'static str {
    "ok"
}
