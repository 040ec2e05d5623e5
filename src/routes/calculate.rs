use axum::{routing::post, Router};

use crate::handler::error::method_not_allowed;
use crate::handler::form::calculate;

pub fn router() -> Router {
    Router::new().route("/calculate", post(calculate).fallback(method_not_allowed))
}
