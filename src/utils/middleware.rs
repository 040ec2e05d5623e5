use axum::{
    extract::{Query, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::api_models::LangQuery;
use crate::handler::error::AppError;
use crate::i18n::Lang;

/// 5xx 响应（包括 panic 被转换后的 500）统一重定向回表单，保留 lang 参数
pub async fn redirect_server_errors(request: Request, next: Next) -> Response {
    let lang = Query::<LangQuery>::try_from_uri(request.uri())
        .ok()
        .map(|Query(q)| Lang::from_code(q.lang.as_deref()))
        .unwrap_or_default();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;
    if response.status().is_server_error() {
        tracing::error!(%path, status = %response.status(), "server error, redirecting to form");
        return AppError::Unexpected(lang).into_response();
    }
    response
}
