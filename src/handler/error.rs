use axum::{
    extract::Query,
    response::{IntoResponse, Redirect, Response},
};

use crate::api_models::{LangQuery, Notice};
use crate::i18n::Lang;

/// 请求级错误：统一重定向回表单首页，并通过 `notice` 参数带上提示
#[derive(Debug)]
pub enum AppError {
    MethodNotAllowed(Lang),
    Unexpected(Lang),
}

impl AppError {
    fn location(&self) -> String {
        let (lang, notice) = match self {
            AppError::MethodNotAllowed(lang) => (lang, Notice::MethodNotAllowed),
            AppError::Unexpected(lang) => (lang, Notice::Unexpected),
        };
        format!("/?lang={}&notice={}", lang.code(), notice.code())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Redirect::to(&self.location()).into_response()
    }
}

/// 路由匹配但方法不允许时的兜底处理
pub async fn method_not_allowed(query: Option<Query<LangQuery>>) -> AppError {
    let lang = Lang::from_code(query.as_ref().and_then(|Query(q)| q.lang.as_deref()));
    tracing::warn!("method not allowed, redirecting to form");
    AppError::MethodNotAllowed(lang)
}
