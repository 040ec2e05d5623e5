use axum::{
    extract::{Form, Query},
    response::Html,
};

use crate::api_models::{CalculateForm, IndexQuery, LangQuery, Notice, ScanMode};
use crate::i18n::Lang;
use crate::services::submission;
use crate::views::{render_page, FormView};

/// 渲染表单（空表单 / 已选模式待输入），不做计算
///
/// 查询串无法解析时（如重复的 lang）按默认值处理
pub async fn index(query: Option<Query<IndexQuery>>) -> Html<String> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let lang = Lang::from_code(query.lang.as_deref());
    let mut view = FormView::new(lang, ScanMode::from_code(query.mode.as_deref()));

    if let Some(notice) = Notice::from_code(query.notice.as_deref()) {
        let t = lang.strings();
        view.messages.push(
            match notice {
                Notice::MethodNotAllowed => t.notice_method,
                Notice::Unexpected => t.notice_unexpected,
            }
            .to_string(),
        );
    }

    Html(render_page(&view))
}

/// 校验并计算提交的表单，返回带结果或错误提示的页面
pub async fn calculate(
    query: Option<Query<LangQuery>>,
    form: Option<Form<CalculateForm>>,
) -> Html<String> {
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let lang = Lang::from_code(query.lang.as_deref());
    let form = form.map(|Form(f)| f).unwrap_or_default();
    let mode = form.scan_mode();

    let mut view = FormView::new(lang, mode);
    match submission::evaluate(&form) {
        Ok(Some(result)) => {
            tracing::info!(mode = ?mode, result = %result, "reading percentage calculated");
            view.result = Some(result);
        }
        Ok(None) => {
            tracing::debug!(mode = ?form.mode, "no scan mode selected, nothing to calculate");
        }
        Err(e) => {
            tracing::warn!(mode = ?mode, "submission rejected: {}", e);
            view.messages.push(e.message(lang.strings()));
        }
    }
    view.values = form;

    Html(render_page(&view))
}
