use axum::Router;

mod calculate;
mod root;

pub fn build_routes() -> Router {
    Router::new()
        // 表单页与健康检查
        .merge(root::router())
        // 表单提交
        .merge(calculate::router())
}
