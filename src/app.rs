use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::Level;

use crate::routes;
use crate::utils::config::ServerConfig;
use crate::utils::middleware;

pub fn build_app(cfg: &ServerConfig) -> Router {
    let router = routes::build_routes().nest_service("/static", ServeDir::new(&cfg.static_dir));
    with_layers(router)
}

/// panic -> 500 -> 重定向，最外层为请求追踪
fn with_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::new())
        .layer(axum::middleware::from_fn(middleware::redirect_server_errors))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method, Request, StatusCode};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use std::path::PathBuf;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let cfg = ServerConfig {
            addr: "127.0.0.1:0".parse().unwrap(),
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
        };
        build_app(&cfg)
    }

    async fn body_text(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    async fn post_form(uri: &str, body: &str) -> (StatusCode, String) {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        (status, body_text(response).await)
    }

    async fn get_page(uri: &str) -> axum::response::Response {
        test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    const EACH_OK: &str = "mode=each&man_clothing=10&man_shoes=5&man_perfume=0\
        &woman_clothing=10&woman_shoes=5&woman_perfume=0\
        &kids_clothing=0&kids_shoes=0&kids_perfume=0&retail=60";

    #[tokio::test]
    async fn index_renders_empty_form() {
        let response = get_page("/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("Reading % Calculator (ZARA)"));
        assert!(!html.contains("<button"));
    }

    #[tokio::test]
    async fn index_with_mode_and_hebrew() {
        let html = body_text(get_page("/?lang=he&mode=each").await).await;
        assert!(html.contains("lang=\"he\""));
        assert!(html.contains("name=\"kids_perfume\""));
        assert!(html.contains("<input type=\"hidden\" name=\"mode\" value=\"each\">"));
    }

    #[tokio::test]
    async fn unknown_language_falls_back_to_english() {
        let html = body_text(get_page("/?lang=xx&mode=all").await).await;
        assert!(html.contains("lang=\"en\""));
        assert!(html.contains("action=\"/calculate?lang=en\""));
    }

    #[tokio::test]
    async fn index_shows_notice() {
        let html = body_text(get_page("/?lang=en&notice=method_not_allowed").await).await;
        assert!(html.contains("Method Not Allowed (405)"));
    }

    #[tokio::test]
    async fn healthz() {
        let response = get_page("/healthz").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "ok");
    }

    #[tokio::test]
    async fn all_mode_result() {
        let (status, html) = post_form("/calculate?lang=en", "mode=all&reading=50&retail=100").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Result: 50% ~ (0.5)"));
        assert!(!html.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn each_mode_result() {
        let (_, html) = post_form("/calculate", EACH_OK).await;
        assert!(html.contains("Result: 50% ~ (0.5)"));
    }

    #[tokio::test]
    async fn each_mode_missing_category_names_it() {
        let body = EACH_OK.replace("woman_perfume=0", "woman_perfume=");
        let (_, html) = post_form("/calculate?lang=en", &body).await;
        assert!(html.contains("Missing value for: Woman Perfume. Please enter a number."));
        assert!(!html.contains("class=\"result\""));
        assert!(html.contains("<option value=\"each\" selected>"));
    }

    #[tokio::test]
    async fn invalid_number_is_reported() {
        let (_, html) = post_form("/calculate?lang=en", "mode=all&reading=abc&retail=10").await;
        assert!(html.contains("Invalid input. Please enter only numeric values."));
        assert!(!html.contains("class=\"result\""));
    }

    #[tokio::test]
    async fn zero_retail_is_reported_in_hebrew() {
        let (_, html) = post_form("/calculate?lang=he", "mode=all&reading=5&retail=0").await;
        assert!(html.contains("ערך הריטייל אינו יכול להיות אפס."));
    }

    #[tokio::test]
    async fn resubmission_is_idempotent() {
        let (_, first) = post_form("/calculate?lang=en", "mode=all&reading=333&retail=1000").await;
        let (_, second) = post_form("/calculate?lang=en", "mode=all&reading=333&retail=1000").await;
        assert!(first.contains("Result: 33% ~ (0.333)"));
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unknown_mode_renders_plain_form() {
        let (status, html) = post_form("/calculate", "mode=other&reading=1&retail=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("class=\"result\""));
        assert!(!html.contains("class=\"error\""));
    }

    #[tokio::test]
    async fn get_on_calculate_redirects_with_notice() {
        let response = get_page("/calculate?lang=he").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/?lang=he&notice=method_not_allowed"
        );
    }

    #[tokio::test]
    async fn post_on_index_redirects_with_notice() {
        let (status, _) = post_form("/?lang=he", "mode=all").await;
        assert_eq!(status, StatusCode::SEE_OTHER);

        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/?lang=en")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/?lang=en&notice=method_not_allowed"
        );
    }

    #[tokio::test]
    async fn duplicated_query_keys_still_render_the_form() {
        let response = get_page("/?lang=en&lang=he&mode=all").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains("lang=\"en\""));

        let (status, html) =
            post_form("/calculate?lang=en&lang=he", "mode=all&reading=50&retail=100").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Result: 50% ~ (0.5)"));
    }

    #[tokio::test]
    async fn panics_redirect_to_form() {
        async fn boom() -> &'static str {
            panic!("boom")
        }
        let app = with_layers(Router::new().route("/boom", get(boom)));
        let response = app
            .oneshot(Request::builder().uri("/boom?lang=he").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/?lang=he&notice=unexpected");
    }

    #[tokio::test]
    async fn serves_static_logo() {
        let response = get_page("/static/logo.svg").await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
