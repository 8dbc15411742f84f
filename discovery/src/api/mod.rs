//! REST APIハンドラー
//!
//! エンドポイント登録、URL解決、ヘルスチェック、OpenAPIドキュメント、Swagger UI

pub mod endpoints;
pub mod error;

use crate::auth::bearer_auth_middleware;
use crate::common::protocol::{
    ErrorResponse, HealthResponse, RegisterRequest, RegisterResponse, ResolveResponse,
};
use crate::AppState;
use axum::{
    http::{header, Method},
    middleware,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};

/// OpenAPIドキュメントの公開パス
pub const OPENAPI_PATH: &str = "/swagger/openapi.json";

/// Swagger UIの公開パス
pub const SWAGGER_UI_PATH: &str = "/swagger";

// アセットはunpkgから読み込む。spec URLは OPENAPI_PATH と一致させること
const SWAGGER_UI_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <title>Discovery Service API</title>
  <link rel="stylesheet" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
  <div id="swagger-ui"></div>
  <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js" crossorigin></script>
  <script>
    window.onload = () => {
      window.ui = SwaggerUIBundle({ url: "/swagger/openapi.json", dom_id: "#swagger-ui" });
    };
  </script>
</body>
</html>
"##;

/// OpenAPIドキュメント定義
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Discovery Service API",
        version = "1.0",
        description = "Registers static/dynamic endpoints as URL templates and resolves them with query parameters."
    ),
    paths(endpoints::register_endpoints, endpoints::get_url, endpoints::health),
    components(schemas(
        RegisterRequest,
        RegisterResponse,
        ResolveResponse,
        ErrorResponse,
        HealthResponse
    )),
    modifiers(&BearerSecurity),
    tags(
        (name = "endpoints", description = "Endpoint registration and URL resolution"),
        (name = "system", description = "Service status")
    )
)]
pub struct ApiDoc;

struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "BearerAuth",
            SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
        );
    }
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

async fn swagger_ui() -> Html<&'static str> {
    Html(SWAGGER_UI_HTML)
}

/// アプリケーション全体のルーターを作成
///
/// `/register` と `/get-url` はBearer認証で保護し、`/health`、
/// OpenAPIドキュメント、Swagger UIは認証なしで公開する。
pub fn create_app(state: AppState) -> Router {
    let protected = Router::new()
        .route("/register", post(endpoints::register_endpoints))
        .route("/get-url", get(endpoints::get_url))
        .layer(middleware::from_fn_with_state(
            state.auth.clone(),
            bearer_auth_middleware,
        ));

    let public = Router::new()
        .route("/health", get(endpoints::health))
        .route(OPENAPI_PATH, get(openapi_json))
        .route(SWAGGER_UI_PATH, get(swagger_ui))
        .route("/swagger/index.html", get(swagger_ui));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE, header::AUTHORIZATION]);

    protected
        .merge(public)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
