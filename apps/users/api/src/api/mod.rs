use axum::Router;
use axum::routing::get;
use axum_helpers::server::{create_router, health_router};

use crate::openapi::ApiDoc;
use crate::state::AppState;

pub mod health;
pub mod users;

/// Domain routes, merged at the root: the frontend calls `/users/...` directly.
pub fn routes(state: &AppState) -> Router {
    Router::new().merge(users::router(state))
}

/// `/ready` with a live database check.
pub fn ready_router(state: AppState) -> Router {
    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}

/// Full application: domain routes, docs, CORS, tracing, fallbacks,
/// plus `/health` and `/ready`.
pub fn app(state: &AppState) -> Router {
    create_router::<ApiDoc>(routes(state))
        .merge(health_router(state.config.app))
        .merge(ready_router(state.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use core_config::{app_info, server::ServerConfig};
    use database::mysql::MysqlConfig;
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use test_utils::TestDatabase;
    use tower::ServiceExt;

    async fn test_app() -> (Router, TestDatabase) {
        let db = TestDatabase::new().await;
        let state = AppState {
            config: Config {
                app: app_info!(),
                database: MysqlConfig::new(db.connection_string.clone()),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            db: db.connection(),
        };
        (app(&state), db)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_and_ready() {
        let (app, _db) = test_app().await;

        let response = app.clone().oneshot(get("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["name"], "users_api");

        let response = app.oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["database"], "connected");
    }

    #[tokio::test]
    async fn test_ready_reports_closed_pool() {
        let (app, db) = test_app().await;
        db.connection().close().await.unwrap();

        let response = app.oneshot(get("/ready")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_users_routes_are_at_root() {
        let (app, _db) = test_app().await;

        let request = Request::post("/users/add")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, "http://localhost:3000")
            .body(Body::from(
                json!({ "name": "Alice", "email": "alice@x.com" }).to_string(),
            ))
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "*"
        );

        let response = app.oneshot(get("/users")).await.unwrap();
        assert_eq!(
            body_json(response).await,
            json!([{ "id": 1, "name": "Alice", "email": "alice@x.com" }])
        );
    }

    #[tokio::test]
    async fn test_unknown_paths_and_bad_ids_share_not_found_body() {
        let (app, _db) = test_app().await;

        for uri in ["/nope", "/users/abc", "/api/users"] {
            let response = app.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(
                body_json(response).await,
                json!({ "error": "The requested resource was not found" }),
                "{uri}"
            );
        }
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let (app, _db) = test_app().await;

        let response = app
            .oneshot(Request::post("/users").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
