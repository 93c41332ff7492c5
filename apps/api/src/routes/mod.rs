pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::sizing::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sizing API
        .route("/api/size", post(handlers::handle_size))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_app() -> Router {
        let config = Config::from_lookup(|_| None).expect("default config");
        build_router(AppState::new(config))
    }

    async fn post_size(
        app: Router,
        body: String,
        content_type: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri("/api/size");
        if let Some(ct) = content_type {
            builder = builder.header("content-type", ct);
        }
        let req = builder.body(Body::from(body)).unwrap();
        let resp = app.oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let value = serde_json::from_slice(&bytes).unwrap();
        (status, value)
    }

    #[tokio::test]
    async fn test_health_reports_default_profile() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = test_app().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["default_profile"], "tuned");
    }

    #[tokio::test]
    async fn test_size_recommendation_with_string_numbers() {
        let body = json!({
            "gender": "mens",
            "chest": "100",
            "waist": 70,
            "hips": "",
            "neck": "n/a"
        });
        let (status, value) =
            post_size(test_app(), body.to_string(), Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["recommended_size"], "L");
        assert_eq!(value["profile"], "tuned");
        let details = &value["details"];
        assert_eq!(details["body_shape"], "triangle");
        assert_eq!(details["adjusted_measurements"]["chest"], 102.0);
        assert!(details["original_measurements"]["neck"].is_null());
        assert!(details["original_measurements"]["hips"].is_null());
        assert_eq!(details["morphology_adjustments"], json!({"chest": 2, "waist": -1}));
    }

    #[tokio::test]
    async fn test_body_parsed_without_content_type() {
        let body = json!({"gender": "maternity", "waist": 85, "hips": 100});
        let (status, value) = post_size(test_app(), body.to_string(), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["details"]["body_shape"], "prominent");
        assert_eq!(value["details"]["adjusted_measurements"]["waist"], 89.0);
    }

    #[tokio::test]
    async fn test_profile_override_per_request() {
        let body = json!({
            "gender": "womens",
            "chest": 85,
            "waist": 68,
            "hips": 94,
            "profile": "mimic"
        });
        let (status, value) =
            post_size(test_app(), body.to_string(), Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["profile"], "mimic");
        assert!(value["details"]["dominant_measurements"].is_array());
        assert!(value["details"]["guidance"].is_array());
    }

    #[tokio::test]
    async fn test_missing_gender_is_bad_request() {
        let (status, value) = post_size(
            test_app(),
            json!({"chest": 90}).to_string(),
            Some("application/json"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(value["error"]["message"], "Gender is required");
    }

    #[tokio::test]
    async fn test_unknown_gender_is_bad_request() {
        let (status, value) = post_size(
            test_app(),
            json!({"gender": "kids"}).to_string(),
            Some("application/json"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["code"], "INVALID_GENDER");
    }

    #[tokio::test]
    async fn test_unknown_profile_is_bad_request() {
        let (status, value) = post_size(
            test_app(),
            json!({"gender": "mens", "profile": "fancy"}).to_string(),
            Some("application/json"),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let (status, value) =
            post_size(test_app(), "not json".to_string(), Some("application/json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(value["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_repeated_requests_are_byte_identical() {
        let body = json!({"gender": "womens", "chest": 92, "waist": 74, "hips": 100}).to_string();
        let app = test_app();
        let mut outputs = Vec::new();
        for _ in 0..2 {
            let req = Request::builder()
                .method("POST")
                .uri("/api/size")
                .body(Body::from(body.clone()))
                .unwrap();
            let resp = app.clone().oneshot(req).await.unwrap();
            outputs.push(resp.into_body().collect().await.unwrap().to_bytes());
        }
        assert_eq!(outputs[0], outputs[1]);
    }
}
