use crate::features::users::handlers::profile_handler;
use crate::features::users::services::UserProfileService;
use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

pub fn routes(service: Arc<UserProfileService>) -> Router {
    Router::new()
        .route(
            "/api/me/profile",
            get(profile_handler::get_profile).put(profile_handler::update_profile),
        )
        .route("/api/me/language", put(profile_handler::update_language))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::{memory_store, with_citizen_auth};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    fn server() -> TestServer {
        let service = Arc::new(UserProfileService::new(memory_store()));
        TestServer::new(with_citizen_auth(routes(service))).unwrap()
    }

    #[tokio::test]
    async fn test_update_and_read_profile() {
        let server = server();

        server
            .put("/api/me/profile")
            .json(&json!({
                "name": "Arun",
                "email": "arun@example.com",
                "phone": "9876543210",
                "date_of_birth": "1990-02-01",
                "locality": "madurai"
            }))
            .await
            .assert_status_ok();

        let body: Value = server.get("/api/me/profile").await.json();
        assert_eq!(body["data"]["name"], "Arun");
        assert_eq!(body["data"]["locality"], "Madurai");
        assert_eq!(body["data"]["date_of_birth"], "1990-02-01");
    }

    #[tokio::test]
    async fn test_invalid_phone_is_rejected() {
        server()
            .put("/api/me/profile")
            .json(&json!({"name": "Arun", "email": "arun@example.com", "phone": "12"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_set_language() {
        let server = server();

        let body: Value = server
            .put("/api/me/language")
            .json(&json!({"language": "ta"}))
            .await
            .json();
        assert_eq!(body["data"]["language"], "ta");

        server
            .put("/api/me/language")
            .json(&json!({"language": "de"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_profile_requires_user() {
        let service = Arc::new(UserProfileService::new(memory_store()));
        let server = TestServer::new(routes(service)).unwrap();
        server
            .get("/api/me/profile")
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }
}
