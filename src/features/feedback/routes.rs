use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::feedback::handlers;
use crate::features::feedback::services::FeedbackService;

/// Protected complaint and feedback routes (require JWT authentication)
pub fn routes(service: Arc<FeedbackService>) -> Router {
    Router::new()
        .route("/api/camps/{id}/complaints", post(handlers::submit_complaint))
        .route("/api/camps/{id}/feedbacks", post(handlers::submit_feedback))
        .route("/api/admin/complaints", get(handlers::list_complaints))
        .route("/api/admin/feedbacks", get(handlers::list_feedbacks))
        .route("/api/admin/overview", get(handlers::admin_overview))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::camps::CampService;
    use crate::features::districts::District;
    use crate::features::registrations::RegistrationService;
    use crate::features::users::UserProfileService;
    use crate::shared::test_helpers::{
        camp_request, create_org_admin_user, memory_store, with_citizen_auth,
        with_org_admin_auth,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn setup() -> (Router, String) {
        let store = memory_store();
        let camps = Arc::new(CampService::new(Arc::clone(&store)));
        let profiles = Arc::new(UserProfileService::new(Arc::clone(&store)));
        let registrations = Arc::new(RegistrationService::new(
            Arc::clone(&store),
            Arc::clone(&camps),
            profiles,
        ));
        let camp = camps
            .create(
                &create_org_admin_user(),
                camp_request("Eye Camp", District::Erode, 2),
            )
            .await
            .unwrap();
        let service = Arc::new(FeedbackService::new(store, camps, registrations));
        (routes(service), camp.id)
    }

    #[tokio::test]
    async fn test_submit_and_list() {
        let (router, camp_id) = setup().await;
        let citizen = TestServer::new(with_citizen_auth(router.clone())).unwrap();
        let admin = TestServer::new(with_org_admin_auth(router)).unwrap();

        citizen
            .post(&format!("/api/camps/{}/complaints", camp_id))
            .json(&json!({"email": "a@example.com", "message": "Long queue"}))
            .await
            .assert_status(StatusCode::CREATED);
        citizen
            .post(&format!("/api/camps/{}/feedbacks", camp_id))
            .json(&json!({"email": "a@example.com", "message": "Kind doctors"}))
            .await
            .assert_status(StatusCode::CREATED);

        let body: Value = admin.get("/api/admin/complaints").await.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"][0]["health_camp_name"], "Eye Camp");

        let body: Value = admin.get("/api/admin/overview").await.json();
        assert_eq!(body["data"]["feedbacks"], 1);
        assert_eq!(body["data"]["complaints"], 1);
        assert_eq!(body["data"]["active_camps"], 1);

        citizen
            .get("/api/admin/feedbacks")
            .await
            .assert_status(StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_blank_message_is_rejected() {
        let (router, camp_id) = setup().await;
        let server = TestServer::new(with_citizen_auth(router)).unwrap();

        server
            .post(&format!("/api/camps/{}/feedbacks", camp_id))
            .json(&json!({"email": "a@example.com", "message": "  "}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }
}
