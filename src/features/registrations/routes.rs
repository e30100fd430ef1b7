use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::registrations::handlers;
use crate::features::registrations::services::RegistrationService;

/// Protected registration routes (require JWT authentication)
pub fn routes(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route(
            "/api/camps/{id}/registrations",
            post(handlers::register_for_camp),
        )
        .route("/api/me/registrations", get(handlers::my_registrations))
        .route(
            "/api/admin/registrations",
            get(handlers::list_admin_registrations),
        )
        .route(
            "/api/admin/registrations/report.csv",
            get(handlers::registration_report_csv),
        )
        .route(
            "/api/admin/registrations/{id}/verify",
            patch(handlers::verify_registration),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::camps::CampService;
    use crate::features::districts::District;
    use crate::features::users::UserProfileService;
    use crate::shared::test_helpers::{
        camp_request, create_org_admin_user, memory_store, with_citizen_auth,
        with_org_admin_auth,
    };
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn setup() -> (Arc<RegistrationService>, String) {
        let store = memory_store();
        let camps = Arc::new(CampService::new(Arc::clone(&store)));
        let profiles = Arc::new(UserProfileService::new(Arc::clone(&store)));
        let camp = camps
            .create(
                &create_org_admin_user(),
                camp_request("Eye Camp", District::Erode, 2),
            )
            .await
            .unwrap();
        (
            Arc::new(RegistrationService::new(store, camps, profiles)),
            camp.id,
        )
    }

    #[tokio::test]
    async fn test_register_and_verify_flow() {
        let (service, camp_id) = setup().await;
        let citizen = TestServer::new(with_citizen_auth(routes(Arc::clone(&service)))).unwrap();
        let admin = TestServer::new(with_org_admin_auth(routes(service))).unwrap();

        let response = citizen
            .post(&format!("/api/camps/{}/registrations", camp_id))
            .json(&json!({"name": "Meena", "email": "meena@example.com", "phone": "9876543210"}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let created: Value = response.json();
        let id = created["data"]["id"].as_str().unwrap().to_string();
        assert_eq!(created["data"]["verified"], false);

        citizen
            .patch(&format!("/api/admin/registrations/{}/verify", id))
            .await
            .assert_status(StatusCode::FORBIDDEN);

        let verified: Value = admin
            .patch(&format!("/api/admin/registrations/{}/verify", id))
            .await
            .json();
        assert_eq!(verified["data"]["verified"], true);

        let body: Value = admin.get("/api/admin/registrations").await.json();
        assert_eq!(body["meta"]["total"], 1);
        assert_eq!(body["data"]["reports"][0]["verified_registrations"], 1);

        let csv = admin.get("/api/admin/registrations/report.csv").await;
        csv.assert_status_ok();
        assert_eq!(
            csv.text(),
            "Camp Name,Total Registrations,Verified Registrations\nEye Camp,1,1\n"
        );
    }

    #[tokio::test]
    async fn test_register_validation_and_missing_camp() {
        let (service, camp_id) = setup().await;
        let server = TestServer::new(with_citizen_auth(routes(service))).unwrap();

        server
            .post(&format!("/api/camps/{}/registrations", camp_id))
            .json(&json!({"name": "", "email": "meena@example.com", "phone": "9876543210"}))
            .await
            .assert_status(StatusCode::BAD_REQUEST);

        server
            .post("/api/camps/missing/registrations")
            .json(&json!({"name": "Meena", "email": "meena@example.com", "phone": "9876543210"}))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_my_registrations_empty() {
        let (service, _) = setup().await;
        let server = TestServer::new(with_citizen_auth(routes(service))).unwrap();

        let body: Value = server.get("/api/me/registrations").await.json();
        assert_eq!(body["data"]["registered"], json!([]));
        assert_eq!(body["data"]["verified"], json!([]));
    }
}
