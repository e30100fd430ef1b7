use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::camp_directory::handlers;
use crate::features::camp_directory::services::DirectoryService;

/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<DirectoryService>) -> Router {
    Router::new()
        .route("/api/govt-camps", get(handlers::list_govt_camps))
        .route("/api/govt-camps/{id}", get(handlers::get_govt_camp))
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::collections;
    use crate::shared::test_helpers::{memory_store, FailingStore};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    async fn server() -> TestServer {
        let store = memory_store();
        store
            .set(
                collections::GOVT_DATA,
                "erode",
                json!({"camps": [
                    {"id": "e1", "Camp Site": "Erode Camp", "Name of the Village to be covered": "Perundurai",
                     "Population to be covered": 1200, "Distance of the Villages covered from the Camp site": 10, "FN / AN": "FN"},
                    {"id": "s1", "Camp Site": "Salem Camp", "Name of the Village to be covered": "Attur",
                     "Population to be covered": "800", "Distance of the Villages covered from the Camp site": "5", "FN / AN": "AN"},
                    {"id": "x1", "Camp Site": "Kodumudi", "Population to be covered": "unknown", "FN / AN": "FN"}
                ]}),
            )
            .await
            .unwrap();
        TestServer::new(routes(Arc::new(DirectoryService::new(store)))).unwrap()
    }

    fn ids(body: &Value) -> Vec<String> {
        body["data"]["camps"]
            .as_array()
            .unwrap()
            .iter()
            .map(|c| c["id"].as_str().unwrap().to_string())
            .collect()
    }

    #[tokio::test]
    async fn test_unfiltered_list() {
        let body: Value = server().await.get("/api/govt-camps").await.json();
        assert_eq!(ids(&body), vec!["e1", "s1", "x1"]);
        assert_eq!(body["data"]["total_loaded"], 3);
        assert_eq!(body["meta"]["total"], 3);
        // unknown population stays distinguishable
        assert_eq!(body["data"]["camps"][2]["population"], Value::Null);
    }

    #[tokio::test]
    async fn test_query_filters() {
        let server = server().await;

        let body: Value = server
            .get("/api/govt-camps")
            .add_query_param("session", "FN")
            .add_query_param("min_population", 1000)
            .await
            .json();
        assert_eq!(ids(&body), vec!["e1"]);

        let body: Value = server
            .get("/api/govt-camps")
            .add_query_param("search", "SALEM")
            .await
            .json();
        assert_eq!(ids(&body), vec!["s1"]);
        assert_eq!(body["meta"]["total"], 1);

        let body: Value = server
            .get("/api/govt-camps")
            .add_query_param("max_distance", 6)
            .await
            .json();
        assert_eq!(ids(&body), vec!["s1", "x1"]);
    }

    #[tokio::test]
    async fn test_negative_filter_is_rejected() {
        server()
            .await
            .get("/api/govt-camps")
            .add_query_param("min_population", -1)
            .await
            .assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_non_finite_distance_is_rejected() {
        let server = server().await;
        for value in ["NaN", "inf", "-inf"] {
            server
                .get("/api/govt-camps")
                .add_query_param("max_distance", value)
                .await
                .assert_status(StatusCode::BAD_REQUEST);
        }
    }

    #[tokio::test]
    async fn test_get_single_camp() {
        let server = server().await;
        let body: Value = server.get("/api/govt-camps/s1").await.json();
        assert_eq!(body["data"]["camp_site"], "Salem Camp");

        server
            .get("/api/govt-camps/missing")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_store_failure_is_bad_gateway() {
        let server =
            TestServer::new(routes(Arc::new(DirectoryService::new(Arc::new(FailingStore)))))
                .unwrap();
        let response = server.get("/api/govt-camps").await;
        response.assert_status(StatusCode::BAD_GATEWAY);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
