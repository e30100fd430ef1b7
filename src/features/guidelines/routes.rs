use axum::{routing::get, Router};

use crate::features::guidelines::handler;

/// Note: This feature is public (no authentication required)
pub fn routes() -> Router {
    Router::new().route("/api/guidelines", get(handler::get_guidelines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_defaults_to_english() {
        let server = TestServer::new(routes()).unwrap();
        let body: Value = server.get("/api/guidelines").await.json();

        assert_eq!(body["data"]["language"], "en");
        assert_eq!(body["data"]["categories"][0]["category"], "Hygiene");
    }

    #[tokio::test]
    async fn test_query_beats_accept_language() {
        let server = TestServer::new(routes()).unwrap();
        let body: Value = server
            .get("/api/guidelines")
            .add_query_param("lang", "ta")
            .add_header(header::ACCEPT_LANGUAGE, HeaderValue::from_static("fr"))
            .await
            .json();

        assert_eq!(body["data"]["language"], "ta");
        assert_eq!(body["data"]["categories"][0]["key"], "hygiene");
        assert_ne!(body["data"]["categories"][0]["category"], "Hygiene");
    }

    #[tokio::test]
    async fn test_accept_language_is_used() {
        let server = TestServer::new(routes()).unwrap();
        let body: Value = server
            .get("/api/guidelines")
            .add_header(
                header::ACCEPT_LANGUAGE,
                HeaderValue::from_static("es-ES,es;q=0.9,en;q=0.5"),
            )
            .await
            .json();

        assert_eq!(body["data"]["language"], "es");
    }
}
