use axum::{routing::get, Router};

use crate::features::i18n::handler;

/// Public translation routes
pub fn routes() -> Router {
    Router::new()
        .route("/api/i18n/languages", get(handler::list_languages))
        .route("/api/i18n/{lang}", get(handler::get_translations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::Value;

    #[tokio::test]
    async fn test_list_languages() {
        let server = TestServer::new(routes()).unwrap();
        let response = server.get("/api/i18n/languages").await;

        response.assert_status_ok();
        let body: Value = response.json();
        let codes: Vec<&str> = body["data"]
            .as_array()
            .unwrap()
            .iter()
            .map(|l| l["code"].as_str().unwrap())
            .collect();
        assert_eq!(codes, vec!["en", "fr", "es", "ta"]);
        assert_eq!(body["meta"]["total"], 4);
    }

    #[tokio::test]
    async fn test_get_translations() {
        let server = TestServer::new(routes()).unwrap();
        let response = server.get("/api/i18n/fr").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"]["language"], "fr");
        assert_eq!(body["data"]["entries"]["hygiene"], "Hygiène");
    }

    #[tokio::test]
    async fn test_unknown_language_is_not_found() {
        let server = TestServer::new(routes()).unwrap();
        let response = server.get("/api/i18n/de").await;

        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["success"], false);
    }
}
