use super::model::{AuthenticatedUser, CustomClaims};
use crate::core::config::AuthConfig;
use crate::core::error::AppError;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use super::jwks::JwksClient;

pub struct JwtValidator {
    jwks_client: Arc<JwksClient>,
    issuer: String,
    audience: String,
    claims_namespace: String,
    leeway: u64,
}

#[derive(Debug, Clone, Deserialize)]
struct Claims {
    sub: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(rename = "accountId", default)]
    account_id: Option<String>,
    #[serde(default)]
    kind: Option<String>,
    /// Remaining claims, including the configurable custom-claims namespace
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl JwtValidator {
    pub fn new(jwks_client: Arc<JwksClient>, config: &AuthConfig) -> Self {
        Self {
            jwks_client,
            issuer: config.issuer.clone(),
            audience: config.audience.clone(),
            claims_namespace: config.claims_namespace.clone(),
            leeway: config.jwt_leeway.as_secs(),
        }
    }

    pub async fn validate_token(&self, token: &str) -> Result<AuthenticatedUser, AppError> {
        let header = decode_header(token).map_err(|e| AppError::Auth(e.to_string()))?;

        if header.alg != Algorithm::RS256 {
            return Err(AppError::Auth(format!(
                "Unsupported algorithm: {:?}. Only RS256 is allowed",
                header.alg
            )));
        }

        let kid = header
            .kid
            .ok_or_else(|| AppError::Auth("Missing kid in token header".to_string()))?;

        let decoding_key = self.jwks_client.get_key(&kid).await?;

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.leeway = self.leeway;
        validation.validate_nbf = true;

        let claims = decode::<Claims>(token, &decoding_key, &validation)
            .map_err(|e| AppError::Auth(e.to_string()))?
            .claims;

        if claims.kind.as_deref().is_some_and(|k| k != "AccessToken") {
            return Err(AppError::Auth("Token is not an access token".to_string()));
        }

        let roles = self.roles_from(&claims)?;
        let account_id = claims.account_id.unwrap_or_else(|| claims.sub.clone());

        Ok(AuthenticatedUser {
            account_id,
            sub: claims.sub,
            email: claims.email,
            roles,
        })
    }

    fn roles_from(&self, claims: &Claims) -> Result<Vec<String>, AppError> {
        let Some(raw) = claims.extra.get(&self.claims_namespace) else {
            return Ok(Vec::new());
        };

        let custom: CustomClaims = serde_json::from_value(raw.clone())
            .map_err(|e| AppError::Auth(format!("Malformed custom claims: {}", e)))?;

        if custom.token_type != "global" {
            return Err(AppError::Auth(
                "This service requires a global access token".to_string(),
            ));
        }

        Ok(custom.roles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;

    fn validator() -> JwtValidator {
        let config = AuthConfig {
            issuer: "https://auth.example.com/oidc".to_string(),
            audience: "https://api.example.com".to_string(),
            jwks_url: "https://auth.example.com/oidc/jwks".to_string(),
            claims_namespace: "https://healthcamp.app/claims".to_string(),
            jwks_cache_ttl: Duration::from_secs(60),
            jwt_leeway: Duration::from_secs(0),
        };
        let jwks = Arc::new(JwksClient::new(&config.jwks_url, config.jwks_cache_ttl));
        JwtValidator::new(jwks, &config)
    }

    fn claims(body: Value) -> Claims {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_roles_read_from_configured_namespace() {
        let claims = claims(json!({
            "sub": "u1",
            "https://healthcamp.app/claims": {"type": "global", "roles": ["org_admin"]}
        }));
        assert_eq!(validator().roles_from(&claims).unwrap(), vec!["org_admin"]);
    }

    #[test]
    fn test_missing_namespace_means_no_roles() {
        let claims = claims(json!({
            "sub": "u1",
            "https://other.app/claims": {"type": "global", "roles": ["org_admin"]}
        }));
        assert!(validator().roles_from(&claims).unwrap().is_empty());
    }

    #[test]
    fn test_non_global_token_is_rejected() {
        let claims = claims(json!({
            "sub": "u1",
            "https://healthcamp.app/claims": {"type": "organization", "roles": []}
        }));
        assert!(matches!(
            validator().roles_from(&claims),
            Err(AppError::Auth(_))
        ));
    }

    #[tokio::test]
    async fn test_garbage_token_is_rejected_before_key_lookup() {
        let err = validator().validate_token("not-a-jwt").await.unwrap_err();
        assert!(matches!(err, AppError::Auth(_)));
    }
}
