use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::ADMIN_ROLES;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedUser {
    pub account_id: String,
    pub sub: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    /// Check if user has a specific role
    pub fn has_role(&self, role: &str) -> bool {
        self.roles.iter().any(|r| r == role)
    }

    /// Org admins, health students and super admins may manage camps
    pub fn has_admin_access(&self) -> bool {
        ADMIN_ROLES.iter().any(|role| self.has_role(role))
    }
}

/// Namespaced custom claim carried by access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomClaims {
    #[serde(rename = "type")]
    pub token_type: String,
    #[serde(default)]
    pub roles: Vec<String>,
}
