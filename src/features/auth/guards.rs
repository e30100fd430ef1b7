//! Role-based authorization guards.
//!
//! Camp management is open to `org_admin`, `health_student` and
//! `super_admin`. Everything else only needs a signed-in user, which the
//! plain [`AuthenticatedUser`] extractor already enforces.

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Guard for camp administrators.
///
/// # Example
/// ```ignore
/// pub async fn handler(RequireOrgAdmin(user): RequireOrgAdmin) { ... }
/// ```
pub struct RequireOrgAdmin(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for RequireOrgAdmin
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .ok_or_else(|| AppError::Unauthorized("User not authenticated".to_string()))?;

        if !user.has_admin_access() {
            return Err(AppError::Forbidden(
                "Organization admin access required".to_string(),
            ));
        }

        Ok(RequireOrgAdmin(user.clone()))
    }
}
