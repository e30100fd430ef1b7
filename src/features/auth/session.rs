//! The caller's identity as seen by services.
//!
//! Services never read request extensions directly; they take anything that
//! can answer "who is calling", so owner-scoped reads can refuse to run when
//! nobody is signed in.

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;

pub trait Session {
    /// Account id of the signed-in user, if any
    fn current_user_id(&self) -> Option<&str>;

    fn require_user_id(&self) -> Result<&str> {
        self.current_user_id()
            .ok_or_else(|| AppError::Unauthorized("Authentication required".to_string()))
    }
}

impl Session for AuthenticatedUser {
    fn current_user_id(&self) -> Option<&str> {
        Some(&self.account_id)
    }
}

impl<T: Session> Session for Option<T> {
    fn current_user_id(&self) -> Option<&str> {
        self.as_ref().and_then(Session::current_user_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_session_is_rejected() {
        let session: Option<AuthenticatedUser> = None;
        assert!(session.current_user_id().is_none());
        assert!(matches!(
            session.require_user_id(),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_authenticated_session_exposes_account_id() {
        let user = AuthenticatedUser {
            account_id: "acc-1".to_string(),
            sub: "sub-1".to_string(),
            email: None,
            roles: vec![],
        };
        assert_eq!(user.require_user_id().unwrap(), "acc-1");
        assert_eq!(Some(user).current_user_id(), Some("acc-1"));
    }
}
