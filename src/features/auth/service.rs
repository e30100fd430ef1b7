use crate::features::auth::dto::MeResponseDto;
use crate::features::auth::model::AuthenticatedUser;

#[derive(Default)]
pub struct AuthService;

impl AuthService {
    pub fn new() -> Self {
        Self
    }

    pub fn describe(&self, user: AuthenticatedUser) -> MeResponseDto {
        tracing::debug!("Describing session for account {}", user.account_id);
        user.into()
    }
}
