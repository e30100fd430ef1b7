use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::i18n::Language;
use crate::features::users::dtos::{ProfileResponseDto, UpdateProfileDto};
use crate::features::users::models::UserProfile;
use crate::modules::store::{collections, DocumentStore};

/// Service for profiles stored in the `users` collection
pub struct UserProfileService {
    store: Arc<dyn DocumentStore>,
}

impl UserProfileService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Stored profile, or an empty one seeded with the token email
    pub async fn load(&self, user: &AuthenticatedUser) -> Result<UserProfile> {
        match self.store.get(collections::USERS, &user.account_id).await? {
            Some(doc) => Ok(doc.decode()?),
            None => Ok(UserProfile {
                email: user.email.clone().unwrap_or_default(),
                ..Default::default()
            }),
        }
    }

    async fn save(&self, user: &AuthenticatedUser, mut profile: UserProfile) -> Result<UserProfile> {
        profile.updated_at = Some(Utc::now());
        let body = serde_json::to_value(&profile)
            .map_err(|e| AppError::Internal(format!("Failed to encode profile: {}", e)))?;
        self.store
            .set(collections::USERS, &user.account_id, body)
            .await?;
        Ok(profile)
    }

    /// Email used to match the caller's registrations
    pub async fn contact_email(&self, user: &AuthenticatedUser) -> Result<Option<String>> {
        let profile = self.load(user).await?;
        Ok(Some(profile.email)
            .filter(|e| !e.trim().is_empty())
            .or_else(|| user.email.clone()))
    }

    pub async fn get_profile(&self, user: &AuthenticatedUser) -> Result<ProfileResponseDto> {
        let profile = self.load(user).await?;
        Ok(ProfileResponseDto::from_profile(
            &user.account_id,
            profile,
            user.roles.clone(),
        ))
    }

    pub async fn update_profile(
        &self,
        user: &AuthenticatedUser,
        dto: UpdateProfileDto,
    ) -> Result<ProfileResponseDto> {
        let existing = self.load(user).await?;
        let profile = UserProfile {
            full_name: dto.name.trim().to_string(),
            email: dto.email,
            phone_number: dto.phone,
            gender: dto.gender,
            dob: dto.date_of_birth,
            locality: dto.locality,
            language: existing.language,
            updated_at: existing.updated_at,
        };

        let saved = self.save(user, profile).await?;
        info!("Profile updated: account={}", user.account_id);

        Ok(ProfileResponseDto::from_profile(
            &user.account_id,
            saved,
            user.roles.clone(),
        ))
    }

    pub async fn update_language(
        &self,
        user: &AuthenticatedUser,
        language: Language,
    ) -> Result<ProfileResponseDto> {
        let mut profile = self.load(user).await?;
        profile.language = language;

        let saved = self.save(user, profile).await?;
        info!(
            "Language preference updated: account={}, language={}",
            user.account_id, language
        );

        Ok(ProfileResponseDto::from_profile(
            &user.account_id,
            saved,
            user.roles.clone(),
        ))
    }
}
