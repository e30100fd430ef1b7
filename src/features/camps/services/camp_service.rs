use std::collections::HashSet;
use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::features::auth::session::Session;
use crate::features::camps::dtos::{
    CampListQuery, CampNotificationDto, CampRequestDto, CampResponseDto, SuggestionField,
};
use crate::features::camps::models::{Camp, CampRecord};
use crate::features::districts::District;
use crate::modules::store::{collections, Document, DocumentStore, FieldFilter};

/// Service for camp listings and camp administration
pub struct CampService {
    store: Arc<dyn DocumentStore>,
}

impl CampService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    fn today() -> NaiveDate {
        Utc::now().date_naive()
    }

    /// Decode camp documents, skipping ones that do not have the camp shape
    fn decode_all(docs: &[Document]) -> Vec<CampRecord> {
        docs.iter()
            .filter_map(|doc| match CampRecord::try_from(doc) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed camp document: {}", e);
                    None
                }
            })
            .collect()
    }

    fn check_schedule(dto: &CampRequestDto, earliest: Option<NaiveDate>) -> Result<()> {
        if let Some(today) = earliest {
            if dto.date.date_naive() < today {
                return Err(AppError::Validation(
                    "Camp date must not be in the past".to_string(),
                ));
            }
        }
        if dto.time_from >= dto.time_to {
            return Err(AppError::Validation(
                "Start time must be before end time".to_string(),
            ));
        }
        Ok(())
    }

    fn to_camp(dto: CampRequestDto, admin_id: String, created_at: chrono::DateTime<Utc>) -> Camp {
        Camp {
            organization_name: dto.organization_name.trim().to_string(),
            health_camp_name: dto.health_camp_name.trim().to_string(),
            location: dto.location,
            date: dto.date,
            time_from: dto.time_from,
            time_to: dto.time_to,
            description: dto.description,
            ambulances_available: dto.ambulances_available,
            hospital_nearby: dto.hospital_nearby,
            latitude: dto.latitude,
            longitude: dto.longitude,
            registration_url: dto.registration_url,
            admin_id,
            created_at,
        }
    }

    fn to_response(record: CampRecord) -> CampResponseDto {
        CampResponseDto::from_record(record, Self::today())
    }

    pub async fn create(
        &self,
        session: &impl Session,
        dto: CampRequestDto,
    ) -> Result<CampResponseDto> {
        let admin_id = session.require_user_id()?.to_string();
        Self::check_schedule(&dto, Some(Self::today()))?;

        let camp = Self::to_camp(dto, admin_id, Utc::now());
        let body = serde_json::to_value(&camp)
            .map_err(|e| AppError::Internal(format!("Failed to encode camp: {}", e)))?;
        let doc = self.store.add(collections::HEALTH_CAMPS, body).await?;

        info!(
            "Camp created: id={}, name={}, admin={}",
            doc.id, camp.health_camp_name, camp.admin_id
        );

        Ok(Self::to_response(CampRecord { id: doc.id, camp }))
    }

    /// Every camp in store order
    pub async fn all_records(&self) -> Result<Vec<CampRecord>> {
        let docs = self.store.query(collections::HEALTH_CAMPS, &[]).await?;
        Ok(Self::decode_all(&docs))
    }

    /// Camps created by the signed-in user; nothing is fetched for anonymous sessions
    pub async fn owned_records(&self, session: &impl Session) -> Result<Vec<CampRecord>> {
        let admin_id = session.require_user_id()?;
        let docs = self
            .store
            .query(
                collections::HEALTH_CAMPS,
                &[FieldFilter::eq("adminId", admin_id)],
            )
            .await?;
        Ok(Self::decode_all(&docs))
    }

    pub async fn get_record(&self, id: &str) -> Result<CampRecord> {
        let doc = self
            .store
            .get(collections::HEALTH_CAMPS, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Camp '{}' not found", id)))?;
        Ok(CampRecord::try_from(&doc)?)
    }

    pub async fn get(&self, id: &str) -> Result<CampResponseDto> {
        Ok(Self::to_response(self.get_record(id).await?))
    }

    pub async fn list(&self, query: CampListQuery) -> Result<Vec<CampResponseDto>> {
        let locations = parse_locations(query.locations.as_deref())?;
        let names = split_list(query.names.as_deref());
        let search = query
            .search
            .as_deref()
            .map(str::to_lowercase)
            .filter(|s| !s.is_empty());
        let date_range = query.date_from.zip(query.date_to);

        let records = self.all_records().await?;
        Ok(records
            .into_iter()
            .filter(|r| {
                search
                    .as_deref()
                    .is_none_or(|s| r.camp.health_camp_name.to_lowercase().contains(s))
            })
            .filter(|r| {
                date_range.is_none_or(|(from, to)| {
                    let day = r.camp.date.date_naive();
                    day >= from && day <= to
                })
            })
            .filter(|r| locations.is_empty() || locations.contains(&r.camp.location))
            .filter(|r| names.is_empty() || names.contains(&r.camp.health_camp_name.as_str()))
            .map(Self::to_response)
            .collect())
    }

    pub async fn list_owned(&self, session: &impl Session) -> Result<Vec<CampResponseDto>> {
        Ok(self
            .owned_records(session)
            .await?
            .into_iter()
            .map(Self::to_response)
            .collect())
    }

    /// Distinct locations or names containing `q`, in first-seen order
    pub async fn suggestions(&self, field: SuggestionField, q: &str) -> Result<Vec<String>> {
        let needle = q.trim().to_lowercase();
        let mut seen = HashSet::new();

        Ok(self
            .all_records()
            .await?
            .into_iter()
            .map(|r| match field {
                SuggestionField::Location => r.camp.location.name().to_string(),
                SuggestionField::Name => r.camp.health_camp_name,
            })
            .filter(|value| value.to_lowercase().contains(&needle))
            .filter(|value| seen.insert(value.clone()))
            .collect())
    }

    pub async fn notifications(&self, locality: &str) -> Result<CampNotificationDto> {
        let locality: District = locality.parse().map_err(AppError::Validation)?;
        let count = self
            .all_records()
            .await?
            .iter()
            .filter(|r| r.camp.location == locality)
            .count();

        Ok(CampNotificationDto {
            locality,
            has_camps: count > 0,
            count,
        })
    }

    /// Load a camp the caller owns
    async fn owned_record(&self, session: &impl Session, id: &str) -> Result<CampRecord> {
        let admin_id = session.require_user_id()?;
        let record = self.get_record(id).await?;
        if !record.camp.is_owned_by(admin_id) {
            return Err(AppError::Forbidden(
                "Only the camp's creator can change it".to_string(),
            ));
        }
        Ok(record)
    }

    pub async fn update(
        &self,
        session: &impl Session,
        id: &str,
        dto: CampRequestDto,
    ) -> Result<CampResponseDto> {
        let existing = self.owned_record(session, id).await?;
        Self::check_schedule(&dto, None)?;

        let camp = Self::to_camp(dto, existing.camp.admin_id, existing.camp.created_at);
        let body = serde_json::to_value(&camp)
            .map_err(|e| AppError::Internal(format!("Failed to encode camp: {}", e)))?;
        self.store.set(collections::HEALTH_CAMPS, id, body).await?;

        info!("Camp updated: id={}", id);
        Ok(Self::to_response(CampRecord {
            id: id.to_string(),
            camp,
        }))
    }

    /// Delete a camp; its registrations, complaints and feedback are kept
    pub async fn delete(&self, session: &impl Session, id: &str) -> Result<()> {
        self.owned_record(session, id).await?;
        self.store.delete(collections::HEALTH_CAMPS, id).await?;
        info!("Camp deleted: id={}", id);
        Ok(())
    }
}

fn split_list(raw: Option<&str>) -> Vec<&str> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .collect()
    })
    .unwrap_or_default()
}

fn parse_locations(raw: Option<&str>) -> Result<Vec<District>> {
    split_list(raw)
        .into_iter()
        .map(|name| name.parse::<District>().map_err(AppError::Validation))
        .collect()
}
