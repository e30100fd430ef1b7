use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use crate::core::error::Result;
use crate::features::auth::session::Session;
use crate::features::camps::{CampRecord, CampService};
use crate::features::feedback::dtos::{
    AdminOverviewDto, CampMessageResponseDto, SubmitMessageDto,
};
use crate::features::feedback::models::{CampMessage, MessageKind};
use crate::features::registrations::RegistrationService;
use crate::modules::store::{DocumentStore, FieldFilter};

pub struct FeedbackService {
    store: Arc<dyn DocumentStore>,
    camps: Arc<CampService>,
    registrations: Arc<RegistrationService>,
}

impl FeedbackService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        camps: Arc<CampService>,
        registrations: Arc<RegistrationService>,
    ) -> Self {
        Self {
            store,
            camps,
            registrations,
        }
    }

    pub async fn submit(
        &self,
        kind: MessageKind,
        camp_id: &str,
        dto: SubmitMessageDto,
    ) -> Result<CampMessageResponseDto> {
        let camp = self.camps.get_record(camp_id).await?;

        let message = CampMessage {
            email: dto.email.trim().to_string(),
            message: dto.message.trim().to_string(),
            health_camp_name: camp.camp.health_camp_name,
            camp_id: Some(camp.id),
            created_at: Utc::now(),
        };
        let doc = self
            .store
            .add(kind.collection(), message.to_document(kind))
            .await?;

        info!("{} submitted: id={}, camp={}", kind.label(), doc.id, camp_id);
        Ok(to_response(doc.id, message))
    }

    async fn messages_for(
        &self,
        kind: MessageKind,
        camps: &[CampRecord],
    ) -> Result<Vec<CampMessageResponseDto>> {
        if camps.is_empty() {
            return Ok(Vec::new());
        }

        let docs = self
            .store
            .query(
                kind.collection(),
                &[FieldFilter::any_of(
                    "campId",
                    camps.iter().map(|c| c.id.as_str()),
                )],
            )
            .await?;

        Ok(docs
            .iter()
            .filter_map(|doc| match doc.decode::<CampMessage>() {
                Ok(message) => Some(to_response(doc.id.clone(), message)),
                Err(e) => {
                    warn!("Skipping malformed {} document: {}", kind.text_field(), e);
                    None
                }
            })
            .collect())
    }

    /// Complaints or feedback about camps the caller created
    pub async fn list_for_admin(
        &self,
        kind: MessageKind,
        session: &impl Session,
    ) -> Result<Vec<CampMessageResponseDto>> {
        let camps = self.camps.owned_records(session).await?;
        self.messages_for(kind, &camps).await
    }

    pub async fn overview(&self, session: &impl Session) -> Result<AdminOverviewDto> {
        let camps = self.camps.owned_records(session).await?;
        let today = Utc::now().date_naive();
        let registrations = self.registrations.for_admin(session).await?;

        Ok(AdminOverviewDto {
            total_camps: camps.len(),
            active_camps: camps.iter().filter(|c| c.camp.is_active_on(today)).count(),
            registrations: registrations.registrations.len(),
            verified_registrations: registrations
                .registrations
                .iter()
                .filter(|r| r.verified)
                .count(),
            complaints: self.messages_for(MessageKind::Complaint, &camps).await?.len(),
            feedbacks: self.messages_for(MessageKind::Feedback, &camps).await?.len(),
        })
    }
}

fn to_response(id: String, message: CampMessage) -> CampMessageResponseDto {
    CampMessageResponseDto {
        id,
        email: message.email,
        message: message.message,
        health_camp_name: message.health_camp_name,
        camp_id: message.camp_id,
        created_at: message.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::AppError;
    use crate::features::districts::District;
    use crate::features::registrations::dtos::RegisterRequestDto;
    use crate::features::users::UserProfileService;
    use crate::shared::test_helpers::{
        camp_request, create_org_admin_user, create_user, memory_store,
    };
    use fake::{faker::internet::en::SafeEmail, Fake};

    struct Fixture {
        camps: Arc<CampService>,
        registrations: Arc<RegistrationService>,
        service: FeedbackService,
    }

    fn fixture() -> Fixture {
        let store = memory_store();
        let camps = Arc::new(CampService::new(Arc::clone(&store)));
        let profiles = Arc::new(UserProfileService::new(Arc::clone(&store)));
        let registrations = Arc::new(RegistrationService::new(
            Arc::clone(&store),
            Arc::clone(&camps),
            profiles,
        ));
        let service =
            FeedbackService::new(store, Arc::clone(&camps), Arc::clone(&registrations));
        Fixture {
            camps,
            registrations,
            service,
        }
    }

    fn submission(text: &str) -> SubmitMessageDto {
        SubmitMessageDto {
            email: SafeEmail().fake(),
            message: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_submit_resolves_camp_name() {
        let f = fixture();
        let camp = f
            .camps
            .create(
                &create_org_admin_user(),
                camp_request("Eye Camp", District::Erode, 2),
            )
            .await
            .unwrap();

        let complaint = f
            .service
            .submit(MessageKind::Complaint, &camp.id, submission(" Long queue "))
            .await
            .unwrap();
        assert_eq!(complaint.health_camp_name, "Eye Camp");
        assert_eq!(complaint.message, "Long queue");

        let err = f
            .service
            .submit(MessageKind::Feedback, "missing", submission("Great"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_admin_lists_are_scoped_and_separate() {
        let f = fixture();
        let owner = create_org_admin_user();
        let other = create_user("other-admin", &["org_admin"]);
        let mine = f
            .camps
            .create(&owner, camp_request("Eye Camp", District::Erode, 2))
            .await
            .unwrap();
        let theirs = f
            .camps
            .create(&other, camp_request("Dental Camp", District::Salem, 2))
            .await
            .unwrap();

        f.service
            .submit(MessageKind::Complaint, &mine.id, submission("Late start"))
            .await
            .unwrap();
        f.service
            .submit(MessageKind::Complaint, &theirs.id, submission("No water"))
            .await
            .unwrap();
        f.service
            .submit(MessageKind::Feedback, &mine.id, submission("Kind doctors"))
            .await
            .unwrap();

        let complaints = f
            .service
            .list_for_admin(MessageKind::Complaint, &owner)
            .await
            .unwrap();
        assert_eq!(complaints.len(), 1);
        assert_eq!(complaints[0].message, "Late start");

        let feedbacks = f
            .service
            .list_for_admin(MessageKind::Feedback, &owner)
            .await
            .unwrap();
        assert_eq!(feedbacks.len(), 1);
        assert_eq!(feedbacks[0].message, "Kind doctors");
    }

    #[tokio::test]
    async fn test_overview_counts() {
        let f = fixture();
        let owner = create_org_admin_user();
        let camp = f
            .camps
            .create(&owner, camp_request("Eye Camp", District::Erode, 2))
            .await
            .unwrap();

        let registration = f
            .registrations
            .register(
                &camp.id,
                RegisterRequestDto {
                    name: "Meena".to_string(),
                    email: SafeEmail().fake(),
                    phone: "9876543210".to_string(),
                },
            )
            .await
            .unwrap();
        f.registrations.verify(&owner, &registration.id).await.unwrap();
        f.service
            .submit(MessageKind::Feedback, &camp.id, submission("Kind doctors"))
            .await
            .unwrap();

        let overview = f.service.overview(&owner).await.unwrap();
        assert_eq!(
            overview,
            AdminOverviewDto {
                total_camps: 1,
                active_camps: 1,
                registrations: 1,
                verified_registrations: 1,
                complaints: 0,
                feedbacks: 1,
            }
        );
    }
}
