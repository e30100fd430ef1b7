use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{info, warn};

use crate::core::error::{AppError, Result};
use crate::features::auth::model::AuthenticatedUser;
use crate::features::auth::session::Session;
use crate::features::camps::CampService;
use crate::features::registrations::dtos::{
    AdminRegistrationsDto, CampReportDto, MyRegistrationsDto, RegisterRequestDto,
    RegisteredCampDto, RegistrationResponseDto,
};
use crate::features::registrations::models::{Registration, RegistrationRecord};
use crate::features::users::UserProfileService;
use crate::modules::store::{collections, Document, DocumentStore, FieldFilter};

pub const REPORT_CSV_HEADER: &str = "Camp Name,Total Registrations,Verified Registrations";

pub struct RegistrationService {
    store: Arc<dyn DocumentStore>,
    camps: Arc<CampService>,
    profiles: Arc<UserProfileService>,
}

impl RegistrationService {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        camps: Arc<CampService>,
        profiles: Arc<UserProfileService>,
    ) -> Self {
        Self {
            store,
            camps,
            profiles,
        }
    }

    fn decode_all(docs: &[Document]) -> Vec<RegistrationRecord> {
        docs.iter()
            .filter_map(|doc| match RegistrationRecord::try_from(doc) {
                Ok(record) => Some(record),
                Err(e) => {
                    warn!("Skipping malformed registration document: {}", e);
                    None
                }
            })
            .collect()
    }

    pub async fn register(
        &self,
        camp_id: &str,
        dto: RegisterRequestDto,
    ) -> Result<RegistrationResponseDto> {
        self.camps.get_record(camp_id).await?;

        let registration = Registration {
            camp_id: camp_id.to_string(),
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto.phone,
            verified: false,
            created_at: Utc::now(),
        };
        let body = serde_json::to_value(&registration)
            .map_err(|e| AppError::Internal(format!("Failed to encode registration: {}", e)))?;
        let doc = self.store.add(collections::REGISTRATIONS, body).await?;

        info!("Registration created: id={}, camp={}", doc.id, camp_id);
        Ok(RegistrationRecord {
            id: doc.id,
            registration,
        }
        .into())
    }

    /// Registrations for the caller's camps with per-camp counts
    pub async fn for_admin(&self, session: &impl Session) -> Result<AdminRegistrationsDto> {
        let camps = self.camps.owned_records(session).await?;
        if camps.is_empty() {
            return Ok(AdminRegistrationsDto {
                registrations: Vec::new(),
                reports: Vec::new(),
            });
        }

        let docs = self
            .store
            .query(
                collections::REGISTRATIONS,
                &[FieldFilter::any_of(
                    "campId",
                    camps.iter().map(|c| c.id.as_str()),
                )],
            )
            .await?;
        let registrations = Self::decode_all(&docs);

        let reports = camps
            .iter()
            .map(|camp| {
                let for_camp = registrations
                    .iter()
                    .filter(|r| r.registration.camp_id == camp.id);
                let (total, verified) = for_camp.fold((0, 0), |(total, verified), r| {
                    (total + 1, verified + usize::from(r.registration.verified))
                });
                CampReportDto {
                    camp_id: camp.id.clone(),
                    camp_name: camp.camp.health_camp_name.clone(),
                    total_registrations: total,
                    verified_registrations: verified,
                }
            })
            .collect();

        Ok(AdminRegistrationsDto {
            registrations: registrations.into_iter().map(Into::into).collect(),
            reports,
        })
    }

    pub async fn report_csv(&self, session: &impl Session) -> Result<String> {
        let overview = self.for_admin(session).await?;
        Ok(render_report_csv(&overview.reports))
    }

    /// Mark a registration verified; only the camp's creator may do this
    pub async fn verify(&self, session: &impl Session, id: &str) -> Result<RegistrationResponseDto> {
        let admin_id = session.require_user_id()?;

        let doc = self
            .store
            .get(collections::REGISTRATIONS, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Registration '{}' not found", id)))?;
        let record = RegistrationRecord::try_from(&doc)?;

        let camp = self.camps.get_record(&record.registration.camp_id).await?;
        if !camp.camp.is_owned_by(admin_id) {
            return Err(AppError::Forbidden(
                "Only the camp's creator can verify registrations".to_string(),
            ));
        }

        let updated = self
            .store
            .update(collections::REGISTRATIONS, id, json!({ "verified": true }))
            .await?;

        info!("Registration verified: id={}, camp={}", id, camp.id);
        Ok(RegistrationRecord::try_from(&updated)?.into())
    }

    /// Camps the caller registered for, matched on their profile email
    pub async fn for_user(&self, user: &AuthenticatedUser) -> Result<MyRegistrationsDto> {
        let Some(email) = self.profiles.contact_email(user).await? else {
            return Ok(MyRegistrationsDto {
                registered: Vec::new(),
                verified: Vec::new(),
            });
        };

        let docs = self
            .store
            .query(
                collections::REGISTRATIONS,
                &[FieldFilter::eq("email", email.as_str())],
            )
            .await?;

        let mut registered = Vec::new();
        for record in Self::decode_all(&docs) {
            // registrations for deleted camps are not shown
            let camp = match self.camps.get_record(&record.registration.camp_id).await {
                Ok(camp) => camp,
                Err(AppError::NotFound(_)) => continue,
                Err(e) => return Err(e),
            };
            registered.push(RegisteredCampDto {
                registration_id: record.id,
                camp_id: camp.id,
                health_camp_name: camp.camp.health_camp_name,
                date: camp.camp.date,
                verified: record.registration.verified,
            });
        }

        let verified = registered.iter().filter(|r| r.verified).cloned().collect();
        Ok(MyRegistrationsDto {
            registered,
            verified,
        })
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

pub fn render_report_csv(reports: &[CampReportDto]) -> String {
    let mut out = String::from(REPORT_CSV_HEADER);
    out.push('\n');
    for report in reports {
        out.push_str(&format!(
            "{},{},{}\n",
            csv_field(&report.camp_name),
            report.total_registrations,
            report.verified_registrations
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::districts::District;
    use crate::shared::test_helpers::{
        camp_request, create_citizen_user, create_org_admin_user, create_user, memory_store,
    };

    struct Fixture {
        camps: Arc<CampService>,
        profiles: Arc<UserProfileService>,
        service: RegistrationService,
    }

    fn fixture() -> Fixture {
        let store = memory_store();
        let camps = Arc::new(CampService::new(Arc::clone(&store)));
        let profiles = Arc::new(UserProfileService::new(Arc::clone(&store)));
        let service =
            RegistrationService::new(store, Arc::clone(&camps), Arc::clone(&profiles));
        Fixture {
            camps,
            profiles,
            service,
        }
    }

    fn register_dto(email: &str) -> RegisterRequestDto {
        RegisterRequestDto {
            name: "Meena".to_string(),
            email: email.to_string(),
            phone: "9876543210".to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_requires_existing_camp() {
        let f = fixture();
        let err = f
            .service
            .register("missing", register_dto("a@example.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_admin_report_counts_per_camp() {
        let f = fixture();
        let admin = create_org_admin_user();
        let eye = f
            .camps
            .create(&admin, camp_request("Eye Camp", District::Erode, 2))
            .await
            .unwrap();
        let dental = f
            .camps
            .create(&admin, camp_request("Dental Camp", District::Salem, 2))
            .await
            .unwrap();

        let first = f
            .service
            .register(&eye.id, register_dto("a@example.com"))
            .await
            .unwrap();
        f.service
            .register(&eye.id, register_dto("b@example.com"))
            .await
            .unwrap();
        f.service.verify(&admin, &first.id).await.unwrap();

        let overview = f.service.for_admin(&admin).await.unwrap();
        assert_eq!(overview.registrations.len(), 2);
        assert_eq!(
            overview.reports,
            vec![
                CampReportDto {
                    camp_id: eye.id.clone(),
                    camp_name: "Eye Camp".to_string(),
                    total_registrations: 2,
                    verified_registrations: 1,
                },
                CampReportDto {
                    camp_id: dental.id.clone(),
                    camp_name: "Dental Camp".to_string(),
                    total_registrations: 0,
                    verified_registrations: 0,
                },
            ]
        );

        let csv = f.service.report_csv(&admin).await.unwrap();
        assert_eq!(
            csv,
            "Camp Name,Total Registrations,Verified Registrations\nEye Camp,2,1\nDental Camp,0,0\n"
        );
    }

    #[tokio::test]
    async fn test_other_admin_sees_nothing_and_cannot_verify() {
        let f = fixture();
        let owner = create_org_admin_user();
        let other = create_user("other-admin", &["org_admin"]);
        let camp = f
            .camps
            .create(&owner, camp_request("Eye Camp", District::Erode, 2))
            .await
            .unwrap();
        let registration = f
            .service
            .register(&camp.id, register_dto("a@example.com"))
            .await
            .unwrap();

        let overview = f.service.for_admin(&other).await.unwrap();
        assert!(overview.registrations.is_empty());
        assert!(overview.reports.is_empty());

        let err = f.service.verify(&other, &registration.id).await.unwrap_err();
        assert!(matches!(err, AppError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_user_registrations_by_profile_email() {
        let f = fixture();
        let admin = create_org_admin_user();
        let citizen = create_citizen_user();
        let email = citizen.email.clone().unwrap();

        let kept = f
            .camps
            .create(&admin, camp_request("Eye Camp", District::Erode, 2))
            .await
            .unwrap();
        let removed = f
            .camps
            .create(&admin, camp_request("Dental Camp", District::Erode, 2))
            .await
            .unwrap();

        let reg = f.service.register(&kept.id, register_dto(&email)).await.unwrap();
        f.service.register(&removed.id, register_dto(&email)).await.unwrap();
        f.service
            .register(&kept.id, register_dto("someone.else@example.com"))
            .await
            .unwrap();
        f.service.verify(&admin, &reg.id).await.unwrap();
        f.camps.delete(&admin, &removed.id).await.unwrap();

        let mine = f.service.for_user(&citizen).await.unwrap();
        assert_eq!(mine.registered.len(), 1);
        assert_eq!(mine.registered[0].health_camp_name, "Eye Camp");
        assert_eq!(mine.verified.len(), 1);
        assert!(f.profiles.contact_email(&citizen).await.unwrap().is_some());
    }

    #[test]
    fn test_csv_quotes_awkward_names() {
        let csv = render_report_csv(&[CampReportDto {
            camp_id: "c1".to_string(),
            camp_name: "Eye, \"Dental\" Camp".to_string(),
            total_registrations: 3,
            verified_registrations: 2,
        }]);
        assert_eq!(
            csv.lines().nth(1),
            Some("\"Eye, \"\"Dental\"\" Camp\",3,2")
        );
    }
}
