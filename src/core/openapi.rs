use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::auth;
use crate::features::camp_directory::{
    dtos as directory_dtos, handlers as directory_handlers, GovtCamp, SessionTime,
};
use crate::features::camps::{dtos as camps_dtos, handlers as camps_handlers};
use crate::features::districts::{handler as districts_handler, District};
use crate::features::documents::{
    dtos as documents_dtos, handlers as documents_handlers, models::DocumentKind,
};
use crate::features::emergency::{dto as emergency_dto, handler as emergency_handler, PlaceKind};
use crate::features::feedback::{dtos as feedback_dtos, handlers as feedback_handlers};
use crate::features::govt_import::{dtos as govt_import_dtos, handlers as govt_import_handlers};
use crate::features::guidelines::{dto as guidelines_dto, handler as guidelines_handler};
use crate::features::i18n::{dto as i18n_dto, handler as i18n_handler, Language};
use crate::features::registrations::{dtos as registrations_dtos, handlers as registrations_handlers};
use crate::features::scraper::{handler as scraper_handler, ScrapedEntry};
use crate::features::users::{dtos as users_dtos, handlers::profile_handler};
use crate::shared::types::{ApiResponse, Meta};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Auth
        auth::handler::get_me,
        // Users
        profile_handler::get_profile,
        profile_handler::update_profile,
        profile_handler::update_language,
        // Camps
        camps_handlers::create_camp,
        camps_handlers::list_camps,
        camps_handlers::camp_suggestions,
        camps_handlers::camp_notifications,
        camps_handlers::get_camp,
        camps_handlers::list_my_camps,
        camps_handlers::update_camp,
        camps_handlers::delete_camp,
        // Registrations
        registrations_handlers::register_for_camp,
        registrations_handlers::my_registrations,
        registrations_handlers::list_admin_registrations,
        registrations_handlers::verify_registration,
        registrations_handlers::registration_report_csv,
        // Complaints and feedback
        feedback_handlers::submit_complaint,
        feedback_handlers::submit_feedback,
        feedback_handlers::list_complaints,
        feedback_handlers::list_feedbacks,
        feedback_handlers::admin_overview,
        // Government camps
        directory_handlers::list_govt_camps,
        directory_handlers::get_govt_camp,
        govt_import_handlers::import_schedule,
        // Documents
        documents_handlers::upload_document,
        documents_handlers::list_documents,
        documents_handlers::delete_document,
        // Emergency (public)
        emergency_handler::nearby_places,
        emergency_handler::sos,
        // Reference data (public)
        districts_handler::list_districts,
        guidelines_handler::get_guidelines,
        i18n_handler::list_languages,
        i18n_handler::get_translations,
        scraper_handler::scrape,
    ),
    components(
        schemas(
            // Shared
            Meta,
            District,
            Language,
            // Auth
            auth::dto::MeResponseDto,
            auth::model::AuthenticatedUser,
            ApiResponse<auth::dto::MeResponseDto>,
            // Users
            users_dtos::ProfileResponseDto,
            users_dtos::UpdateProfileDto,
            users_dtos::UpdateLanguageDto,
            ApiResponse<users_dtos::ProfileResponseDto>,
            // Camps
            camps_dtos::CampRequestDto,
            camps_dtos::CampResponseDto,
            camps_dtos::CampNotificationDto,
            camps_dtos::SuggestionField,
            ApiResponse<camps_dtos::CampResponseDto>,
            ApiResponse<Vec<camps_dtos::CampResponseDto>>,
            ApiResponse<camps_dtos::CampNotificationDto>,
            ApiResponse<Vec<String>>,
            // Registrations
            registrations_dtos::RegisterRequestDto,
            registrations_dtos::RegistrationResponseDto,
            registrations_dtos::CampReportDto,
            registrations_dtos::AdminRegistrationsDto,
            registrations_dtos::RegisteredCampDto,
            registrations_dtos::MyRegistrationsDto,
            ApiResponse<registrations_dtos::RegistrationResponseDto>,
            ApiResponse<registrations_dtos::AdminRegistrationsDto>,
            ApiResponse<registrations_dtos::MyRegistrationsDto>,
            // Complaints and feedback
            feedback_dtos::SubmitMessageDto,
            feedback_dtos::CampMessageResponseDto,
            feedback_dtos::AdminOverviewDto,
            ApiResponse<feedback_dtos::CampMessageResponseDto>,
            ApiResponse<Vec<feedback_dtos::CampMessageResponseDto>>,
            ApiResponse<feedback_dtos::AdminOverviewDto>,
            // Government camps
            GovtCamp,
            SessionTime,
            directory_dtos::DirectoryListDto,
            govt_import_dtos::ImportScheduleDto,
            govt_import_dtos::ImportSummaryDto,
            ApiResponse<directory_dtos::DirectoryListDto>,
            ApiResponse<GovtCamp>,
            ApiResponse<govt_import_dtos::ImportSummaryDto>,
            // Documents
            DocumentKind,
            documents_dtos::UploadDocumentDto,
            documents_dtos::DocumentResponseDto,
            ApiResponse<documents_dtos::DocumentResponseDto>,
            ApiResponse<Vec<documents_dtos::DocumentResponseDto>>,
            // Emergency
            PlaceKind,
            emergency_dto::PlaceDto,
            emergency_dto::SosDto,
            ApiResponse<Vec<emergency_dto::PlaceDto>>,
            ApiResponse<emergency_dto::SosDto>,
            // Reference data
            guidelines_dto::GuidelinesDto,
            guidelines_dto::GuidelineCategoryDto,
            i18n_dto::LanguageDto,
            i18n_dto::TranslationsDto,
            ScrapedEntry,
            ApiResponse<Vec<District>>,
            ApiResponse<guidelines_dto::GuidelinesDto>,
            ApiResponse<Vec<i18n_dto::LanguageDto>>,
            ApiResponse<i18n_dto::TranslationsDto>,
            ApiResponse<Vec<ScrapedEntry>>,
        )
    ),
    tags(
        (name = "auth", description = "Signed-in user"),
        (name = "users", description = "Profile and preferred language"),
        (name = "camps", description = "Health camps run by organizations"),
        (name = "registrations", description = "Camp registrations and reports"),
        (name = "feedback", description = "Complaints, feedback and the admin overview"),
        (name = "govt-camps", description = "Government camp directory and schedule import"),
        (name = "documents", description = "Medical reports and NOC certificates"),
        (name = "emergency", description = "Nearby hospitals, pharmacies and SOS links (public)"),
        (name = "districts", description = "Tamil Nadu districts (public)"),
        (name = "guidelines", description = "Health guidelines (public)"),
        (name = "i18n", description = "Languages and UI translations (public)"),
        (name = "scraper", description = "Scraped health programme information"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Health Camp API",
        version = "0.1.0",
        description = "API documentation for the health camp platform",
    )
)]
pub struct ApiDoc;

/// Adds the Bearer JWT security scheme to the OpenAPI document
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
