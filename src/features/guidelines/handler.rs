use axum::Json;

use crate::features::guidelines::dto::GuidelinesDto;
use crate::features::i18n::LanguageContext;
use crate::shared::types::ApiResponse;

/// Health guidelines in the request's language
///
/// The language comes from `?lang=`, then `Accept-Language`, then English.
#[utoipa::path(
    get,
    path = "/api/guidelines",
    params(
        ("lang" = Option<String>, Query, description = "Language code: en, fr, es or ta")
    ),
    responses(
        (status = 200, description = "Localized guidelines", body = ApiResponse<GuidelinesDto>),
    ),
    tag = "guidelines"
)]
pub async fn get_guidelines(lang: LanguageContext) -> Json<ApiResponse<GuidelinesDto>> {
    Json(ApiResponse::success(
        Some(GuidelinesDto::localized(&lang)),
        None,
        None,
    ))
}
