use axum::{extract::Path, Json};

use crate::core::error::{AppError, Result};
use crate::features::i18n::dto::{LanguageDto, TranslationsDto};
use crate::features::i18n::{Catalog, Language};
use crate::shared::types::ApiResponse;

#[utoipa::path(
    get,
    path = "/api/i18n/languages",
    responses(
        (status = 200, description = "Supported languages", body = ApiResponse<Vec<LanguageDto>>),
    ),
    tag = "i18n"
)]
pub async fn list_languages() -> Json<ApiResponse<Vec<LanguageDto>>> {
    let languages = Language::ALL.into_iter().map(LanguageDto::from).collect();
    Json(ApiResponse::list(languages))
}

#[utoipa::path(
    get,
    path = "/api/i18n/{lang}",
    params(
        ("lang" = String, Path, description = "Language code: en, fr, es or ta")
    ),
    responses(
        (status = 200, description = "Translation table", body = ApiResponse<TranslationsDto>),
        (status = 404, description = "Language not supported")
    ),
    tag = "i18n"
)]
pub async fn get_translations(
    Path(lang): Path<String>,
) -> Result<Json<ApiResponse<TranslationsDto>>> {
    let language = Language::from_tag(&lang)
        .ok_or_else(|| AppError::NotFound(format!("Language '{}' is not supported", lang)))?;

    let entries = Catalog::entries(language)
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    Ok(Json(ApiResponse::success(
        Some(TranslationsDto { language, entries }),
        None,
        None,
    )))
}
