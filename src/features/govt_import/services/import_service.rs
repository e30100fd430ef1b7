use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::camp_directory::models::raw_keys;
use crate::features::govt_import::dtos::{ImportScheduleDto, ImportSummaryDto};
use crate::features::govt_import::parser::{parse_schedule, ScheduleRow};
use crate::modules::store::{collections, DocumentStore};

pub struct GovtImportService {
    store: Arc<dyn DocumentStore>,
}

impl GovtImportService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Append the recognised rows of a pasted schedule to the district document
    pub async fn import(&self, dto: ImportScheduleDto) -> Result<ImportSummaryDto> {
        let parsed = parse_schedule(&dto.schedule, dto.year, dto.month);
        if parsed.rows.is_empty() {
            return Err(AppError::Validation(
                "No schedule rows could be read".to_string(),
            ));
        }

        let district_id = dto.district.name().to_lowercase();
        let source = dto.source_pdf.as_deref().unwrap_or_default();
        let new_camps = parsed.rows.iter().map(|row| raw_camp(&district_id, row, source));

        let existing = self.store.get(collections::GOVT_DATA, &district_id).await?;
        let mut camps: Vec<Value> = existing
            .as_ref()
            .and_then(|doc| doc.field(raw_keys::CAMPS))
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();
        camps.extend(new_camps);
        let total_camps = camps.len();

        let body = json!({ (raw_keys::CAMPS): camps });
        match existing {
            Some(_) => self.store.update(collections::GOVT_DATA, &district_id, body).await?,
            None => self.store.set(collections::GOVT_DATA, &district_id, body).await?,
        };

        info!(
            "Imported {} govt camps into '{}' ({} lines skipped)",
            parsed.rows.len(),
            district_id,
            parsed.skipped_lines.len()
        );

        Ok(ImportSummaryDto {
            district: district_id,
            imported: parsed.rows.len(),
            skipped_lines: parsed.skipped_lines,
            total_camps,
        })
    }
}

fn raw_camp(district_id: &str, row: &ScheduleRow, source_pdf: &str) -> Value {
    json!({
        (raw_keys::ID): format!("{}-{}", district_id, Uuid::new_v4().simple()),
        (raw_keys::CAMP_DAY): row.camp_day_label(),
        (raw_keys::SESSION): row.session.code(),
        (raw_keys::CAMP_SITE): row.camp_site,
        (raw_keys::VILLAGE): row.village,
        (raw_keys::DISTANCE): row.distance_km,
        (raw_keys::POPULATION): row.population,
        (raw_keys::AREA_STAFF): row.area_staff,
        (raw_keys::SOURCE_PDF): source_pdf,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::camp_directory::{DirectoryService, FilterState, SessionTime};
    use crate::features::districts::District;
    use crate::shared::test_helpers::memory_store;

    const SCHEDULE: &str = "1st Monday\tFN\tPerundurai PHC\tKanjikoil\t4.5\t1200\tVHN\n\
                            not a row\n\
                            2nd Tuesday\tAN\tChennimalai\tPasuvapatti\t6\t800\tSHN";

    fn dto(district: District, schedule: &str) -> ImportScheduleDto {
        ImportScheduleDto {
            district,
            year: 2025,
            month: 1,
            source_pdf: Some("https://example.org/erode.pdf".to_string()),
            schedule: schedule.to_string(),
        }
    }

    #[tokio::test]
    async fn test_import_creates_district_document() {
        let store = memory_store();
        let service = GovtImportService::new(store.clone());

        let summary = service.import(dto(District::Erode, SCHEDULE)).await.unwrap();
        assert_eq!(summary.district, "erode");
        assert_eq!(summary.imported, 2);
        assert_eq!(summary.skipped_lines, vec![2]);
        assert_eq!(summary.total_camps, 2);

        let doc = store.get(collections::GOVT_DATA, "erode").await.unwrap().unwrap();
        let first = &doc.field("camps").unwrap()[0];
        assert_eq!(first["CAMP DAY"], "1st Monday (06-01-2025)");
        assert_eq!(first["FN / AN"], "FN");
        assert_eq!(first["Source PDF"], "https://example.org/erode.pdf");
    }

    #[tokio::test]
    async fn test_import_appends_to_existing_camps() {
        let store = memory_store();
        store
            .set(
                collections::GOVT_DATA,
                "erode",
                json!({"camps": [{"id": "legacy-1", "Camp Site": "Old site"}], "region": "west"}),
            )
            .await
            .unwrap();
        let service = GovtImportService::new(store.clone());

        let summary = service.import(dto(District::Erode, SCHEDULE)).await.unwrap();
        assert_eq!(summary.total_camps, 3);

        let doc = store.get(collections::GOVT_DATA, "erode").await.unwrap().unwrap();
        assert_eq!(doc.field("camps").unwrap()[0]["id"], "legacy-1");
        assert_eq!(doc.field("region").unwrap(), "west");
    }

    #[tokio::test]
    async fn test_imported_rows_show_up_in_directory() {
        let store = memory_store();
        GovtImportService::new(store.clone())
            .import(dto(District::Erode, SCHEDULE))
            .await
            .unwrap();

        let directory = DirectoryService::new(store);
        let filter = FilterState {
            session_time: Some(SessionTime::Afternoon),
            ..Default::default()
        };
        let result = directory.list(filter).await.unwrap();

        assert_eq!(result.total_loaded, 2);
        assert_eq!(result.camps.len(), 1);
        assert_eq!(result.camps[0].camp_site, "Chennimalai");
        assert_eq!(result.camps[0].population, Some(800));
        assert_eq!(result.camps[0].distance_km, Some(6.0));
    }

    #[tokio::test]
    async fn test_schedule_without_rows_is_rejected() {
        let store = memory_store();
        let err = GovtImportService::new(store.clone())
            .import(dto(District::Salem, "Camp Day  Session\nnothing here"))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert!(store.get(collections::GOVT_DATA, "salem").await.unwrap().is_none());
    }
}
