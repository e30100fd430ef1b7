use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::districts::District;

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ImportScheduleDto {
    pub district: District,

    #[validate(range(min = 2000, max = 2100, message = "year must be between 2000 and 2100"))]
    pub year: i32,

    #[validate(range(min = 1, max = 12, message = "month must be between 1 and 12"))]
    pub month: u32,

    /// Where the schedule was published
    #[validate(url(message = "source_pdf must be a valid URL"))]
    pub source_pdf: Option<String>,

    /// Pasted schedule rows, columns separated by tabs or two or more spaces:
    /// camp day, FN/AN, camp site, village, distance (km), population, staff
    #[validate(regex(path = "*crate::shared::validation::NON_BLANK_REGEX", message = "schedule is required"))]
    pub schedule: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ImportSummaryDto {
    /// Id of the `govtdata` document the rows were appended to
    pub district: String,
    pub imported: usize,
    /// 1-based line numbers that could not be read
    pub skipped_lines: Vec<usize>,
    /// Camps held by the district document after the import
    pub total_camps: usize,
}
