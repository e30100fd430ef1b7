use chrono::{NaiveDate, Weekday};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Columns are separated by a tab or a run of two or more spaces
    static ref COLUMN_SEPARATOR: Regex = Regex::new(r"\t+|\s{2,}").unwrap();
    /// "1st Monday", "2 Tuesday", "3rdWednesday"
    static ref CAMP_DAY: Regex =
        Regex::new(r"(?i)^(\d{1,2})\s*(?:st|nd|rd|th)?\s*([a-z]+)$").unwrap();
}

const COLUMNS: usize = 7;
const UNKNOWN_DATE: &str = "Unknown";

/// Forenoon or afternoon session marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Session {
    Forenoon,
    Afternoon,
}

impl Session {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_uppercase().as_str() {
            "FN" => Some(Self::Forenoon),
            "AN" => Some(Self::Afternoon),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Self::Forenoon => "FN",
            Self::Afternoon => "AN",
        }
    }
}

/// One recognised schedule row
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    /// Camp day as written, e.g. "1st Monday"
    pub camp_day: String,
    /// Calendar date of the camp day in the imported month
    pub date: Option<NaiveDate>,
    pub session: Session,
    pub camp_site: String,
    pub village: String,
    pub distance_km: f64,
    pub population: i64,
    pub area_staff: String,
}

impl ScheduleRow {
    /// Camp day with its resolved date, e.g. "1st Monday (06-01-2025)"
    pub fn camp_day_label(&self) -> String {
        let date = self
            .date
            .map(|d| d.format("%d-%m-%Y").to_string())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string());
        format!("{} ({})", self.camp_day, date)
    }
}

/// Rows recognised in a pasted schedule, plus the 1-based numbers of lines
/// that were not blank and could not be read
#[derive(Debug, Default)]
pub struct ParsedSchedule {
    pub rows: Vec<ScheduleRow>,
    pub skipped_lines: Vec<usize>,
}

/// Date of the `n`th `weekday` of the month, if the month has one
pub fn resolve_camp_day(camp_day: &str, year: i32, month: u32) -> Option<NaiveDate> {
    let caps = CAMP_DAY.captures(camp_day.trim())?;
    let n: u8 = caps[1].parse().ok()?;
    let weekday: Weekday = caps[2].parse().ok()?;
    if n == 0 {
        return None;
    }
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, n)
}

pub fn parse_row(line: &str, year: i32, month: u32) -> Option<ScheduleRow> {
    let columns: Vec<&str> = COLUMN_SEPARATOR
        .split(line.trim())
        .map(str::trim)
        .collect();
    if columns.len() != COLUMNS || columns.iter().any(|c| c.is_empty()) {
        return None;
    }

    let camp_day = columns[0].to_string();
    Some(ScheduleRow {
        date: resolve_camp_day(&camp_day, year, month),
        camp_day,
        session: Session::parse(columns[1])?,
        camp_site: columns[2].to_string(),
        village: columns[3].to_string(),
        distance_km: columns[4].parse().ok().filter(|d: &f64| d.is_finite())?,
        population: columns[5].replace(',', "").parse().ok()?,
        area_staff: columns[6].to_string(),
    })
}

pub fn parse_schedule(text: &str, year: i32, month: u32) -> ParsedSchedule {
    let mut parsed = ParsedSchedule::default();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_row(line, year, month) {
            Some(row) => parsed.rows.push(row),
            None => parsed.skipped_lines.push(index + 1),
        }
    }

    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_nth_weekday() {
        // January 2025 starts on a Wednesday
        assert_eq!(
            resolve_camp_day("1st Monday", 2025, 1),
            NaiveDate::from_ymd_opt(2025, 1, 6)
        );
        assert_eq!(
            resolve_camp_day("2nd wednesday", 2025, 1),
            NaiveDate::from_ymd_opt(2025, 1, 8)
        );
        assert_eq!(
            resolve_camp_day("5 Friday", 2025, 1),
            NaiveDate::from_ymd_opt(2025, 1, 31)
        );
        assert_eq!(resolve_camp_day("5th Monday", 2025, 1), None);
        assert_eq!(resolve_camp_day("0th Monday", 2025, 1), None);
        assert_eq!(resolve_camp_day("Monday", 2025, 1), None);
        assert_eq!(resolve_camp_day("1st Funday", 2025, 1), None);
    }

    #[test]
    fn test_parse_row_with_mixed_separators() {
        let row = parse_row(
            "1st Monday\tFN\tPerundurai PHC  Kanjikoil   4.5  1,200\tVHN, SHN",
            2025,
            1,
        )
        .unwrap();

        assert_eq!(row.camp_day, "1st Monday");
        assert_eq!(row.session, Session::Forenoon);
        assert_eq!(row.camp_site, "Perundurai PHC");
        assert_eq!(row.village, "Kanjikoil");
        assert_eq!(row.distance_km, 4.5);
        assert_eq!(row.population, 1200);
        assert_eq!(row.area_staff, "VHN, SHN");
        assert_eq!(row.camp_day_label(), "1st Monday (06-01-2025)");
    }

    #[test]
    fn test_unresolved_day_is_labelled_unknown() {
        let row = parse_row("5th Monday  AN  Site  Village  2  300  MPHW", 2025, 1).unwrap();
        assert_eq!(row.date, None);
        assert_eq!(row.camp_day_label(), "5th Monday (Unknown)");
    }

    #[test]
    fn test_parse_row_rejects_malformed_rows() {
        // header
        assert!(parse_row("Camp Day  Session  Site  Village  Distance  Population  Staff", 2025, 1).is_none());
        // wrong session
        assert!(parse_row("1st Monday  XX  Site  Village  2  300  MPHW", 2025, 1).is_none());
        // too few columns
        assert!(parse_row("1st Monday  FN  Site  Village  2  300", 2025, 1).is_none());
        // single spaces do not separate columns
        assert!(parse_row("1st Monday FN Site Village 2 300 MPHW", 2025, 1).is_none());
    }

    #[test]
    fn test_parse_schedule_reports_skipped_lines() {
        let text = "Camp Day\tSession\tSite\tVillage\tKm\tPopulation\tStaff\n\
                    \n\
                    1st Monday\tFN\tSite A\tVillage A\t3\t500\tVHN\n\
                    2nd Tuesday\tAN\tSite B\tVillage B\tfar\t800\tSHN\n\
                    3rd Friday\tAN\tSite C\tVillage C\t7.25\t900\tMPHW\n";

        let parsed = parse_schedule(text, 2025, 1);
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.rows[1].camp_site, "Site C");
        assert_eq!(parsed.skipped_lines, vec![1, 4]);
    }
}
