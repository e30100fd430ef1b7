mod govt_camp;

pub use govt_camp::{camps_from_district_documents, raw_keys, GovtCamp};
