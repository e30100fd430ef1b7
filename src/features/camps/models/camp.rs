use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::features::districts::District;
use crate::modules::store::{Document, StoreError};

/// Camp document body as stored in `healthCamps`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Camp {
    pub organization_name: String,
    pub health_camp_name: String,
    pub location: District,
    pub date: DateTime<Utc>,
    pub time_from: DateTime<Utc>,
    pub time_to: DateTime<Utc>,
    pub description: String,
    pub ambulances_available: u32,
    pub hospital_nearby: String,
    pub latitude: f64,
    pub longitude: f64,
    pub registration_url: String,
    pub admin_id: String,
    pub created_at: DateTime<Utc>,
}

impl Camp {
    /// A camp stays active through the whole of its day
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.date.date_naive() >= today
    }

    pub fn is_owned_by(&self, account_id: &str) -> bool {
        self.admin_id == account_id
    }
}

/// A camp together with its document id
#[derive(Debug, Clone, PartialEq)]
pub struct CampRecord {
    pub id: String,
    pub camp: Camp,
}

impl TryFrom<&Document> for CampRecord {
    type Error = StoreError;

    fn try_from(doc: &Document) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doc.id.clone(),
            camp: doc.decode()?,
        })
    }
}
