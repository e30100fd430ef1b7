use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::store::{Document, StoreError};

/// Registration document body as stored in `registrations`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub camp_id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Older documents have no flag and count as unverified
    #[serde(default)]
    pub verified: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRecord {
    pub id: String,
    pub registration: Registration,
}

impl TryFrom<&Document> for RegistrationRecord {
    type Error = StoreError;

    fn try_from(doc: &Document) -> Result<Self, Self::Error> {
        Ok(Self {
            id: doc.id.clone(),
            registration: doc.decode()?,
        })
    }
}
