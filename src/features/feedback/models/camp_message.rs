use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::modules::store::collections;

/// Complaints and feedback share a shape but live in separate collections
/// and name their text field after the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Complaint,
    Feedback,
}

impl MessageKind {
    pub fn collection(self) -> &'static str {
        match self {
            MessageKind::Complaint => collections::COMPLAINTS,
            MessageKind::Feedback => collections::FEEDBACKS,
        }
    }

    pub fn text_field(self) -> &'static str {
        match self {
            MessageKind::Complaint => "complaint",
            MessageKind::Feedback => "feedback",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MessageKind::Complaint => "Complaint",
            MessageKind::Feedback => "Feedback",
        }
    }
}

/// A stored complaint or feedback entry
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampMessage {
    pub email: String,
    #[serde(alias = "complaint", alias = "feedback")]
    pub message: String,
    pub health_camp_name: String,
    /// Missing on entries written before camps were referenced by id
    #[serde(default)]
    pub camp_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CampMessage {
    /// Document body with the text stored under the kind's field name
    pub fn to_document(&self, kind: MessageKind) -> Value {
        json!({
            "email": self.email,
            (kind.text_field()): self.message,
            "healthCampName": self.health_camp_name,
            "campId": self.camp_id,
            "createdAt": self.created_at,
        })
    }
}
