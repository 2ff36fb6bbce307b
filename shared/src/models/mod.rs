use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// The local names of the RSVP form inputs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Reception,
    Party,
    Allergy,
    Address,
}

impl FieldName {
    /// Payload order of the outbound submission.
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Reception,
        FieldName::Party,
        FieldName::Allergy,
        FieldName::Address,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Reception => "reception",
            FieldName::Party => "party",
            FieldName::Allergy => "allergy",
            FieldName::Address => "address",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(FieldName::Name),
            "reception" => Ok(FieldName::Reception),
            "party" => Ok(FieldName::Party),
            "allergy" => Ok(FieldName::Allergy),
            "address" => Ok(FieldName::Address),
            other => Err(ConfigError::Invalid {
                key: "field".to_string(),
                reason: format!("unknown RSVP field '{}'", other),
            }),
        }
    }
}

/// Raw values of the RSVP form as the guest entered them.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct RsvpForm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub reception: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default)]
    pub allergy: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl RsvpForm {
    pub fn get(&self, field: FieldName) -> Option<&str> {
        let value = match field {
            FieldName::Name => &self.name,
            FieldName::Reception => &self.reception,
            FieldName::Party => &self.party,
            FieldName::Allergy => &self.allergy,
            FieldName::Address => &self.address,
        };
        value.as_deref()
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Reception => &mut self.reception,
            FieldName::Party => &mut self.party,
            FieldName::Allergy => &mut self.allergy,
            FieldName::Address => &mut self.address,
        };
        *slot = Some(value.into());
    }
}

/// Ordered `(external key, value)` pairs ready to be posted.
#[derive(Serialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct MappedSubmission {
    pub fields: Vec<(String, String)>,
}

impl MappedSubmission {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Result of a dispatched submission.
///
/// The receiving form service never returns a readable response, so
/// `status` is always `"dispatched"`: the request left without a
/// transport error. It does not mean the response was recorded.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SubmissionReceipt {
    #[serde(rename = "submissionId")]
    pub submission_id: String,
    pub status: String,
    #[serde(rename = "dispatchedAt")]
    pub dispatched_at: String,
}

impl SubmissionReceipt {
    pub fn dispatched(submission_id: String) -> Self {
        Self {
            submission_id,
            status: "dispatched".to_string(),
            dispatched_at: now_str(),
        }
    }
}

// Response DTOs for general use across services
#[derive(Serialize, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Serialize, Debug)]
pub struct MessageResponse {
    pub message: String,
}

// Helper function to get current timestamp as string
pub fn now_str() -> String {
    Utc::now().to_rfc3339()
}
