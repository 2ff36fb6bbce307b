use serde::Serialize;
use wedding_rsvp_shared::config::Messages;
use wedding_rsvp_shared::models::FieldName;

// Response DTOs

/// Public description of the RSVP form. Entry ids stay server-side.
#[derive(Serialize, Debug)]
pub struct FormSchemaResponse {
    pub required: Vec<FieldName>,
    #[serde(rename = "fixedFields")]
    pub fixed_fields: Vec<FieldName>,
    pub messages: Messages,
}
