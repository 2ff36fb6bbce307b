use std::collections::BTreeMap;

use crate::config::{RsvpConfig, Variant};
use crate::models::{FieldName, RsvpForm};

pub const TEST_ACTION_URL: &str = "https://forms.example.test/d/e/test-form/formResponse";

/// Entry ids in the shape the receiving form hands out
pub fn test_entry_ids() -> BTreeMap<FieldName, String> {
    BTreeMap::from([
        (FieldName::Name, "entry.1001".to_string()),
        (FieldName::Reception, "entry.1002".to_string()),
        (FieldName::Party, "entry.1003".to_string()),
        (FieldName::Allergy, "entry.1004".to_string()),
        (FieldName::Address, "entry.1005".to_string()),
    ])
}

pub fn test_config(variant: Variant) -> RsvpConfig {
    RsvpConfig::for_variant(variant, TEST_ACTION_URL, test_entry_ids())
}

/// A form with every field answered
pub fn complete_form() -> RsvpForm {
    RsvpForm {
        name: Some("山田 花子".to_string()),
        reception: Some("出席".to_string()),
        party: Some("出席".to_string()),
        allergy: Some("えび".to_string()),
        address: Some("東京都港区1-2-3".to_string()),
    }
}
