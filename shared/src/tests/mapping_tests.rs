use crate::config::Variant;
use crate::mapping::FieldMapper;
use crate::models::RsvpForm;
use crate::test_utils::fixtures::{complete_form, test_config};

#[test]
fn test_map_uses_configured_entry_ids_in_order() {
    let mapper = FieldMapper::from_config(&test_config(Variant::Guest));
    let mapped = mapper.map(&complete_form());

    let keys: Vec<&str> = mapped.fields.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(
        keys,
        vec!["entry.1001", "entry.1002", "entry.1003", "entry.1004", "entry.1005"]
    );
    assert_eq!(mapped.get("entry.1001"), Some("山田 花子"));
    assert_eq!(mapped.get("entry.1005"), Some("東京都港区1-2-3"));
}

#[test]
fn test_absent_optional_fields_become_empty_strings() {
    let mapper = FieldMapper::from_config(&test_config(Variant::Guest));
    let form = RsvpForm {
        name: Some("Taro".to_string()),
        reception: Some("出席".to_string()),
        party: Some("欠席".to_string()),
        allergy: None,
        address: None,
    };

    let mapped = mapper.map(&form);
    assert_eq!(mapped.len(), 5);
    assert_eq!(mapped.get("entry.1004"), Some(""));
    assert_eq!(mapped.get("entry.1005"), Some(""));
}

#[test]
fn test_family_variant_forces_party_absent() {
    let mapper = FieldMapper::from_config(&test_config(Variant::Family));
    let mut form = complete_form();
    form.party = Some("出席".to_string());

    let mapped = mapper.map(&form);
    assert_eq!(mapped.get("entry.1003"), Some("欠席"));
}

#[test]
fn test_values_are_passed_through_unchanged() {
    let mapper = FieldMapper::from_config(&test_config(Variant::Guest));
    let mut form = complete_form();
    form.allergy = Some("  卵, 乳 \n".to_string());

    let mapped = mapper.map(&form);
    assert_eq!(mapped.get("entry.1004"), Some("  卵, 乳 \n"));
}
