use crate::config::Variant;
use crate::models::{FieldName, RsvpForm};
use crate::test_utils::fixtures::{complete_form, test_config};
use crate::validate::Validator;

#[test]
fn test_complete_form_passes_every_variant() {
    for variant in [Variant::Guest, Variant::Family, Variant::Strict] {
        let validator = Validator::from_config(&test_config(variant));
        assert!(validator.validate(&complete_form()).is_ok(), "{:?}", variant);
    }
}

#[test]
fn test_guest_variant_requires_party() {
    let validator = Validator::from_config(&test_config(Variant::Guest));
    let mut form = complete_form();
    form.party = None;
    form.address = None;

    let err = validator.validate(&form).unwrap_err();
    assert_eq!(err.missing, vec![FieldName::Party]);
    assert_eq!(err.message, "お名前と出欠のご回答は必須項目です。");
}

#[test]
fn test_family_variant_requires_address_but_not_party() {
    let validator = Validator::from_config(&test_config(Variant::Family));
    let mut form = complete_form();
    form.party = None;
    assert!(validator.validate(&form).is_ok());

    form.address = Some(String::new());
    let err = validator.validate(&form).unwrap_err();
    assert_eq!(err.missing, vec![FieldName::Address]);
    assert_eq!(err.message, "お名前、出欠、ご住所は必須項目です。");
}

#[test]
fn test_strict_variant_reports_missing_fields_in_payload_order() {
    let validator = Validator::from_config(&test_config(Variant::Strict));
    let form = RsvpForm {
        allergy: Some("なし".to_string()),
        ..Default::default()
    };

    let err = validator.validate(&form).unwrap_err();
    assert_eq!(
        err.missing,
        vec![
            FieldName::Name,
            FieldName::Reception,
            FieldName::Party,
            FieldName::Address
        ]
    );
}

#[test]
fn test_empty_string_counts_as_missing_but_whitespace_does_not() {
    let validator = Validator::new(vec![FieldName::Name], "required");

    let mut form = RsvpForm::default();
    form.set(FieldName::Name, "");
    assert!(validator.validate(&form).is_err());

    form.set(FieldName::Name, " ");
    assert!(validator.validate(&form).is_ok());
}

#[test]
fn test_validation_leaves_form_untouched() {
    let validator = Validator::from_config(&test_config(Variant::Strict));
    let mut form = complete_form();
    form.name = None;
    let before = form.clone();

    assert!(validator.validate(&form).is_err());
    assert_eq!(form, before);
}
