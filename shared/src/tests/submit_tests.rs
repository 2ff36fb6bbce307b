use std::sync::Arc;

use crate::config::{Messages, Variant};
use crate::error::ServiceError;
use crate::forward::FormForwarder;
use crate::mapping::FieldMapper;
use crate::models::{FieldName, RsvpForm};
use crate::submit::RsvpSubmitter;
use crate::test_utils::fixtures::{complete_form, test_config};
use crate::test_utils::mock_form_forwarder::MockFormForwarder;
use crate::test_utils::test_logging::init_test_logging;

#[tokio::test]
async fn test_valid_form_is_dispatched_exactly_once() {
    init_test_logging();
    let forwarder = Arc::new(MockFormForwarder::new());
    let submitter = RsvpSubmitter::new(&test_config(Variant::Guest), forwarder.clone());

    let receipt = submitter.submit(&complete_form()).await.unwrap();
    assert_eq!(receipt.status, "dispatched");
    assert!(!receipt.submission_id.is_empty());

    assert_eq!(forwarder.dispatch_count(), 1);
    let sent = &forwarder.dispatched()[0];
    assert_eq!(sent.get("entry.1002"), Some("出席"));
}

#[tokio::test]
async fn test_invalid_form_sends_nothing() {
    init_test_logging();
    let forwarder = Arc::new(MockFormForwarder::new());
    let submitter = RsvpSubmitter::new(&test_config(Variant::Guest), forwarder.clone());

    let form = RsvpForm {
        name: Some("Taro".to_string()),
        ..Default::default()
    };

    match submitter.submit(&form).await {
        Err(ServiceError::Validation(err)) => {
            assert_eq!(err.missing, vec![FieldName::Reception, FieldName::Party]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(forwarder.dispatch_count(), 0);
}

#[tokio::test]
async fn test_transport_failure_carries_localized_message_and_is_not_retried() {
    init_test_logging();
    let forwarder = Arc::new(MockFormForwarder::new_error());
    let config = test_config(Variant::Guest);
    let submitter = RsvpSubmitter::new(&config, forwarder.clone());

    match submitter.submit(&complete_form()).await {
        Err(ServiceError::Transport { message, cause }) => {
            assert_eq!(message, config.messages.transport_failure);
            assert!(cause.contains("unreachable"));
        }
        other => panic!("expected transport error, got {:?}", other),
    }
    assert_eq!(forwarder.dispatch_count(), 1);
}

#[tokio::test]
async fn test_resubmission_after_transport_failure() {
    init_test_logging();
    let forwarder = Arc::new(MockFormForwarder::new_error());
    let submitter = RsvpSubmitter::new(&test_config(Variant::Guest), forwarder.clone());
    let form = complete_form();

    assert!(submitter.submit(&form).await.is_err());
    forwarder.set_error_mode(false);
    assert!(submitter.submit(&form).await.is_ok());
    assert_eq!(forwarder.dispatch_count(), 2);
}

#[tokio::test]
async fn test_failing_forwarder_reports_deployment_message() {
    init_test_logging();
    let forwarder = MockFormForwarder::new_error();
    let mapped = FieldMapper::from_config(&test_config(Variant::Guest)).map(&complete_form());

    match forwarder.dispatch(&mapped).await {
        Err(ServiceError::Transport { message, .. }) => {
            assert_eq!(message, Messages::default().transport_failure);
        }
        other => panic!("expected transport error, got {:?}", other),
    }
}
