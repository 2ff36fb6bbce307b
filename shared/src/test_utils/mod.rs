pub mod fixtures;
pub mod http_test_utils;
pub mod mock_form_forwarder;
pub mod test_logging;
