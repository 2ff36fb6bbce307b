mod mapping_tests;
mod submit_tests;
mod validate_tests;
