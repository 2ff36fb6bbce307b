pub mod config;
pub mod error;
pub mod forward;
pub mod mapping;
pub mod models;
pub mod submit;
pub mod validate;

#[cfg(test)]
pub mod tests;

// Test utilities - publicly exposed with test feature
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
