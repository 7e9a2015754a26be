/*!
 * Main test entry point for ytdigest test suite
 */

// Import common test utilities
pub mod common;

// Import unit tests
mod unit {
    // App configuration tests
    pub mod app_config_tests;

    // Export artifact tests
    pub mod export_tests;
}

// Import integration tests
mod integration {
    // End-to-end digest pipeline tests
    pub mod pipeline_tests;
}
