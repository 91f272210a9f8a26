//! Shared test utilities for domain testing
//!
//! - `TestDataBuilder`: Deterministic test data generation
//! - `json_body`: Collects an axum response body and deserializes it
//! - `assertions`: Custom assertion helpers
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::TestDataBuilder;
//!
//! let builder = TestDataBuilder::from_test_name("test_create_user");
//! let email = builder.email("alice");
//! let name = builder.name("user", "alice");
//! ```

use axum::body::Body;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;

/// Builder for test data with deterministic randomization
///
/// This ensures tests are reproducible by using seeded data.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    /// Create a new builder with a seed (for deterministic tests)
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from test name (generates seed from test name hash)
    ///
    /// This is the recommended way to create a builder for consistent test data.
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::from_test_name("test_create_user");
    /// ```
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Generate a unique name for testing
    ///
    /// # Example
    ///
    /// ```
    /// use test_utils::TestDataBuilder;
    ///
    /// let builder = TestDataBuilder::new(7);
    /// assert_eq!(builder.name("user", "main"), "test-user-7-main");
    /// ```
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }

    /// Generate an email address unique to this builder
    pub fn email(&self, local: &str) -> String {
        format!("{}.{}@example.com", local, self.seed)
    }

    /// Generate a password unique to this builder
    pub fn password(&self, label: &str) -> String {
        format!("Pw-{}-{}!", label, self.seed)
    }
}

/// Collect a response body and deserialize it as JSON
///
/// Panics when the body cannot be read or is not valid JSON for `T`.
pub async fn json_body<T: DeserializeOwned>(body: Body) -> T {
    let bytes = body
        .collect()
        .await
        .expect("failed to read response body")
        .to_bytes();

    serde_json::from_slice(&bytes).unwrap_or_else(|e| {
        panic!(
            "response body is not the expected JSON ({}): {}",
            e,
            String::from_utf8_lossy(&bytes)
        )
    })
}

/// Test assertion helpers
pub mod assertions {
    use serde_json::Value;

    /// Assert that an optional value is Some
    pub fn assert_some<T>(value: Option<T>, context: &str) -> T {
        value.unwrap_or_else(|| panic!("{}: expected Some, got None", context))
    }

    /// Assert the `error` code field of a JSON error body
    pub fn assert_error_code(body: &Value, expected: &str) {
        assert_eq!(
            body.get("error").and_then(Value::as_str),
            Some(expected),
            "unexpected error body: {}",
            body
        );
    }
}
