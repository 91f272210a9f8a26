use crate::{ConfigError, Environment};
use std::env;

/// Allowed CORS origins, read from `CORS_ALLOWED_ORIGIN`.
///
/// The variable holds a comma-separated list, e.g.
/// `CORS_ALLOWED_ORIGIN=http://localhost:3000,https://app.example.com`.
/// An empty list means "allow any origin" and is only accepted outside production.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
    }

    /// Load origins for the given environment.
    ///
    /// Production refuses to start without at least one explicit origin.
    pub fn from_env_for(environment: &Environment) -> Result<Self, ConfigError> {
        let allowed_origins: Vec<String> = env::var("CORS_ALLOWED_ORIGIN")
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        if allowed_origins.is_empty() && environment.is_production() {
            return Err(ConfigError::MissingEnvVar("CORS_ALLOWED_ORIGIN".to_string()));
        }

        Ok(Self { allowed_origins })
    }
}
