use crate::options::CorsOption;
use crate::policy::Policy;
use serde::{Deserialize, Serialize};

/// Declarative form of the CORS options, for loading from a settings file.
///
/// ```
/// # use cors_allowlist::{CorsConfig, Policy};
/// let config = CorsConfig {
///     allow_origins: vec!["https://app.example".into()],
///     allow_methods: vec!["GET".into(), "POST".into()],
///     allow_credentials: Some(true),
///     allow_headers: None,
/// };
/// let policy = Policy::from(config);
/// assert!(policy.allows_origin("https://app.example"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CorsConfig {
    pub allow_origins: Vec<String>,
    pub allow_methods: Vec<String>,
    /// Unset leaves `Access-Control-Allow-Credentials` off the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_credentials: Option<bool>,
    /// Unset leaves `Access-Control-Allow-Headers` off the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_headers: Option<Vec<String>>,
}

impl CorsConfig {
    /// The option sequence equivalent to this configuration.
    pub fn options(&self) -> Vec<CorsOption> {
        let mut options = vec![
            CorsOption::AllowOrigins(self.allow_origins.clone()),
            CorsOption::AllowMethods(self.allow_methods.clone()),
        ];
        if let Some(allow) = self.allow_credentials {
            options.push(CorsOption::AllowCredentials(allow));
        }
        if let Some(headers) = &self.allow_headers {
            options.push(CorsOption::AllowHeaders(headers.clone()));
        }
        options
    }

    pub fn into_policy(self) -> Policy {
        Policy::new(self.options())
    }
}

impl From<CorsConfig> for Policy {
    fn from(config: CorsConfig) -> Self {
        config.into_policy()
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
