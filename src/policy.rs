use crate::options::CorsOption;
use crate::result::ValidationError;
use crate::util::{is_header_value, is_http_token};
use indexmap::{IndexMap, IndexSet};

/// Allow-lists and unconditional headers that drive CORS evaluation.
///
/// Built once from a sequence of [`CorsOption`]s and read-only afterwards.
/// Origin and method membership is exact string equality; a literal `"*"`
/// only matches a request that sends `*` itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Policy {
    pub(crate) extra_headers: IndexMap<String, String>,
    pub(crate) allowed_origins: IndexSet<String>,
    pub(crate) allowed_methods: IndexSet<String>,
}

impl Policy {
    /// Applies `options` in order to an empty policy.
    pub fn new<I>(options: I) -> Self
    where
        I: IntoIterator<Item = CorsOption>,
    {
        let mut policy = Self::default();
        for option in options {
            option.apply(&mut policy);
        }
        policy
    }

    /// Exact, case-sensitive match against the origin allow-list.
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.allowed_origins.contains(origin)
    }

    /// Exact, case-sensitive match against the method allow-list.
    pub fn allows_method(&self, method: &str) -> bool {
        self.allowed_methods.contains(method)
    }

    /// Allowed origins in the order they were first added.
    pub fn allowed_origins(&self) -> impl Iterator<Item = &str> {
        self.allowed_origins.iter().map(String::as_str)
    }

    /// Allowed methods in the order they were first added.
    pub fn allowed_methods(&self) -> impl Iterator<Item = &str> {
        self.allowed_methods.iter().map(String::as_str)
    }

    /// Headers written to every response regardless of the request.
    pub fn extra_headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra_headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Checks that every configured value can be written to an HTTP response.
    ///
    /// Evaluation never fails; transports that reject malformed header
    /// values run this once before serving.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(origin) = self
            .allowed_origins
            .iter()
            .find(|origin| !is_header_value(origin))
        {
            return Err(ValidationError::InvalidOrigin(origin.clone()));
        }

        if let Some(method) = self
            .allowed_methods
            .iter()
            .find(|method| !is_http_token(method))
        {
            return Err(ValidationError::InvalidMethod(method.clone()));
        }

        if let Some((name, _)) = self
            .extra_headers
            .iter()
            .find(|(_, value)| !is_header_value(value))
        {
            return Err(ValidationError::InvalidHeaderValue { name: name.clone() });
        }

        Ok(())
    }
}

impl FromIterator<CorsOption> for Policy {
    fn from_iter<I: IntoIterator<Item = CorsOption>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
