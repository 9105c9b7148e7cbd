use crate::constants::header;
use crate::policy::Policy;

/// A single configuration step applied to a [`Policy`] under construction.
///
/// Options of different kinds touch disjoint parts of the policy, so the
/// order in which they are supplied does not change the result. Repeating
/// an option with the same arguments is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOption {
    /// Add exact-match origins (scheme, host and port) to the allow-list.
    AllowOrigins(Vec<String>),
    /// Add exact-match method tokens to the allow-list.
    AllowMethods(Vec<String>),
    /// Emit `Access-Control-Allow-Credentials` with `true` or `false`.
    AllowCredentials(bool),
    /// Emit `Access-Control-Allow-Headers` with the names joined by `", "`.
    /// A later `AllowHeaders` replaces an earlier one.
    AllowHeaders(Vec<String>),
}

impl CorsOption {
    /// Folds this option into `policy`. Origins and methods accumulate;
    /// header options overwrite any earlier value for the same header.
    pub fn apply(&self, policy: &mut Policy) {
        match self {
            CorsOption::AllowOrigins(origins) => {
                policy.allowed_origins.extend(origins.iter().cloned());
            }
            CorsOption::AllowMethods(methods) => {
                policy.allowed_methods.extend(methods.iter().cloned());
            }
            CorsOption::AllowCredentials(allow) => {
                policy.extra_headers.insert(
                    header::ACCESS_CONTROL_ALLOW_CREDENTIALS.to_string(),
                    allow.to_string(),
                );
            }
            CorsOption::AllowHeaders(headers) if headers.is_empty() => {}
            CorsOption::AllowHeaders(headers) => {
                policy.extra_headers.insert(
                    header::ACCESS_CONTROL_ALLOW_HEADERS.to_string(),
                    headers.join(", "),
                );
            }
        }
    }
}

/// Adds origins such as `https://app.test:8443` to the allow-list.
pub fn allow_origins<I, S>(origins: I) -> CorsOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CorsOption::AllowOrigins(origins.into_iter().map(Into::into).collect())
}

/// Adds method tokens such as `GET` to the allow-list.
pub fn allow_methods<I, S>(methods: I) -> CorsOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CorsOption::AllowMethods(methods.into_iter().map(Into::into).collect())
}

/// Allows credentialed requests (cookies, authorization headers) from the
/// allow-listed origins.
pub fn allow_credentials(allow: bool) -> CorsOption {
    CorsOption::AllowCredentials(allow)
}

/// Lists the non-simple request headers callers may send, e.g.
/// `Content-Type` for `application/json` bodies.
pub fn allow_headers<I, S>(headers: I) -> CorsOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    CorsOption::AllowHeaders(headers.into_iter().map(Into::into).collect())
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
