use crate::constants::{header, method};
use crate::context::CorsRequest;
use crate::handler::CorsHandler;
use crate::headers::{HeaderSink, Headers};
use crate::policy::Policy;
use crate::result::CorsDecision;
use std::sync::Arc;

/// CORS engine that writes allow-list headers according to a shared [`Policy`].
///
/// Cloning is cheap: every clone, and every handler produced by
/// [`Cors::wrap`], refers to the same policy.
#[derive(Debug, Clone)]
pub struct Cors {
    policy: Arc<Policy>,
}

impl Cors {
    pub fn new(policy: Policy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    pub fn from_shared(policy: Arc<Policy>) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Writes the CORS headers for `request` into `sink` and reports whether
    /// the request is a preflight that should end here.
    pub fn check<R, S>(&self, request: &R, sink: &mut S) -> CorsDecision
    where
        R: CorsRequest + ?Sized,
        S: HeaderSink + ?Sized,
    {
        let origin = request.header(header::ORIGIN);
        let origin_allowed = self.write_headers(request, sink);

        if request.method() == method::OPTIONS {
            tracing::debug!(origin, origin_allowed, "answering CORS preflight");
            CorsDecision::Preflight
        } else {
            tracing::trace!(
                origin,
                origin_allowed,
                method = request.method(),
                "forwarding request after CORS headers"
            );
            CorsDecision::Forward
        }
    }

    /// Like [`Cors::check`] but collects the headers into a fresh map.
    pub fn evaluate<R>(&self, request: &R) -> (CorsDecision, Headers)
    where
        R: CorsRequest + ?Sized,
    {
        let mut headers = Headers::new();
        let decision = self.check(request, &mut headers);
        (decision, headers)
    }

    /// Wraps `delegate` so it only runs for non-preflight requests, after the
    /// CORS headers have been written.
    ///
    /// Wrap CORS around authentication middleware rather than the other way
    /// round: browsers send preflights without cookies, so an auth layer in
    /// front would reject them before the headers are written.
    pub fn wrap<H>(&self, delegate: H) -> CorsHandler<H> {
        CorsHandler::new(self.clone(), delegate)
    }

    fn write_headers<R, S>(&self, request: &R, sink: &mut S) -> bool
    where
        R: CorsRequest + ?Sized,
        S: HeaderSink + ?Sized,
    {
        let origin_allowed = match request.header(header::ORIGIN) {
            Some(origin) if self.policy.allows_origin(origin) => {
                sink.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
                true
            }
            _ => false,
        };

        // Matched against the `Method` request header, not the request line.
        if let Some(requested) = request.header(header::METHOD)
            && self.policy.allows_method(requested)
        {
            sink.set(header::ACCESS_CONTROL_ALLOW_METHODS, requested);
        }

        for (name, value) in self.policy.extra_headers() {
            sink.set(name, value);
        }

        origin_allowed
    }
}

impl From<Policy> for Cors {
    fn from(policy: Policy) -> Self {
        Self::new(policy)
    }
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
