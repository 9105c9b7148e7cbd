#![allow(dead_code)]

use cors_allowlist::constants::method;
use cors_allowlist::{
    Cors, CorsDecision, CorsHandler, CorsOption, Handler, Headers, Policy, RequestContext,
    allow_credentials, allow_headers, allow_methods, allow_origins,
};

#[derive(Default)]
pub struct PolicyBuilder {
    options: Vec<CorsOption>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, origins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.push(allow_origins(origins));
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.push(allow_methods(methods));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options.push(allow_credentials(enabled));
        self
    }

    pub fn allowed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.push(allow_headers(headers));
        self
    }

    pub fn option(mut self, option: CorsOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn build_policy(self) -> Policy {
        Policy::new(self.options)
    }

    pub fn build(self) -> Cors {
        Cors::new(self.build_policy())
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    method_header: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            origin: None,
            method_header: None,
        }
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn method_header(mut self, method: impl Into<String>) -> Self {
        self.method_header = Some(method.into());
        self
    }

    pub fn as_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            method_header: self.method_header.as_deref(),
        }
    }

    pub fn check(&self, cors: &Cors) -> (CorsDecision, Headers) {
        cors.evaluate(&self.as_context())
    }

    pub fn dispatch<H>(&self, handler: &CorsHandler<H>) -> Headers
    where
        H: for<'a> Handler<RequestContext<'a>, Headers>,
    {
        let mut headers = Headers::new();
        handler.handle(&self.as_context(), &mut headers);
        headers
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

/// The configuration used throughout the end-to-end scenarios.
pub fn standard_cors() -> Cors {
    policy()
        .origins(["http://a.test"])
        .methods([method::GET])
        .credentials(true)
        .build()
}

pub fn request(method: impl Into<String>) -> RequestBuilder {
    RequestBuilder::new(method)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}
