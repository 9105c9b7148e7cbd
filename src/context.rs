use crate::constants::header;

/// Read access to the parts of an inbound request that CORS evaluation looks at.
pub trait CorsRequest {
    /// The request-line method, e.g. `GET` or `OPTIONS`.
    fn method(&self) -> &str;

    /// Value of the named request header, if present and valid UTF-8.
    fn header(&self, name: &str) -> Option<&str>;
}

/// Borrowed view of a request for hosts that do not use the `http` types.
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    /// Value of the `Method` request header.
    pub method_header: Option<&'a str>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str) -> Self {
        Self {
            method,
            origin: None,
            method_header: None,
        }
    }

    pub fn with_origin(mut self, origin: &'a str) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_method_header(mut self, method: &'a str) -> Self {
        self.method_header = Some(method);
        self
    }
}

impl CorsRequest for RequestContext<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        if name.eq_ignore_ascii_case(header::ORIGIN) {
            self.origin
        } else if name.eq_ignore_ascii_case(header::METHOD) {
            self.method_header
        } else {
            None
        }
    }
}

impl<B> CorsRequest for http::Request<B> {
    fn method(&self) -> &str {
        self.method().as_str()
    }

    /// Any UTF-8 value is returned as sent, including non-ASCII origins;
    /// only bytes that are not UTF-8 read as absent.
    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| std::str::from_utf8(value.as_bytes()).ok())
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
