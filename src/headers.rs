use http::{HeaderMap, HeaderName, HeaderValue};
use std::collections::HashMap;

pub type Headers = HashMap<String, String>;

/// Destination for response headers. Setting a name twice keeps the last value.
pub trait HeaderSink {
    fn set(&mut self, name: &str, value: &str);
}

impl HeaderSink for Headers {
    fn set(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl HeaderSink for HeaderMap {
    fn set(&mut self, name: &str, value: &str) {
        match (
            HeaderName::from_bytes(name.as_bytes()),
            HeaderValue::from_str(value),
        ) {
            (Ok(name), Ok(value)) => {
                self.insert(name, value);
            }
            _ => {
                tracing::warn!(
                    header = name,
                    "skipping CORS header that is not representable in an HTTP header map"
                );
            }
        }
    }
}

impl<T: HeaderSink + ?Sized> HeaderSink for &mut T {
    fn set(&mut self, name: &str, value: &str) {
        (**self).set(name, value);
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
