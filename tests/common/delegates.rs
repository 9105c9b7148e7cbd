#![allow(dead_code)]

use cors_allowlist::{Handler, Headers, RequestContext};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// What a delegate saw of the request it was handed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub method: String,
    pub origin: Option<String>,
    pub method_header: Option<String>,
}

/// Delegate that counts invocations and remembers the last request.
#[derive(Default)]
pub struct CountingDelegate {
    calls: AtomicUsize,
    last: Mutex<Option<SeenRequest>>,
}

impl CountingDelegate {
    pub const HANDLED_HEADER: &'static str = "X-Delegate";

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<SeenRequest> {
        self.last.lock().expect("delegate lock poisoned").clone()
    }
}

impl<'a> Handler<RequestContext<'a>, Headers> for CountingDelegate {
    fn handle(&self, request: &RequestContext<'a>, sink: &mut Headers) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().expect("delegate lock poisoned") = Some(SeenRequest {
            method: request.method.to_string(),
            origin: request.origin.map(str::to_string),
            method_header: request.method_header.map(str::to_string),
        });
        sink.insert(Self::HANDLED_HEADER.to_string(), "handled".to_string());
    }
}
