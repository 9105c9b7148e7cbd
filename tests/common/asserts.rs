#![allow(dead_code)]

use cors_allowlist::{CorsDecision, Headers};

pub fn assert_preflight((decision, headers): (CorsDecision, Headers)) -> Headers {
    match decision {
        CorsDecision::Preflight => headers,
        other => panic!("expected preflight decision, got {:?}", other),
    }
}

pub fn assert_forward((decision, headers): (CorsDecision, Headers)) -> Headers {
    match decision {
        CorsDecision::Forward => headers,
        other => panic!("expected forward decision, got {:?}", other),
    }
}
