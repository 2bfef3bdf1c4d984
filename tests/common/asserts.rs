#![allow(dead_code)]

use ferric_cors::{CorsDecision, Headers};

pub fn assert_actual(decision: CorsDecision) -> Headers {
    match decision {
        CorsDecision::Actual(result) => result.headers,
        other => panic!("expected actual decision, got {:?}", other),
    }
}

pub fn assert_preflight(decision: CorsDecision) -> (Headers, u16, bool) {
    match decision {
        CorsDecision::Preflight(result) => (result.headers, result.status, result.end_response),
        other => panic!("expected preflight decision, got {:?}", other),
    }
}
