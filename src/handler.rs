use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;

use crate::config::BenchmarkConfig;
use crate::event::{json_response, ApiGatewayResponse, BenchmarkResponse, EventParams};

pub const CPU_TEST_NAME: &str = "cpu_test";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CpuTestPayload {
    pub test: String,
    pub number: u64,
    pub result: Vec<u64>,
    pub milliseconds: u128,
}

// Exact floor(sqrt(n)); the float estimate is corrected so perfect squares never go off by one
pub fn integer_sqrt(n: u64) -> u64 {
    if n < 2 {
        return n;
    }
    let mut root = (n as f64).sqrt() as u64;
    while root.checked_mul(root).map_or(true, |square| square > n) {
        root -= 1;
    }
    while (root + 1)
        .checked_mul(root + 1)
        .map_or(false, |square| square <= n)
    {
        root += 1;
    }
    root
}

// Trial division up to sqrt(n), collecting both i and n / i
pub fn factorize(n: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    for i in 1..=integer_sqrt(n) {
        if n % i == 0 {
            factors.push(i);
            let complement = n / i;
            if complement != i {
                factors.push(complement);
            }
        }
    }
    factors.sort_unstable();
    factors
}

/// Factorization benchmark behind the `cpu_test` function.
#[derive(Debug, Clone)]
pub struct CpuTestHandler {
    default_number: u64,
}

impl CpuTestHandler {
    pub fn new(config: &BenchmarkConfig) -> Self {
        Self {
            default_number: config.default_number,
        }
    }

    // Missing, non-numeric and non-positive input all fall back to the default
    pub fn resolve_number(&self, params: &EventParams) -> u64 {
        match params.positive_integer("n") {
            Some(number) => number,
            None => {
                if let Some(raw) = params.get("n") {
                    tracing::warn!(%raw, default = self.default_number, "invalid n, using default");
                }
                self.default_number
            }
        }
    }

    pub fn run(&self, number: u64) -> CpuTestPayload {
        let start = Instant::now();
        let result = factorize(number);
        let milliseconds = start.elapsed().as_millis();

        tracing::info!(number, divisors = result.len(), milliseconds, "cpu test finished");
        CpuTestPayload {
            test: CPU_TEST_NAME.to_string(),
            number,
            result,
            milliseconds,
        }
    }

    pub fn handle_event(&self, event: Value) -> ApiGatewayResponse {
        let number = self.resolve_number(&EventParams::from_event(&event));
        json_response(200, &BenchmarkResponse::ok(self.run(number)))
    }
}
