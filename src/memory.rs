use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::hint::black_box;
use std::time::Instant;

use crate::config::BenchmarkConfig;
use crate::event::{json_response, ApiGatewayResponse, BenchmarkResponse, EventParams};

pub const MEMORY_TEST_NAME: &str = "memory_test";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoryTestPayload {
    pub test: String,
    pub dimension: u64,
    pub milliseconds: u128,
}

// Grow a list one element at a time so every reallocation is part of the measurement
pub fn memory_stress(dimension: u64) -> usize {
    let mut memory_list = Vec::new();
    for i in 0..dimension {
        memory_list.push(black_box(i));
    }
    black_box(&memory_list).len()
}

/// List-growth benchmark behind the `memory_test` function.
#[derive(Debug, Clone)]
pub struct MemoryTestHandler {
    default_dimension: u64,
}

impl MemoryTestHandler {
    pub fn new(config: &BenchmarkConfig) -> Self {
        Self {
            default_dimension: config.default_dimension,
        }
    }

    pub fn resolve_dimension(&self, params: &EventParams) -> u64 {
        params.positive_integer("n").unwrap_or_else(|| {
            if let Some(raw) = params.get("n") {
                tracing::warn!(%raw, default = self.default_dimension, "invalid n, using default");
            }
            self.default_dimension
        })
    }

    pub fn run(&self, dimension: u64) -> MemoryTestPayload {
        let start = Instant::now();
        let grown = memory_stress(dimension);
        let milliseconds = start.elapsed().as_millis();

        tracing::info!(dimension, grown, milliseconds, "memory test finished");
        MemoryTestPayload {
            test: MEMORY_TEST_NAME.to_string(),
            dimension,
            milliseconds,
        }
    }

    pub fn handle_event(&self, event: Value) -> ApiGatewayResponse {
        let dimension = self.resolve_dimension(&EventParams::from_event(&event));
        json_response(200, &BenchmarkResponse::ok(self.run(dimension)))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload_of(response: &ApiGatewayResponse) -> MemoryTestPayload {
        let body: BenchmarkResponse<MemoryTestPayload> =
            serde_json::from_str(&response.body).expect("body should parse");
        assert!(body.success);
        body.payload
    }

    #[test]
    fn grows_list_to_requested_dimension() {
        assert_eq!(memory_stress(0), 0);
        assert_eq!(memory_stress(10_000), 10_000);
    }

    #[test]
    fn uses_requested_dimension() {
        let handler = MemoryTestHandler::new(&BenchmarkConfig::default());
        let payload = payload_of(&handler.handle_event(json!({"queryStringParameters": {"n": "10"}})));
        assert_eq!(payload.test, "memory_test");
        assert_eq!(payload.dimension, 10);
    }

    #[test]
    fn defaults_when_n_missing_or_invalid() {
        let handler = MemoryTestHandler::new(&BenchmarkConfig::default());
        for event in [json!({}), json!({"n": -1}), json!({"n": "ten"})] {
            let payload = payload_of(&handler.handle_event(event));
            assert_eq!(payload.dimension, 1_100_000);
        }
    }

    #[test]
    fn default_comes_from_config() {
        let config = BenchmarkConfig {
            default_dimension: 32,
            ..BenchmarkConfig::default()
        };
        let params = EventParams::from_event(&json!({"n": 0}));
        assert_eq!(MemoryTestHandler::new(&config).resolve_dimension(&params), 32);
    }
}
