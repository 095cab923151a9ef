//! Request parameter lookup and response shaping for HTTP-triggered handlers.
//!
//! Handlers are invoked either directly with a flat JSON payload such as
//! `{"n": 28}` or through API Gateway's proxy integration, where parameters
//! arrive in `queryStringParameters` or a (possibly string-encoded) `body`.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

impl ApiGatewayResponse {
    pub fn body_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// `{ "success": true, "payload": ... }` envelope shared by the benchmarks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BenchmarkResponse<P> {
    pub success: bool,
    pub payload: P,
}

impl<P> BenchmarkResponse<P> {
    pub fn ok(payload: P) -> Self {
        Self {
            success: true,
            payload,
        }
    }
}

/// Flattened view over the places a parameter can come from.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct EventParams {
    query: Map<String, Value>,
    body: Map<String, Value>,
    top_level: Map<String, Value>,
}

impl EventParams {
    pub fn from_event(event: &Value) -> Self {
        let Some(object) = event.as_object() else {
            return Self::default();
        };

        let query = match object.get("queryStringParameters") {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };

        let body = match object.get("body") {
            Some(Value::Object(map)) => map.clone(),
            Some(Value::String(text)) => match serde_json::from_str::<Value>(text) {
                Ok(Value::Object(map)) => map,
                _ => {
                    tracing::debug!("request body is not a JSON object, ignoring it");
                    Map::new()
                }
            },
            _ => Map::new(),
        };

        Self {
            query,
            body,
            top_level: object.clone(),
        }
    }

    /// Query string first, then body, then the event's own fields.
    pub fn get(&self, name: &str) -> Option<&Value> {
        present(&self.query, name)
            .or_else(|| present(&self.body, name))
            .or_else(|| present(&self.top_level, name))
    }

    /// Non-empty string parameter.
    pub fn text(&self, name: &str) -> Option<String> {
        match self.get(name)? {
            Value::String(text) if !text.trim().is_empty() => Some(text.clone()),
            _ => None,
        }
    }

    /// Strictly positive integer parameter, given as a JSON number or a string.
    /// Whole numbers written as decimals (`28.0`, `"28.0"`) count as integers.
    pub fn positive_integer(&self, name: &str) -> Option<u64> {
        let parsed = match self.get(name)? {
            Value::Number(number) => number
                .as_u64()
                .or_else(|| number.as_f64().and_then(whole_number)),
            Value::String(text) => {
                let text = text.trim();
                text.parse::<u64>()
                    .ok()
                    .or_else(|| text.parse::<f64>().ok().and_then(whole_number))
            }
            _ => None,
        };
        parsed.filter(|value| *value > 0)
    }
}

// Explicit nulls fall through to the next source
fn present<'a>(source: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    source.get(name).filter(|value| !value.is_null())
}

// 2^64 itself is excluded, it does not fit in a u64
fn whole_number(value: f64) -> Option<u64> {
    (value.is_finite() && value.fract() == 0.0 && value > 0.0 && value < u64::MAX as f64)
        .then(|| value as u64)
}

pub fn json_response(status_code: u16, payload: &impl Serialize) -> ApiGatewayResponse {
    match serde_json::to_string(payload) {
        Ok(body) => ApiGatewayResponse {
            status_code,
            headers: json_headers(),
            body,
        },
        Err(error) => {
            tracing::error!(%error, "failed to serialize response payload");
            ApiGatewayResponse {
                status_code: 500,
                headers: json_headers(),
                body: json!({"result": "Error", "error": "serialization_error"}).to_string(),
            }
        }
    }
}

fn json_headers() -> Value {
    json!({"Content-Type": "application/json"})
}
