use std::env;

/// Number factorized by `cpu_test` when the request carries no usable `n`.
pub const DEFAULT_CPU_TEST_NUMBER: u64 = 71_950_288_374_236;
/// List length grown by `memory_test` when the request carries no usable `n`.
pub const DEFAULT_MEMORY_TEST_DIMENSION: u64 = 1_100_000;
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

pub const CPU_TEST_DEFAULT_N_VAR: &str = "CPU_TEST_DEFAULT_N";
pub const MEMORY_TEST_DEFAULT_N_VAR: &str = "MEMORY_TEST_DEFAULT_N";
pub const TARGET_LANGUAGE_VAR: &str = "TRANSLATE_TARGET_LANGUAGE";

/// Fallback values substituted for missing or invalid request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    pub default_number: u64,
    pub default_dimension: u64,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            default_number: DEFAULT_CPU_TEST_NUMBER,
            default_dimension: DEFAULT_MEMORY_TEST_DIMENSION,
        }
    }
}

impl BenchmarkConfig {
    // Read once at cold start; unparsable or non-positive overrides are ignored
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            default_number: positive_override(
                lookup(CPU_TEST_DEFAULT_N_VAR),
                defaults.default_number,
            ),
            default_dimension: positive_override(
                lookup(MEMORY_TEST_DEFAULT_N_VAR),
                defaults.default_dimension,
            ),
        }
    }
}

/// Target language for sentence translation, `en` unless overridden.
pub fn target_language() -> String {
    env::var(TARGET_LANGUAGE_VAR)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string())
}

fn positive_override(value: Option<String>, fallback: u64) -> u64 {
    match value.as_deref().map(str::trim).map(str::parse::<u64>) {
        Some(Ok(parsed)) if parsed > 0 => parsed,
        Some(_) => {
            tracing::warn!(fallback, "ignoring invalid default override");
            fallback
        }
        None => fallback,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn falls_back_to_built_in_constants() {
        let config = BenchmarkConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, BenchmarkConfig::default());
        assert_eq!(config.default_number, 71950288374236);
        assert_eq!(config.default_dimension, 1100000);
    }

    #[test]
    fn applies_positive_overrides() {
        let config = BenchmarkConfig::from_lookup(lookup_from(&[
            (CPU_TEST_DEFAULT_N_VAR, " 360 "),
            (MEMORY_TEST_DEFAULT_N_VAR, "64"),
        ]));
        assert_eq!(config.default_number, 360);
        assert_eq!(config.default_dimension, 64);
    }

    #[test]
    fn ignores_zero_and_garbage_overrides() {
        let config = BenchmarkConfig::from_lookup(lookup_from(&[
            (CPU_TEST_DEFAULT_N_VAR, "0"),
            (MEMORY_TEST_DEFAULT_N_VAR, "lots"),
        ]));
        assert_eq!(config, BenchmarkConfig::default());
    }
}
