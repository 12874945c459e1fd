// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Pipeline configuration loaded from environment variables.

/// Extraction pipeline configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Rows accumulated before a batch is handed to the insert layer.
    pub batch_size: usize,
    /// Corner merge distance for the adjacency graph.
    pub merge_tolerance: f64,
    /// Abort the run on malformed geometry instead of skipping the
    /// element. Off by default: a bad element should not sink the batch.
    pub abort_on_malformed: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            batch_size: std::env::var("BATCH_SIZE")
                .unwrap_or_else(|_| "500".into())
                .parse()
                .unwrap_or(500),
            merge_tolerance: std::env::var("MERGE_TOLERANCE")
                .unwrap_or_else(|_| "1e-6".into())
                .parse()
                .unwrap_or(1e-6),
            abort_on_malformed: std::env::var("ABORT_ON_MALFORMED")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            batch_size: 500,
            merge_tolerance: 1e-6,
            abort_on_malformed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = Config::default();
        assert_eq!(config.batch_size, 500);
        assert!(config.merge_tolerance > 0.0);
        assert!(!config.abort_on_malformed);
    }
}
