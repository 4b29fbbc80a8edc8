//! Pipeline execution configuration.

use serde::{Deserialize, Serialize};

/// Controls how the batch is executed. Never changes results.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PipelineConfig {
    /// Score records and evaluate companies on a rayon pool. Default: true.
    pub parallel: Option<bool>,
    /// Worker threads (0 = rayon default). Default: 0.
    pub threads: Option<usize>,
}

impl PipelineConfig {
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(0)
    }
}
