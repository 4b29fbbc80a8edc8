//! End-to-end orchestration: load, score, aggregate, detect, merge, sort,
//! write.

pub mod orchestrator;

pub use orchestrator::{execute, Pipeline, PipelineDiagnostics, PipelineOutput, RunPaths};
