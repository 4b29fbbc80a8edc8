//! Greenwash detection: a statistical jump in the latest score combined with
//! promotional language and no evidentiary language.

pub mod detector;

pub use detector::{GreenwashAssessment, GreenwashDetector};
