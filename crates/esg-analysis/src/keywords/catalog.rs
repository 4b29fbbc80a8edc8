//! Per-dimension keyword catalog loaded from YAML.
//!
//! ```yaml
//! E: [탄소, emission, renewable]
//! S: [안전, labor]
//! G: [이사회, audit committee]
//! ```

use std::path::Path;

use serde::Deserialize;

use esg_core::config::MatchMode;
use esg_core::errors::CatalogError;
use esg_core::types::{Dimension, DimensionHits};

use super::term_set::TermSet;

#[derive(Debug, Default, Deserialize)]
struct RawCatalog {
    #[serde(rename = "E", alias = "e", default)]
    env: Option<Vec<String>>,
    #[serde(rename = "S", alias = "s", default)]
    soc: Option<Vec<String>>,
    #[serde(rename = "G", alias = "g", default)]
    gov: Option<Vec<String>>,
}

/// E/S/G vocabularies. Immutable for the duration of a run.
#[derive(Debug, Clone)]
pub struct KeywordCatalog {
    env: TermSet,
    soc: TermSet,
    gov: TermSet,
}

impl KeywordCatalog {
    /// Load a catalog file. Missing or malformed files are fatal.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let label = path.display().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CatalogError::FileNotFound { path: label.clone() },
            _ => CatalogError::Read {
                path: label.clone(),
                message: e.to_string(),
            },
        })?;
        Self::from_yaml_labeled(&content, &label)
    }

    /// Parse a catalog from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, CatalogError> {
        Self::from_yaml_labeled(yaml, "<string>")
    }

    fn from_yaml_labeled(yaml: &str, label: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_yaml::from_str(yaml).map_err(|e| CatalogError::Parse {
            path: label.to_string(),
            message: e.to_string(),
        })?;

        let build = |terms: Option<Vec<String>>, dimension: Dimension| {
            let terms = terms.unwrap_or_default();
            if terms.is_empty() {
                tracing::warn!(dimension = %dimension, catalog = label, "dimension has no keywords");
            }
            TermSet::new(terms).map_err(|e| CatalogError::Matcher {
                path: label.to_string(),
                message: e.to_string(),
            })
        };

        let catalog = Self {
            env: build(raw.env, Dimension::Environmental)?,
            soc: build(raw.soc, Dimension::Social)?,
            gov: build(raw.gov, Dimension::Governance)?,
        };

        tracing::debug!(
            catalog = label,
            e = catalog.env.len(),
            s = catalog.soc.len(),
            g = catalog.gov.len(),
            "keyword catalog loaded"
        );
        Ok(catalog)
    }

    /// Build a catalog directly from term lists.
    pub fn from_terms<S: AsRef<str>>(env: &[S], soc: &[S], gov: &[S]) -> Result<Self, CatalogError> {
        let build = |terms: &[S]| {
            TermSet::new(terms.iter().map(|t| t.as_ref())).map_err(|e| CatalogError::Matcher {
                path: "<terms>".to_string(),
                message: e.to_string(),
            })
        };
        Ok(Self {
            env: build(env)?,
            soc: build(soc)?,
            gov: build(gov)?,
        })
    }

    pub fn terms(&self, dimension: Dimension) -> &TermSet {
        match dimension {
            Dimension::Environmental => &self.env,
            Dimension::Social => &self.soc,
            Dimension::Governance => &self.gov,
        }
    }

    /// Keyword hits of `text` per dimension.
    pub fn hits(&self, text: &str, mode: MatchMode) -> DimensionHits {
        let mut hits = DimensionHits::default();
        for dimension in Dimension::ALL {
            hits.set(dimension, self.terms(dimension).count(text, mode));
        }
        hits
    }
}

/// Keyword hits under the primary presence contract.
pub fn keyword_score(text: &str, catalog: &KeywordCatalog) -> DimensionHits {
    catalog.hits(text, MatchMode::Presence)
}
