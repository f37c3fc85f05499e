//! # Application Configuration
//!
//! Where data lives, where it comes from, and the split parameters.
//!
//! ## Precedence
//!
//! CLI flag > TOML config file > built-in default.
//!
//! ```toml
//! data_dir = "data"
//! url = "https://snap.stanford.edu/data/ca-HepTh.txt.gz"
//!
//! [split]
//! seed = 42
//! test_frac = 0.2
//! k_train = 2
//! k_test = 1
//! ```

use linksplit_core::{SplitConfig, SplitError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default source network: SNAP High Energy Physics - Theory collaborations.
pub const CA_HEPTH_URL: &str = "https://snap.stanford.edu/data/ca-HepTh.txt.gz";

/// File name used for the raw download when the URL has no usable name.
const FALLBACK_RAW_NAME: &str = "network.txt.gz";

// =============================================================================
// CONFIG
// =============================================================================

/// Full application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Root of the `raw/` and `processed/` directories.
    pub data_dir: PathBuf,
    /// Remote edge list to download.
    pub url: String,
    /// Split parameters.
    pub split: SplitConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            url: CA_HEPTH_URL.to_string(),
            split: SplitConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load the configuration from a TOML file, or the defaults if no file is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self, SplitError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(path).map_err(|e| {
            SplitError::InvalidConfig(format!("Cannot read '{}': {}", path.display(), e))
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, SplitError> {
        let config: Self =
            toml::from_str(text).map_err(|e| SplitError::InvalidConfig(e.to_string()))?;
        config.split.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides to the split parameters.
    pub fn apply_overrides(&mut self, overrides: &SplitOverrides) -> Result<(), SplitError> {
        if let Some(seed) = overrides.seed {
            self.split.seed = seed;
        }
        if let Some(test_frac) = overrides.test_frac {
            self.split.test_frac = test_frac;
        }
        if let Some(k_train) = overrides.k_train {
            self.split.k_train = k_train;
        }
        if let Some(k_test) = overrides.k_test {
            self.split.k_test = k_test;
        }
        self.split.validate()
    }

    // -------------------------------------------------------------------------
    // Data layout
    // -------------------------------------------------------------------------

    /// Directory for downloaded files.
    #[must_use]
    pub fn raw_dir(&self) -> PathBuf {
        self.data_dir.join("raw")
    }

    /// Directory for derived files.
    #[must_use]
    pub fn processed_dir(&self) -> PathBuf {
        self.data_dir.join("processed")
    }

    /// Local path of the downloaded edge list, named after the URL.
    #[must_use]
    pub fn raw_path(&self) -> PathBuf {
        let name = self
            .url
            .rsplit('/')
            .next()
            .map(|s| s.split(['?', '#']).next().unwrap_or(s))
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_RAW_NAME);
        self.raw_dir().join(name)
    }

    /// The de-duplicated full edge table.
    #[must_use]
    pub fn edges_path(&self) -> PathBuf {
        self.processed_dir().join("edges.csv")
    }

    /// Training edge table.
    #[must_use]
    pub fn train_path(&self) -> PathBuf {
        self.processed_dir().join("train_edges.csv")
    }

    /// Core-restricted test edge table.
    #[must_use]
    pub fn test_path(&self) -> PathBuf {
        self.processed_dir().join("test_edges.csv")
    }

    /// Sorted core node list.
    #[must_use]
    pub fn core_path(&self) -> PathBuf {
        self.processed_dir().join("core_nodes.txt")
    }
}

// =============================================================================
// OVERRIDES
// =============================================================================

/// Split parameters given on the command line. `None` keeps the configured
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SplitOverrides {
    /// Replaces `split.seed`.
    pub seed: Option<u64>,
    /// Replaces `split.test_frac`.
    pub test_frac: Option<f64>,
    /// Replaces `split.k_train`.
    pub k_train: Option<usize>,
    /// Replaces `split.k_test`.
    pub k_test: Option<usize>,
}

// =============================================================================
// TESTS
// =============================================================================
