//! Configuration system with YAML schema and validation.
//!
//! Bad settings are rejected before a run starts:
//! - unknown keys fail deserialization
//! - ranges are checked by `validator`
//! - semantic checks resolve the algorithm name and compare pause lengths

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use validator::Validate;

use crate::algorithms::Algorithm;
use crate::data::{Pattern, SeededRng};
use crate::engine::{Pacing, Speed};
use crate::error::{SortError, SortResult};

/// Smallest array size offered by the interactive size control.
pub const UI_MIN_SIZE: usize = 10;
/// Largest array size offered by the interactive size control.
pub const UI_MAX_SIZE: usize = 100;

/// Top-level visualizer configuration.
///
/// Loaded from YAML files with full schema validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct VisualizerConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    pub schema_version: String,

    /// Algorithm identifier, e.g. `"quick"`.
    #[validate(length(min = 1))]
    pub algorithm: String,

    /// Number of elements to generate.
    #[validate(range(min = 1, max = 500))]
    pub size: usize,

    /// Animation speed, 1 (slowest) to 10 (fastest).
    #[validate(range(min = 1, max = 10))]
    pub speed: u8,

    /// Shape of the generated data.
    pub pattern: Pattern,

    /// Seed for data generation.
    pub seed: u64,

    /// Highlight and step durations.
    #[validate(nested)]
    pub pacing: PacingConfig,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            schema_version: "1.0".to_string(),
            algorithm: Algorithm::default().id().to_string(),
            size: 50,
            speed: Speed::default().get(),
            pattern: Pattern::default(),
            seed: 42,
            pacing: PacingConfig::default(),
        }
    }
}

impl VisualizerConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File cannot be read
    /// - YAML parsing fails
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> SortResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> SortResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.check()?;
        Ok(config)
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_yaml(&self) -> SortResult<String> {
        serde_yaml::to_string(self)
            .map_err(|e| SortError::serialization(format!("YAML serialization failed: {e}")))
    }

    /// Create a builder for configuration.
    #[must_use]
    pub fn builder() -> VisualizerConfigBuilder {
        VisualizerConfigBuilder::default()
    }

    /// Run schema and semantic validation.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn check(&self) -> SortResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Validate semantic constraints beyond schema.
    fn validate_semantic(&self) -> SortResult<()> {
        self.resolved_algorithm()?;

        if self.pacing.compare_highlight_ms > self.pacing.swap_highlight_ms {
            return Err(SortError::config(format!(
                "compare highlight ({} ms) should not outlast swap highlight ({} ms)",
                self.pacing.compare_highlight_ms, self.pacing.swap_highlight_ms
            )));
        }

        Ok(())
    }

    /// The configured algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`SortError::UnsupportedAlgorithm`] for unknown names.
    pub fn resolved_algorithm(&self) -> SortResult<Algorithm> {
        self.algorithm.parse()
    }

    /// The configured speed, clamped into range.
    #[must_use]
    pub fn speed(&self) -> Speed {
        Speed::new(self.speed)
    }

    /// The configured pause durations.
    #[must_use]
    pub const fn pacing(&self) -> Pacing {
        self.pacing.to_pacing()
    }

    /// Generate the configured input array.
    #[must_use]
    pub fn generate(&self) -> Vec<u32> {
        let mut rng = SeededRng::new(self.seed);
        self.pattern.generate(self.size, &mut rng)
    }
}

/// Pause durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default, deny_unknown_fields)]
pub struct PacingConfig {
    /// Pause after a comparison highlight.
    #[validate(range(max = 5000))]
    pub compare_highlight_ms: u64,
    /// Pause after a swap highlight.
    #[validate(range(max = 5000))]
    pub swap_highlight_ms: u64,
    /// Lower bound of the speed-scaled step delay.
    #[validate(range(max = 5000))]
    pub min_step_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            compare_highlight_ms: 50,
            swap_highlight_ms: 100,
            min_step_ms: 10,
        }
    }
}

impl PacingConfig {
    /// Convert to runtime durations.
    #[must_use]
    pub const fn to_pacing(self) -> Pacing {
        Pacing::new(
            Duration::from_millis(self.compare_highlight_ms),
            Duration::from_millis(self.swap_highlight_ms),
            Duration::from_millis(self.min_step_ms),
        )
    }
}

/// Builder for [`VisualizerConfig`].
#[derive(Debug, Default)]
pub struct VisualizerConfigBuilder {
    algorithm: Option<Algorithm>,
    size: Option<usize>,
    speed: Option<Speed>,
    pattern: Option<Pattern>,
    seed: Option<u64>,
    pacing: Option<PacingConfig>,
}

impl VisualizerConfigBuilder {
    /// Set the algorithm.
    #[must_use]
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the array size.
    #[must_use]
    pub const fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the animation speed.
    #[must_use]
    pub const fn speed(mut self, speed: Speed) -> Self {
        self.speed = Some(speed);
        self
    }

    /// Set the data pattern.
    #[must_use]
    pub const fn pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Set the random seed.
    #[must_use]
    pub const fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the pause durations.
    #[must_use]
    pub const fn pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = Some(pacing);
        self
    }

    /// Build the configuration.
    ///
    /// Values are not validated here; call [`VisualizerConfig::check`].
    #[must_use]
    pub fn build(self) -> VisualizerConfig {
        let mut config = VisualizerConfig::default();

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm.id().to_string();
        }
        if let Some(size) = self.size {
            config.size = size;
        }
        if let Some(speed) = self.speed {
            config.speed = speed.get();
        }
        if let Some(pattern) = self.pattern {
            config.pattern = pattern;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(pacing) = self.pacing {
            config.pacing = pacing;
        }

        config
    }
}
