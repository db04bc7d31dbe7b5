//! Normalizer implementations.
//!
//! A [`Normalizer`] rewrites a string before it reaches a matcher:
//! lowercasing for case-insensitive search, dropping non-alphabetic
//! symbols for dictionary lookups, or any composition of the two via
//! [`NormalizerPipeline`]. Matchers themselves never normalize.
//!
//! # Examples
//!
//! ```
//! use yari::analysis::normalizer::{LowercaseNormalizer, Normalizer};
//!
//! let normalizer = LowercaseNormalizer::new();
//! assert_eq!(normalizer.normalize("HeLLo"), "hello");
//! ```

/// A text normalization stage.
pub trait Normalizer: Send + Sync {
    /// Produce the normalized form of `text`.
    fn normalize(&self, text: &str) -> String;

    /// Get the name of this normalizer.
    fn name(&self) -> &'static str;
}

/// Unicode-aware lowercasing.
///
/// Uses `char::to_lowercase`, so one input codepoint may expand to
/// several output codepoints (e.g. `'İ'`).
#[derive(Clone, Debug, Default)]
pub struct LowercaseNormalizer;

impl LowercaseNormalizer {
    /// Create a new lowercase normalizer.
    pub fn new() -> Self {
        LowercaseNormalizer
    }
}

impl Normalizer for LowercaseNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.chars().flat_map(char::to_lowercase).collect()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// Drops every non-alphabetic codepoint.
#[derive(Clone, Debug, Default)]
pub struct AlphabeticNormalizer;

impl AlphabeticNormalizer {
    /// Create a new alphabetic normalizer.
    pub fn new() -> Self {
        AlphabeticNormalizer
    }
}

impl Normalizer for AlphabeticNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.chars().filter(|c| c.is_alphabetic()).collect()
    }

    fn name(&self) -> &'static str {
        "alphabetic"
    }
}

/// Passes text through unchanged.
#[derive(Clone, Debug, Default)]
pub struct NoopNormalizer;

impl NoopNormalizer {
    /// Create a new no-op normalizer.
    pub fn new() -> Self {
        NoopNormalizer
    }
}

impl Normalizer for NoopNormalizer {
    fn normalize(&self, text: &str) -> String {
        text.to_string()
    }

    fn name(&self) -> &'static str {
        "noop"
    }
}

/// Applies a sequence of normalizers in order.
#[derive(Default)]
pub struct NormalizerPipeline {
    stages: Vec<Box<dyn Normalizer>>,
}

impl NormalizerPipeline {
    /// Create an empty pipeline (equivalent to a no-op).
    pub fn new() -> Self {
        NormalizerPipeline { stages: Vec::new() }
    }

    /// Append a stage to the pipeline.
    pub fn add_stage(mut self, stage: Box<dyn Normalizer>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Number of stages in the pipeline.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Normalizer for NormalizerPipeline {
    fn normalize(&self, text: &str) -> String {
        self.stages
            .iter()
            .fold(text.to_string(), |acc, stage| stage.normalize(&acc))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}
