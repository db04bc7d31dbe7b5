//! Text normalization.
//!
//! The search core in [`crate::automaton`] treats every distinct input
//! symbol as an opaque alphabet member and performs no linguistic
//! interpretation. Case folding and symbol filtering therefore happen
//! here, before patterns and text reach the core.

pub mod normalizer;

pub use normalizer::{
    AlphabeticNormalizer, LowercaseNormalizer, NoopNormalizer, Normalizer, NormalizerPipeline,
};
