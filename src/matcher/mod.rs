//! Single-pattern matchers.
//!
//! These are independent utilities sharing no runtime state with the
//! multi-pattern automaton in [`crate::automaton`]: a prefix-function
//! (KMP) matcher extended with an any-symbol wildcard, and a naive
//! quadratic scan useful as a correctness oracle and baseline.

pub mod naive;
pub mod wildcard;

pub use wildcard::WildcardMatcher;
