//! Shared test support utilities for behaviour-driven suites.
//!
//! Exposes the `tags` helpers (`StepTag` and `StepTags`) that parse quoted
//! language tags and tag lists out of BDD steps, so every scenario feeds the
//! negotiator the same shape of input.
pub mod tags;
