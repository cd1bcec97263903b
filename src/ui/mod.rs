//! Terminal presentation layer
//!
//! Styled, human-readable output for command results. Machine-readable output
//! (`--json`) bypasses this module.

pub mod display;
