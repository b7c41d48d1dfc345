//! Markdown format tests
//!
//! Tests for bidirectional Markdown ↔ block conversion.

mod export;
mod import;
mod roundtrip;
