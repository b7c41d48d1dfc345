//! Remote adapter tests: wire JSON ↔ blocks.

mod inbound;
