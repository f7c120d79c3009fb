//! # IBC Rate Limit Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/
//! ├── benches/          # Criterion benchmarks
//! └── src/
//!     └── integration/  # Packet lifecycle flows across service, adapters and engine
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p ibc-rate-limit-tests
//!
//! # Verbose logging
//! RUST_LOG=ibc_rate_limit=debug cargo test -p ibc-rate-limit-tests -- --nocapture
//!
//! # Benchmarks
//! cargo bench -p ibc-rate-limit-tests
//! ```

#![allow(dead_code)]


/// Install a fmt subscriber honoring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
