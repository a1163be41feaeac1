//! Shared test utilities used across toposynth crates.
//!
//! [`tracing`] captures spans and events so instrumentation can be asserted
//! deterministically; [`proptest_profile`] reads the environment overrides
//! that property suites share.

pub mod proptest_profile;
pub mod tracing;
