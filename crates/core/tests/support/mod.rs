//! Shared test helpers for `inferno-core` integration tests.
//!
//! Provide scripted profile sources so feed tests can focus on queue
//! behaviour instead of profile construction.

pub mod profiles;
