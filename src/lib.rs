//! har2jmx library crate.
//!
//! Converts a browser-captured HAR recording into a JMeter test plan:
//! entries are filtered by method, domain, and an ignore list, and each
//! retained request becomes an HTTP sampler with a parameterized host, its
//! query/form arguments expanded, and its headers attached as a header
//! manager. See [`crate::convert::run_convert`] for the one-shot entry
//! point the CLI wraps.

pub mod config;
pub mod convert;
pub mod error;
pub mod har;
pub mod jmx;
