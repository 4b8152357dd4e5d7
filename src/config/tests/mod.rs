//! Unit tests for configuration loading and precedence.
//!
//! Tests are organised into modules by functional area:
//! - `helpers`: Shared test utilities
//! - `precedence`: Layer precedence tests
//! - `field_resolution`: Token and repository resolution tests
//! - `lookup_target`: SHA/ref target and strategy selection tests

mod helpers;
