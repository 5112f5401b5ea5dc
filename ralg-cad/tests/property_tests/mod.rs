//! Property-based tests for ralg-cad
//!
//! This module contains property tests for:
//! - Sample set value and priority orders under insertion and removal

mod sample_set_properties;
