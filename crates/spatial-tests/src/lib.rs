//! Integration tests for spatial-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between the representations: quaternions against matrices against
//! frames, and the documented conventions across crate boundaries.
