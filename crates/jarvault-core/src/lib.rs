#![deny(missing_docs)]

//! # jarvault-core — Foundational Types for jarvault
//!
//! This crate defines the types every other crate in the workspace depends
//! on. It performs no I/O; only `serde` and `thiserror` from the external
//! ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Closed platform set.** [`Platform`] is an exhaustive enum, so the
//!    supported-platform list is compiler-checked at every dispatch site.
//!    Unknown platform strings fail at parse time, before any network call.
//!
//! 2. **Deterministic keys.** [`JarKey`] constructors are pure functions of
//!    (platform, version, resolved build). The key doubles as the cache's
//!    deduplication identity, so two calls with equal inputs must produce
//!    byte-identical keys.

pub mod key;
pub mod platform;

pub use key::JarKey;
pub use platform::{BuildSelector, Platform, UnknownPlatform};
