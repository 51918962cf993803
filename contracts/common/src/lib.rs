//! Shared building blocks for the tiered staking ledger.
//!
//! This crate provides:
//! - [`tiers`] — the immutable reward-tier table: definitions, fail-fast
//!   configuration checks, and principal classification.
//! - [`TierError`] — configuration error codes, kept in the **100+** range so
//!   they never collide with a contract's own error space.

#![cfg_attr(not(feature = "std"), no_std)]

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod tiers;

pub use tiers::*;

#[cfg(test)]
mod tiers_test;
