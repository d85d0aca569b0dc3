//! Shared domain types for FundSight.
//!
//! This crate contains the core domain types used across the FundSight
//! advisor: dialogue turns, session snapshots, suggestions, financial
//! context records, configuration, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod config;
pub mod error;
pub mod finance;
pub mod suggestion;
