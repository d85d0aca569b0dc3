//! Session orchestration and boundary trait definitions for FundSight.
//!
//! This crate defines the "ports" (the `AdviceProvider` and `SnapshotStore`
//! traits) that the infrastructure layer implements. It depends only on
//! `fundsight-types` -- never on `fundsight-infra` or any HTTP/IO crate.

pub mod advisor;
pub mod session;
pub mod suggestions;
pub mod transcript;
