//! Chain data access for the Seilens service.
//!
//! The chain is an external collaborator consumed through the narrow
//! [`ChainDataSource`] trait: one operation for a network snapshot, one for
//! a wallet snapshot. Two implementations exist:
//!
//! - [`RestChainSource`] queries the public Sei REST endpoints with
//!   failover, a per-request timeout, and bounded retry. Snapshots it
//!   produces are marked `live = true`.
//! - [`MockChainSource`] serves deterministic in-memory data for tests and
//!   offline demos. Its snapshots are always `live = false`, and it can
//!   inject upstream failures.
//!
//! A failed live fetch is surfaced as an upstream error — it is never
//! answered from the mock.

pub mod config;
pub mod mock;
pub mod rest;
pub mod source;

pub use config::ChainConfig;
pub use mock::MockChainSource;
pub use rest::RestChainSource;
pub use source::ChainDataSource;
