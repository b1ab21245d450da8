//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod gameplay_dataset;
pub mod tld_scorer;
