//! vitalflow-storage
//!
//! The triage log store: an append-only record of scored assessments.
//! Backed by S3 in production, by memory in tests and local runs.

pub mod client;
pub mod error;
pub mod log_store;
pub mod memory;
pub mod objects;

pub use log_store::{S3LogStore, TriageLogStore};
pub use memory::MemoryLogStore;
