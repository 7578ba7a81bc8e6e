//! Persistence of algorithm records.
//!
//! [`traits::AlgorithmRepository`] is the seam between the in-memory store and
//! its backing storage. [`json::JsonFile`] keeps the records in a single JSON
//! array on disk; [`memory::MemoryRepository`] keeps them in memory.

pub mod json;
pub mod memory;
pub mod traits;
