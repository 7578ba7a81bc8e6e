//! # Engine Module
//!
//! The stateful layer: the record store, the add/edit form session and the
//! search filter.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Store limits and their builder
//! - **Store** ([`store`]) - Ordered in-memory records with id assignment
//! - **Form Session** ([`session`]) - Working copy of one record during add/edit
//! - **Search** ([`filter`]) - Substring filter over name, type and formula
//! - **Error Handling** ([`error`]) - Validation, store and form errors
//!
//! None of these types perform I/O. Persisting after a mutation is the job of
//! [`crate::workflows`].

pub mod config;
pub mod error;
pub mod filter;
pub mod session;
pub mod store;
