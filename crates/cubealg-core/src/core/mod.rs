//! # Core Module
//!
//! The stateless foundation of the library: the record model and the
//! persistence layer.
//!
//! ## Architecture
//!
//! - **Records** ([`models`]) - Algorithm records, the sticker palette and the cube-state encoding
//! - **Storage** ([`io`]) - The repository trait, the JSON file backend and an in-memory backend
//!
//! Nothing in this module holds application state; that lives in
//! [`crate::engine`].

pub mod io;
pub mod models;
