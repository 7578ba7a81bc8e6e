//! # Workflows Module
//!
//! The entry point a presentation layer talks to.
//!
//! [`manager::AlgorithmManager`] exposes one method per user action (add,
//! edit, delete, search, sticker clicks, save, cancel). Each method maps onto
//! the store, form session and search filter of [`crate::engine`], and every
//! successful mutation is written out through the repository it was opened
//! with.

pub mod manager;
