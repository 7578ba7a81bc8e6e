//! # Cube Algorithm Manager Core Library
//!
//! Records Rubik's-cube solving algorithms (OLL, PLL, F2L and friends) with
//! their move notation and a sticker encoding of the case they solve, and keeps
//! them in a JSON file between sessions.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers so that the model can be tested
//! without a UI or a disk.
//!
//! - **[`core`]: The Foundation.** Plain data (`AlgorithmRecord`, `CubeState`,
//!   the sticker palette) and the persistence backends.
//!
//! - **[`engine`]: The Logic Core.** The in-memory `Store`, the `FormSession`
//!   used while adding or editing, and the search filter. No I/O happens here.
//!
//! - **[`workflows`]: The Public API.** `AlgorithmManager` ties a store to a
//!   repository and exposes one method per user action, saving after every
//!   change.

pub mod core;
pub mod engine;
pub mod workflows;
