//! # Core Models Module
//!
//! Data structures describing a recorded cube algorithm.
//!
//! ## Key Components
//!
//! - [`color`] - The seven-entry sticker palette and its click cycle
//! - [`record`] - Algorithm records, their category tag and the sticker encoding
//! - [`ids`] - Record identity
//!
//! ```ignore
//! use cubealg::core::models::record::{AlgorithmFields, AlgorithmRecord, CubeState};
//!
//! let fields = AlgorithmFields {
//!     name: "Sune".into(),
//!     formula: "R U R' U R U2 R'".into(),
//!     cube: CubeState::yellow_top(),
//!     ..Default::default()
//! };
//! ```

pub mod color;
pub mod ids;
pub mod record;
