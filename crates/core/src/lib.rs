//! # BoxFit Core
//!
//! Shared types for the BoxFit container selection engine.
//!
//! ## Core Components
//!
//! - **Geometry**: [`Axis`], [`Pose`] - the six axis-aligned orientations of a cuboid
//! - **Collision**: [`Aabb3D`], [`collides`] - strict overlap test for placed boxes
//! - **Placement**: [`Placement`] - an item committed at a pose and position
//! - **Results**: [`FitResult`], [`BinReport`] - per-bin outcomes and fill ratios
//! - **Solver trait**: [`Solver`], [`Config`] - common interface and search settings
//!
//! ## Configuration
//!
//! ```rust
//! use boxfit_core::{Config, StackingConfig};
//!
//! let config = Config::new()
//!     .with_seed(42)
//!     .with_sample_size(24)
//!     .with_stacking(StackingConfig::default().with_max_depth(16));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod aabb;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use aabb::{collides, Aabb3D};
pub use error::{Error, Result};
pub use geometry::{fits_within, Axis, Pose};
pub use nalgebra::Vector3;
pub use placement::{Placement, PlacementStats};
pub use result::{BinFit, BinOutcome, BinReport, FitResult};
pub use solver::{Config, Solver, StackingConfig};
