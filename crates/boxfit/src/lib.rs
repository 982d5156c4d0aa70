//! # BoxFit
//!
//! Container selection for cuboid items: given an item set and a catalog of
//! boxes, find every box that takes all items and how full it would be.
//!
//! ## Quick Start
//!
//! ```rust
//! use boxfit::{get_fit_box, Bin, Item};
//!
//! let items = vec![
//!     Item::new("Item 1", 40.0, 30.0, 15.0),
//!     Item::new("Item 2", 40.0, 30.0, 10.0),
//!     Item::new("Item 3", 2.0, 40.0, 30.0),
//!     Item::new("Item 4", 3.0, 40.0, 30.0),
//! ];
//! let bins = vec![
//!     Bin::new("Bin1", 40.0, 30.0, 30.0, 1.0, 100.0),
//!     Bin::new("Bin2", 60.0, 35.0, 50.0, 1.0, 100.0),
//!     Bin::new("Bin3", 20.0, 15.0, 10.0, 1.0, 100.0),
//! ];
//!
//! let result = get_fit_box(&items, &bins)?;
//! assert_eq!(result.get("Bin2"), Some(0.34));
//! assert!(!result.contains("Bin3"));
//! # Ok::<(), boxfit::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support for items, bins, placements and results

/// Core types and abstractions.
pub use boxfit_core as core;

/// 3D packing engine.
pub use boxfit_d3 as d3;

// Re-export commonly used types at root level
pub use boxfit_core::{BinOutcome, Config, Error, FitResult, Placement, Result, Solver, StackingConfig};
pub use boxfit_d3::{get_fit_box, get_fit_box_with, Bin, BoxFitter, Item};
