//! # BoxFit 3D
//!
//! Container selection for sets of cuboid items.
//!
//! Given an item set and a catalog of bins, [`get_fit_box`] reports every bin
//! that can take all items together with the fraction of its volume they
//! fill. The search is a constructive heuristic, not an exact solver.
//!
//! ## Pipeline
//!
//! 1. [`stacking`] merges duplicate thin, slender and bulk items into fewer
//!    zero-weight composites.
//! 2. [`ordering`] sorts the result by volume and bounds the set of placement
//!    orders to try.
//! 3. For each bin, [`fitter`] tries the six orientations of the bin times
//!    every ordering, running the [`anchor`] packer until one attempt places
//!    every item.
//!
//! ## Example
//!
//! ```rust
//! use boxfit_d3::{get_fit_box_with, Bin, Config, Item};
//!
//! let items = vec![
//!     Item::new("Item 1", 40.0, 30.0, 15.0),
//!     Item::new("Item 2", 40.0, 30.0, 15.0),
//! ];
//! let bins = vec![Bin::new("Bin1", 40.0, 30.0, 30.0, 1.0, 100.0)];
//!
//! let result = get_fit_box_with(&items, &bins, &Config::default().with_seed(7)).unwrap();
//! assert_eq!(result.get("Bin1"), Some(1.0));
//! ```

pub mod anchor;
pub mod bin;
pub mod fitter;
pub mod item;
pub mod ordering;
pub mod stacking;

// Re-exports
pub use anchor::{pack, PackOutcome};
pub use bin::Bin;
pub use boxfit_core::{
    Axis, BinFit, BinOutcome, BinReport, Config, Error, FitResult, Placement, Pose, Result, Solver,
    StackingConfig,
};
pub use fitter::{get_fit_box, get_fit_box_with, BoxFitter};
pub use item::{Item, ItemKey};
pub use ordering::{ordering_sample, permutations, sort_by_volume};
pub use stacking::{classify, stack, StackKind};
