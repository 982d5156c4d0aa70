//! Anchor-based constructive placement.
//!
//! The first item goes to the origin. Every later item is tried against the
//! far faces of the items already in the bin: for each accepted item (the
//! anchor) in acceptance order and each axis x, y, z, the candidate corner is
//! the anchor's position shifted by its extent along that axis. The first
//! candidate the bin accepts wins.

use crate::bin::Bin;
use crate::item::Item;
use boxfit_core::{Axis, Error, Result};
use nalgebra::Vector3;

/// Outcome of packing one ordering into one bin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackOutcome {
    /// Number of items accepted.
    pub placed: usize,
    /// Number of items in the ordering.
    pub requested: usize,
    /// Item indices that found no position, in ordering order.
    pub unplaced: Vec<usize>,
}

impl PackOutcome {
    /// Returns true if every requested item was placed.
    pub fn is_complete(&self) -> bool {
        self.placed == self.requested
    }
}

/// Packs `items` into `bin` following `ordering` (indices into `items`).
///
/// The bin is expected to be empty. If the first item does not fit at the
/// origin nothing is placed and the remaining items are reported unplaced.
pub fn pack(bin: &mut Bin, items: &[Item], ordering: &[usize]) -> Result<PackOutcome> {
    let lookup = |idx: usize| {
        items.get(idx).ok_or_else(|| {
            Error::Internal(format!(
                "ordering refers to item {} of {}",
                idx,
                items.len()
            ))
        })
    };

    let mut outcome = PackOutcome {
        placed: 0,
        requested: ordering.len(),
        unplaced: Vec::new(),
    };

    let Some((&first, rest)) = ordering.split_first() else {
        return Ok(outcome);
    };

    if !bin.try_place(first, lookup(first)?, Vector3::zeros()) {
        outcome.unplaced = ordering.to_vec();
        return Ok(outcome);
    }
    outcome.placed = 1;

    for &idx in rest {
        let item = lookup(idx)?;
        if place_against_anchors(bin, idx, item) {
            outcome.placed += 1;
        } else {
            outcome.unplaced.push(idx);
        }
    }

    Ok(outcome)
}

/// Tries every (anchor, axis) candidate for one item; true on the first success.
fn place_against_anchors(bin: &mut Bin, idx: usize, item: &Item) -> bool {
    let candidates: Vec<Vector3<f64>> = bin
        .placements()
        .iter()
        .flat_map(|anchor| Axis::ALL.map(|axis| anchor.anchor(axis)))
        .collect();

    candidates
        .into_iter()
        .any(|origin| bin.try_place(idx, item, origin))
}
