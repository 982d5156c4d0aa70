//! Duplicate-item stacking.
//!
//! Groups of identical items (same name and dimensions) are merged into fewer
//! composite items before the search, which keeps the ordering space small
//! for orders with many copies of one product:
//!
//! - **Thin** items (`floor(mid / min) >= thin_ratio`) are piled along their
//!   thinnest side into stacks of `thin_ratio`, plus one remainder stack.
//! - **Slender** items (`floor(max / mid) >= slender_ratio`) are bundled
//!   side by side into one `bs × bs` bundle with `bs = floor(sqrt(qty))`.
//! - **Bulk** items are merged into one `bs × bs × bs` block with
//!   `bs = floor(cbrt(qty))`.
//!
//! Composites carry zero weight. Leftovers of a bundle or block keep their
//! own weight. Total volume is unchanged.

use crate::item::{Item, ItemKey};
use boxfit_core::StackingConfig;
use nalgebra::Vector3;

/// How a group of duplicates is merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackKind {
    /// Pile along the thinnest side, `ratio` items per stack.
    Thin {
        /// Items per full stack.
        ratio: usize,
    },
    /// Bundle long items side by side.
    Slender,
    /// Merge into a cube-shaped block.
    Bulk,
}

/// Indices of the smallest, middle and largest dimension.
///
/// Ties resolve to the first of width, height, depth.
fn dimension_order(dims: &Vector3<f64>) -> (usize, usize, usize) {
    let min_idx = (0..3).fold(0, |m, i| if dims[i] < dims[m] { i } else { m });
    let max_idx = (0..3).fold(0, |m, i| if dims[i] > dims[m] { i } else { m });
    let mid_idx = if min_idx == max_idx {
        (min_idx + 1) % 3
    } else {
        3 - min_idx - max_idx
    };
    (min_idx, mid_idx, max_idx)
}

/// Decides how `quantity` copies of an item with `dims` should be merged.
pub fn classify(dims: &Vector3<f64>, quantity: usize, config: &StackingConfig) -> Option<StackKind> {
    if quantity < 2 {
        return None;
    }

    let (min_idx, mid_idx, max_idx) = dimension_order(dims);
    let ratio = (dims[mid_idx] / dims[min_idx]).floor() as usize;
    let ratio3 = (dims[max_idx] / dims[mid_idx]).floor() as usize;

    if ratio >= config.thin_ratio {
        Some(StackKind::Thin { ratio })
    } else if ratio3 >= config.slender_ratio && quantity >= config.slender_min_quantity {
        Some(StackKind::Slender)
    } else if ratio3 < config.slender_ratio && quantity >= config.bulk_min_quantity {
        Some(StackKind::Bulk)
    } else {
        None
    }
}

/// Largest `r` with `r^exp <= n`.
fn integer_root(n: usize, exp: u32) -> usize {
    let mut r = (n as f64).powf(1.0 / exp as f64).round() as usize;
    while r > 0 && r.pow(exp) > n {
        r -= 1;
    }
    while (r + 1).pow(exp) <= n {
        r += 1;
    }
    r
}

/// Merges duplicate items according to `config`.
///
/// Returns the input unchanged when stacking is disabled.
pub fn stack(items: &[Item], config: &StackingConfig) -> Vec<Item> {
    if !config.enabled {
        return items.to_vec();
    }
    stack_pass(items.to_vec(), config, 0)
}

fn stack_pass(mut items: Vec<Item>, config: &StackingConfig, depth: usize) -> Vec<Item> {
    let mut keys: Vec<ItemKey> = Vec::new();
    for item in &items {
        let key = item.key();
        if !keys.contains(&key) {
            keys.push(key);
        }
    }

    for key in keys {
        let members: Vec<Item> = items.iter().filter(|i| i.key() == key).cloned().collect();
        let Some(proto) = members.first() else {
            continue;
        };
        let quantity = members.len();

        match classify(proto.dimensions(), quantity, config) {
            Some(StackKind::Thin { ratio }) => {
                log::debug!(
                    "stacking {} x '{}' as thin items, {} per stack",
                    quantity,
                    proto.name(),
                    ratio
                );
                let stacks = thin_stacks(proto, quantity, ratio);
                items.retain(|i| i.key() != key);
                items.extend(stacks);
            }
            Some(kind) => {
                if depth >= config.max_depth {
                    log::warn!(
                        "stacking depth limit {} reached, leaving '{}' unmerged",
                        config.max_depth,
                        proto.name()
                    );
                    return items;
                }

                let exp = if kind == StackKind::Slender { 2 } else { 3 };
                let bs = integer_root(quantity, exp);
                let used = bs.pow(exp);
                let composite = bundle(proto, bs, kind);
                log::debug!(
                    "stacking {} x '{}' as {:?} composite '{}', {} left over",
                    quantity,
                    proto.name(),
                    kind,
                    composite.name(),
                    quantity - used
                );

                items.retain(|i| i.key() != key);
                items.push(composite);
                items.extend(members.into_iter().take(quantity - used));
                return stack_pass(items, config, depth + 1);
            }
            None => {}
        }
    }

    items
}

/// Builds the full stacks and the remainder stack for a thin group.
fn thin_stacks(proto: &Item, quantity: usize, ratio: usize) -> Vec<Item> {
    let (min_idx, _, _) = dimension_order(proto.dimensions());
    let layered = |count: usize| {
        let mut dims = *proto.dimensions();
        dims[min_idx] *= count as f64;
        Item::composite(proto.name(), dims)
    };

    let mut stacks: Vec<Item> = (0..quantity / ratio).map(|_| layered(ratio)).collect();
    let remainder = quantity % ratio;
    if remainder > 0 {
        stacks.push(layered(remainder));
    }
    stacks
}

/// Builds a slender bundle or bulk block of `bs` items per scaled side.
fn bundle(proto: &Item, bs: usize, kind: StackKind) -> Item {
    let (_, _, max_idx) = dimension_order(proto.dimensions());
    let mut dims = *proto.dimensions() * bs as f64;
    if kind == StackKind::Slender {
        dims[max_idx] /= bs as f64;
    }
    Item::composite(format!("{}{}", proto.name(), "+".repeat(bs)), dims)
}
