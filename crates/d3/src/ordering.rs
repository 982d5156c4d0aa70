//! Placement-order sampling.
//!
//! The number of orderings grows factorially, so the set tried per bin
//! orientation is bounded by item count:
//!
//! | Items | Orderings |
//! |-------|-----------|
//! | `<= full_permutation_limit` | every permutation |
//! | `<= sampling_limit` | sorted order + `sample_size` distinct random permutations |
//! | larger | sorted order only |

use crate::item::Item;
use boxfit_core::Config;
use rand::prelude::*;
use std::collections::HashSet;

/// Sorts items by descending volume, keeping the input order on ties.
pub fn sort_by_volume(items: &mut [Item]) {
    items.sort_by(|a, b| b.volume().total_cmp(&a.volume()));
}

/// All permutations of `0..n` in lexicographic order.
pub fn permutations(n: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(n);
    let mut used = vec![false; n];
    permute(n, &mut current, &mut used, &mut out);
    out
}

fn permute(n: usize, current: &mut Vec<usize>, used: &mut [bool], out: &mut Vec<Vec<usize>>) {
    if current.len() == n {
        out.push(current.clone());
        return;
    }
    for i in 0..n {
        if used[i] {
            continue;
        }
        used[i] = true;
        current.push(i);
        permute(n, current, used, out);
        current.pop();
        used[i] = false;
    }
}

fn factorial(n: usize) -> usize {
    (1..=n).fold(1usize, |acc, k| acc.saturating_mul(k))
}

/// Builds the orderings (index sequences) to try for `n` sorted items.
pub fn ordering_sample<R: Rng + ?Sized>(n: usize, config: &Config, rng: &mut R) -> Vec<Vec<usize>> {
    let identity: Vec<usize> = (0..n).collect();

    if n <= config.full_permutation_limit {
        return permutations(n);
    }

    if n > config.sampling_limit {
        return vec![identity];
    }

    let target = config.sample_size.min(factorial(n));
    let mut sample = Vec::with_capacity(target + 1);
    sample.push(identity.clone());

    if target == factorial(n) {
        let mut all = permutations(n);
        all.shuffle(rng);
        sample.extend(all);
        return sample;
    }

    let mut seen: HashSet<Vec<usize>> = HashSet::with_capacity(target);
    while seen.len() < target {
        let mut perm = identity.clone();
        perm.shuffle(rng);
        if seen.insert(perm.clone()) {
            sample.push(perm);
        }
    }
    sample
}
