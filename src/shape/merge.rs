use strum_macros::{AsRefStr, EnumIter, EnumString};

use crate::{math::{Axis, AABB}, debug};

/// Boxes are only ever joined along this axis.
pub const MERGE_AXIS: Axis = Axis::X;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, AsRefStr, EnumIter, EnumString)]
#[strum(serialize_all = "kebab-case")]
pub enum MergeMode {
    /// Exactly one greedy pass over the sorted boxes.
    SinglePass,
    /// Passes are repeated until one of them stops reducing the box count.
    #[default]
    Fixpoint,
}

/// Coalesces boxes which share their extent on `y` and `z` and are face to face along `x`.
pub fn merge_adjacent(boxes: &[AABB], mode: MergeMode) -> Vec<AABB> {
    let mut merged = merge_pass(boxes);
    if mode == MergeMode::SinglePass {
        return merged;
    }

    let mut passes = 1;
    loop {
        let next = merge_pass(&merged);
        passes += 1;
        let settled = next.len() == merged.len();
        merged = next;
        if settled {
            break;
        }
    }
    debug!("merged {} boxes into {} in {} passes", boxes.len(), merged.len(), passes);
    merged
}

/// One greedy pass: boxes are visited in corner order and each one is joined into the first
/// already collected box it can extend, or collected as is.
pub fn merge_pass(boxes: &[AABB]) -> Vec<AABB> {
    let mut sorted = boxes.to_vec();
    sorted.sort_by(|a, b| a.corner_cmp(b));

    let mut merged: Vec<AABB> = Vec::with_capacity(sorted.len());
    for candidate in sorted {
        let target = merged.iter_mut().find(|existing| {
            candidate.same_extent_except(existing, MERGE_AXIS)
                && candidate.touches_along(existing, MERGE_AXIS)
        });
        match target {
            Some(existing) => *existing = existing.add(&candidate),
            None => merged.push(candidate),
        }
    }
    merged
}
