// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned boxes spanned by two corners.

use crate::{BlockPos, Region, RegionError, RegionResult, span};

/// A cuboid spanned by two opposite corners, both inclusive.
///
/// The corners keep the order they were given in; [`Region::min`] and
/// [`Region::max`] normalize them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CuboidRegion {
    pos1: BlockPos,
    pos2: BlockPos,
}

impl CuboidRegion {
    /// Creates a cuboid from two opposite corners.
    #[must_use]
    pub const fn new(pos1: BlockPos, pos2: BlockPos) -> Self {
        Self { pos1, pos2 }
    }

    /// Creates a single-cell cuboid.
    #[must_use]
    pub const fn single(pos: BlockPos) -> Self {
        Self::new(pos, pos)
    }

    /// The first corner as given.
    #[must_use]
    pub fn pos1(&self) -> BlockPos {
        self.pos1
    }

    /// The second corner as given.
    #[must_use]
    pub fn pos2(&self) -> BlockPos {
        self.pos2
    }

    /// Grows the cuboid just enough to include `pos`.
    ///
    /// Returns `false` if `pos` was already inside.
    pub fn include(&mut self, pos: BlockPos) -> bool {
        if self.contains(pos) {
            return false;
        }
        let (min, max) = (self.min().min(pos), self.max().max(pos));
        self.remap(min, max);
        true
    }

    /// Writes new bounds back while keeping each corner on its own side.
    fn remap(&mut self, min: BlockPos, max: BlockPos) {
        let pick = |corner: i32, other: i32, lo: i32, hi: i32, ties_high: bool| {
            if corner > other || (corner == other && ties_high) {
                hi
            } else {
                lo
            }
        };
        let (p1, p2) = (self.pos1, self.pos2);
        self.pos1 = BlockPos::new(
            pick(p1.x, p2.x, min.x, max.x, true),
            pick(p1.y, p2.y, min.y, max.y, true),
            pick(p1.z, p2.z, min.z, max.z, true),
        );
        self.pos2 = BlockPos::new(
            pick(p2.x, p1.x, min.x, max.x, false),
            pick(p2.y, p1.y, min.y, max.y, false),
            pick(p2.z, p1.z, min.z, max.z, false),
        );
    }
}

/// Moves one face of `[lo, hi]` by `delta`: the upper face for positive
/// deltas when growing, the lower face for negative ones.
fn grow_axis(lo: &mut i32, hi: &mut i32, delta: i32) {
    if delta > 0 {
        *hi = hi.saturating_add(delta);
    } else {
        *lo = lo.saturating_add(delta);
    }
}

/// Inverse of [`grow_axis`]: a negative delta pulls the upper face in.
fn shrink_axis(lo: &mut i32, hi: &mut i32, delta: i32) {
    if delta < 0 {
        *hi = hi.saturating_add(delta);
    } else {
        *lo = lo.saturating_add(delta);
    }
}

impl Region for CuboidRegion {
    fn type_name(&self) -> &'static str {
        "cuboid"
    }

    fn min(&self) -> BlockPos {
        self.pos1.min(self.pos2)
    }

    fn max(&self) -> BlockPos {
        self.pos1.max(self.pos2)
    }

    fn volume(&self) -> u64 {
        let (min, max) = (self.min(), self.max());
        span(min.x, max.x)
            .saturating_mul(span(min.y, max.y))
            .saturating_mul(span(min.z, max.z))
    }

    fn contains(&self, pos: BlockPos) -> bool {
        let (min, max) = (self.min(), self.max());
        (min.x..=max.x).contains(&pos.x)
            && (min.y..=max.y).contains(&pos.y)
            && (min.z..=max.z).contains(&pos.z)
    }

    fn expand(&mut self, changes: &[BlockPos]) -> RegionResult<()> {
        let (mut min, mut max) = (self.min(), self.max());
        for change in changes {
            grow_axis(&mut min.x, &mut max.x, change.x);
            grow_axis(&mut min.y, &mut max.y, change.y);
            grow_axis(&mut min.z, &mut max.z, change.z);
        }
        self.remap(min, max);
        Ok(())
    }

    fn contract(&mut self, changes: &[BlockPos]) -> RegionResult<()> {
        let (mut min, mut max) = (self.min(), self.max());
        for change in changes {
            shrink_axis(&mut min.x, &mut max.x, change.x);
            shrink_axis(&mut min.y, &mut max.y, change.y);
            shrink_axis(&mut min.z, &mut max.z, change.z);
        }
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(RegionError::EmptyRegion);
        }
        self.remap(min, max);
        Ok(())
    }

    fn shift(&mut self, offset: BlockPos) -> RegionResult<()> {
        self.pos1 = self.pos1 + offset;
        self.pos2 = self.pos2 + offset;
        Ok(())
    }
}
