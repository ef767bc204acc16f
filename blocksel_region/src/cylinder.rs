// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical elliptic cylinders.

use crate::{
    BlockPos, BlockPos2, Region, RegionError, RegionResult, max_extent, midpoint, span, unit_term,
};

/// An upright elliptic cylinder over an inclusive `y` range.
///
/// Radii are whole blocks measured from the centre column; the boundary sits
/// half a block further out so a radius of zero is a single column.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct CylinderRegion {
    center: BlockPos2,
    radius: BlockPos2,
    min_y: i32,
    max_y: i32,
}

impl CylinderRegion {
    /// Creates a cylinder. Negative radii are taken by magnitude.
    #[must_use]
    pub fn new(center: BlockPos2, radius: BlockPos2, y1: i32, y2: i32) -> Self {
        Self {
            center,
            radius: BlockPos2::new(radius.x.saturating_abs(), radius.z.saturating_abs()),
            min_y: y1.min(y2),
            max_y: y1.max(y2),
        }
    }

    /// A one-column, one-layer cylinder at `pos`.
    #[must_use]
    pub fn from_center(pos: BlockPos) -> Self {
        Self::new(pos.column(), BlockPos2::default(), pos.y, pos.y)
    }

    /// The centre column.
    #[must_use]
    pub fn center_column(&self) -> BlockPos2 {
        self.center
    }

    /// Radii along `x` and `z`.
    #[must_use]
    pub fn radius(&self) -> BlockPos2 {
        self.radius
    }

    /// Lowest layer, inclusive.
    #[must_use]
    pub fn min_y(&self) -> i32 {
        self.min_y
    }

    /// Highest layer, inclusive.
    #[must_use]
    pub fn max_y(&self) -> i32 {
        self.max_y
    }

    /// Grows each radius to at least the matching component of `radius`.
    ///
    /// Returns `true` if either radius grew.
    pub fn extend_radius(&mut self, radius: BlockPos2) -> bool {
        let next = self.radius.max(BlockPos2::new(
            radius.x.saturating_abs(),
            radius.z.saturating_abs(),
        ));
        let grew = next != self.radius;
        self.radius = next;
        grew
    }

    /// Widens the vertical range to include `y`. Returns `true` if it grew.
    pub fn expand_y(&mut self, y: i32) -> bool {
        if (self.min_y..=self.max_y).contains(&y) {
            return false;
        }
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
        true
    }

    fn contains_offset(&self, dx: i64, dz: i64) -> bool {
        unit_term(dx, self.radius.x) + unit_term(dz, self.radius.z) <= 1.0
    }
}

impl Region for CylinderRegion {
    fn type_name(&self) -> &'static str {
        "cylinder"
    }

    fn min(&self) -> BlockPos {
        BlockPos::new(
            self.center.x.saturating_sub(self.radius.x),
            self.min_y,
            self.center.z.saturating_sub(self.radius.z),
        )
    }

    fn max(&self) -> BlockPos {
        BlockPos::new(
            self.center.x.saturating_add(self.radius.x),
            self.max_y,
            self.center.z.saturating_add(self.radius.z),
        )
    }

    fn center(&self) -> BlockPos {
        self.center.with_y(midpoint(self.min_y, self.max_y))
    }

    fn volume(&self) -> u64 {
        let mut columns = 0_u64;
        for dx in -self.radius.x..=self.radius.x {
            let reach = max_extent(self.radius.z, |dz| {
                self.contains_offset(i64::from(dx), i64::from(dz))
            });
            if let Some(reach) = reach {
                columns = columns.saturating_add(2 * u64::from(reach.unsigned_abs()) + 1);
            }
        }
        columns.saturating_mul(span(self.min_y, self.max_y))
    }

    fn contains(&self, pos: BlockPos) -> bool {
        (self.min_y..=self.max_y).contains(&pos.y)
            && self.contains_offset(
                i64::from(pos.x) - i64::from(self.center.x),
                i64::from(pos.z) - i64::from(self.center.z),
            )
    }

    fn expand(&mut self, changes: &[BlockPos]) -> RegionResult<()> {
        reject_horizontal(changes)?;
        for change in changes {
            if change.y > 0 {
                self.max_y = self.max_y.saturating_add(change.y);
            } else {
                self.min_y = self.min_y.saturating_add(change.y);
            }
        }
        Ok(())
    }

    fn contract(&mut self, changes: &[BlockPos]) -> RegionResult<()> {
        reject_horizontal(changes)?;
        let (mut min_y, mut max_y) = (self.min_y, self.max_y);
        for change in changes {
            if change.y < 0 {
                max_y = max_y.saturating_add(change.y);
            } else {
                min_y = min_y.saturating_add(change.y);
            }
        }
        if min_y > max_y {
            return Err(RegionError::EmptyRegion);
        }
        self.min_y = min_y;
        self.max_y = max_y;
        Ok(())
    }

    fn shift(&mut self, offset: BlockPos) -> RegionResult<()> {
        self.center = self.center.saturating_add(offset.column());
        self.min_y = self.min_y.saturating_add(offset.y);
        self.max_y = self.max_y.saturating_add(offset.y);
        Ok(())
    }
}

fn reject_horizontal(changes: &[BlockPos]) -> RegionResult<()> {
    if changes.iter().any(|c| c.x != 0 || c.z != 0) {
        return Err(RegionError::UnsupportedChange {
            region: "cylinder",
            reason: "cylinders can only be expanded or contracted vertically",
        });
    }
    Ok(())
}
