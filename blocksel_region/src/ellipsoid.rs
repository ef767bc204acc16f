// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis-aligned ellipsoids (and spheres).

use crate::{BlockPos, Region, RegionError, RegionResult, max_extent, unit_term};

/// An axis-aligned ellipsoid around a centre cell.
///
/// As with [`CylinderRegion`](crate::CylinderRegion), radii are whole blocks
/// and the boundary sits half a block beyond them. Expansion and contraction
/// are symmetric about the centre.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct EllipsoidRegion {
    center: BlockPos,
    radius: BlockPos,
}

impl EllipsoidRegion {
    /// Creates an ellipsoid. Negative radii are taken by magnitude.
    #[must_use]
    pub fn new(center: BlockPos, radius: BlockPos) -> Self {
        Self {
            center,
            radius: radius.abs(),
        }
    }

    /// Creates a sphere with the same radius on every axis.
    #[must_use]
    pub fn sphere(center: BlockPos, radius: i32) -> Self {
        Self::new(center, BlockPos::new(radius, radius, radius))
    }

    /// The centre cell.
    #[must_use]
    pub fn center_cell(&self) -> BlockPos {
        self.center
    }

    /// Radii along each axis.
    #[must_use]
    pub fn radius(&self) -> BlockPos {
        self.radius
    }

    /// Grows each radius to at least the matching component of `radius`.
    ///
    /// Returns `true` if any radius grew.
    pub fn extend_radius(&mut self, radius: BlockPos) -> bool {
        let next = self.radius.max(radius.abs());
        let grew = next != self.radius;
        self.radius = next;
        grew
    }

    /// Replaces the radii. Returns `true` if they differ from the current ones.
    pub fn set_radius(&mut self, radius: BlockPos) -> bool {
        let next = radius.abs();
        let changed = next != self.radius;
        self.radius = next;
        changed
    }

    fn contains_offset(&self, dx: i64, dy: i64, dz: i64) -> bool {
        unit_term(dx, self.radius.x) + unit_term(dy, self.radius.y) + unit_term(dz, self.radius.z)
            <= 1.0
    }
}

impl Region for EllipsoidRegion {
    fn type_name(&self) -> &'static str {
        "ellipsoid"
    }

    fn min(&self) -> BlockPos {
        BlockPos::new(
            self.center.x.saturating_sub(self.radius.x),
            self.center.y.saturating_sub(self.radius.y),
            self.center.z.saturating_sub(self.radius.z),
        )
    }

    fn max(&self) -> BlockPos {
        BlockPos::new(
            self.center.x.saturating_add(self.radius.x),
            self.center.y.saturating_add(self.radius.y),
            self.center.z.saturating_add(self.radius.z),
        )
    }

    fn center(&self) -> BlockPos {
        self.center
    }

    fn volume(&self) -> u64 {
        let mut cells = 0_u64;
        for dx in -self.radius.x..=self.radius.x {
            for dy in -self.radius.y..=self.radius.y {
                let reach = max_extent(self.radius.z, |dz| {
                    self.contains_offset(i64::from(dx), i64::from(dy), i64::from(dz))
                });
                if let Some(reach) = reach {
                    cells = cells.saturating_add(2 * u64::from(reach.unsigned_abs()) + 1);
                }
            }
        }
        cells
    }

    fn contains(&self, pos: BlockPos) -> bool {
        self.contains_offset(
            i64::from(pos.x) - i64::from(self.center.x),
            i64::from(pos.y) - i64::from(self.center.y),
            i64::from(pos.z) - i64::from(self.center.z),
        )
    }

    fn expand(&mut self, changes: &[BlockPos]) -> RegionResult<()> {
        for change in changes {
            self.radius = self.radius + change.abs();
        }
        Ok(())
    }

    fn contract(&mut self, changes: &[BlockPos]) -> RegionResult<()> {
        let mut radius = self.radius;
        for change in changes {
            radius = radius - change.abs();
        }
        if radius.x < 0 || radius.y < 0 || radius.z < 0 {
            return Err(RegionError::EmptyRegion);
        }
        self.radius = radius;
        Ok(())
    }

    fn shift(&mut self, offset: BlockPos) -> RegionResult<()> {
        self.center = self.center + offset;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_sphere_is_a_3d_cross_plus_edges() {
        // Radius 1 with the half-block rule: offsets with at most two
        // non-zero components are inside (2 * (1/1.5)^2 < 1 < 3 * (1/1.5)^2).
        let sphere = EllipsoidRegion::sphere(BlockPos::ZERO, 1);
        assert_eq!(sphere.volume(), 27 - 8);
        assert!(sphere.contains(BlockPos::new(1, 1, 0)));
        assert!(!sphere.contains(BlockPos::new(1, 1, 1)));
    }

    #[test]
    fn volume_agrees_with_containment() {
        let ell = EllipsoidRegion::new(BlockPos::new(1, 2, 3), BlockPos::new(4, 2, 5));
        let (min, max) = (ell.min(), ell.max());
        let mut counted = 0_u64;
        for x in min.x..=max.x {
            for y in min.y..=max.y {
                for z in min.z..=max.z {
                    if ell.contains(BlockPos::new(x, y, z)) {
                        counted += 1;
                    }
                }
            }
        }
        assert_eq!(ell.volume(), counted);
    }

    #[test]
    fn contract_below_zero_radius_fails() {
        let mut ell = EllipsoidRegion::new(BlockPos::ZERO, BlockPos::new(2, 1, 2));
        assert_eq!(
            ell.contract(&[BlockPos::new(0, 2, 0)]),
            Err(RegionError::EmptyRegion)
        );
        ell.contract(&[BlockPos::new(1, -1, 0)]).unwrap();
        assert_eq!(ell.radius(), BlockPos::new(1, 0, 2));
        ell.expand(&[BlockPos::new(0, 0, -3)]).unwrap();
        assert_eq!(ell.radius(), BlockPos::new(1, 0, 5));
    }
}
