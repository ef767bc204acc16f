// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Region`] trait and the closed [`AnyRegion`] set of shapes.

use crate::{
    BlockPos, ConvexPolyhedralRegion, CuboidRegion, CylinderRegion, EllipsoidRegion,
    Polygonal2DRegion, RegionResult, midpoint,
};

/// A volume of cells in the block grid.
///
/// All queries are bounded by the region's bounding box; nothing here walks
/// unbounded space.
pub trait Region {
    /// Stable lowercase name of the shape, e.g. `"cuboid"`.
    fn type_name(&self) -> &'static str;

    /// Lowest corner of the bounding box, inclusive.
    fn min(&self) -> BlockPos;

    /// Highest corner of the bounding box, inclusive.
    fn max(&self) -> BlockPos;

    /// Inclusive extent of the bounding box along each axis.
    fn dimensions(&self) -> BlockPos {
        let (min, max) = (self.min(), self.max());
        BlockPos::new(
            max.x.saturating_sub(min.x).saturating_add(1),
            max.y.saturating_sub(min.y).saturating_add(1),
            max.z.saturating_sub(min.z).saturating_add(1),
        )
    }

    /// The cell at the middle of the bounding box, rounding towards `min`.
    fn center(&self) -> BlockPos {
        let (min, max) = (self.min(), self.max());
        BlockPos::new(
            midpoint(min.x, max.x),
            midpoint(min.y, max.y),
            midpoint(min.z, max.z),
        )
    }

    /// Exact number of cells inside the region.
    ///
    /// Counts past `u64::MAX` saturate.
    fn volume(&self) -> u64;

    /// Whether `pos` is inside the region.
    fn contains(&self, pos: BlockPos) -> bool;

    /// Grows the region by each change vector in turn.
    ///
    /// On error the region is left unchanged.
    fn expand(&mut self, changes: &[BlockPos]) -> RegionResult<()>;

    /// Shrinks the region by each change vector in turn.
    ///
    /// On error the region is left unchanged.
    fn contract(&mut self, changes: &[BlockPos]) -> RegionResult<()>;

    /// Translates the whole region by `offset`.
    fn shift(&mut self, offset: BlockPos) -> RegionResult<()>;
}

/// Any of the shapes this crate knows about.
///
/// Selectors hand these out as owned snapshots.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AnyRegion {
    /// See [`CuboidRegion`].
    Cuboid(CuboidRegion),
    /// See [`Polygonal2DRegion`].
    Polygonal2D(Polygonal2DRegion),
    /// See [`CylinderRegion`].
    Cylinder(CylinderRegion),
    /// See [`EllipsoidRegion`].
    Ellipsoid(EllipsoidRegion),
    /// See [`ConvexPolyhedralRegion`].
    Convex(ConvexPolyhedralRegion),
}

macro_rules! delegate {
    ($self:ident, $region:ident => $body:expr) => {
        match $self {
            AnyRegion::Cuboid($region) => $body,
            AnyRegion::Polygonal2D($region) => $body,
            AnyRegion::Cylinder($region) => $body,
            AnyRegion::Ellipsoid($region) => $body,
            AnyRegion::Convex($region) => $body,
        }
    };
}

impl AnyRegion {
    /// Returns the cuboid, if this is one.
    #[must_use]
    pub fn as_cuboid(&self) -> Option<&CuboidRegion> {
        match self {
            Self::Cuboid(cuboid) => Some(cuboid),
            _ => None,
        }
    }

    /// Returns the polygon, if this is one.
    #[must_use]
    pub fn as_polygonal_2d(&self) -> Option<&Polygonal2DRegion> {
        match self {
            Self::Polygonal2D(polygon) => Some(polygon),
            _ => None,
        }
    }

    /// Returns the cylinder, if this is one.
    #[must_use]
    pub fn as_cylinder(&self) -> Option<&CylinderRegion> {
        match self {
            Self::Cylinder(cylinder) => Some(cylinder),
            _ => None,
        }
    }

    /// Returns the ellipsoid, if this is one.
    #[must_use]
    pub fn as_ellipsoid(&self) -> Option<&EllipsoidRegion> {
        match self {
            Self::Ellipsoid(ellipsoid) => Some(ellipsoid),
            _ => None,
        }
    }

    /// Returns the convex hull, if this is one.
    #[must_use]
    pub fn as_convex(&self) -> Option<&ConvexPolyhedralRegion> {
        match self {
            Self::Convex(hull) => Some(hull),
            _ => None,
        }
    }
}

impl Region for AnyRegion {
    fn type_name(&self) -> &'static str {
        delegate!(self, r => r.type_name())
    }

    fn min(&self) -> BlockPos {
        delegate!(self, r => r.min())
    }

    fn max(&self) -> BlockPos {
        delegate!(self, r => r.max())
    }

    fn center(&self) -> BlockPos {
        delegate!(self, r => r.center())
    }

    fn volume(&self) -> u64 {
        delegate!(self, r => r.volume())
    }

    fn contains(&self, pos: BlockPos) -> bool {
        delegate!(self, r => r.contains(pos))
    }

    fn expand(&mut self, changes: &[BlockPos]) -> RegionResult<()> {
        delegate!(self, r => r.expand(changes))
    }

    fn contract(&mut self, changes: &[BlockPos]) -> RegionResult<()> {
        delegate!(self, r => r.contract(changes))
    }

    fn shift(&mut self, offset: BlockPos) -> RegionResult<()> {
        delegate!(self, r => r.shift(offset))
    }
}

impl From<CuboidRegion> for AnyRegion {
    fn from(region: CuboidRegion) -> Self {
        Self::Cuboid(region)
    }
}

impl From<Polygonal2DRegion> for AnyRegion {
    fn from(region: Polygonal2DRegion) -> Self {
        Self::Polygonal2D(region)
    }
}

impl From<CylinderRegion> for AnyRegion {
    fn from(region: CylinderRegion) -> Self {
        Self::Cylinder(region)
    }
}

impl From<EllipsoidRegion> for AnyRegion {
    fn from(region: EllipsoidRegion) -> Self {
        Self::Ellipsoid(region)
    }
}

impl From<ConvexPolyhedralRegion> for AnyRegion {
    fn from(region: ConvexPolyhedralRegion) -> Self {
        Self::Convex(region)
    }
}
