// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vertical prisms over a 2D polygon.

use smallvec::SmallVec;

use crate::{BlockPos, BlockPos2, Region, RegionError, RegionResult, span};

/// A polygon in the `x`/`z` plane extruded over an inclusive `y` range.
///
/// Cells on the polygon's edges count as inside. With fewer than three
/// vertices the region degenerates to the point or segment itself.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Polygonal2DRegion {
    points: SmallVec<[BlockPos2; 8]>,
    min_y: i32,
    max_y: i32,
}

impl Polygonal2DRegion {
    /// Creates a prism over `points` spanning `y1..=y2` (in either order).
    pub fn new<I>(points: I, y1: i32, y2: i32) -> Self
    where
        I: IntoIterator<Item = BlockPos2>,
    {
        Self {
            points: points.into_iter().collect(),
            min_y: y1.min(y2),
            max_y: y1.max(y2),
        }
    }

    /// Creates a one-vertex, one-layer polygon at `pos`.
    #[must_use]
    pub fn from_point(pos: BlockPos) -> Self {
        Self::new([pos.column()], pos.y, pos.y)
    }

    /// The vertices in insertion order.
    #[must_use]
    pub fn points(&self) -> &[BlockPos2] {
        &self.points
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

    /// Appends a vertex.
    pub fn add_point(&mut self, point: BlockPos2) {
        self.points.push(point);
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

    /// Whether the column `(x, z)` lies inside the polygon outline.
    #[must_use]
    pub fn contains_column(&self, column: BlockPos2) -> bool {
        let points = &self.points;
        let Some(&last) = points.last() else {
            return false;
        };
        let mut inside = false;
        let mut prev = last;
        for &point in points.iter() {
            if on_segment(prev, point, column) {
                return true;
            }
            if points.len() >= 3 && crosses(prev, point, column) {
                inside = !inside;
            }
            prev = point;
        }
        inside
    }

    fn bounds_2d(&self) -> (BlockPos2, BlockPos2) {
        let mut iter = self.points.iter().copied();
        let Some(first) = iter.next() else {
            return (BlockPos2::default(), BlockPos2::default());
        };
        iter.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p)))
    }
}

/// Whether `c` lies on the closed segment `a`–`b`.
fn on_segment(a: BlockPos2, b: BlockPos2, c: BlockPos2) -> bool {
    let (ax, az) = (i128::from(a.x), i128::from(a.z));
    let (bx, bz) = (i128::from(b.x), i128::from(b.z));
    let (cx, cz) = (i128::from(c.x), i128::from(c.z));
    let cross = (bx - ax) * (cz - az) - (bz - az) * (cx - ax);
    cross == 0 && ax.min(bx) <= cx && cx <= ax.max(bx) && az.min(bz) <= cz && cz <= az.max(bz)
}

/// Whether a ray from `c` towards `-x` crosses the edge `a`–`b`.
///
/// Edges are treated as half-open in `z` so a ray through a vertex is only
/// counted once.
fn crosses(a: BlockPos2, b: BlockPos2, c: BlockPos2) -> bool {
    if (a.z > c.z) == (b.z > c.z) {
        return false;
    }
    let dz = i128::from(b.z) - i128::from(a.z);
    let lhs = (i128::from(c.x) - i128::from(a.x)) * dz;
    let rhs = (i128::from(c.z) - i128::from(a.z)) * (i128::from(b.x) - i128::from(a.x));
    if dz > 0 { lhs > rhs } else { lhs < rhs }
}

impl Region for Polygonal2DRegion {
    fn type_name(&self) -> &'static str {
        "poly2d"
    }

    fn min(&self) -> BlockPos {
        self.bounds_2d().0.with_y(self.min_y)
    }

    fn max(&self) -> BlockPos {
        self.bounds_2d().1.with_y(self.max_y)
    }

    fn volume(&self) -> u64 {
        let (lo, hi) = self.bounds_2d();
        if self.points.is_empty() {
            return 0;
        }
        let mut columns = 0_u64;
        for x in lo.x..=hi.x {
            for z in lo.z..=hi.z {
                if self.contains_column(BlockPos2::new(x, z)) {
                    columns += 1;
                }
            }
        }
        columns.saturating_mul(span(self.min_y, self.max_y))
    }

    fn contains(&self, pos: BlockPos) -> bool {
        (self.min_y..=self.max_y).contains(&pos.y) && self.contains_column(pos.column())
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
        for point in &mut self.points {
            *point = point.saturating_add(offset.column());
        }
        self.min_y = self.min_y.saturating_add(offset.y);
        self.max_y = self.max_y.saturating_add(offset.y);
        Ok(())
    }
}

fn reject_horizontal(changes: &[BlockPos]) -> RegionResult<()> {
    if changes.iter().any(|c| c.x != 0 || c.z != 0) {
        return Err(RegionError::UnsupportedChange {
            region: "poly2d",
            reason: "polygons can only be expanded or contracted vertically",
        });
    }
    Ok(())
}
