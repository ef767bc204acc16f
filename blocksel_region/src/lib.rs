// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blocksel Region: discrete volumes in an integer block grid.
//!
//! This crate provides the shapes that region selectors build: cuboids,
//! vertical polygonal prisms, upright cylinders, ellipsoids and convex hulls.
//! Each shape implements the [`Region`] trait, which answers the questions
//! editing operations ask of a selection:
//!
//! - Bounds ([`Region::min`], [`Region::max`], [`Region::dimensions`]).
//! - Membership ([`Region::contains`]).
//! - Exact cell count ([`Region::volume`]).
//! - In-place mutation ([`Region::expand`], [`Region::contract`], [`Region::shift`]).
//!
//! [`AnyRegion`] closes over the known shapes so a region can be passed around
//! by value without boxing.
//!
//! ## Minimal example
//!
//! ```rust
//! use blocksel_region::{BlockPos, CuboidRegion, Region};
//!
//! let mut region = CuboidRegion::new(BlockPos::new(0, 0, 0), BlockPos::new(2, 2, 2));
//! assert_eq!(region.volume(), 27);
//!
//! // Grow the top face by two layers.
//! region.expand(&[BlockPos::new(0, 2, 0)]).unwrap();
//! assert_eq!(region.max(), BlockPos::new(2, 4, 2));
//! assert_eq!(region.volume(), 45);
//! ```
//!
//! ## Cost
//!
//! [`Region::volume`] is exact and never more expensive than visiting the
//! bounding box once; the curved shapes count whole rows at a time.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod convex;
mod cuboid;
mod cylinder;
mod ellipsoid;
mod error;
mod polygon;
mod pos;
mod region;

pub use convex::ConvexPolyhedralRegion;
pub use cuboid::CuboidRegion;
pub use cylinder::CylinderRegion;
pub use ellipsoid::EllipsoidRegion;
pub use error::{RegionError, RegionResult};
pub use polygon::Polygonal2DRegion;
pub use pos::{BlockPos, BlockPos2};
pub use region::{AnyRegion, Region};

/// Number of integers in `lo..=hi`; callers guarantee `lo <= hi`.
pub(crate) fn span(lo: i32, hi: i32) -> u64 {
    (i64::from(hi) - i64::from(lo) + 1).unsigned_abs()
}

/// Middle of `lo..=hi`, rounding towards `lo`; callers guarantee `lo <= hi`.
pub(crate) fn midpoint(lo: i32, hi: i32) -> i32 {
    let mid = (i64::from(lo) + i64::from(hi)).div_euclid(2);
    i32::try_from(mid).unwrap_or(lo)
}

/// `(d / (radius + 0.5))^2`: one axis' share of an ellipse equation.
pub(crate) fn unit_term(d: i64, radius: i32) -> f64 {
    let q = d as f64 / (f64::from(radius) + 0.5);
    q * q
}

/// Largest `d` in `0..=limit` for which `inside(d)` holds.
///
/// `inside` must be monotone: once false, it stays false for larger `d`.
/// Returns `None` if even `d = 0` is outside.
pub(crate) fn max_extent(limit: i32, inside: impl Fn(i32) -> bool) -> Option<i32> {
    if !inside(0) {
        return None;
    }
    let (mut lo, mut hi) = (0, limit.max(0));
    while lo < hi {
        let mid = lo + (hi - lo + 1) / 2;
        if inside(mid) {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    Some(lo)
}
