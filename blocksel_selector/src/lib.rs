// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Blocksel Selector: turning picked block positions into regions.
//!
//! A [`RegionSelector`] is a small state machine. The user picks a
//! *primary* position and then one or more *secondary* positions; the
//! selector accumulates them and, once it has enough, produces a region from
//! [`blocksel_region`]. Selectors do not know how positions are picked. A
//! tool maps clicks onto [`RegionSelector::select_primary`] and
//! [`RegionSelector::select_secondary`], and shows the sentences the
//! selector writes to a [`SelectionFeedback`].
//!
//! The variants:
//! - [`CuboidSelector`]: two opposite corners.
//! - [`ExtendingCuboidSelector`]: a box that grows to include each click.
//! - [`Polygonal2DSelector`]: a closed outline extruded vertically.
//! - [`CylinderSelector`]: an upright cylinder around a centre.
//! - [`EllipsoidSelector`]: an ellipsoid or sphere around a centre.
//! - [`ConvexPolyhedralSelector`]: the convex hull of every picked vertex.
//!
//! [`SelectionSession`] holds one active selector and switches between
//! [`SelectorKind`]s, carrying the selection across.
//!
//! ## Minimal example
//!
//! ```rust
//! use blocksel_region::BlockPos;
//! use blocksel_selector::{RegionSelector, SelectionSession};
//!
//! let mut session = SelectionSession::new();
//! let mut messages: Vec<String> = Vec::new();
//!
//! session.select_primary(BlockPos::new(0, 0, 0), &mut messages);
//! session.select_secondary(BlockPos::new(2, 2, 2), &mut messages);
//! assert_eq!(session.selector().area(), 27);
//! assert_eq!(messages.last().unwrap(), "Second position set to (2, 2, 2) (27 blocks).");
//!
//! session.clear();
//! assert_eq!(session.selector().area(), -1);
//! ```
//!
//! ## Editing through the region
//!
//! Regions handed out by a selector are snapshots. To grow or move the
//! selection, change a snapshot and let the selector learn the result:
//!
//! ```rust
//! use blocksel_region::{BlockPos, Region};
//! use blocksel_selector::{RegionSelector, SelectionSession, Silent};
//!
//! let mut session = SelectionSession::new();
//! session.select_primary(BlockPos::new(0, 0, 0), &mut Silent);
//! session.select_secondary(BlockPos::new(1, 1, 1), &mut Silent);
//!
//! session
//!     .apply_region_change(&mut Silent, |region| region.shift(BlockPos::new(10, 0, 0)))
//!     .unwrap();
//! assert_eq!(session.selector().primary_position(), Ok(BlockPos::new(10, 0, 0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod convex;
mod cuboid;
mod cylinder;
mod ellipsoid;
mod error;
mod extending;
mod feedback;
mod kind;
mod limits;
mod polygon;
mod selector;
mod session;
mod state;

pub use convex::ConvexPolyhedralSelector;
pub use cuboid::CuboidSelector;
pub use cylinder::CylinderSelector;
pub use ellipsoid::EllipsoidSelector;
pub use error::{RegionChangeError, SelectionError, SelectionResult, UnknownSelectorKind};
pub use extending::ExtendingCuboidSelector;
pub use feedback::{SelectionFeedback, Silent};
pub use kind::SelectorKind;
pub use limits::SelectorLimits;
pub use polygon::{MIN_POLYGON_VERTICES, Polygonal2DSelector};
pub use selector::RegionSelector;
pub use session::SelectionSession;
pub use state::DefinedState;
