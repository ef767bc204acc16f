// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use blocksel_region::{AnyRegion, BlockPos, CuboidRegion, Region};
use tracing::{debug, trace, warn};

use crate::selector::{describe, incomplete, push_summary};
use crate::{DefinedState, RegionSelector, SelectionResult};

const NAME: &str = "cuboid";

/// Two-corner cuboid selection.
///
/// - The primary and secondary positions are independent corners. Setting a
///   corner to its current value is not a change.
/// - Fully defined once both corners are set, in either order.
/// - A new primary position moves that corner only; the other corner stays.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CuboidSelector {
    pos1: Option<BlockPos>,
    pos2: Option<BlockPos>,
}

impl CuboidSelector {
    /// Creates an empty selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            pos1: None,
            pos2: None,
        }
    }

    /// The secondary corner, if set.
    #[must_use]
    pub fn secondary_position(&self) -> Option<BlockPos> {
        self.pos2
    }
}

fn set_corner(slot: &mut Option<BlockPos>, pos: BlockPos, which: &'static str) -> bool {
    if *slot == Some(pos) {
        trace!(selector = NAME, corner = which, %pos, "corner unchanged");
        return false;
    }
    *slot = Some(pos);
    debug!(selector = NAME, corner = which, %pos, "corner set");
    true
}

impl RegionSelector for CuboidSelector {
    fn type_name(&self) -> &'static str {
        NAME
    }

    fn select_primary(&mut self, pos: BlockPos) -> bool {
        set_corner(&mut self.pos1, pos, "first")
    }

    fn select_secondary(&mut self, pos: BlockPos) -> bool {
        set_corner(&mut self.pos2, pos, "second")
    }

    fn primary_position(&self) -> SelectionResult<BlockPos> {
        self.pos1
            .ok_or_else(|| incomplete(NAME, "the first position has not been set"))
    }

    fn defined_state(&self) -> DefinedState {
        DefinedState::from_progress(
            self.pos1.is_some() || self.pos2.is_some(),
            self.pos1.is_some() && self.pos2.is_some(),
        )
    }

    fn region(&self) -> SelectionResult<AnyRegion> {
        match (self.pos1, self.pos2) {
            (Some(pos1), Some(pos2)) => Ok(CuboidRegion::new(pos1, pos2).into()),
            (None, _) => Err(incomplete(NAME, "the first position has not been set")),
            (_, None) => Err(incomplete(NAME, "the second position has not been set")),
        }
    }

    fn incomplete_region(&self) -> AnyRegion {
        let cuboid = match (self.pos1, self.pos2) {
            (Some(pos1), Some(pos2)) => CuboidRegion::new(pos1, pos2),
            (Some(pos), None) | (None, Some(pos)) => CuboidRegion::single(pos),
            (None, None) => CuboidRegion::single(BlockPos::ZERO),
        };
        cuboid.into()
    }

    fn learn_changes(&mut self, region: &AnyRegion) {
        let (pos1, pos2) = match region.as_cuboid() {
            Some(cuboid) => (cuboid.pos1(), cuboid.pos2()),
            None => {
                warn!(
                    selector = NAME,
                    region = region.type_name(),
                    "approximating region by its bounding box"
                );
                (region.min(), region.max())
            }
        };
        self.pos1 = Some(pos1);
        self.pos2 = Some(pos2);
    }

    fn clear(&mut self) {
        self.pos1 = None;
        self.pos2 = None;
    }

    fn information_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("First: {}", describe(self.pos1)),
            format!("Second: {}", describe(self.pos2)),
        ];
        push_summary(self, &mut lines);
        lines
    }
}
