// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use blocksel_region::{AnyRegion, BlockPos, CuboidRegion, Region};
use tracing::{debug, trace, warn};

use crate::selector::{NO_SELECTION, area_suffix, describe, incomplete, push_summary};
use crate::{DefinedState, RegionSelector, SelectionFeedback, SelectionResult};

const NAME: &str = "extend";

/// Cuboid selection that grows to include every secondary position.
///
/// - The primary position starts a fresh one-cell cuboid. Picking the cell
///   the cuboid already is is not a change.
/// - Defined as soon as a primary position is set; there is no partially
///   defined state.
/// - A secondary position inside the cuboid is not a change. A secondary
///   position before any primary acts as a primary.
/// - A new primary position restarts the shape.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExtendingCuboidSelector {
    primary: Option<BlockPos>,
    cuboid: Option<CuboidRegion>,
}

impl ExtendingCuboidSelector {
    /// Creates an empty selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            primary: None,
            cuboid: None,
        }
    }
}

impl RegionSelector for ExtendingCuboidSelector {
    fn type_name(&self) -> &'static str {
        NAME
    }

    fn select_primary(&mut self, pos: BlockPos) -> bool {
        let fresh = CuboidRegion::single(pos);
        if self.cuboid == Some(fresh) {
            trace!(selector = NAME, %pos, "already a single cell at this position");
            return false;
        }
        self.primary = Some(pos);
        self.cuboid = Some(fresh);
        debug!(selector = NAME, %pos, "started a new cuboid");
        true
    }

    fn select_secondary(&mut self, pos: BlockPos) -> bool {
        let Some(cuboid) = &mut self.cuboid else {
            return self.select_primary(pos);
        };
        if !cuboid.include(pos) {
            trace!(selector = NAME, %pos, "position already inside");
            return false;
        }
        debug!(
            selector = NAME,
            %pos,
            min = %cuboid.min(),
            max = %cuboid.max(),
            "extended cuboid"
        );
        true
    }

    fn primary_position(&self) -> SelectionResult<BlockPos> {
        self.primary
            .ok_or_else(|| incomplete(NAME, "no position has been selected"))
    }

    fn defined_state(&self) -> DefinedState {
        let defined = self.cuboid.is_some();
        DefinedState::from_progress(defined, defined)
    }

    fn region(&self) -> SelectionResult<AnyRegion> {
        self.cuboid
            .map(AnyRegion::from)
            .ok_or_else(|| incomplete(NAME, "no position has been selected"))
    }

    fn incomplete_region(&self) -> AnyRegion {
        self.cuboid
            .unwrap_or(CuboidRegion::single(BlockPos::ZERO))
            .into()
    }

    fn learn_changes(&mut self, region: &AnyRegion) {
        let cuboid = match region.as_cuboid() {
            Some(cuboid) => *cuboid,
            None => {
                warn!(
                    selector = NAME,
                    region = region.type_name(),
                    "approximating region by its bounding box"
                );
                CuboidRegion::new(region.min(), region.max())
            }
        };
        self.primary = Some(cuboid.pos1());
        self.cuboid = Some(cuboid);
    }

    fn clear(&mut self) {
        self.primary = None;
        self.cuboid = None;
    }

    fn explain_primary_selection(&self, feedback: &mut dyn SelectionFeedback, pos: BlockPos) {
        if self.cuboid.is_none() {
            feedback.print(NO_SELECTION);
            return;
        }
        feedback.print(&format!(
            "Started selection at {pos}{}.",
            area_suffix(self.area())
        ));
    }

    fn explain_secondary_selection(&self, feedback: &mut dyn SelectionFeedback, pos: BlockPos) {
        if self.cuboid.is_none() {
            feedback.print(NO_SELECTION);
            return;
        }
        feedback.print(&format!(
            "Extended selection to encompass {pos}{}.",
            area_suffix(self.area())
        ));
    }

    fn information_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Started at: {}", describe(self.primary))];
        push_summary(self, &mut lines);
        lines
    }
}
