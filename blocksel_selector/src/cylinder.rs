// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use blocksel_region::{AnyRegion, BlockPos, BlockPos2, CylinderRegion, Region};
use tracing::{debug, trace, warn};

use crate::selector::{NO_SELECTION, area_suffix, describe, incomplete, push_summary};
use crate::{DefinedState, RegionSelector, SelectionFeedback, SelectionResult};

const NAME: &str = "cylinder";

/// Upright cylinder selection.
///
/// - The primary position is the centre. It resets the radius and the
///   vertical range. Repeating the current centre is not a change.
/// - Each secondary position widens the radius to reach its column and
///   extends the vertical range to its `y`. Secondary positions are ignored
///   until a centre is set.
/// - Fully defined once a secondary position has been accepted.
/// - A new primary position restarts the shape.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CylinderSelector {
    center: Option<BlockPos>,
    cylinder: Option<CylinderRegion>,
    has_radius: bool,
}

impl CylinderSelector {
    /// Creates an empty selector.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            center: None,
            cylinder: None,
            has_radius: false,
        }
    }
}

impl RegionSelector for CylinderSelector {
    fn type_name(&self) -> &'static str {
        NAME
    }

    fn select_primary(&mut self, pos: BlockPos) -> bool {
        if self.center == Some(pos) {
            trace!(selector = NAME, %pos, "centre unchanged");
            return false;
        }
        self.center = Some(pos);
        self.cylinder = Some(CylinderRegion::from_center(pos));
        self.has_radius = false;
        debug!(selector = NAME, %pos, "centre set");
        true
    }

    fn select_secondary(&mut self, pos: BlockPos) -> bool {
        let (Some(center), Some(cylinder)) = (self.center, &mut self.cylinder) else {
            trace!(selector = NAME, %pos, "no centre yet, ignoring position");
            return false;
        };
        let offset = pos - center;
        let widened = cylinder.extend_radius(offset.column());
        let heightened = cylinder.expand_y(pos.y);
        let first = !self.has_radius;
        self.has_radius = true;
        if widened || heightened || first {
            debug!(selector = NAME, radius = %cylinder.radius(), "cylinder extended");
            return true;
        }
        false
    }

    fn primary_position(&self) -> SelectionResult<BlockPos> {
        self.center
            .ok_or_else(|| incomplete(NAME, "the centre has not been set"))
    }

    fn defined_state(&self) -> DefinedState {
        DefinedState::from_progress(self.center.is_some(), self.has_radius)
    }

    fn region(&self) -> SelectionResult<AnyRegion> {
        match self.cylinder {
            Some(cylinder) if self.has_radius => Ok(cylinder.into()),
            Some(_) => Err(incomplete(NAME, "the radius has not been set")),
            None => Err(incomplete(NAME, "the centre has not been set")),
        }
    }

    fn incomplete_region(&self) -> AnyRegion {
        self.cylinder
            .unwrap_or(CylinderRegion::from_center(BlockPos::ZERO))
            .into()
    }

    fn learn_changes(&mut self, region: &AnyRegion) {
        let cylinder = match region.as_cylinder() {
            Some(cylinder) => *cylinder,
            None => {
                warn!(
                    selector = NAME,
                    region = region.type_name(),
                    "approximating region by a cylinder reaching its bounding box"
                );
                let (min, max, center) = (region.min(), region.max(), region.center());
                CylinderRegion::new(
                    center.column(),
                    BlockPos2::new(
                        max.x.saturating_sub(center.x),
                        max.z.saturating_sub(center.z),
                    ),
                    min.y,
                    max.y,
                )
            }
        };
        self.center = Some(cylinder.center_column().with_y(cylinder.min_y()));
        self.cylinder = Some(cylinder);
        self.has_radius = true;
    }

    fn clear(&mut self) {
        self.center = None;
        self.cylinder = None;
        self.has_radius = false;
    }

    fn explain_primary_selection(&self, feedback: &mut dyn SelectionFeedback, pos: BlockPos) {
        if self.center.is_none() {
            feedback.print(NO_SELECTION);
            return;
        }
        feedback.print(&format!("Starting a new cylindrical selection at {pos}."));
    }

    fn explain_secondary_selection(&self, feedback: &mut dyn SelectionFeedback, _pos: BlockPos) {
        match self.cylinder {
            None => {
                feedback.print(NO_SELECTION);
                feedback.print("Select the centre before setting the radius.");
            }
            Some(_) if !self.has_radius => feedback.print("The radius has not been set yet."),
            Some(cylinder) => {
                let radius = cylinder.radius();
                feedback.print(&format!(
                    "Radius set to {}/{} blocks{}.",
                    radius.x,
                    radius.z,
                    area_suffix(self.area())
                ));
            }
        }
    }

    fn information_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Center: {}", describe(self.center))];
        if let Some(cylinder) = self.cylinder.filter(|_| self.has_radius) {
            let radius = cylinder.radius();
            lines.push(format!("Radius: {}/{}", radius.x, radius.z));
            lines.push(format!("Height: {} to {}", cylinder.min_y(), cylinder.max_y()));
        }
        push_summary(self, &mut lines);
        lines
    }
}
