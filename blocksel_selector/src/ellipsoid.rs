// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use blocksel_region::{AnyRegion, BlockPos, EllipsoidRegion, Region};
use tracing::{debug, trace, warn};

use crate::selector::{NO_SELECTION, area_suffix, describe, incomplete, push_summary};
use crate::{DefinedState, RegionSelector, SelectionFeedback, SelectionResult};

/// How secondary positions turn into radii.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
enum RadiusMode {
    /// Each radius grows to reach the position along its own axis.
    #[default]
    PerAxis,
    /// All radii become the rounded distance to the position.
    Spherical,
}

/// Ellipsoid (or sphere) selection around a centre.
///
/// - The primary position is the centre and resets the radius. Repeating the
///   current centre is not a change.
/// - For an ellipsoid, each secondary position grows every radius to reach
///   it along that axis; radii never shrink. For a sphere, each secondary
///   position sets all radii to its rounded distance from the centre.
///   Secondary positions are ignored until a centre is set.
/// - Fully defined once a secondary position has been accepted.
/// - A new primary position restarts the shape.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct EllipsoidSelector {
    center: Option<BlockPos>,
    ellipsoid: Option<EllipsoidRegion>,
    has_radius: bool,
    mode: RadiusMode,
}

impl EllipsoidSelector {
    /// Creates an empty ellipsoid selector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sphere selector.
    #[must_use]
    pub fn sphere() -> Self {
        Self {
            mode: RadiusMode::Spherical,
            ..Self::default()
        }
    }
}

/// Euclidean distance rounded to the nearest whole block.
fn rounded_distance(a: BlockPos, b: BlockPos) -> i32 {
    let squared = a.distance_squared(b);
    let root = squared.isqrt();
    // (r + 0.5)^2 = r^2 + r + 0.25, so anything past r^2 + r rounds up.
    let rounded = if squared - root * root > root {
        root + 1
    } else {
        root
    };
    i32::try_from(rounded).unwrap_or(i32::MAX)
}

impl RegionSelector for EllipsoidSelector {
    fn type_name(&self) -> &'static str {
        match self.mode {
            RadiusMode::PerAxis => "ellipsoid",
            RadiusMode::Spherical => "sphere",
        }
    }

    fn select_primary(&mut self, pos: BlockPos) -> bool {
        if self.center == Some(pos) {
            trace!(selector = self.type_name(), %pos, "centre unchanged");
            return false;
        }
        self.center = Some(pos);
        self.ellipsoid = Some(EllipsoidRegion::new(pos, BlockPos::ZERO));
        self.has_radius = false;
        debug!(selector = self.type_name(), %pos, "centre set");
        true
    }

    fn select_secondary(&mut self, pos: BlockPos) -> bool {
        let name = self.type_name();
        let (Some(center), Some(ellipsoid)) = (self.center, &mut self.ellipsoid) else {
            trace!(selector = name, %pos, "no centre yet, ignoring position");
            return false;
        };
        let changed = match self.mode {
            RadiusMode::PerAxis => ellipsoid.extend_radius((pos - center).abs()),
            RadiusMode::Spherical => {
                let radius = rounded_distance(center, pos);
                ellipsoid.set_radius(BlockPos::new(radius, radius, radius))
            }
        };
        let first = !self.has_radius;
        self.has_radius = true;
        if changed || first {
            debug!(selector = name, radius = %ellipsoid.radius(), "radius set");
            return true;
        }
        false
    }

    fn primary_position(&self) -> SelectionResult<BlockPos> {
        self.center
            .ok_or_else(|| incomplete(self.type_name(), "the centre has not been set"))
    }

    fn defined_state(&self) -> DefinedState {
        DefinedState::from_progress(self.center.is_some(), self.has_radius)
    }

    fn region(&self) -> SelectionResult<AnyRegion> {
        match self.ellipsoid {
            Some(ellipsoid) if self.has_radius => Ok(ellipsoid.into()),
            Some(_) => Err(incomplete(self.type_name(), "the radius has not been set")),
            None => Err(incomplete(self.type_name(), "the centre has not been set")),
        }
    }

    fn incomplete_region(&self) -> AnyRegion {
        self.ellipsoid
            .unwrap_or(EllipsoidRegion::new(BlockPos::ZERO, BlockPos::ZERO))
            .into()
    }

    fn learn_changes(&mut self, region: &AnyRegion) {
        let ellipsoid = match region.as_ellipsoid() {
            Some(ellipsoid) => *ellipsoid,
            None => {
                warn!(
                    selector = self.type_name(),
                    region = region.type_name(),
                    "approximating region by an ellipsoid reaching its bounding box"
                );
                let center = region.center();
                EllipsoidRegion::new(center, region.max() - center)
            }
        };
        self.center = Some(ellipsoid.center_cell());
        self.ellipsoid = Some(ellipsoid);
        self.has_radius = true;
    }

    fn clear(&mut self) {
        self.center = None;
        self.ellipsoid = None;
        self.has_radius = false;
    }

    fn explain_primary_selection(&self, feedback: &mut dyn SelectionFeedback, pos: BlockPos) {
        if self.center.is_none() {
            feedback.print(NO_SELECTION);
            return;
        }
        feedback.print(&format!("Center position set to {pos}."));
    }

    fn explain_secondary_selection(&self, feedback: &mut dyn SelectionFeedback, _pos: BlockPos) {
        match self.ellipsoid {
            None => {
                feedback.print(NO_SELECTION);
                feedback.print("Select the centre before setting the radius.");
            }
            Some(_) if !self.has_radius => feedback.print("The radius has not been set yet."),
            Some(ellipsoid) => feedback.print(&format!(
                "Radius set to {}{}.",
                ellipsoid.radius(),
                area_suffix(self.area())
            )),
        }
    }

    fn information_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Center: {}", describe(self.center))];
        if let Some(ellipsoid) = self.ellipsoid.filter(|_| self.has_radius) {
            lines.push(format!("X/Y/Z radius: {}", ellipsoid.radius()));
        }
        push_summary(self, &mut lines);
        lines
    }
}
