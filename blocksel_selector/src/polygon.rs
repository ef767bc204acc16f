// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use blocksel_region::{AnyRegion, BlockPos, BlockPos2, Polygonal2DRegion, Region};
use tracing::{debug, trace, warn};

use crate::selector::{NO_SELECTION, area_suffix, describe, incomplete, push_summary};
use crate::{DefinedState, RegionSelector, SelectionFeedback, SelectionResult, SelectorLimits};

const NAME: &str = "poly2d";

/// Fewest vertices an outline needs before it can be closed.
pub const MIN_POLYGON_VERTICES: usize = 3;

/// What the most recent secondary position did.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Step {
    Added,
    Closed,
    Heightened,
    Capped,
    Unchanged,
}

/// Polygonal prism selection.
///
/// The outline is drawn in the `x`/`z` plane; the prism spans every `y`
/// that was clicked.
///
/// - The primary position restarts the outline with a single vertex.
///   Repeating the current primary position is not a change and does *not*
///   restart.
/// - Each secondary position appends a vertex, unless its column matches the
///   most recent vertex. Such a repeat click *closes* the outline once it has
///   at least [`MIN_POLYGON_VERTICES`] vertices, and always extends the
///   vertical range to its `y`. It is a change only if it closed the outline
///   or grew the range.
/// - Fully defined once the outline has at least [`MIN_POLYGON_VERTICES`]
///   vertices *and* has been closed. Vertices added after closing keep it
///   closed.
/// - Secondary positions past the configured vertex cap are ignored. They
///   are not a change, so a session does not explain them; calling
///   [`explain_secondary_selection`](RegionSelector::explain_secondary_selection)
///   directly reports the cap.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Polygonal2DSelector {
    primary: Option<BlockPos>,
    polygon: Option<Polygonal2DRegion>,
    closed: bool,
    max_vertices: Option<usize>,
    last_step: Option<Step>,
}

impl Polygonal2DSelector {
    /// Creates an empty selector with no vertex cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty selector honouring `limits`.
    #[must_use]
    pub fn with_limits(limits: SelectorLimits) -> Self {
        Self {
            max_vertices: limits.max_polygon_vertices(),
            ..Self::default()
        }
    }

    /// Number of vertices selected so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.polygon.as_ref().map_or(0, |p| p.points().len())
    }

    /// Whether the outline has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn is_complete(&self) -> bool {
        self.closed && self.vertex_count() >= MIN_POLYGON_VERTICES
    }
}

impl RegionSelector for Polygonal2DSelector {
    fn type_name(&self) -> &'static str {
        NAME
    }

    fn select_primary(&mut self, pos: BlockPos) -> bool {
        if self.primary == Some(pos) {
            trace!(selector = NAME, %pos, "primary unchanged");
            return false;
        }
        self.primary = Some(pos);
        self.polygon = Some(Polygonal2DRegion::from_point(pos));
        self.closed = false;
        self.last_step = None;
        debug!(selector = NAME, %pos, "started a new outline");
        true
    }

    fn select_secondary(&mut self, pos: BlockPos) -> bool {
        let Some(polygon) = &mut self.polygon else {
            return self.select_primary(pos);
        };
        let count = polygon.points().len();
        let step = if polygon.points().last() == Some(&pos.column()) {
            let grew = polygon.expand_y(pos.y);
            if count >= MIN_POLYGON_VERTICES && !self.closed {
                self.closed = true;
                debug!(selector = NAME, vertices = count, "outline closed");
                Step::Closed
            } else if grew {
                debug!(selector = NAME, %pos, "repeated the last vertex, height extended");
                Step::Heightened
            } else {
                trace!(selector = NAME, %pos, "repeated the last vertex");
                Step::Unchanged
            }
        } else if let Some(max) = self.max_vertices.filter(|&max| count >= max) {
            debug!(selector = NAME, max, "vertex cap reached, ignoring position");
            Step::Capped
        } else {
            polygon.add_point(pos.column());
            polygon.expand_y(pos.y);
            debug!(selector = NAME, %pos, vertices = count + 1, "vertex added");
            Step::Added
        };
        self.last_step = Some(step);
        matches!(step, Step::Added | Step::Closed | Step::Heightened)
    }

    fn primary_position(&self) -> SelectionResult<BlockPos> {
        self.primary
            .ok_or_else(|| incomplete(NAME, "no outline has been started"))
    }

    fn defined_state(&self) -> DefinedState {
        DefinedState::from_progress(self.polygon.is_some(), self.is_complete())
    }

    fn region(&self) -> SelectionResult<AnyRegion> {
        match &self.polygon {
            None => Err(incomplete(NAME, "no outline has been started")),
            Some(_) if self.vertex_count() < MIN_POLYGON_VERTICES => Err(incomplete(
                NAME,
                "the outline needs at least three vertices",
            )),
            Some(_) if !self.closed => Err(incomplete(
                NAME,
                "the outline has not been closed; select the last vertex again",
            )),
            Some(polygon) => Ok(polygon.clone().into()),
        }
    }

    fn incomplete_region(&self) -> AnyRegion {
        self.polygon
            .clone()
            .unwrap_or_else(|| Polygonal2DRegion::from_point(BlockPos::ZERO))
            .into()
    }

    fn learn_changes(&mut self, region: &AnyRegion) {
        let polygon = match region.as_polygonal_2d() {
            Some(polygon) if !polygon.points().is_empty() => polygon.clone(),
            _ => {
                warn!(
                    selector = NAME,
                    region = region.type_name(),
                    "approximating region by its bounding rectangle"
                );
                let (min, max) = (region.min(), region.max());
                Polygonal2DRegion::new(
                    [
                        BlockPos2::new(min.x, min.z),
                        BlockPos2::new(max.x, min.z),
                        BlockPos2::new(max.x, max.z),
                        BlockPos2::new(min.x, max.z),
                    ],
                    min.y,
                    max.y,
                )
            }
        };
        self.primary = polygon
            .points()
            .first()
            .map(|first| first.with_y(polygon.min_y()));
        self.closed = polygon.points().len() >= MIN_POLYGON_VERTICES;
        self.polygon = Some(polygon);
        self.last_step = None;
    }

    fn clear(&mut self) {
        self.primary = None;
        self.polygon = None;
        self.closed = false;
        self.last_step = None;
    }

    fn explain_primary_selection(&self, feedback: &mut dyn SelectionFeedback, pos: BlockPos) {
        if self.polygon.is_none() {
            feedback.print(NO_SELECTION);
            return;
        }
        feedback.print(&format!("Starting a new polygon at {pos}."));
    }

    fn explain_secondary_selection(&self, feedback: &mut dyn SelectionFeedback, pos: BlockPos) {
        let Some(polygon) = &self.polygon else {
            feedback.print(NO_SELECTION);
            return;
        };
        let count = polygon.points().len();
        let area = area_suffix(self.area());
        let message = match self.last_step {
            Some(Step::Added) => format!("Added point #{count} at {}{area}.", pos.column()),
            Some(Step::Closed) => format!("Polygon is closed with {count} points{area}."),
            Some(Step::Heightened) => format!(
                "Height extended to {} through {}{area}.",
                polygon.min_y(),
                polygon.max_y()
            ),
            Some(Step::Capped) => format!(
                "Point {} was not added; the polygon is at its limit of {count} points.",
                pos.column()
            ),
            Some(Step::Unchanged) | None => format!("The polygon has {count} points{area}."),
        };
        feedback.print(&message);
    }

    fn information_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("Started at: {}", describe(self.primary))];
        if let Some(polygon) = &self.polygon {
            lines.push(format!("# points: {}", polygon.points().len()));
            lines.push(format!("Height: {} to {}", polygon.min_y(), polygon.max_y()));
            lines.push(format!("Closed: {}", if self.closed { "yes" } else { "no" }));
            for (index, point) in polygon.points().iter().enumerate() {
                lines.push(format!("Point #{}: {point}", index + 1));
            }
        }
        push_summary(self, &mut lines);
        lines
    }
}
