// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

use blocksel_region::{AnyRegion, BlockPos, ConvexPolyhedralRegion, Region};
use tracing::{debug, trace, warn};

use crate::selector::{NO_SELECTION, area_suffix, describe, incomplete, push_summary};
use crate::{DefinedState, RegionSelector, SelectionFeedback, SelectionResult, SelectorLimits};

const NAME: &str = "convex";

/// What the most recent secondary position did.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Step {
    Added,
    Repeated,
    Capped,
}

/// Convex hull selection.
///
/// - The primary position restarts the hull with a single vertex. Repeating
///   the current primary position is not a change.
/// - Each secondary position adds a vertex. Vertices form a set, so a
///   position that is already a vertex is not a change. Before any primary
///   position, a secondary position acts as one.
/// - Fully defined once the vertices span a plane: three of them are not
///   collinear. Until then the hull is a single cell or a segment.
/// - Secondary positions past the configured vertex cap are ignored.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConvexPolyhedralSelector {
    primary: Option<BlockPos>,
    hull: Option<ConvexPolyhedralRegion>,
    max_vertices: Option<usize>,
    last_step: Option<Step>,
}

impl ConvexPolyhedralSelector {
    /// Creates an empty selector with no vertex cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty selector honouring `limits`.
    #[must_use]
    pub fn with_limits(limits: SelectorLimits) -> Self {
        Self {
            max_vertices: limits.max_convex_vertices(),
            ..Self::default()
        }
    }

    /// Number of distinct vertices selected so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.hull
            .as_ref()
            .map_or(0, ConvexPolyhedralRegion::vertex_count)
    }
}

impl RegionSelector for ConvexPolyhedralSelector {
    fn type_name(&self) -> &'static str {
        NAME
    }

    fn select_primary(&mut self, pos: BlockPos) -> bool {
        if self.primary == Some(pos) {
            trace!(selector = NAME, %pos, "primary unchanged");
            return false;
        }
        self.primary = Some(pos);
        self.hull = Some(ConvexPolyhedralRegion::from_point(pos));
        self.last_step = None;
        debug!(selector = NAME, %pos, "started a new hull");
        true
    }

    fn select_secondary(&mut self, pos: BlockPos) -> bool {
        let Some(hull) = &mut self.hull else {
            return self.select_primary(pos);
        };
        let step = if hull.has_vertex(pos) {
            trace!(selector = NAME, %pos, "already a vertex");
            Step::Repeated
        } else if let Some(max) = self.max_vertices.filter(|&max| hull.vertex_count() >= max) {
            debug!(selector = NAME, max, "vertex cap reached, ignoring position");
            Step::Capped
        } else {
            hull.add_vertex(pos);
            debug!(selector = NAME, %pos, vertices = hull.vertex_count(), "vertex added");
            Step::Added
        };
        self.last_step = Some(step);
        step == Step::Added
    }

    fn primary_position(&self) -> SelectionResult<BlockPos> {
        self.primary
            .ok_or_else(|| incomplete(NAME, "no vertex has been selected"))
    }

    fn defined_state(&self) -> DefinedState {
        DefinedState::from_progress(
            self.primary.is_some(),
            self.hull.as_ref().is_some_and(ConvexPolyhedralRegion::spans_plane),
        )
    }

    fn region(&self) -> SelectionResult<AnyRegion> {
        match &self.hull {
            Some(hull) if hull.spans_plane() => Ok(hull.clone().into()),
            Some(_) => Err(incomplete(NAME, "the vertices do not span a plane")),
            None => Err(incomplete(NAME, "no vertex has been selected")),
        }
    }

    fn incomplete_region(&self) -> AnyRegion {
        self.hull
            .clone()
            .unwrap_or_else(|| ConvexPolyhedralRegion::from_point(BlockPos::ZERO))
            .into()
    }

    fn learn_changes(&mut self, region: &AnyRegion) {
        let hull = match region.as_convex() {
            Some(hull) => hull.clone(),
            None => {
                warn!(
                    selector = NAME,
                    region = region.type_name(),
                    "approximating region by the hull of its bounding box"
                );
                let (min, max) = (region.min(), region.max());
                ConvexPolyhedralRegion::new([min.x, max.x].into_iter().flat_map(|x| {
                    [min.y, max.y].into_iter().flat_map(move |y| {
                        [min.z, max.z].into_iter().map(move |z| BlockPos::new(x, y, z))
                    })
                }))
            }
        };
        self.primary = hull.vertices().first().copied();
        self.hull = Some(hull);
        self.last_step = None;
    }

    fn clear(&mut self) {
        self.primary = None;
        self.hull = None;
        self.last_step = None;
    }

    fn explain_primary_selection(&self, feedback: &mut dyn SelectionFeedback, pos: BlockPos) {
        if self.primary.is_none() {
            feedback.print(NO_SELECTION);
            return;
        }
        feedback.print(&format!("Started new selection with vertex {pos}."));
    }

    fn explain_secondary_selection(&self, feedback: &mut dyn SelectionFeedback, pos: BlockPos) {
        let Some(hull) = &self.hull else {
            feedback.print(NO_SELECTION);
            return;
        };
        let area = area_suffix(self.area());
        feedback.print(&match self.last_step {
            Some(Step::Added) => format!("Added vertex {pos} to the selection{area}."),
            Some(Step::Repeated) => format!("Vertex {pos} is already part of the selection."),
            Some(Step::Capped) => format!(
                "Vertex {pos} was not added; the selection is at its limit of {} vertices.",
                hull.vertex_count()
            ),
            None => format!("The selection has {} vertices{area}.", hull.vertex_count()),
        });
    }

    fn information_lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Started at: {}", describe(self.primary)),
            format!("Vertices: {}", self.vertex_count()),
        ];
        push_summary(self, &mut lines);
        lines
    }
}
