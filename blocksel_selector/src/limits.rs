// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tunable limits applied to newly created selectors.
///
/// ```rust
/// use blocksel_selector::SelectorLimits;
///
/// let limits = SelectorLimits::new().with_max_polygon_vertices(Some(20));
/// assert_eq!(limits.max_polygon_vertices(), Some(20));
/// assert_eq!(SelectorLimits::default().max_polygon_vertices(), None);
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct SelectorLimits {
    max_polygon_vertices: Option<usize>,
    max_convex_vertices: Option<usize>,
}

impl SelectorLimits {
    /// Limits with every knob unbounded.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_polygon_vertices: None,
            max_convex_vertices: None,
        }
    }

    /// Caps how many vertices a polygonal selection may hold. `None` is unbounded.
    #[must_use]
    pub const fn with_max_polygon_vertices(mut self, max: Option<usize>) -> Self {
        self.max_polygon_vertices = max;
        self
    }

    /// Caps how many vertices a convex hull selection may hold. `None` is unbounded.
    #[must_use]
    pub const fn with_max_convex_vertices(mut self, max: Option<usize>) -> Self {
        self.max_convex_vertices = max;
        self
    }

    /// The polygon vertex cap, if any.
    #[must_use]
    pub const fn max_polygon_vertices(&self) -> Option<usize> {
        self.max_polygon_vertices
    }

    /// The convex hull vertex cap, if any.
    #[must_use]
    pub const fn max_convex_vertices(&self) -> Option<usize> {
        self.max_convex_vertices
    }
}
