// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;

use blocksel_region::{AnyRegion, BlockPos, RegionResult};
use tracing::debug;

use crate::{
    RegionChangeError, RegionSelector, SelectionFeedback, SelectionResult, SelectorKind,
    SelectorLimits,
};

/// One user's selection: the active selector plus the limits new selectors get.
///
/// The session owns its selector outright. Regions handed out are snapshots;
/// use [`apply_region_change`](Self::apply_region_change) to edit the
/// selection through its region.
#[derive(Debug)]
pub struct SelectionSession {
    selector: Box<dyn RegionSelector>,
    kind: SelectorKind,
    limits: SelectorLimits,
}

impl Default for SelectionSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionSession {
    /// A session with an empty cuboid selector and no limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(SelectorLimits::new())
    }

    /// A session with an empty cuboid selector honouring `limits`.
    #[must_use]
    pub fn with_limits(limits: SelectorLimits) -> Self {
        let kind = SelectorKind::default();
        Self {
            selector: kind.create(limits),
            kind,
            limits,
        }
    }

    /// The limits applied to selectors this session creates.
    #[must_use]
    pub fn limits(&self) -> SelectorLimits {
        self.limits
    }

    /// The kind of the active selector.
    #[must_use]
    pub fn kind(&self) -> SelectorKind {
        self.kind
    }

    /// The active selector.
    #[must_use]
    pub fn selector(&self) -> &dyn RegionSelector {
        &*self.selector
    }

    /// The active selector, for direct manipulation.
    pub fn selector_mut(&mut self) -> &mut dyn RegionSelector {
        &mut *self.selector
    }

    /// Switches to a selector of `kind`, carrying the current points over.
    ///
    /// See [`SelectorKind::convert`].
    pub fn set_selector_kind(&mut self, kind: SelectorKind) {
        debug!(from = %self.kind, to = %kind, "switching selector");
        self.selector = kind.convert(&*self.selector, self.limits);
        self.kind = kind;
    }

    /// Selects a primary position, explaining the result if it changed anything.
    pub fn select_primary(&mut self, pos: BlockPos, feedback: &mut dyn SelectionFeedback) -> bool {
        let changed = self.selector.select_primary(pos);
        if changed {
            self.selector.explain_primary_selection(feedback, pos);
        }
        changed
    }

    /// Selects a secondary position, explaining the result if it changed anything.
    pub fn select_secondary(
        &mut self,
        pos: BlockPos,
        feedback: &mut dyn SelectionFeedback,
    ) -> bool {
        let changed = self.selector.select_secondary(pos);
        if changed {
            self.selector.explain_secondary_selection(feedback, pos);
        }
        changed
    }

    /// A snapshot of the selected region.
    ///
    /// # Errors
    ///
    /// See [`RegionSelector::region`].
    pub fn region(&self) -> SelectionResult<AnyRegion> {
        self.selector.region()
    }

    /// Edits the selection through its region.
    ///
    /// `change` mutates a snapshot; the selector then learns the result and
    /// explains it. If `change` fails the selector is left untouched.
    ///
    /// # Errors
    ///
    /// [`RegionChangeError::Selection`] if the selection is not fully
    /// defined, or [`RegionChangeError::Region`] with whatever `change`
    /// returned.
    pub fn apply_region_change(
        &mut self,
        feedback: &mut dyn SelectionFeedback,
        change: impl FnOnce(&mut AnyRegion) -> RegionResult<()>,
    ) -> Result<(), RegionChangeError> {
        let mut region = self.selector.region()?;
        change(&mut region)?;
        self.selector.learn_changes(&region);
        self.selector.explain_region_adjust(feedback);
        Ok(())
    }

    /// Forgets every point of the active selector.
    pub fn clear(&mut self) {
        self.selector.clear();
    }
}
