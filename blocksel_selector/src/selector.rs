// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`RegionSelector`] contract and the helpers its implementations share.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use blocksel_region::{AnyRegion, BlockPos, Region};

use crate::{DefinedState, SelectionError, SelectionFeedback, SelectionResult};

/// A state machine that builds a region out of user-picked positions.
///
/// Every selector moves through [`DefinedState::Undefined`],
/// [`DefinedState::PartiallyDefined`] and [`DefinedState::FullyDefined`] as
/// points arrive, and back to `Undefined` on [`clear`](Self::clear).
///
/// # Ownership
///
/// [`region`](Self::region) and [`incomplete_region`](Self::incomplete_region)
/// return owned snapshots. A snapshot never observes later point changes;
/// edits made to a snapshot reach the selector only through
/// [`learn_changes`](Self::learn_changes).
///
/// # Variant policies
///
/// Each implementation documents what counts as a change, how many points it
/// needs, and whether picking a new primary position restarts the shape.
pub trait RegionSelector: fmt::Debug {
    /// Stable lowercase name of this selector, e.g. `"cuboid"`.
    fn type_name(&self) -> &'static str;

    /// Sets the primary position.
    ///
    /// Returns `true` if the selection changed. Repeating the current primary
    /// position returns `false`.
    fn select_primary(&mut self, pos: BlockPos) -> bool;

    /// Adds or updates a secondary position.
    ///
    /// Returns `true` if the selection changed.
    fn select_secondary(&mut self, pos: BlockPos) -> bool;

    /// The primary position.
    ///
    /// # Errors
    ///
    /// [`SelectionError::IncompleteSelection`] if no primary position has been set.
    fn primary_position(&self) -> SelectionResult<BlockPos>;

    /// How far the selection has progressed.
    fn defined_state(&self) -> DefinedState;

    /// Whether enough points are selected to produce a region.
    fn is_defined(&self) -> bool {
        self.defined_state().is_fully_defined()
    }

    /// The selected region, computed from the current points.
    ///
    /// # Errors
    ///
    /// [`SelectionError::IncompleteSelection`] unless [`is_defined`](Self::is_defined).
    fn region(&self) -> SelectionResult<AnyRegion>;

    /// A best-effort region for whatever has been selected so far.
    ///
    /// With no points this is a single cell at the origin.
    fn incomplete_region(&self) -> AnyRegion;

    /// Number of cells in the selection, or `-1` if it is not fully defined.
    fn area(&self) -> i64 {
        match self.region() {
            Ok(region) => i64::try_from(region.volume()).unwrap_or(i64::MAX),
            Err(_) => -1,
        }
    }

    /// Re-derives the stored points from a region that was edited elsewhere.
    ///
    /// Shapes the selector cannot represent exactly are approximated by their
    /// bounding extremes.
    fn learn_changes(&mut self, region: &AnyRegion);

    /// Forgets every point, returning to [`DefinedState::Undefined`].
    fn clear(&mut self);

    /// Describes a primary selection at `pos` that just happened.
    fn explain_primary_selection(&self, feedback: &mut dyn SelectionFeedback, pos: BlockPos) {
        if !self.defined_state().is_started() {
            feedback.print(NO_SELECTION);
            return;
        }
        feedback.print(&format!("First position set to {pos}{}.", area_suffix(self.area())));
    }

    /// Describes a secondary selection at `pos` that just happened.
    fn explain_secondary_selection(&self, feedback: &mut dyn SelectionFeedback, pos: BlockPos) {
        if !self.defined_state().is_started() {
            feedback.print(NO_SELECTION);
            return;
        }
        feedback.print(&format!(
            "Second position set to {pos}{}.",
            area_suffix(self.area())
        ));
    }

    /// Describes the selection after its region was changed externally.
    fn explain_region_adjust(&self, feedback: &mut dyn SelectionFeedback) {
        match self.defined_state() {
            DefinedState::Undefined => feedback.print(NO_SELECTION),
            DefinedState::PartiallyDefined => {
                feedback.print(&format!("The {} selection is incomplete.", self.type_name()));
            }
            DefinedState::FullyDefined => feedback.print(&format!(
                "The {} selection now covers {}.",
                self.type_name(),
                blocks(self.area())
            )),
        }
    }

    /// Lines summarizing the current selection, freshly built on every call.
    fn information_lines(&self) -> Vec<String>;
}

pub(crate) const NO_SELECTION: &str = "No selection yet.";

/// Builds the error for a query that needs more points.
pub(crate) fn incomplete(selector: &'static str, missing: &'static str) -> SelectionError {
    SelectionError::IncompleteSelection { selector, missing }
}

/// `"N blocks"`, singular for one.
pub(crate) fn blocks(count: i64) -> String {
    if count == 1 {
        String::from("1 block")
    } else {
        format!("{count} blocks")
    }
}

/// `" (N blocks)"` for a defined area, nothing otherwise.
pub(crate) fn area_suffix(area: i64) -> String {
    if area < 0 {
        String::new()
    } else {
        format!(" ({})", blocks(area))
    }
}

/// Appends the lines every selector shares: state, size and volume.
pub(crate) fn push_summary(selector: &dyn RegionSelector, lines: &mut Vec<String>) {
    let state = selector.defined_state();
    lines.push(format!("Type: {} ({state})", selector.type_name()));
    if let Ok(region) = selector.region() {
        let size = region.dimensions();
        lines.push(format!("Size: {} x {} x {}", size.x, size.y, size.z));
        lines.push(format!("Bounds: {} to {}", region.min(), region.max()));
        lines.push(format!("Volume: {} blocks", region.volume()));
    }
}

/// Formats an optional position for an information line.
pub(crate) fn describe(pos: Option<BlockPos>) -> String {
    match pos {
        Some(pos) => format!("{pos}"),
        None => String::from("not set"),
    }
}
