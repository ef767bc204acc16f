// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for selectors and sessions.

use alloc::string::String;

use blocksel_region::RegionError;
use thiserror::Error;

/// Result type for selector queries.
pub type SelectionResult<T> = Result<T, SelectionError>;

/// Errors returned by [`RegionSelector`](crate::RegionSelector) queries.
///
/// An incomplete selection is an expected condition: callers should prompt
/// the user to finish selecting rather than treat it as a fault.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum SelectionError {
    /// The selector does not yet hold the points the query needs.
    #[error("incomplete {selector} selection: {missing}")]
    IncompleteSelection {
        /// Type name of the selector that was queried.
        selector: &'static str,
        /// What still has to be selected.
        missing: &'static str,
    },
}

/// A selector type name that does not match any known selector.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown selector type `{name}`")]
pub struct UnknownSelectorKind {
    /// The name that failed to parse.
    pub name: String,
}

/// Errors from [`SelectionSession::apply_region_change`](crate::SelectionSession::apply_region_change).
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum RegionChangeError {
    /// There was no complete region to change.
    #[error(transparent)]
    Selection(#[from] SelectionError),

    /// The region rejected the change.
    #[error(transparent)]
    Region(#[from] RegionError),
}
