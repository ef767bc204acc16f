// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for region mutations.

use thiserror::Error;

/// Result type for region mutations.
pub type RegionResult<T> = Result<T, RegionError>;

/// Errors that can occur while expanding, contracting or shifting a region.
///
/// A failed mutation leaves the region unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum RegionError {
    /// The shape cannot represent the requested change.
    #[error("{region} regions cannot be changed this way: {reason}")]
    UnsupportedChange {
        /// Type name of the region that rejected the change.
        region: &'static str,
        /// What the region can do instead.
        reason: &'static str,
    },

    /// The change would leave the region with no cells.
    #[error("the change would leave the region empty")]
    EmptyRegion,
}
