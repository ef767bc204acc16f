// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// How far a selector has progressed towards a usable region.
///
/// This is always derived from a selector's stored points, never stored
/// alongside them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum DefinedState {
    /// No points have been selected.
    Undefined,
    /// Some points have been selected, but not enough for a region.
    PartiallyDefined,
    /// Enough points have been selected to produce a region.
    FullyDefined,
}

impl DefinedState {
    /// Derives the state from whether selection has started and finished.
    #[must_use]
    pub const fn from_progress(started: bool, complete: bool) -> Self {
        match (started, complete) {
            (_, true) => Self::FullyDefined,
            (true, false) => Self::PartiallyDefined,
            (false, false) => Self::Undefined,
        }
    }

    /// Returns `true` for [`DefinedState::FullyDefined`].
    #[must_use]
    pub const fn is_fully_defined(self) -> bool {
        matches!(self, Self::FullyDefined)
    }

    /// Returns `true` unless this is [`DefinedState::Undefined`].
    #[must_use]
    pub const fn is_started(self) -> bool {
        !matches!(self, Self::Undefined)
    }
}

impl fmt::Display for DefinedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Undefined => "undefined",
            Self::PartiallyDefined => "partially defined",
            Self::FullyDefined => "fully defined",
        })
    }
}
