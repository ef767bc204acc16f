// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use tracing::debug;

use crate::{
    ConvexPolyhedralSelector, CuboidSelector, CylinderSelector, EllipsoidSelector,
    ExtendingCuboidSelector, Polygonal2DSelector, RegionSelector, SelectorLimits,
    UnknownSelectorKind,
};

/// The selector variants a session can switch between.
///
/// ```rust
/// use blocksel_selector::SelectorKind;
///
/// let kind: SelectorKind = "poly".parse().unwrap();
/// assert_eq!(kind, SelectorKind::Polygonal2D);
/// assert_eq!(kind.type_name(), "poly2d");
/// assert!("lasso".parse::<SelectorKind>().is_err());
/// ```
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SelectorKind {
    /// [`CuboidSelector`].
    #[default]
    Cuboid,
    /// [`ExtendingCuboidSelector`].
    Extending,
    /// [`Polygonal2DSelector`].
    Polygonal2D,
    /// [`CylinderSelector`].
    Cylinder,
    /// [`EllipsoidSelector::new`].
    Ellipsoid,
    /// [`EllipsoidSelector::sphere`].
    Sphere,
    /// [`ConvexPolyhedralSelector`].
    Convex,
}

impl SelectorKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Cuboid,
        Self::Extending,
        Self::Polygonal2D,
        Self::Cylinder,
        Self::Ellipsoid,
        Self::Sphere,
        Self::Convex,
    ];

    /// The [`RegionSelector::type_name`] of selectors of this kind.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Cuboid => "cuboid",
            Self::Extending => "extend",
            Self::Polygonal2D => "poly2d",
            Self::Cylinder => "cylinder",
            Self::Ellipsoid => "ellipsoid",
            Self::Sphere => "sphere",
            Self::Convex => "convex",
        }
    }

    /// Builds an empty selector of this kind.
    #[must_use]
    pub fn create(self, limits: SelectorLimits) -> Box<dyn RegionSelector> {
        match self {
            Self::Cuboid => Box::new(CuboidSelector::new()),
            Self::Extending => Box::new(ExtendingCuboidSelector::new()),
            Self::Polygonal2D => Box::new(Polygonal2DSelector::with_limits(limits)),
            Self::Cylinder => Box::new(CylinderSelector::new()),
            Self::Ellipsoid => Box::new(EllipsoidSelector::new()),
            Self::Sphere => Box::new(EllipsoidSelector::sphere()),
            Self::Convex => Box::new(ConvexPolyhedralSelector::with_limits(limits)),
        }
    }

    /// Builds a selector of this kind seeded from `old`.
    ///
    /// A fully defined `old` hands over its region through
    /// [`RegionSelector::learn_changes`]. One that is only started hands over
    /// its primary position. An empty `old` gives an empty selector.
    #[must_use]
    pub fn convert(
        self,
        old: &dyn RegionSelector,
        limits: SelectorLimits,
    ) -> Box<dyn RegionSelector> {
        let mut selector = self.create(limits);
        if let Ok(region) = old.region() {
            debug!(from = old.type_name(), to = self.type_name(), "converting region");
            selector.learn_changes(&region);
        } else if let Ok(pos) = old.primary_position() {
            debug!(
                from = old.type_name(),
                to = self.type_name(),
                %pos,
                "converting primary position"
            );
            selector.select_primary(pos);
        }
        selector
    }
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl FromStr for SelectorKind {
    type Err = UnknownSelectorKind;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(match name {
            "cuboid" => Self::Cuboid,
            "extend" => Self::Extending,
            "poly" | "poly2d" => Self::Polygonal2D,
            "cyl" | "cylinder" => Self::Cylinder,
            "ellipsoid" => Self::Ellipsoid,
            "sphere" => Self::Sphere,
            "convex" | "hull" => Self::Convex,
            _ => {
                return Err(UnknownSelectorKind {
                    name: String::from(name),
                });
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names_round_trip_through_parse() {
        for kind in SelectorKind::ALL {
            assert_eq!(kind.type_name().parse::<SelectorKind>(), Ok(kind));
            assert_eq!(kind.create(SelectorLimits::new()).type_name(), kind.type_name());
        }
    }

    #[test]
    fn unknown_name_is_reported() {
        let err = "lasso".parse::<SelectorKind>().unwrap_err();
        assert_eq!(err.name, "lasso");
        assert_eq!("hull".parse::<SelectorKind>(), Ok(SelectorKind::Convex));
    }
}
