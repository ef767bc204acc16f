// Copyright 2026 the Blocksel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `blocksel_selector` crate.
//!
//! These exercise the shared [`RegionSelector`] contract across every kind,
//! then the change, completion and restart policies of each variant, and
//! finally how a [`SelectionSession`] ties selection, feedback and region
//! edits together.

use blocksel_region::{
    AnyRegion, BlockPos, BlockPos2, CuboidRegion, CylinderRegion, Region, RegionError,
};
use blocksel_selector::{
    ConvexPolyhedralSelector, CuboidSelector, CylinderSelector, DefinedState, EllipsoidSelector,
    ExtendingCuboidSelector, Polygonal2DSelector, RegionChangeError, RegionSelector,
    SelectionError, SelectionSession, SelectorKind, SelectorLimits, Silent,
};

fn p(x: i32, y: i32, z: i32) -> BlockPos {
    BlockPos::new(x, y, z)
}

/// Drives a selector far enough to be fully defined.
fn define(selector: &mut dyn RegionSelector) {
    selector.select_primary(p(0, 0, 0));
    for pos in [p(3, 0, 0), p(3, 1, 3), p(0, 1, 3), p(0, 1, 3)] {
        selector.select_secondary(pos);
    }
}

#[test]
fn fresh_selectors_are_undefined() {
    for kind in SelectorKind::ALL {
        let selector = kind.create(SelectorLimits::new());
        assert_eq!(selector.defined_state(), DefinedState::Undefined, "{kind}");
        assert!(!selector.is_defined());
        assert_eq!(selector.area(), -1);
        assert!(matches!(
            selector.region(),
            Err(SelectionError::IncompleteSelection { .. })
        ));
        assert!(selector.primary_position().is_err());
        assert_eq!(
            selector.incomplete_region().min(),
            BlockPos::ZERO,
            "{kind}: nothing selected falls back to the origin"
        );
    }
}

#[test]
fn every_kind_can_be_defined_and_cleared() {
    for kind in SelectorKind::ALL {
        let mut selector = kind.create(SelectorLimits::new());
        define(&mut *selector);
        assert!(selector.is_defined(), "{kind}");
        let region = selector.region().unwrap();
        assert_eq!(
            selector.area(),
            i64::try_from(region.volume()).unwrap(),
            "{kind}: area is the region volume"
        );
        assert_eq!(selector.primary_position(), Ok(p(0, 0, 0)), "{kind}");

        selector.clear();
        assert_eq!(selector.defined_state(), DefinedState::Undefined, "{kind}");
        assert_eq!(selector.area(), -1);
        assert!(selector.region().is_err());
    }
}

#[test]
fn region_is_a_snapshot() {
    for kind in SelectorKind::ALL {
        let mut selector = kind.create(SelectorLimits::new());
        define(&mut *selector);
        let mut snapshot = selector.region().unwrap();
        snapshot.shift(p(100, 0, 0)).unwrap();
        assert_ne!(selector.region().unwrap(), snapshot, "{kind}");
        assert!(selector.region().unwrap().contains(p(0, 0, 0)), "{kind}");
    }
}

#[test]
fn repeating_the_primary_is_not_a_change() {
    for kind in SelectorKind::ALL {
        let mut selector = kind.create(SelectorLimits::new());
        assert!(selector.select_primary(p(1, 2, 3)), "{kind}");
        assert!(!selector.select_primary(p(1, 2, 3)), "{kind}");
    }
}

#[test]
fn information_lines_exist_in_every_state() {
    for kind in SelectorKind::ALL {
        let mut selector = kind.create(SelectorLimits::new());
        let undefined = selector.information_lines();
        assert!(
            undefined.contains(&format!("Type: {kind} (undefined)")),
            "{undefined:?}"
        );

        selector.select_primary(p(0, 0, 0));
        let started = selector.information_lines();
        assert!(!started.is_empty());

        define(&mut *selector);
        let defined = selector.information_lines();
        assert!(
            defined.contains(&format!("Type: {kind} (fully defined)")),
            "{defined:?}"
        );
        assert!(
            defined.contains(&format!("Volume: {} blocks", selector.area())),
            "{defined:?}"
        );
    }
}

#[test]
fn started_selections_cover_their_primary() {
    let primary = p(5, -6, 7);
    for kind in SelectorKind::ALL {
        let mut selector = kind.create(SelectorLimits::new());
        selector.select_primary(primary);
        let expected = if kind == SelectorKind::Extending {
            DefinedState::FullyDefined
        } else {
            DefinedState::PartiallyDefined
        };
        assert_eq!(selector.defined_state(), expected, "{kind}");
        let region = selector.incomplete_region();
        assert!(region.contains(primary), "{kind}: {region:?}");
        assert_eq!(region.min(), primary, "{kind}");
    }
}

#[test]
fn cuboid_scenario() {
    let mut selector = CuboidSelector::new();
    assert!(selector.select_primary(p(0, 0, 0)));
    assert_eq!(selector.defined_state(), DefinedState::PartiallyDefined);
    assert_eq!(selector.area(), -1);

    assert!(selector.select_secondary(p(2, 2, 2)));
    assert!(!selector.select_secondary(p(2, 2, 2)));
    assert_eq!(selector.defined_state(), DefinedState::FullyDefined);
    assert_eq!(selector.area(), 27);

    selector.clear();
    assert_eq!(selector.area(), -1);
}

#[test]
fn cuboid_secondary_first_is_partial() {
    let mut selector = CuboidSelector::new();
    selector.select_secondary(p(5, 5, 5));
    assert_eq!(selector.defined_state(), DefinedState::PartiallyDefined);
    assert!(selector.primary_position().is_err());
    assert_eq!(selector.secondary_position(), Some(p(5, 5, 5)));
}

#[test]
fn cuboid_primary_moves_only_its_corner() {
    let mut selector = CuboidSelector::new();
    selector.select_primary(p(0, 0, 0));
    selector.select_secondary(p(2, 2, 2));

    assert!(selector.select_primary(p(1, 1, 1)));
    assert!(selector.is_defined());
    assert_eq!(selector.secondary_position(), Some(p(2, 2, 2)));
    assert_eq!(selector.area(), 8);
}

#[test]
fn extending_cuboid_grows_to_include_positions() {
    let mut selector = ExtendingCuboidSelector::new();
    assert!(selector.select_primary(p(0, 0, 0)));
    assert_eq!(
        selector.defined_state(),
        DefinedState::FullyDefined,
        "a single cell is already a region"
    );
    assert_eq!(selector.area(), 1);

    assert!(selector.select_secondary(p(2, 0, 0)));
    assert!(!selector.select_secondary(p(1, 0, 0)), "already inside");
    assert!(selector.select_secondary(p(0, 0, -1)));
    assert_eq!(selector.area(), 6);

    assert!(selector.select_primary(p(0, 0, 0)), "a new primary restarts");
    assert_eq!(selector.area(), 1);
}

#[test]
fn extending_cuboid_secondary_without_primary_starts_the_box() {
    let mut selector = ExtendingCuboidSelector::new();
    assert!(selector.select_secondary(p(4, 4, 4)));
    assert_eq!(selector.primary_position(), Ok(p(4, 4, 4)));
    assert_eq!(selector.area(), 1);
}

#[test]
fn polygon_needs_an_explicit_close() {
    let mut selector = Polygonal2DSelector::new();
    assert!(selector.select_primary(p(0, 0, 0)));
    assert!(selector.select_secondary(p(4, 0, 0)));
    assert!(selector.select_secondary(p(4, 0, 4)));
    assert!(selector.select_secondary(p(0, 0, 4)));
    assert_eq!(selector.vertex_count(), 4);
    assert_eq!(
        selector.defined_state(),
        DefinedState::PartiallyDefined,
        "three non-collinear secondaries do not close the outline"
    );
    assert!(selector.region().is_err());

    assert!(selector.select_secondary(p(0, 0, 4)), "repeat click closes");
    assert!(selector.is_closed());
    assert_eq!(selector.vertex_count(), 4);
    assert_eq!(selector.defined_state(), DefinedState::FullyDefined);
    assert_eq!(selector.area(), 25);

    assert!(!selector.select_secondary(p(0, 0, 4)), "already closed");
    assert!(selector.select_secondary(p(0, 3, 4)), "the repeat still extends y");
    assert_eq!(selector.area(), 100);
}

#[test]
fn polygon_repeat_before_three_vertices_only_extends_y() {
    let mut selector = Polygonal2DSelector::new();
    selector.select_primary(p(0, 0, 0));
    selector.select_secondary(p(2, 0, 0));
    assert!(!selector.select_secondary(p(2, 0, 0)));
    assert!(selector.select_secondary(p(2, 5, 0)));
    assert!(!selector.is_closed());
    assert_eq!(selector.defined_state(), DefinedState::PartiallyDefined);
}

#[test]
fn polygon_primary_restarts_unless_repeated() {
    let mut selector = Polygonal2DSelector::new();
    define(&mut selector);
    assert!(!selector.select_primary(p(0, 0, 0)));
    assert!(selector.is_defined());

    assert!(selector.select_primary(p(9, 0, 9)));
    assert_eq!(selector.vertex_count(), 1);
    assert!(!selector.is_closed());
    assert_eq!(selector.defined_state(), DefinedState::PartiallyDefined);
}

#[test]
fn polygon_vertex_limit_rejects_extra_points() {
    let limits = SelectorLimits::new().with_max_polygon_vertices(Some(3));
    let mut selector = Polygonal2DSelector::with_limits(limits);
    selector.select_primary(p(0, 0, 0));
    assert!(selector.select_secondary(p(4, 0, 0)));
    assert!(selector.select_secondary(p(0, 0, 4)));
    assert!(!selector.select_secondary(p(4, 0, 4)), "past the cap");
    assert_eq!(selector.vertex_count(), 3);

    assert!(selector.select_secondary(p(0, 0, 4)), "closing is still allowed");
    assert!(selector.is_defined());
}

#[test]
fn polygon_explains_what_the_last_position_did() {
    let mut selector = Polygonal2DSelector::new();
    let mut messages: Vec<String> = Vec::new();
    selector.select_primary(p(0, 0, 0));
    selector.select_secondary(p(2, 0, 0));
    selector.explain_secondary_selection(&mut messages, p(2, 0, 0));

    assert!(selector.select_secondary(p(2, 5, 0)), "same column, higher");
    selector.explain_secondary_selection(&mut messages, p(2, 5, 0));
    assert_eq!(
        messages,
        ["Added point #2 at (2, 0).", "Height extended to 0 through 5."]
    );
}

#[test]
fn polygon_explains_the_vertex_cap() {
    let limits = SelectorLimits::new().with_max_polygon_vertices(Some(3));
    let mut selector = Polygonal2DSelector::with_limits(limits);
    selector.select_primary(p(0, 0, 0));
    selector.select_secondary(p(4, 0, 0));
    selector.select_secondary(p(0, 0, 4));
    assert!(!selector.select_secondary(p(4, 0, 4)));

    let mut messages: Vec<String> = Vec::new();
    selector.explain_secondary_selection(&mut messages, p(4, 0, 4));
    assert_eq!(
        messages,
        ["Point (4, 4) was not added; the polygon is at its limit of 3 points."]
    );
}

#[test]
fn convex_vertices_form_a_set() {
    let mut selector = ConvexPolyhedralSelector::new();
    assert!(selector.select_primary(p(0, 0, 0)));
    assert!(selector.select_secondary(p(4, 0, 0)));
    assert!(!selector.select_secondary(p(4, 0, 0)), "already a vertex");
    assert!(!selector.select_secondary(p(0, 0, 0)), "the primary is a vertex too");
    assert_eq!(selector.vertex_count(), 2);
    assert_eq!(selector.defined_state(), DefinedState::PartiallyDefined);

    assert!(selector.select_secondary(p(0, 4, 0)));
    assert!(selector.is_defined(), "a triangle spans a plane");
    assert_eq!(selector.area(), 15);

    assert!(selector.select_secondary(p(0, 0, 4)));
    assert_eq!(selector.area(), 35, "x + y + z <= 4");
    assert!(selector.select_secondary(p(1, 1, 1)));
    assert_eq!(selector.vertex_count(), 5);
    assert_eq!(selector.area(), 35, "interior vertices leave the hull alone");
}

#[test]
fn convex_secondary_first_starts_the_hull() {
    let mut selector = ConvexPolyhedralSelector::new();
    assert!(selector.select_secondary(p(3, 3, 3)));
    assert_eq!(selector.primary_position(), Ok(p(3, 3, 3)));
    assert_eq!(selector.defined_state(), DefinedState::PartiallyDefined);

    assert!(selector.select_primary(p(0, 0, 0)), "a new primary restarts");
    assert_eq!(selector.vertex_count(), 1);
}

#[test]
fn convex_vertex_limit_rejects_extra_points() {
    let limits = SelectorLimits::new().with_max_convex_vertices(Some(3));
    let mut session = SelectionSession::with_limits(limits);
    session.set_selector_kind(SelectorKind::Convex);
    let mut messages: Vec<String> = Vec::new();
    session.select_primary(p(0, 0, 0), &mut messages);
    session.select_secondary(p(4, 0, 0), &mut messages);
    session.select_secondary(p(0, 4, 0), &mut messages);
    assert!(!session.select_secondary(p(0, 0, 4), &mut messages));
    assert_eq!(
        messages,
        [
            "Started new selection with vertex (0, 0, 0).",
            "Added vertex (4, 0, 0) to the selection.",
            "Added vertex (0, 4, 0) to the selection (15 blocks).",
        ]
    );

    messages.clear();
    session
        .selector()
        .explain_secondary_selection(&mut messages, p(0, 0, 4));
    assert_eq!(
        messages,
        ["Vertex (0, 0, 4) was not added; the selection is at its limit of 3 vertices."]
    );
}

#[test]
fn cylinder_grows_radius_and_height() {
    let mut selector = CylinderSelector::new();
    assert!(!selector.select_secondary(p(1, 1, 1)), "no centre yet");
    assert_eq!(selector.defined_state(), DefinedState::Undefined);

    assert!(selector.select_primary(p(0, 0, 0)));
    assert_eq!(selector.defined_state(), DefinedState::PartiallyDefined);

    assert!(selector.select_secondary(p(2, 3, 0)));
    assert!(selector.is_defined());
    assert_eq!(selector.area(), 20, "5 columns across, 4 layers high");

    assert!(!selector.select_secondary(p(-1, 1, 0)), "inside already");
    assert!(selector.select_primary(p(0, 0, 1)), "a new centre restarts");
    assert_eq!(selector.defined_state(), DefinedState::PartiallyDefined);
}

#[test]
fn ellipsoid_radii_grow_per_axis() {
    let mut selector = EllipsoidSelector::new();
    selector.select_primary(p(0, 0, 0));
    assert!(selector.select_secondary(p(1, 0, 0)));
    assert!(selector.select_secondary(p(0, -2, 0)));
    assert!(!selector.select_secondary(p(1, 1, 0)), "radii never shrink");

    let region = selector.region().unwrap();
    assert_eq!(region.min(), p(-1, -2, 0));
    assert_eq!(region.max(), p(1, 2, 0));
}

#[test]
fn sphere_radius_is_the_rounded_distance() {
    let mut selector = EllipsoidSelector::sphere();
    assert_eq!(selector.type_name(), "sphere");
    selector.select_primary(p(0, 0, 0));
    assert!(selector.select_secondary(p(3, 4, 0)));
    assert!(
        selector
            .information_lines()
            .contains(&String::from("X/Y/Z radius: (5, 5, 5)"))
    );

    assert!(selector.select_secondary(p(1, 0, 0)), "a sphere can shrink");
    assert_eq!(selector.area(), 19);
}

#[test]
fn learn_changes_copies_matching_shapes() {
    let cylinder = CylinderRegion::new(BlockPos2::new(5, 5), BlockPos2::new(2, 3), 0, 4);
    let mut selector = CylinderSelector::new();
    selector.learn_changes(&cylinder.into());
    assert_eq!(selector.region(), Ok(AnyRegion::from(cylinder)));
    assert_eq!(selector.primary_position(), Ok(p(5, 0, 5)));
}

#[test]
fn learn_changes_approximates_other_shapes() {
    let cuboid: AnyRegion = CuboidRegion::new(p(0, 0, 0), p(2, 1, 3)).into();

    let mut polygon = Polygonal2DSelector::new();
    polygon.learn_changes(&cuboid);
    assert!(polygon.is_closed());
    assert_eq!(polygon.area(), 24, "the bounding rectangle covers the cuboid");

    let cylinder: AnyRegion =
        CylinderRegion::new(BlockPos2::new(0, 0), BlockPos2::new(2, 2), 0, 0).into();
    let mut cuboid_selector = CuboidSelector::new();
    cuboid_selector.learn_changes(&cylinder);
    let learned = cuboid_selector.region().unwrap();
    assert_eq!(learned.min(), p(-2, 0, -2));
    assert_eq!(learned.max(), p(2, 0, 2));
}

#[test]
fn explanations_without_a_selection() {
    for kind in SelectorKind::ALL {
        let selector = kind.create(SelectorLimits::new());
        let mut messages: Vec<String> = Vec::new();
        selector.explain_primary_selection(&mut messages, p(0, 0, 0));
        selector.explain_region_adjust(&mut messages);
        assert_eq!(messages[0], "No selection yet.", "{kind}");
        assert_eq!(messages.last().unwrap(), "No selection yet.", "{kind}");
    }
}

#[test]
fn explanations_mention_the_area() {
    let mut selector = ExtendingCuboidSelector::new();
    selector.select_primary(p(0, 0, 0));
    let mut messages: Vec<String> = Vec::new();
    selector.explain_primary_selection(&mut messages, p(0, 0, 0));
    selector.select_secondary(p(1, 0, 0));
    selector.explain_secondary_selection(&mut messages, p(1, 0, 0));
    selector.explain_region_adjust(&mut messages);
    assert_eq!(
        messages,
        [
            "Started selection at (0, 0, 0) (1 block).",
            "Extended selection to encompass (1, 0, 0) (2 blocks).",
            "The extend selection now covers 2 blocks.",
        ]
    );
}

#[test]
fn session_explains_only_changes() {
    let mut session = SelectionSession::new();
    let mut messages: Vec<String> = Vec::new();
    assert!(session.select_primary(p(0, 0, 0), &mut messages));
    assert!(!session.select_primary(p(0, 0, 0), &mut messages));
    assert_eq!(messages, ["First position set to (0, 0, 0)."]);

    assert!(session.select_secondary(p(2, 2, 2), &mut messages));
    assert_eq!(
        messages.last().unwrap(),
        "Second position set to (2, 2, 2) (27 blocks)."
    );
    assert_eq!(session.region().unwrap().volume(), 27);
}

#[test]
fn session_conversion_keeps_defined_regions() {
    let mut session = SelectionSession::new();
    session.select_primary(p(0, 0, 0), &mut Silent);
    session.select_secondary(p(2, 2, 2), &mut Silent);

    session.set_selector_kind(SelectorKind::Polygonal2D);
    assert_eq!(session.kind(), SelectorKind::Polygonal2D);
    assert_eq!(session.selector().type_name(), "poly2d");
    assert_eq!(session.selector().area(), 27);

    session.set_selector_kind(SelectorKind::Cylinder);
    assert!(session.selector().is_defined());
    assert_eq!(session.selector().area(), 27, "radius 1 fills the 3 x 3 square");

    session.set_selector_kind(SelectorKind::Convex);
    assert!(session.selector().is_defined());
    assert_eq!(session.selector().area(), 27, "the hull of the corners");

    session.set_selector_kind(SelectorKind::Extending);
    assert_eq!(session.region().unwrap().min(), p(0, 0, 0));
    assert_eq!(session.region().unwrap().max(), p(2, 2, 2));
}

#[test]
fn session_conversion_keeps_a_started_primary() {
    let mut session = SelectionSession::new();
    session.select_primary(p(4, 5, 6), &mut Silent);

    session.set_selector_kind(SelectorKind::Sphere);
    assert_eq!(session.selector().type_name(), "sphere");
    assert_eq!(
        session.selector().defined_state(),
        DefinedState::PartiallyDefined
    );
    assert_eq!(session.selector().primary_position(), Ok(p(4, 5, 6)));

    session.clear();
    session.set_selector_kind(SelectorKind::Cuboid);
    assert_eq!(session.selector().defined_state(), DefinedState::Undefined);
}

#[test]
fn session_limits_reach_new_polygons() {
    let limits = SelectorLimits::new().with_max_polygon_vertices(Some(2));
    let mut session = SelectionSession::with_limits(limits);
    assert_eq!(session.limits(), limits);
    session.set_selector_kind(SelectorKind::Polygonal2D);
    session.select_primary(p(0, 0, 0), &mut Silent);
    assert!(session.select_secondary(p(1, 0, 0), &mut Silent));
    assert!(!session.select_secondary(p(1, 0, 1), &mut Silent));
}

#[test]
fn region_change_round_trips_through_the_selector() {
    let mut session = SelectionSession::new();
    session.select_primary(p(0, 0, 0), &mut Silent);
    session.select_secondary(p(2, 2, 2), &mut Silent);

    let mut messages: Vec<String> = Vec::new();
    session
        .apply_region_change(&mut messages, |region| region.expand(&[p(0, 2, 0)]))
        .unwrap();
    assert_eq!(session.selector().area(), 45);
    assert_eq!(messages, ["The cuboid selection now covers 45 blocks."]);
}

#[test]
fn failed_region_change_leaves_the_selection_alone() {
    let mut session = SelectionSession::new();
    let err = session
        .apply_region_change(&mut Silent, |region| region.shift(p(1, 0, 0)))
        .unwrap_err();
    assert!(matches!(err, RegionChangeError::Selection(_)));

    session.set_selector_kind(SelectorKind::Polygonal2D);
    define(session.selector_mut());
    let before = session.region().unwrap();
    let err = session
        .apply_region_change(&mut Silent, |region| region.expand(&[p(1, 0, 0)]))
        .unwrap_err();
    assert!(matches!(
        err,
        RegionChangeError::Region(RegionError::UnsupportedChange { .. })
    ));
    assert_eq!(session.region().unwrap(), before);

    session.set_selector_kind(SelectorKind::Cuboid);
    let err = session
        .apply_region_change(&mut Silent, |region| region.contract(&[p(0, -9, 0)]))
        .unwrap_err();
    assert_eq!(err, RegionChangeError::Region(RegionError::EmptyRegion));
}

#[test]
fn huge_cuboid_area_saturates() {
    let lo = p(-3_000_000, -3_000_000, -3_000_000);
    let hi = p(3_000_000, 3_000_000, 3_000_000);
    let mut cuboid = CuboidSelector::new();
    cuboid.select_primary(lo);
    cuboid.select_secondary(hi);
    assert_eq!(cuboid.area(), i64::MAX);

    let mut extending = ExtendingCuboidSelector::new();
    extending.select_primary(lo);
    extending.select_secondary(hi);
    assert_eq!(extending.area(), i64::MAX);
}

#[test]
fn far_apart_curved_selections_saturate() {
    let (west, east) = (p(-2_000_000_000, 0, 0), p(2_000_000_000, 0, 0));

    let mut cylinder = CylinderSelector::new();
    cylinder.select_primary(west);
    assert!(cylinder.select_secondary(east));
    let region = cylinder.region().unwrap();
    assert_eq!(region.as_cylinder().unwrap().radius().x, i32::MAX);
    assert_eq!(region.min().x, i32::MIN);

    for mut selector in [EllipsoidSelector::new(), EllipsoidSelector::sphere()] {
        selector.select_primary(west);
        assert!(selector.select_secondary(east));
        let region = selector.region().unwrap();
        assert_eq!(region.as_ellipsoid().unwrap().radius().x, i32::MAX);
        assert_eq!(region.min().x, i32::MIN);
    }
}

#[test]
fn converting_a_far_apart_cuboid() {
    let mut session = SelectionSession::new();
    session.select_primary(p(-2_000_000_000, 0, 0), &mut Silent);
    session.select_secondary(p(2_000_000_000, 0, 0), &mut Silent);
    assert_eq!(session.selector().area(), 4_000_000_001);

    session.set_selector_kind(SelectorKind::Ellipsoid);
    let region = session.region().unwrap();
    let ellipsoid = region.as_ellipsoid().unwrap();
    assert_eq!(ellipsoid.center_cell(), p(0, 0, 0));
    assert_eq!(ellipsoid.radius(), p(2_000_000_000, 0, 0));

    for kind in SelectorKind::ALL {
        let converted = kind.convert(session.selector(), session.limits());
        assert!(converted.primary_position().is_ok(), "{kind}");
        let bounds = converted.incomplete_region();
        assert!(bounds.min().x <= -2_000_000_000, "{kind}");
        assert!(bounds.max().x >= 2_000_000_000, "{kind}");
    }
}

#[test]
fn learning_the_whole_grid() {
    let lo = p(i32::MIN, i32::MIN, i32::MIN);
    let hi = p(i32::MAX, i32::MAX, i32::MAX);
    let everything: AnyRegion = CuboidRegion::new(lo, hi).into();
    for kind in SelectorKind::ALL {
        let mut selector = kind.create(SelectorLimits::new());
        selector.learn_changes(&everything);
        assert!(selector.is_defined(), "{kind}");
        assert_eq!(selector.incomplete_region().min(), lo, "{kind}");
    }
}
